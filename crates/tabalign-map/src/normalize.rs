//! Column name canonicalization.

/// Canonicalizes a raw column name into a comparable key.
///
/// Trims surrounding whitespace, lowercases, turns underscores and hyphens
/// into spaces, collapses whitespace runs to single spaces, then drops every
/// character that is neither alphanumeric nor a space. A final collapse
/// removes the double spaces that dropping punctuation can leave behind, so
/// the whole function is idempotent.
pub fn normalize_key(raw: &str) -> String {
    let spaced = raw
        .trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    spaced
        .chars()
        .filter(|ch| ch.is_alphanumeric() || *ch == ' ')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// [`normalize_key`] for possibly-absent names; `None` maps to `""`.
pub fn normalize_opt(raw: Option<&str>) -> String {
    raw.map_or_else(String::new, normalize_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_become_single_spaces() {
        assert_eq!(normalize_key("Customer_ID"), "customer id");
        assert_eq!(normalize_key("customer-id"), "customer id");
        assert_eq!(normalize_key("  Customer   ID  "), "customer id");
        assert_eq!(normalize_key("customer id"), "customer id");
    }

    #[test]
    fn punctuation_is_dropped() {
        assert_eq!(normalize_key("e-mail (primary)"), "e mail primary");
        assert_eq!(normalize_key("a . b"), "a b");
        assert_eq!(normalize_key("%$#"), "");
    }

    #[test]
    fn other_whitespace_collapses_like_spaces() {
        assert_eq!(normalize_key("first\tname"), "first name");
        assert_eq!(normalize_key("first\nname"), "first name");
    }

    #[test]
    fn absent_input_maps_to_empty() {
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some("  ")), "");
    }

    #[test]
    fn idempotent_on_awkward_punctuation() {
        let once = normalize_key("a . b");
        assert_eq!(normalize_key(&once), once);
    }
}
