//! Column mapping types shared between the mapping engine, the review
//! surface, and the projector.

use serde::{Deserialize, Serialize};

/// One reference column's resolved source.
///
/// `source_column` is `None` when no content column was matched (or when a
/// reviewer cleared the suggestion). `confidence` is the matcher's score for
/// suggested entries; manual edits may omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub reference_column: String,
    pub source_column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl MappingEntry {
    pub fn matched(reference_column: &str, source_column: &str, confidence: f64) -> Self {
        Self {
            reference_column: reference_column.to_string(),
            source_column: Some(source_column.to_string()),
            confidence: Some(confidence),
        }
    }

    pub fn unmatched(reference_column: &str) -> Self {
        Self {
            reference_column: reference_column.to_string(),
            source_column: None,
            confidence: None,
        }
    }
}

/// Total association from each reference column to a content column or none,
/// in reference-schema order.
///
/// A mapping is built once per alignment run and never mutated in place;
/// reviewer edits produce a new value (see [`ColumnMapping::totalized_over`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub entries: Vec<MappingEntry>,
}

impl ColumnMapping {
    pub fn new(entries: Vec<MappingEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.iter()
    }

    /// The mapped source column for a reference column, if any.
    pub fn source_for(&self, reference_column: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.reference_column == reference_column)
            .and_then(|entry| entry.source_column.as_deref())
    }

    pub fn matched_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.source_column.is_some())
            .count()
    }

    pub fn unmatched_count(&self) -> usize {
        self.entries.len() - self.matched_count()
    }

    /// True if every name in `reference_columns` has exactly one entry, in order.
    pub fn is_total_over(&self, reference_columns: &[String]) -> bool {
        self.entries.len() == reference_columns.len()
            && self
                .entries
                .iter()
                .zip(reference_columns)
                .all(|(entry, name)| &entry.reference_column == name)
    }

    /// Rebuild this mapping as a total mapping over `reference_columns`.
    ///
    /// Hand-edited mappings may drop, reorder, or add entries; the projector
    /// requires one entry per reference column in schema order. Known entries
    /// are kept (first occurrence wins), unknown reference columns become
    /// unmatched, and entries for columns outside the schema are discarded.
    pub fn totalized_over(&self, reference_columns: &[String]) -> ColumnMapping {
        let entries = reference_columns
            .iter()
            .map(|name| {
                self.entries
                    .iter()
                    .find(|entry| &entry.reference_column == name)
                    .cloned()
                    .unwrap_or_else(|| MappingEntry::unmatched(name))
            })
            .collect();
        ColumnMapping { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_for_resolves_matched_and_unmatched() {
        let mapping = ColumnMapping::new(vec![
            MappingEntry::matched("Customer_ID", "customer id", 1.0),
            MappingEntry::unmatched("Email"),
        ]);
        assert_eq!(mapping.source_for("Customer_ID"), Some("customer id"));
        assert_eq!(mapping.source_for("Email"), None);
        assert_eq!(mapping.source_for("Unknown"), None);
        assert_eq!(mapping.matched_count(), 1);
        assert_eq!(mapping.unmatched_count(), 1);
    }

    #[test]
    fn totalized_over_restores_schema_order_and_totality() {
        let refs = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let edited = ColumnMapping::new(vec![
            MappingEntry::matched("C", "gamma", 0.9),
            MappingEntry::matched("Z", "zeta", 0.8),
            MappingEntry::matched("A", "alpha", 1.0),
        ]);

        let total = edited.totalized_over(&refs);
        assert!(total.is_total_over(&refs));
        assert_eq!(total.source_for("A"), Some("alpha"));
        assert_eq!(total.source_for("B"), None);
        assert_eq!(total.source_for("C"), Some("gamma"));
        assert_eq!(total.source_for("Z"), None);
    }

    #[test]
    fn entry_round_trips_without_confidence() {
        let entry = MappingEntry::unmatched("Email");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("confidence"));
        let round: MappingEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(round, entry);
    }
}
