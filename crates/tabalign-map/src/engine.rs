//! Mapping engine: builds a full suggested mapping, one reference column at
//! a time.

use tabalign_model::{AlignError, ColumnMapping, MappingEntry, Result};
use tracing::debug;

use crate::matcher::best_match;

/// Per-run context for building a suggested [`ColumnMapping`].
///
/// Holds nothing but the similarity cutoff; every run builds its candidate
/// pool fresh from the content columns it is given, so repeated runs (after
/// reviewer edits, say) are independent.
#[derive(Debug, Clone, Copy)]
pub struct MappingEngine {
    cutoff: f64,
}

impl MappingEngine {
    /// Creates an engine with the given similarity cutoff.
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::ThresholdOutOfRange`] unless `cutoff` is a
    /// finite value in `[0.0, 1.0]`.
    pub fn new(cutoff: f64) -> Result<Self> {
        if !cutoff.is_finite() || !(0.0..=1.0).contains(&cutoff) {
            return Err(AlignError::ThresholdOutOfRange(cutoff));
        }
        Ok(Self { cutoff })
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Suggests a mapping from each reference column to its best-matching
    /// content column.
    ///
    /// The result is total over `reference_columns`, in their order. Each
    /// column is matched independently against the full pool, so one content
    /// column may serve several reference columns.
    pub fn suggest(
        &self,
        reference_columns: &[String],
        content_columns: &[String],
    ) -> ColumnMapping {
        let entries = reference_columns
            .iter()
            .map(|reference| match best_match(reference, content_columns, self.cutoff) {
                Some(hit) => {
                    debug!(
                        reference_column = %reference,
                        source_column = %hit.column,
                        score = hit.score,
                        "matched"
                    );
                    MappingEntry::matched(reference, &hit.column, hit.score)
                }
                None => {
                    debug!(reference_column = %reference, "no match above cutoff");
                    MappingEntry::unmatched(reference)
                }
            })
            .collect();
        ColumnMapping::new(entries)
    }
}
