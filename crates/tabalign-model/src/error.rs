use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlignError {
    #[error("row has {found} cells but table has {expected} columns")]
    RowWidthMismatch { expected: usize, found: usize },
    #[error("similarity threshold {0} is outside [0.0, 1.0]")]
    ThresholdOutOfRange(f64),
}

pub type Result<T> = std::result::Result<T, AlignError>;
