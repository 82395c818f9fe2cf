#![deny(unsafe_code)]

pub mod error;
pub mod mapping;
pub mod table;

pub use error::{AlignError, Result};
pub use mapping::{ColumnMapping, MappingEntry};
pub use table::{CellValue, Table};
