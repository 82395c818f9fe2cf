#![deny(unsafe_code)]

pub mod csv_table;

pub use csv_table::read_csv_table;
