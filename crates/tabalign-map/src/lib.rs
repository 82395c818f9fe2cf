#![deny(unsafe_code)]

//! Schema alignment engine.
//!
//! Pairs the columns of a content table with the column schema of a
//! reference table using lexical matching: names are canonicalized by
//! [`normalize::normalize_key`], resolved one at a time by
//! [`matcher::best_match`], and assembled into a total
//! [`tabalign_model::ColumnMapping`] by [`engine::MappingEngine`].

pub mod engine;
pub mod matcher;
pub mod normalize;
pub mod repository;

pub use engine::MappingEngine;
pub use matcher::{MatchHit, MatchKind, best_match};
pub use normalize::normalize_key;
