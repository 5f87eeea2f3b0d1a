//! Decode JSON text into ordered, generic key-value records.
//!
//! A thin adapter over `serde_json` for callers that work with JSON
//! generically rather than through typed structs. Two accepted top-level
//! shapes: a single object, or an array of objects. Decoded records keep
//! their keys in source-text order and keep explicit `null` values as
//! entries. Decoded structures can also be turned into JUnit-style
//! assertion statements, one per scalar leaf.

pub mod assertgen;
pub mod decoder;
pub mod error;
pub mod types;

pub use assertgen::AssertionGenerator;
pub use decoder::RecordDecoder;
pub use error::DecodeError;
pub use types::{DecodedCollection, DecodedRecord};
