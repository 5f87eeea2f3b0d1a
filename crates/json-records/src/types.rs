//! Decoded structure type aliases.

use serde_json::{Map, Value};

/// Ordered string-keyed mapping produced by a successful object decode.
///
/// Key order follows the source text; `serde_json` is built with
/// `preserve_order`, so the map never re-sorts keys.
pub type DecodedRecord = Map<String, Value>;

/// Ordered sequence of records produced by a successful array decode.
pub type DecodedCollection = Vec<DecodedRecord>;
