//! Record decoding over `serde_json`.

use serde_json::Value;

use crate::error::DecodeError;
use crate::types::{DecodedCollection, DecodedRecord};

/// Stateless decoder turning JSON text into ordered records.
///
/// Explicit `null` values decode to [`Value::Null`] entries and are never
/// dropped. The decoder holds no state, so a single instance can be shared
/// across threads without locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordDecoder;

impl RecordDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes a single top-level JSON object into a [`DecodedRecord`].
    ///
    /// Nested objects become nested records, nested arrays become ordered
    /// sequences, scalars map to their natural [`Value`] variant. Fails with
    /// [`DecodeError::Parse`] on malformed JSON and
    /// [`DecodeError::ExpectedObject`] when the top-level value is an array
    /// or scalar.
    pub fn decode_object(&self, text: &str) -> Result<DecodedRecord, DecodeError> {
        into_record(serde_json::from_str(text)?)
    }

    /// Decodes a JSON array of objects into a [`DecodedCollection`].
    ///
    /// Elements keep their array order. A non-object element fails the whole
    /// decode with [`DecodeError::ExpectedObjectElement`] naming its index;
    /// no partial collection is returned.
    pub fn decode_array(&self, text: &str) -> Result<DecodedCollection, DecodeError> {
        into_collection(serde_json::from_str(text)?)
    }

    /// Byte-slice variant of [`decode_object`](Self::decode_object).
    pub fn decode_object_slice(&self, bytes: &[u8]) -> Result<DecodedRecord, DecodeError> {
        into_record(serde_json::from_slice(bytes)?)
    }

    /// Byte-slice variant of [`decode_array`](Self::decode_array).
    pub fn decode_array_slice(&self, bytes: &[u8]) -> Result<DecodedCollection, DecodeError> {
        into_collection(serde_json::from_slice(bytes)?)
    }
}

fn into_record(value: Value) -> Result<DecodedRecord, DecodeError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::ExpectedObject(value_kind(&other))),
    }
}

fn into_collection(value: Value) -> Result<DecodedCollection, DecodeError> {
    let elements = match value {
        Value::Array(elements) => elements,
        other => return Err(DecodeError::ExpectedArray(value_kind(&other))),
    };
    let mut records = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        match element {
            Value::Object(map) => records.push(map),
            other => {
                return Err(DecodeError::ExpectedObjectElement {
                    index,
                    kind: value_kind(&other),
                })
            }
        }
    }
    Ok(records)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
