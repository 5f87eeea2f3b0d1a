//! Decoder error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected a top-level object, found {0}")]
    ExpectedObject(&'static str),
    #[error("expected a top-level array, found {0}")]
    ExpectedArray(&'static str),
    #[error("expected an object at array index {index}, found {kind}")]
    ExpectedObjectElement { index: usize, kind: &'static str },
}
