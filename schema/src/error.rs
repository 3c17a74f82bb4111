//! Error types for the fallible edges of schema handling
//!
//! Rendering itself never fails. Only encoding or decoding a
//! [`SchemaDocument`](crate::SchemaDocument) as JSON can.

use thiserror::Error;

/// Result type for the `alpaca_form_schema` library
pub type Result<T> = std::result::Result<T, error_stack::Report<Error>>;

/// Error categories
#[derive(Debug, Error)]
pub enum Error {
    /// A schema document could not be encoded
    #[error("Failed to serialize {0}")]
    Serialization(String),

    /// A schema document could not be decoded
    #[error("Failed to deserialize {0}")]
    Deserialization(String),
}
