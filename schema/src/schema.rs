//! Rendered form schema documents
//!
//! The serialized shape is
//!
//! ```json
//! { "schema": {
//!     "title": "...", "description": "...", "type": "object",
//!     "properties": {
//!       "status": { "type": "string", "title": "Status", "required": true,
//!                   "enum": ["open", "closed"] } } } }
//! ```
//!
//! `enum` only appears on enumerated properties.

use std::collections::BTreeMap;

use error_stack::ResultExt;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use strum::AsRefStr;
use strum::Display;
use strum::EnumString;

use crate::error::Error;
use crate::error::Result;
use crate::record::FieldKind;

const SCHEMA_DOCUMENT: &str = "schema document";

/// JSON schema type names emitted by the renderer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JsonSchemaType {
    /// Top level form object
    Object,
    /// Integer and floating point fields
    Number,
    /// Non enumerated boolean fields
    Boolean,
    /// Everything else
    String,
}

impl JsonSchemaType {
    /// Schema type for a field of the given kind.
    ///
    /// Enumerated fields keep `number` for numeric kinds but never become `boolean`.
    #[must_use]
    pub const fn for_field(kind: FieldKind, enumerated: bool) -> Self {
        match kind {
            FieldKind::Integer | FieldKind::Float => Self::Number,
            FieldKind::Boolean if !enumerated => Self::Boolean,
            FieldKind::Boolean | FieldKind::Text | FieldKind::Other => Self::String,
        }
    }
}

/// Schema of one form property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Property type
    #[serde(rename = "type")]
    pub schema_type: JsonSchemaType,
    /// Human readable title
    pub title:       String,
    /// Whether the property is mandatory
    pub required:    bool,
    /// Legal values of an enumerated property
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

/// Body of a rendered form schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchemaBody {
    /// Form title, copied from the form metadata
    pub title:       String,
    /// Form description, copied from the form metadata
    pub description: String,
    /// Always [`JsonSchemaType::Object`]
    #[serde(rename = "type")]
    pub schema_type: JsonSchemaType,
    /// Properties keyed by lowercased field identifier
    pub properties:  BTreeMap<String, PropertySchema>,
}

/// A rendered form schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// The schema itself
    pub schema: FormSchemaBody,
}

impl SchemaDocument {
    /// Look up a property by its lowercased key
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&PropertySchema> { self.schema.properties.get(key) }

    /// Convert to a JSON value
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the document cannot be represented as JSON.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).change_context(Error::Serialization(SCHEMA_DOCUMENT.to_string()))
    }

    /// Encode as compact JSON
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the document cannot be encoded.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).change_context(Error::Serialization(SCHEMA_DOCUMENT.to_string()))
    }

    /// Encode as indented JSON
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the document cannot be encoded.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .change_context(Error::Serialization(SCHEMA_DOCUMENT.to_string()))
    }

    /// Decode a previously rendered document
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialization`] if `json` is not a schema document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .change_context(Error::Deserialization(SCHEMA_DOCUMENT.to_string()))
    }
}
