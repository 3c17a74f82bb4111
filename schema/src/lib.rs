//! Alpaca-style form schemas from tagged record fields
//!
//! Describe a form once as a struct whose fields carry `#[jsonschema(...)]`
//! annotations and render it into a JSON schema document a form renderer or
//! validator can consume.
//!
//! ```
//! use alpaca_form_schema::{FormMeta, FormSchema, Record};
//!
//! #[derive(FormSchema)]
//! struct Ticket {
//!     #[jsonschema(tag = "enum,OptionsField=StatusOptions,required")]
//!     status:         String,
//!     status_options: String,
//!     #[jsonschema(tag = "required")]
//!     first_name:     String,
//! }
//!
//! let ticket = Ticket {
//!     status:         "open".to_string(),
//!     status_options: "open,closed,pending".to_string(),
//!     first_name:     String::new(),
//! };
//!
//! let document = ticket.render_schema(&FormMeta::new("Ticket", "A support ticket"));
//! let status = document.property("status");
//! assert_eq!(
//!     status.and_then(|property| property.enum_values.clone()),
//!     Some(vec!["open".to_string(), "closed".to_string(), "pending".to_string()])
//! );
//! assert_eq!(
//!     document.property("firstname").map(|property| property.title.as_str()),
//!     Some("First Name")
//! );
//! ```
//!
//! # Annotations
//!
//! A field's annotation is a comma separated list of directives:
//!
//! - `enum` - the field is enumerated
//! - `OptionsField=<Name>` - the sibling field whose comma separated value lists the enumerated
//!   options
//! - `required` - the field is mandatory
//!
//! Unknown directives are ignored. Fields without an annotation are left out of the schema.
//!
//! Rendering never fails: a missing options field yields an empty option list and an
//! unsupported field kind renders as `string`.

pub mod error;
pub mod options;
pub mod record;
pub mod render;
pub mod schema;
pub mod segment;
pub mod tags;

pub use alpaca_form_schema_macros::FormSchema;
pub use error::Error;
pub use error::Result;
pub use options::DirectiveMatching;
pub use options::RenderOptions;
pub use record::DynamicField;
pub use record::DynamicRecord;
pub use record::Field;
pub use record::FieldKind;
pub use record::FieldValue;
pub use record::Record;
pub use record::ToFieldValue;
pub use render::FormMeta;
pub use render::SchemaRenderer;
pub use render::render_schema;
pub use schema::FormSchemaBody;
pub use schema::JsonSchemaType;
pub use schema::PropertySchema;
pub use schema::SchemaDocument;
