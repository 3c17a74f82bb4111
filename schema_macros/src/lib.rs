//! Procedural macros for `alpaca_form_schema`

mod field_attrs;
mod form_schema;

use proc_macro::TokenStream;

/// Derives `alpaca_form_schema::Record` for a struct with named fields.
///
/// # Example
///
/// ```ignore
/// #[derive(FormSchema)]
/// pub struct Ticket {
///     #[jsonschema(tag = "enum,OptionsField=StatusOptions,required")]
///     status: String,
///
///     status_options: String,
///
///     #[jsonschema(tag = "required", title = "Contact Email")]
///     email: String,
///
///     #[jsonschema(skip)]
///     cache: SomethingOpaque,
/// }
/// ```
///
/// Each field is exposed under its name converted to `UpperCamelCase`
/// (`status_options` becomes `StatusOptions`) unless `rename = "..."` says
/// otherwise. That identifier is what `OptionsField=` refers to, what the
/// property key is lowercased from, and what the title is humanized from.
///
/// Supported field attribute keys:
/// - `tag = "..."` - the field annotation; untagged fields stay out of the schema
/// - `title = "..."` - display title used instead of the identifier
/// - `rename = "..."` - explicit identifier
/// - `skip` - the field is not exposed at all
///
/// Every exposed field type must implement `alpaca_form_schema::ToFieldValue`.
#[proc_macro_derive(FormSchema, attributes(jsonschema))]
pub fn derive_form_schema(input: TokenStream) -> TokenStream {
    form_schema::derive_form_schema_impl(input)
}
