//! Schema rendering
//!
//! Walks a record's fields once, in declaration order. Fields without an
//! annotation are left out; every other field becomes one property keyed by its
//! lowercased identifier. When two identifiers lowercase to the same key the
//! later field wins.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::trace;

use crate::options::RenderOptions;
use crate::record::Field;
use crate::record::Record;
use crate::schema::FormSchemaBody;
use crate::schema::JsonSchemaType;
use crate::schema::PropertySchema;
use crate::schema::SchemaDocument;
use crate::segment::humanize;
use crate::tags::Directives;

/// Form title and description, copied verbatim into the rendered schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMeta {
    /// Form title
    pub title:       String,
    /// Form description
    pub description: String,
}

impl FormMeta {
    /// Create form metadata
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title:       title.into(),
            description: description.into(),
        }
    }
}

/// Renders records into [`SchemaDocument`]s
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaRenderer {
    options: RenderOptions,
}

impl SchemaRenderer {
    /// Renderer using the given options
    #[must_use]
    pub const fn new(options: RenderOptions) -> Self { Self { options } }

    /// Render `record` with the given form metadata
    #[must_use]
    pub fn render<R: Record + ?Sized>(&self, record: &R, meta: &FormMeta) -> SchemaDocument {
        let fields = record.fields();
        let mut properties = BTreeMap::new();

        for field in &fields {
            debug!(field_name = field.name, tag = field.annotation, "source tag");

            let Some(annotation) = field.annotation.filter(|annotation| !annotation.is_empty())
            else {
                trace!(field_name = field.name, "no annotation, field left out");
                continue;
            };

            let property = self.render_property(field, annotation, &fields);
            properties.insert(field.name.to_lowercase(), property);
        }

        SchemaDocument {
            schema: FormSchemaBody {
                title: meta.title.clone(),
                description: meta.description.clone(),
                schema_type: JsonSchemaType::Object,
                properties,
            },
        }
    }

    fn render_property(
        &self,
        field: &Field<'_>,
        annotation: &str,
        fields: &[Field<'_>],
    ) -> PropertySchema {
        let directives = Directives::parse(annotation, self.options.directive_matching);
        let enum_values = directives
            .enumerated
            .then(|| directives.resolve_options(fields));

        PropertySchema {
            schema_type: JsonSchemaType::for_field(field.kind(), directives.enumerated),
            title: humanize(field.title.unwrap_or(field.name)),
            required: directives.required,
            enum_values,
        }
    }
}

/// Render `record` with default options
#[must_use]
pub fn render_schema<R: Record + ?Sized>(record: &R, meta: &FormMeta) -> SchemaDocument {
    SchemaRenderer::default().render(record, meta)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::options::DirectiveMatching;
    use crate::record::DynamicField;
    use crate::record::DynamicRecord;

    fn ticket() -> DynamicRecord {
        DynamicRecord::new()
            .with_field(
                DynamicField::new("Status", "open")
                    .annotation("enum,OptionsField=StatusOptions,required"),
            )
            .with_field(DynamicField::new("StatusOptions", "open,closed,pending"))
            .with_field(DynamicField::new("FirstName", "Ada").annotation("required"))
            .with_field(DynamicField::new("Age", 36_i64).annotation("number"))
            .with_field(DynamicField::new("Subscribed", true).annotation("optional"))
            .with_field(DynamicField::new("Internal", "hidden"))
    }

    #[test]
    fn test_enum_resolution() {
        let document = render_schema(&ticket(), &FormMeta::new("Ticket", "A support ticket"));

        assert_eq!(
            document.property("status"),
            Some(&PropertySchema {
                schema_type: JsonSchemaType::String,
                title:       "Status".to_string(),
                required:    true,
                enum_values: Some(vec![
                    "open".to_string(),
                    "closed".to_string(),
                    "pending".to_string(),
                ]),
            })
        );
    }

    #[test]
    fn test_unannotated_fields_are_excluded() {
        let document = render_schema(&ticket(), &FormMeta::default());

        assert!(document.property("statusoptions").is_none());
        assert!(document.property("internal").is_none());
        assert_eq!(document.schema.properties.len(), 4);
    }

    #[test]
    fn test_empty_annotation_is_excluded() {
        let record = DynamicRecord::new().with_field(DynamicField::new("Blank", "x").annotation(""));
        let document = render_schema(&record, &FormMeta::default());
        assert!(document.schema.properties.is_empty());
    }

    #[test]
    fn test_type_mapping() {
        let document = render_schema(&ticket(), &FormMeta::default());

        let age = document.property("age");
        assert_eq!(age.map(|p| p.schema_type), Some(JsonSchemaType::Number));
        assert_eq!(age.and_then(|p| p.enum_values.clone()), None);

        let subscribed = document.property("subscribed");
        assert_eq!(
            subscribed.map(|p| p.schema_type),
            Some(JsonSchemaType::Boolean)
        );
        assert_eq!(subscribed.map(|p| p.required), Some(false));
    }

    #[test]
    fn test_enumerated_kinds() {
        let record = DynamicRecord::new()
            .with_field(DynamicField::new("Size", 2_i64).annotation("enum,OptionsField=Sizes"))
            .with_field(DynamicField::new("Sizes", "1,2,3"))
            .with_field(DynamicField::new("Flag", false).annotation("enum"));
        let document = render_schema(&record, &FormMeta::default());

        let size = document.property("size");
        assert_eq!(size.map(|p| p.schema_type), Some(JsonSchemaType::Number));
        assert_eq!(
            size.and_then(|p| p.enum_values.clone()),
            Some(vec!["1".to_string(), "2".to_string(), "3".to_string()])
        );

        let flag = document.property("flag");
        assert_eq!(flag.map(|p| p.schema_type), Some(JsonSchemaType::String));
        assert_eq!(flag.and_then(|p| p.enum_values.clone()), Some(Vec::new()));
    }

    #[test]
    fn test_title_humanization_and_override() {
        let record = DynamicRecord::new()
            .with_field(DynamicField::new("FirstName", "Ada").annotation("required"))
            .with_field(
                DynamicField::new("Dob", "1815-12-10")
                    .annotation("required")
                    .title("DateOfBirth"),
            );
        let document = render_schema(&record, &FormMeta::default());

        assert_eq!(
            document.property("firstname").map(|p| p.title.as_str()),
            Some("First Name")
        );
        assert_eq!(
            document.property("dob").map(|p| p.title.as_str()),
            Some("Date Of Birth")
        );
    }

    #[test]
    fn test_meta_passthrough() {
        let document = render_schema(&DynamicRecord::new(), &FormMeta::new("", ""));
        assert_eq!(
            document.to_value().ok(),
            Some(json!({
                "schema": {
                    "title": "",
                    "description": "",
                    "type": "object",
                    "properties": {}
                }
            }))
        );
    }

    #[test]
    fn test_later_field_wins_on_key_collision() {
        let record = DynamicRecord::new()
            .with_field(DynamicField::new("Name", "a").annotation("required"))
            .with_field(DynamicField::new("NAME", "b").annotation("optional"));
        let document = render_schema(&record, &FormMeta::default());

        assert_eq!(document.schema.properties.len(), 1);
        assert_eq!(
            document.property("name").map(|p| p.title.as_str()),
            Some("NAME")
        );
    }

    #[test]
    fn test_exact_token_renderer() {
        let record = DynamicRecord::new()
            .with_field(DynamicField::new("Notes", "").annotation("notrequired"))
            .with_field(DynamicField::new("Email", "").annotation("required"));

        let coarse = render_schema(&record, &FormMeta::default());
        assert_eq!(coarse.property("notes").map(|p| p.required), Some(true));

        let renderer = SchemaRenderer::new(RenderOptions::with_directive_matching(
            DirectiveMatching::ExactToken,
        ));
        let strict = renderer.render(&record, &FormMeta::default());
        assert_eq!(strict.property("notes").map(|p| p.required), Some(false));
        assert_eq!(strict.property("email").map(|p| p.required), Some(true));
    }

    #[test]
    fn test_render_is_repeatable() {
        let record = ticket();
        let meta = FormMeta::new("Ticket", "");
        assert_eq!(render_schema(&record, &meta), render_schema(&record, &meta));
    }
}
