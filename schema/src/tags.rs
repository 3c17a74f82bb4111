//! Field annotation parsing
//!
//! An annotation is a comma separated list of directives. `enum` marks the field
//! as enumerated, `required` marks it mandatory and `OptionsField=<Name>` names
//! the sibling field whose comma separated value supplies the enumerated options.
//! Unknown directives are ignored.

use tracing::trace;

use crate::options::DirectiveMatching;
use crate::record::Field;

const ENUM_DIRECTIVE: &str = "enum";
const REQUIRED_DIRECTIVE: &str = "required";
const OPTIONS_FIELD_PREFIX: &str = "OptionsField=";
const DIRECTIVE_SEPARATOR: char = ',';
const OPTION_SEPARATOR: char = ',';

/// Directives decoded from one field annotation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directives<'a> {
    /// Field takes its legal values from a sibling field
    pub enumerated:    bool,
    /// Field is mandatory
    pub required:      bool,
    /// Sibling field named by `OptionsField=`
    pub options_field: Option<&'a str>,
}

impl<'a> Directives<'a> {
    /// Decode an annotation string
    #[must_use]
    pub fn parse(annotation: &'a str, matching: DirectiveMatching) -> Self {
        Self {
            enumerated:    has_directive(annotation, ENUM_DIRECTIVE, matching),
            required:      has_directive(annotation, REQUIRED_DIRECTIVE, matching),
            options_field: options_field(annotation),
        }
    }

    /// Enumerated values taken from the field named by `OptionsField=`.
    ///
    /// Returns an empty list when no options field is named or no field by
    /// that name exists.
    #[must_use]
    pub fn resolve_options(&self, fields: &[Field<'_>]) -> Vec<String> {
        let Some(source_name) = self.options_field else {
            return Vec::new();
        };

        // Last declaration wins when a record repeats a name.
        let Some(source) = fields.iter().rev().find(|field| field.name == source_name) else {
            trace!(options_field = source_name, "options field not found");
            return Vec::new();
        };

        let options: Vec<String> = source
            .value
            .as_text()
            .split(OPTION_SEPARATOR)
            .map(str::to_string)
            .collect();
        trace!(
            options_field = source_name,
            count = options.len(),
            "resolved enum options"
        );
        options
    }
}

fn has_directive(annotation: &str, directive: &str, matching: DirectiveMatching) -> bool {
    match matching {
        DirectiveMatching::Substring => annotation.contains(directive),
        DirectiveMatching::ExactToken => annotation
            .split(DIRECTIVE_SEPARATOR)
            .any(|token| token.trim() == directive),
    }
}

fn options_field(annotation: &str) -> Option<&str> {
    annotation
        .split(DIRECTIVE_SEPARATOR)
        .find_map(|token| token.trim().strip_prefix(OPTIONS_FIELD_PREFIX))
        .map(str::trim)
        .filter(|name| !name.is_empty())
}
