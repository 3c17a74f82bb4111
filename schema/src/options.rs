//! Render configuration

use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumString;

/// How the `enum` and `required` directives are recognised inside an annotation
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DirectiveMatching {
    /// The directive may appear anywhere in the annotation, so `notrequired`
    /// also marks a field as required
    #[default]
    Substring,
    /// The directive must be a whole comma separated token, surrounding
    /// whitespace ignored
    ExactToken,
}

/// Options controlling how a record is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Matching policy for the `enum` and `required` directives
    pub directive_matching: DirectiveMatching,
}

impl RenderOptions {
    /// Options using the given directive matching policy
    #[must_use]
    pub const fn with_directive_matching(directive_matching: DirectiveMatching) -> Self {
        Self { directive_matching }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults_to_substring_matching() {
        assert_eq!(
            RenderOptions::default().directive_matching,
            DirectiveMatching::Substring
        );
    }

    #[test]
    fn test_deserialize_from_config() {
        let options =
            serde_json::from_value::<RenderOptions>(json!({ "directive_matching": "exact_token" }))
                .ok();
        assert_eq!(
            options,
            Some(RenderOptions::with_directive_matching(DirectiveMatching::ExactToken))
        );

        let empty = serde_json::from_value::<RenderOptions>(json!({})).ok();
        assert_eq!(empty, Some(RenderOptions::default()));
    }

    #[test]
    fn test_directive_matching_names() {
        assert_eq!(DirectiveMatching::ExactToken.to_string(), "exact_token");
        assert_eq!(
            "substring".parse::<DirectiveMatching>().ok(),
            Some(DirectiveMatching::Substring)
        );
    }
}
