//! Parsing of `#[jsonschema(...)]` field attributes

use heck::ToUpperCamelCase;
use syn::Attribute;
use syn::Field;
use syn::Ident;
use syn::LitStr;
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;

const ATTRIBUTE_NAME: &str = "jsonschema";

/// Everything the derive needs to know about one struct field
pub struct FieldSpec {
    pub ident:      Ident,
    pub name:       String,
    pub annotation: Option<String>,
    pub title:      Option<String>,
    pub skip:       bool,
}

impl FieldSpec {
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(
                field,
                "FormSchema only works with named fields",
            ));
        };

        let attrs = parse_attrs(&field.attrs)?;
        let name = attrs
            .rename
            .unwrap_or_else(|| ident.unraw().to_string().to_upper_camel_case());

        Ok(Self {
            ident,
            name,
            annotation: attrs.tag,
            title: attrs.title,
            skip: attrs.skip,
        })
    }
}

#[derive(Default)]
struct JsonSchemaAttrs {
    tag:    Option<String>,
    title:  Option<String>,
    rename: Option<String>,
    skip:   bool,
}

fn parse_attrs(attrs: &[Attribute]) -> syn::Result<JsonSchemaAttrs> {
    let mut parsed = JsonSchemaAttrs::default();

    for attr in attrs
        .iter()
        .filter(|attr| attr.path().is_ident(ATTRIBUTE_NAME))
    {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("tag") {
                parsed.tag = Some(string_value(&meta)?);
                Ok(())
            } else if meta.path.is_ident("title") {
                parsed.title = Some(string_value(&meta)?);
                Ok(())
            } else if meta.path.is_ident("rename") {
                parsed.rename = Some(string_value(&meta)?);
                Ok(())
            } else if meta.path.is_ident("skip") {
                parsed.skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported jsonschema attribute"))
            }
        })?;
    }

    Ok(parsed)
}

fn string_value(meta: &ParseNestedMeta<'_>) -> syn::Result<String> {
    let value = meta.value()?;
    let s: LitStr = value.parse()?;
    Ok(s.value())
}
