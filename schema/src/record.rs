//! Field descriptors for records that can be rendered as form schemas
//!
//! A [`Record`] exposes its fields in declaration order, each with a name, an
//! optional annotation, an optional display title, and a value. Structs get
//! the implementation from `#[derive(FormSchema)]`; [`DynamicRecord`] covers
//! forms that are only known at runtime.

use std::borrow::Cow;

use itertools::Itertools;
use strum::AsRefStr;
use strum::Display;
use strum::EnumString;

use crate::render::FormMeta;
use crate::render::render_schema;
use crate::schema::SchemaDocument;

/// Underlying value category of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FieldKind {
    /// Signed or unsigned integer
    Integer,
    /// Floating point number
    Float,
    /// `true` or `false`
    Boolean,
    /// Text
    Text,
    /// Anything the schema has no dedicated type for
    Other,
}

/// The value held by one field of a record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Integer value, wide enough for every primitive up to 64 bits
    Integer(i128),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// Text value
    Text(Cow<'a, str>),
    /// Textual rendering of a value with no dedicated kind
    Other(Cow<'a, str>),
}

impl FieldValue<'_> {
    /// The kind of this value
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Integer(_) => FieldKind::Integer,
            Self::Float(_) => FieldKind::Float,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::Text(_) => FieldKind::Text,
            Self::Other(_) => FieldKind::Other,
        }
    }

    /// The value as text, used when a field supplies enumerated options
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Integer(value) => Cow::Owned(value.to_string()),
            Self::Float(value) => Cow::Owned(value.to_string()),
            Self::Boolean(value) => Cow::Owned(value.to_string()),
            Self::Text(text) | Self::Other(text) => Cow::Borrowed(text.as_ref()),
        }
    }
}

/// Conversion from a Rust value into a [`FieldValue`]
///
/// Implement this for custom field types used in a `#[derive(FormSchema)]` struct.
pub trait ToFieldValue {
    /// Borrow `self` as a field value
    fn to_field_value(&self) -> FieldValue<'_>;
}

macro_rules! impl_integer_field_value {
    ($($ty:ty),*) => {
        $(
            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue<'_> { FieldValue::Integer(i128::from(*self)) }
            }
        )*
    };
}

impl_integer_field_value!(i8, i16, i32, i64, u8, u16, u32, u64);

impl ToFieldValue for isize {
    fn to_field_value(&self) -> FieldValue<'_> {
        i128::try_from(*self).map_or_else(
            |_| FieldValue::Other(Cow::Owned(self.to_string())),
            FieldValue::Integer,
        )
    }
}

impl ToFieldValue for usize {
    fn to_field_value(&self) -> FieldValue<'_> {
        i128::try_from(*self).map_or_else(
            |_| FieldValue::Other(Cow::Owned(self.to_string())),
            FieldValue::Integer,
        )
    }
}

impl ToFieldValue for f32 {
    fn to_field_value(&self) -> FieldValue<'_> { FieldValue::Float(f64::from(*self)) }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue<'_> { FieldValue::Float(*self) }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue<'_> { FieldValue::Boolean(*self) }
}

impl ToFieldValue for char {
    fn to_field_value(&self) -> FieldValue<'_> { FieldValue::Text(Cow::Owned(self.to_string())) }
}

impl ToFieldValue for str {
    fn to_field_value(&self) -> FieldValue<'_> { FieldValue::Text(Cow::Borrowed(self)) }
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue<'_> { FieldValue::Text(Cow::Borrowed(self.as_str())) }
}

impl ToFieldValue for Cow<'_, str> {
    fn to_field_value(&self) -> FieldValue<'_> { FieldValue::Text(Cow::Borrowed(self.as_ref())) }
}

impl<T: ToFieldValue + ?Sized> ToFieldValue for &T {
    fn to_field_value(&self) -> FieldValue<'_> { (**self).to_field_value() }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        let text = self
            .as_ref()
            .map(|inner| inner.to_field_value().as_text().into_owned())
            .unwrap_or_default();
        FieldValue::Other(Cow::Owned(text))
    }
}

impl<T: ToFieldValue> ToFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        let text = self
            .iter()
            .map(|item| item.to_field_value().as_text().into_owned())
            .join(",");
        FieldValue::Other(Cow::Owned(text))
    }
}

/// One named slot of a record, as seen by the schema renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    /// Field identifier, e.g. `FirstName`
    pub name:       &'a str,
    /// Raw annotation string; fields without one are left out of the schema
    pub annotation: Option<&'a str>,
    /// Display title used instead of the identifier
    pub title:      Option<&'a str>,
    /// Current value of the field
    pub value:      FieldValue<'a>,
}

impl<'a> Field<'a> {
    /// Create a field without annotation or title override
    #[must_use]
    pub const fn new(name: &'a str, value: FieldValue<'a>) -> Self {
        Self {
            name,
            annotation: None,
            title: None,
            value,
        }
    }

    /// Kind of the field's value
    #[must_use]
    pub const fn kind(&self) -> FieldKind { self.value.kind() }
}

/// A value whose fields can be enumerated for schema rendering
pub trait Record {
    /// All fields in declaration order
    fn fields(&self) -> Vec<Field<'_>>;

    /// Render this record with default options
    fn render_schema(&self, meta: &FormMeta) -> SchemaDocument
    where
        Self: Sized,
    {
        render_schema(self, meta)
    }
}

/// A field of a [`DynamicRecord`]
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicField {
    name:       String,
    annotation: Option<String>,
    title:      Option<String>,
    value:      FieldValue<'static>,
}

impl DynamicField {
    /// Create a field from its identifier and value
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue<'static>>) -> Self {
        Self {
            name:       name.into(),
            annotation: None,
            title:      None,
            value:      value.into(),
        }
    }

    /// Attach an annotation such as `"enum,OptionsField=StatusOptions,required"`
    #[must_use]
    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Override the display title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn as_field(&self) -> Field<'_> {
        Field {
            name:       &self.name,
            annotation: self.annotation.as_deref(),
            title:      self.title.as_deref(),
            value:      match &self.value {
                FieldValue::Text(text) => FieldValue::Text(Cow::Borrowed(text.as_ref())),
                FieldValue::Other(text) => FieldValue::Other(Cow::Borrowed(text.as_ref())),
                scalar => scalar.clone(),
            },
        }
    }
}

/// A record assembled at runtime rather than declared as a struct
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicRecord {
    fields: Vec<DynamicField>,
}

impl DynamicRecord {
    /// Create an empty record
    #[must_use]
    pub const fn new() -> Self { Self { fields: Vec::new() } }

    /// Append a field
    #[must_use]
    pub fn with_field(mut self, field: DynamicField) -> Self {
        self.fields.push(field);
        self
    }

    /// Append a field in place
    pub fn push(&mut self, field: DynamicField) { self.fields.push(field); }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize { self.fields.len() }

    /// Whether the record has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }
}

impl FromIterator<DynamicField> for DynamicRecord {
    fn from_iter<I: IntoIterator<Item = DynamicField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Record for DynamicRecord {
    fn fields(&self) -> Vec<Field<'_>> { self.fields.iter().map(DynamicField::as_field).collect() }
}

impl From<i64> for FieldValue<'static> {
    fn from(value: i64) -> Self { Self::Integer(i128::from(value)) }
}

impl From<i32> for FieldValue<'static> {
    fn from(value: i32) -> Self { Self::Integer(i128::from(value)) }
}

impl From<u64> for FieldValue<'static> {
    fn from(value: u64) -> Self { Self::Integer(i128::from(value)) }
}

impl From<f64> for FieldValue<'static> {
    fn from(value: f64) -> Self { Self::Float(value) }
}

impl From<bool> for FieldValue<'static> {
    fn from(value: bool) -> Self { Self::Boolean(value) }
}

impl From<String> for FieldValue<'static> {
    fn from(value: String) -> Self { Self::Text(Cow::Owned(value)) }
}

impl From<&str> for FieldValue<'static> {
    fn from(value: &str) -> Self { Self::Text(Cow::Owned(value.to_string())) }
}
