//! Variables, dimensions, and attribute values of a dataset.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A scalar or string attribute value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Integer attribute (any netCDF integer type).
    Int(i64),
    /// Floating point attribute.
    Float(f64),
    /// Character attribute.
    Text(String),
}

impl AttributeValue {
    /// The value as a string slice, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The value as an integer, accepting floats with no fractional part.
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            AttributeValue::Int(value) => Some(value),
            AttributeValue::Float(value) if value.fract() == 0.0 && value.is_finite() => {
                Some(value as i64)
            }
            _ => None,
        }
    }

    /// Short name of the stored type, used in messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Int(_) => "int",
            AttributeValue::Float(_) => "float",
            AttributeValue::Text(_) => "str",
        }
    }

    /// Whitespace-separated tokens of a text value; empty for numbers.
    pub fn split_names(&self) -> Vec<&str> {
        self.as_text()
            .map(|text| text.split_whitespace().collect())
            .unwrap_or_default()
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Int(value) => write!(f, "{value}"),
            AttributeValue::Float(value) => write!(f, "{value}"),
            AttributeValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Int(i64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

/// A named dimension with a fixed size.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Dimension {
    name: String,
    size: usize,
}

impl Dimension {
    /// Creates a dimension.
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Dimension name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dimension size.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }
}

/// A named variable: its dimension names and attributes. Data values are not held.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Variable {
    name: String,
    dimensions: Vec<String>,
    attributes: BTreeMap<String, AttributeValue>,
}

impl Variable {
    /// Creates a scalar variable with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the ordered dimension names.
    pub fn with_dimensions<I, S>(mut self, dimensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dimensions = dimensions.into_iter().map(Into::into).collect();
        self
    }

    /// Adds or replaces an attribute.
    pub fn with_attribute(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    pub(crate) fn from_parts(
        name: String,
        dimensions: Vec<String>,
        attributes: BTreeMap<String, AttributeValue>,
    ) -> Self {
        Self {
            name,
            dimensions,
            attributes,
        }
    }

    /// Variable name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered dimension names.
    #[inline]
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    /// Looks up an attribute. Absence is a normal outcome.
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// All attributes, ordered by name.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}
