//! Default values of declarations.

use serde_json::Value;

use crate::error::ValidationError;

/// A scalar default, or an element of an array default.
#[derive(Clone, PartialEq, Debug)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl TryFrom<Value> for Scalar {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(b) => Ok(Self::Bool(b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Int(i))
                } else {
                    n.as_f64()
                        .map(Self::Float)
                        .ok_or_else(|| ValidationError::UnsupportedDefault(n.to_string()))
                }
            }
            Value::String(s) => Ok(Self::String(s)),
            other @ (Value::Array(_) | Value::Object(_)) => {
                Err(ValidationError::UnsupportedDefault(other.to_string()))
            }
        }
    }
}

/// Default value of a declaration.
///
/// Arrays only hold scalars, structured values cannot be expressed.
#[derive(Clone, PartialEq, Debug)]
pub enum DefaultValue {
    Scalar(Scalar),
    Array(Vec<Scalar>),
    /// Already rendered expression, emitted verbatim.
    Expression(String),
}

impl DefaultValue {
    /// The null marker.
    pub const NULL: Self = Self::Scalar(Scalar::Null);

    pub fn expression<E: Into<String>>(expression: E) -> Self {
        Self::Expression(expression.into())
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }
}

impl From<Scalar> for DefaultValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i32> for DefaultValue {
    fn from(value: i32) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        Self::Scalar(value.into())
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for DefaultValue {
    fn from(value: Vec<T>) -> Self {
        Self::Array(value.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<Value> for DefaultValue {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(Scalar::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Array),
            other @ Value::Object(_) => {
                Err(ValidationError::UnsupportedDefault(other.to_string()))
            }
            scalar => Scalar::try_from(scalar).map(Self::Scalar),
        }
    }
}
