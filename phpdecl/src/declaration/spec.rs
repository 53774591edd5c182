//! Shorthand inputs normalized into [Argument] records.
//!
//! Callers may describe an argument by its name only, by an existing [Declaration] or by all its
//! fields at once. Each shape is resolved into an [Argument] once, before rendering.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{argument::Argument, argument::PropertyBinding, Declaration, DefaultValue, TypeSpec};
use crate::error::ValidationError;

/// All the fields of an argument.
///
/// It is also what a positional tuple `[name, type, default, by_reference, property_binding,
/// next_slot]` deserializes into.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ArgumentFields {
    pub name: String,
    pub type_spec: Option<TypeSpec>,
    pub default: Option<DefaultValue>,
    pub summary: Option<String>,
    pub description: Vec<String>,
    pub by_reference: bool,
    /// `None` leaves the argument unbound, `Some` goes through normalization.
    pub property_binding: Option<PropertyBinding>,
    pub next_slot: bool,
}

impl ArgumentFields {
    pub fn named<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Accepted input shapes for an argument.
#[derive(Clone, PartialEq, Debug)]
pub enum ArgumentSpec {
    Name(String),
    Declaration(Declaration),
    Fields(ArgumentFields),
}

impl From<&str> for ArgumentSpec {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl From<String> for ArgumentSpec {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<Declaration> for ArgumentSpec {
    fn from(value: Declaration) -> Self {
        Self::Declaration(value)
    }
}

impl From<ArgumentFields> for ArgumentSpec {
    fn from(value: ArgumentFields) -> Self {
        Self::Fields(value)
    }
}

impl TryFrom<ArgumentSpec> for Argument {
    type Error = ValidationError;

    fn try_from(spec: ArgumentSpec) -> Result<Self, Self::Error> {
        match spec {
            ArgumentSpec::Name(name) => Argument::new(name),
            ArgumentSpec::Declaration(declaration) => Argument::from_declaration(declaration),
            ArgumentSpec::Fields(fields) => {
                let mut argument = Argument::new(&fields.name)?;
                argument.set_type_spec(fields.type_spec);
                if let Some(default) = fields.default {
                    argument.set_default(default);
                }
                if let Some(summary) = fields.summary {
                    argument.set_summary(summary);
                }
                argument.set_description(fields.description);
                argument.set_by_reference(fields.by_reference);
                if let Some(binding) = fields.property_binding {
                    argument.set_property_binding(binding);
                }
                // Depends on the type and default being set.
                argument.set_next_slot(fields.next_slot);
                Ok(argument)
            }
        }
    }
}

/// Resolves a sequence of input shapes into arguments, failing on the first invalid one.
pub fn arguments<I, S>(specs: I) -> Result<Vec<Argument>, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: Into<ArgumentSpec>,
{
    specs
        .into_iter()
        .map(|spec| Argument::try_from(spec.into()))
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawArgumentSpec {
    Name(String),
    Positional(Vec<Value>),
    Fields(RawArgumentFields),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawArgumentFields {
    name: String,
    #[serde(default, rename = "type")]
    type_spec: Option<RawTypeSpec>,
    #[serde(default)]
    default: Option<Value>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    description: Vec<String>,
    #[serde(default)]
    by_reference: bool,
    #[serde(default, deserialize_with = "deserialize_present")]
    property_binding: Option<Value>,
    #[serde(default)]
    next_slot: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTypeSpec {
    Single(String),
    Union(Vec<String>),
}

/// Keeps an explicit `null` as `Some(Value::Null)`, a missing field stays `None`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn type_spec_from_raw(raw: Option<RawTypeSpec>) -> Result<Option<TypeSpec>, ValidationError> {
    match raw {
        None => Ok(None),
        Some(RawTypeSpec::Single(name)) if name.trim().is_empty() => Ok(None),
        Some(RawTypeSpec::Single(name)) => Ok(Some(TypeSpec::Single(name))),
        Some(RawTypeSpec::Union(names)) => TypeSpec::union(names).map(Some),
    }
}

/// JSON `null` as a default means "no default".
fn default_from_raw(raw: Option<Value>) -> Result<Option<DefaultValue>, ValidationError> {
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(value) => DefaultValue::try_from(value).map(Some),
    }
}

fn positional_fields(values: Vec<Value>) -> Result<ArgumentFields, ValidationError> {
    const SLOTS: usize = 6;
    if values.is_empty() || values.len() > SLOTS {
        return Err(ValidationError::InvalidPositional(format!(
            "expected 1 to {} elements, got {}",
            SLOTS,
            values.len()
        )));
    }
    let mut values = values.into_iter();

    let name = match values.next() {
        Some(Value::String(name)) => name,
        other => {
            return Err(ValidationError::InvalidPositional(format!(
                "the name must be a string, got {}",
                other.unwrap_or(Value::Null)
            )))
        }
    };
    let type_spec = match values.next() {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => type_spec_from_raw(Some(RawTypeSpec::Single(name)))?,
        Some(Value::Array(names)) => {
            let names = names
                .into_iter()
                .map(|name| match name {
                    Value::String(name) => Ok(name),
                    other => Err(ValidationError::InvalidPositional(format!(
                        "type names must be strings, got {}",
                        other
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Some(TypeSpec::union(names)?)
        }
        Some(other) => {
            return Err(ValidationError::InvalidPositional(format!(
                "the type must be a string or a list of strings, got {}",
                other
            )))
        }
    };
    let default = default_from_raw(values.next())?;
    let by_reference = match values.next() {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => flag,
        Some(other) => {
            return Err(ValidationError::InvalidPositional(format!(
                "the by-reference flag must be a boolean, got {}",
                other
            )))
        }
    };
    let property_binding = values
        .next()
        .map(|value| PropertyBinding::from_json(&value));
    let next_slot = match values.next() {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => flag,
        Some(other) => {
            return Err(ValidationError::InvalidPositional(format!(
                "the next-slot flag must be a boolean, got {}",
                other
            )))
        }
    };

    Ok(ArgumentFields {
        name,
        type_spec,
        default,
        by_reference,
        property_binding,
        next_slot,
        ..ArgumentFields::default()
    })
}

impl TryFrom<RawArgumentSpec> for ArgumentSpec {
    type Error = ValidationError;

    fn try_from(raw: RawArgumentSpec) -> Result<Self, Self::Error> {
        match raw {
            RawArgumentSpec::Name(name) => Ok(Self::Name(name)),
            RawArgumentSpec::Positional(values) => positional_fields(values).map(Self::Fields),
            RawArgumentSpec::Fields(raw) => Ok(Self::Fields(ArgumentFields {
                name: raw.name,
                type_spec: type_spec_from_raw(raw.type_spec)?,
                default: default_from_raw(raw.default)?,
                summary: raw.summary,
                description: raw.description,
                by_reference: raw.by_reference,
                property_binding: raw
                    .property_binding
                    .map(|value| PropertyBinding::from_json(&value)),
                next_slot: raw.next_slot,
            })),
        }
    }
}

impl<'de> Deserialize<'de> for ArgumentSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawArgumentSpec::deserialize(deserializer)?;
        ArgumentSpec::try_from(raw).map_err(serde::de::Error::custom)
    }
}
