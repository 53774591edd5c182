//! Declaration records.
//!
//! A [Declaration] describes a PHP variable: its name, its type, its default value and its
//! documentation. An [Argument](argument::Argument) is a declaration with argument-only concerns.

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde_json::Value;

use crate::{
    error::ValidationError,
    naming::{assert_valid_identifier, strip_variable_sigil},
    type_hint::is_array_type,
};

pub mod argument;
pub mod spec;
pub mod value;

pub use value::{DefaultValue, Scalar};

/// Declared type: one type name or a union of type names.
///
/// Type names are kept as given, they are only interpreted when rendering.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TypeSpec {
    Single(String),
    Union(Vec<String>),
}

impl TypeSpec {
    /// Builds a type from a list of names.
    ///
    /// Names are kept as given. An empty list or a blank name is rejected, a list of one name
    /// collapses to [TypeSpec::Single].
    pub fn union<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                if name.trim().is_empty() {
                    Err(ValidationError::EmptyTypeList)
                } else {
                    Ok(name.to_owned())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        match names.len() {
            0 => Err(ValidationError::EmptyTypeList),
            1 => Ok(Self::Single(names.remove(0))),
            _ => Ok(Self::Union(names)),
        }
    }

    /// Gets all type names, in declaration order.
    pub fn names(&self) -> &[String] {
        match self {
            Self::Single(name) => std::slice::from_ref(name),
            Self::Union(names) => names,
        }
    }

    /// Gets the type name if it is not a union.
    pub fn single(&self) -> Option<&str> {
        match self {
            Self::Single(name) => Some(name),
            Self::Union(_) => None,
        }
    }

    /// Whether one of the type names denotes an array.
    pub fn is_array_shaped(&self) -> bool {
        self.names().iter().any(|name| is_array_type(name))
    }
}

impl Display for TypeSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.names().iter().join("|"))
    }
}

/// Declaration record: name, type, default value and documentation.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Declaration {
    name: Option<String>,
    type_spec: Option<TypeSpec>,
    default: Option<DefaultValue>,
    summary: Option<String>,
    description: Vec<String>,
}

impl Declaration {
    /// Creates an empty declaration, without name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a declaration with a name.
    ///
    /// See [set_name](Self::set_name).
    pub fn named<N: AsRef<str>>(name: N) -> Result<Self, ValidationError> {
        let mut declaration = Self::new();
        declaration.set_name(name)?;
        Ok(declaration)
    }

    /// Gets the name, without variable sigil.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the name.
    ///
    /// Surrounding whitespace and the variable sigil are removed, then what remains must be a
    /// valid identifier.
    pub fn set_name<N: AsRef<str>>(&mut self, name: N) -> Result<&mut Self, ValidationError> {
        let name = strip_variable_sigil(name.as_ref().trim());
        assert_valid_identifier(name)?;
        self.name = Some(name.to_owned());
        Ok(self)
    }

    pub fn type_spec(&self) -> Option<&TypeSpec> {
        self.type_spec.as_ref()
    }

    /// Sets a single type name, kept as given. A blank name clears the type.
    pub fn set_type<T: Into<String>>(&mut self, type_name: T) -> &mut Self {
        let type_name = type_name.into();
        self.type_spec = if type_name.trim().is_empty() {
            None
        } else {
            Some(TypeSpec::Single(type_name))
        };
        self
    }

    /// Sets a union of type names.
    pub fn set_union_type<I, S>(&mut self, type_names: I) -> Result<&mut Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.type_spec = Some(TypeSpec::union(type_names)?);
        Ok(self)
    }

    pub fn set_type_spec(&mut self, type_spec: Option<TypeSpec>) -> &mut Self {
        self.type_spec = type_spec;
        self
    }

    pub fn clear_type(&mut self) -> &mut Self {
        self.type_spec = None;
        self
    }

    /// Whether the declared type denotes an array.
    pub fn has_array_type(&self) -> bool {
        self.type_spec
            .as_ref()
            .map(TypeSpec::is_array_shaped)
            .unwrap_or(false)
    }

    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    pub fn set_default<V: Into<DefaultValue>>(&mut self, value: V) -> &mut Self {
        self.default = Some(value.into());
        self
    }

    /// Sets the default value from loosely typed data.
    ///
    /// JSON `null` is the null marker. Objects and nested arrays are rejected.
    pub fn set_default_json(&mut self, value: Value) -> Result<&mut Self, ValidationError> {
        self.default = Some(DefaultValue::try_from(value)?);
        Ok(self)
    }

    pub fn clear_default(&mut self) -> &mut Self {
        self.default = None;
        self
    }

    pub fn has_array_default(&self) -> bool {
        self.default
            .as_ref()
            .map(DefaultValue::is_array)
            .unwrap_or(false)
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Sets the one-line summary. A blank summary clears it.
    pub fn set_summary<S: Into<String>>(&mut self, summary: S) -> &mut Self {
        let summary = summary.into();
        self.summary = if summary.trim().is_empty() {
            None
        } else {
            Some(summary)
        };
        self
    }

    /// Gets the description paragraphs.
    pub fn description(&self) -> &[String] {
        &self.description
    }

    pub fn set_description<I, S>(&mut self, paragraphs: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.description = paragraphs.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_description<S: Into<String>>(&mut self, paragraph: S) -> &mut Self {
        self.description.push(paragraph.into());
        self
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn should_strip_sigil_from_name() {
        let declaration = Declaration::named(" $count ").unwrap();
        assert_eq!(declaration.name(), Some("count"));
    }

    #[test]
    fn should_reject_invalid_names() {
        assert_matches!(
            Declaration::named("   "),
            Err(ValidationError::InvalidIdentifier(n)) if n.is_empty()
        );
        assert_matches!(
            Declaration::named("1st"),
            Err(ValidationError::InvalidIdentifier(_))
        );

        let mut declaration = Declaration::named("kept").unwrap();
        assert!(declaration.set_name("not valid").is_err());
        assert_eq!(declaration.name(), Some("kept"));
    }

    #[test]
    fn should_chain_setters() {
        let mut declaration = Declaration::new();
        declaration
            .set_name("limit")
            .unwrap()
            .set_type("int")
            .set_default(10_i64)
            .set_summary("Maximum number of rows.")
            .add_description("Zero means no limit.");

        assert_eq!(declaration.name(), Some("limit"));
        assert_eq!(
            declaration.type_spec(),
            Some(&TypeSpec::Single("int".to_owned()))
        );
        assert_eq!(declaration.default_value(), Some(&DefaultValue::from(10_i64)));
        assert_eq!(declaration.summary(), Some("Maximum number of rows."));
        assert_eq!(declaration.description(), ["Zero means no limit."]);
    }

    #[test]
    fn should_normalize_description_to_list() {
        let mut declaration = Declaration::new();
        assert!(declaration.description().is_empty());
        declaration.set_description(["a", "b"]);
        assert_eq!(declaration.description(), ["a", "b"]);
        declaration.set_description(Vec::<String>::new());
        assert!(declaration.description().is_empty());
    }

    #[test]
    fn should_clear_type_with_blank_name() {
        let mut declaration = Declaration::new();
        declaration.set_type("string");
        assert!(declaration.type_spec().is_some());
        declaration.set_type("  ");
        assert_eq!(declaration.type_spec(), None);
    }

    #[test]
    fn should_store_type_as_given() {
        let mut declaration = Declaration::new();
        declaration.set_type(" Integer ");
        assert_eq!(
            declaration.type_spec(),
            Some(&TypeSpec::Single(" Integer ".to_owned()))
        );
    }

    #[test]
    fn should_build_union_types() {
        assert_eq!(
            TypeSpec::union(["int", " string "]),
            Ok(TypeSpec::Union(vec!["int".to_owned(), " string ".to_owned()]))
        );
        assert_eq!(
            TypeSpec::union(["\\App\\User"]),
            Ok(TypeSpec::Single("\\App\\User".to_owned()))
        );
        assert_eq!(
            TypeSpec::union(["int", ""]),
            Err(ValidationError::EmptyTypeList)
        );
        assert_eq!(
            TypeSpec::union(["int", "  "]),
            Err(ValidationError::EmptyTypeList)
        );
        assert_eq!(
            TypeSpec::union(Vec::<&str>::new()),
            Err(ValidationError::EmptyTypeList)
        );
        assert_eq!(TypeSpec::union(["int", "null"]).unwrap().to_string(), "int|null");
    }

    #[test]
    fn should_detect_array_shapes() {
        let mut declaration = Declaration::new();
        assert!(!declaration.has_array_type());
        declaration.set_type("string[]");
        assert!(declaration.has_array_type());
        declaration.set_type("Array");
        assert!(declaration.has_array_type());
        declaration.set_union_type(["int", "int[]"]).unwrap();
        assert!(declaration.has_array_type());
        declaration.set_type("int");
        assert!(!declaration.has_array_type());

        assert!(!declaration.has_array_default());
        declaration.set_default(Vec::<Scalar>::new());
        assert!(declaration.has_array_default());
    }

    #[test]
    fn should_reject_structured_default() {
        let mut declaration = Declaration::named("options").unwrap();
        assert_matches!(
            declaration.set_default_json(json!({"key": "value"})),
            Err(ValidationError::UnsupportedDefault(_))
        );
        assert_eq!(declaration.default_value(), None);

        declaration.set_default_json(json!(null)).unwrap();
        assert_eq!(declaration.default_value(), Some(&DefaultValue::NULL));
    }
}
