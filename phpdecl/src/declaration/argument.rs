//! Argument records.

use serde_json::Value;

use super::Declaration;
use crate::error::ValidationError;

/// When the surrounding generator mirrors an argument into the same-named class property.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Display)]
pub enum PropertyBinding {
    /// The argument is not bound to a property.
    #[default]
    #[display(fmt = "none")]
    None = 0,
    /// The property is assigned before the function body.
    #[display(fmt = "before")]
    Before = 1,
    /// The property is assigned after the function body.
    #[display(fmt = "after")]
    After = 9,
}

impl PropertyBinding {
    /// Gets the numeric code of the mode.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Normalizes a numeric code: `0` is none, `1` is before, anything else is after.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::None,
            1 => Self::Before,
            _ => Self::After,
        }
    }

    /// Normalizes loosely typed input.
    ///
    /// `null` and `true` mean before, numbers go through [from_code](Self::from_code) and strings
    /// accept the mode names. Any other value is none when falsy (`false`, `""`, `[]`) and after
    /// otherwise.
    pub fn from_json(value: &Value) -> Self {
        let binding = match value {
            Value::Null => Self::Before,
            Value::Bool(flag) => Self::from(*flag),
            Value::Number(n) => match n.as_i64() {
                Some(code) => Self::from_code(code),
                None if n.as_f64() == Some(0.0) => Self::None,
                None => Self::After,
            },
            Value::String(s) => Self::from(s.as_str()),
            Value::Array(items) if items.is_empty() => Self::None,
            Value::Array(_) | Value::Object(_) => Self::After,
        };
        tracing::debug!(input = %value, %binding, "normalized property binding");
        binding
    }
}

impl From<bool> for PropertyBinding {
    fn from(value: bool) -> Self {
        if value {
            Self::Before
        } else {
            Self::None
        }
    }
}

/// An absent mode means [PropertyBinding::Before].
impl From<Option<PropertyBinding>> for PropertyBinding {
    fn from(value: Option<PropertyBinding>) -> Self {
        value.unwrap_or(Self::Before)
    }
}

impl From<i64> for PropertyBinding {
    fn from(value: i64) -> Self {
        Self::from_code(value)
    }
}

/// Mode names and codes are recognized, any other string is none when falsy (`""`, `"0"`) and
/// after otherwise.
impl From<&str> for PropertyBinding {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_code(code);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "none" => Self::None,
            "before" => Self::Before,
            "after" => Self::After,
            _ if value.is_empty() => Self::None,
            _ => Self::After,
        }
    }
}

/// Argument record: a [Declaration] with argument-only flags.
///
/// An argument always has a name.
#[derive(Clone, PartialEq, Debug, Deref, DerefMut)]
pub struct Argument {
    #[deref]
    #[deref_mut]
    declaration: Declaration,
    by_reference: bool,
    property_binding: PropertyBinding,
    next_slot: bool,
}

impl Argument {
    /// Creates an argument with a name only.
    pub fn new<N: AsRef<str>>(name: N) -> Result<Self, ValidationError> {
        Self::from_declaration(Declaration::named(name)?)
    }

    /// Creates an argument out of a declaration, keeping all its fields.
    pub fn from_declaration(declaration: Declaration) -> Result<Self, ValidationError> {
        if declaration.name().is_none() {
            return Err(ValidationError::MissingName);
        }
        Ok(Self {
            declaration,
            by_reference: false,
            property_binding: PropertyBinding::None,
            next_slot: false,
        })
    }

    /// Gets the name, without variable sigil.
    pub fn name(&self) -> &str {
        self.declaration.name().unwrap_or_default()
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    pub fn into_declaration(self) -> Declaration {
        self.declaration
    }

    pub fn is_by_reference(&self) -> bool {
        self.by_reference
    }

    pub fn set_by_reference(&mut self, by_reference: bool) -> &mut Self {
        self.by_reference = by_reference;
        self
    }

    pub fn property_binding(&self) -> PropertyBinding {
        self.property_binding
    }

    /// Sets the property binding mode.
    ///
    /// Accepts a [PropertyBinding], an optional one (absent means before), a boolean, a code or a
    /// mode name.
    pub fn set_property_binding<B: Into<PropertyBinding>>(&mut self, binding: B) -> &mut Self {
        self.property_binding = binding.into();
        self
    }

    /// Whether the argument stands for the next element of an array property.
    pub fn is_next_slot(&self) -> bool {
        self.next_slot
    }

    /// Sets the next-slot flag.
    ///
    /// The flag only holds when the type or the default value is an array at the time it is set,
    /// otherwise it is reset to `false`.
    pub fn set_next_slot(&mut self, next_slot: bool) -> &mut Self {
        let array_shaped = self.has_array_type() || self.has_array_default();
        if next_slot && !array_shaped {
            tracing::debug!(
                name = self.name(),
                "next slot flag reset on an argument which is not an array"
            );
        }
        self.next_slot = next_slot && array_shaped;
        self
    }

    /// Whether the argument renders as a bare name.
    pub fn is_plain(&self) -> bool {
        self.type_spec().is_none()
            && self.default_value().is_none()
            && !self.by_reference
            && self.property_binding == PropertyBinding::None
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use assert_matches::assert_matches;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::declaration::{DefaultValue, TypeSpec};

    #[test]
    fn should_round_trip_declaration_fields() {
        let mut declaration = Declaration::named("tags").unwrap();
        declaration
            .set_type("string[]")
            .set_default(vec!["a", "b"])
            .set_summary("Tags of the post.")
            .set_description(["First paragraph.", "Second paragraph."]);

        let argument = Argument::from_declaration(declaration.clone()).unwrap();

        assert_eq!(argument.name(), "tags");
        assert_eq!(argument.type_spec(), declaration.type_spec());
        assert_eq!(argument.default_value(), declaration.default_value());
        assert_eq!(argument.summary(), declaration.summary());
        assert_eq!(argument.description(), declaration.description());
        assert_eq!(argument.into_declaration(), declaration);
    }

    #[test]
    fn should_require_a_name() {
        assert_eq!(
            Argument::from_declaration(Declaration::new()),
            Err(ValidationError::MissingName)
        );
        assert_matches!(
            Argument::new("no way"),
            Err(ValidationError::InvalidIdentifier(_))
        );
    }

    #[test]
    fn should_have_neutral_defaults() {
        let argument = Argument::new("x").unwrap();
        assert!(!argument.is_by_reference());
        assert_eq!(argument.property_binding(), PropertyBinding::None);
        assert!(!argument.is_next_slot());
        assert!(argument.is_plain());
    }

    #[rstest]
    #[case("int", None)]
    #[case("string", Some(DefaultValue::from("a")))]
    #[case("mixed", Some(DefaultValue::NULL))]
    fn should_reset_next_slot_on_scalars(
        #[case] type_name: &str,
        #[case] default: Option<DefaultValue>,
    ) {
        let mut argument = Argument::new("value").unwrap();
        argument.set_type(type_name);
        if let Some(default) = default {
            argument.set_default(default);
        }
        argument.set_next_slot(true);
        assert!(!argument.is_next_slot());
    }

    #[test]
    fn should_keep_next_slot_on_arrays() {
        let mut argument = Argument::new("item").unwrap();
        argument.set_type("string[]");
        argument.set_next_slot(true);
        assert!(argument.is_next_slot());

        let mut argument = Argument::new("item").unwrap();
        argument.set_default(Vec::<i64>::new());
        argument.set_next_slot(true);
        assert!(argument.is_next_slot());

        let mut argument = Argument::new("item").unwrap();
        argument.set_union_type(["int", "int[]"]).unwrap();
        argument.set_next_slot(true);
        assert!(argument.is_next_slot());
        assert_matches!(argument.type_spec(), Some(TypeSpec::Union(_)));

        argument.set_next_slot(false);
        assert!(!argument.is_next_slot());
    }

    #[test]
    fn should_normalize_property_binding() {
        let mut argument = Argument::new("x").unwrap();
        assert_eq!(
            argument.set_property_binding(true).property_binding(),
            PropertyBinding::Before
        );
        assert_eq!(
            argument
                .set_property_binding(None::<PropertyBinding>)
                .property_binding(),
            PropertyBinding::Before
        );
        assert_eq!(
            argument
                .set_property_binding(PropertyBinding::Before)
                .property_binding(),
            PropertyBinding::Before
        );
        assert_eq!(
            argument.set_property_binding(false).property_binding(),
            PropertyBinding::None
        );
        assert_eq!(
            argument
                .set_property_binding(PropertyBinding::None)
                .property_binding(),
            PropertyBinding::None
        );
        assert_eq!(
            argument.set_property_binding(9_i64).property_binding(),
            PropertyBinding::After
        );
    }

    #[test]
    fn should_normalize_other_codes_to_after() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1024 {
            let code = rng.gen::<i64>();
            let expected = match code {
                0 => PropertyBinding::None,
                1 => PropertyBinding::Before,
                _ => PropertyBinding::After,
            };
            assert_eq!(PropertyBinding::from_code(code), expected);
        }
        assert_eq!(PropertyBinding::from_code(-1), PropertyBinding::After);
        assert_eq!(PropertyBinding::from_code(2), PropertyBinding::After);
    }

    #[rstest]
    #[case(json!(null), PropertyBinding::Before)]
    #[case(json!(true), PropertyBinding::Before)]
    #[case(json!(1), PropertyBinding::Before)]
    #[case(json!(false), PropertyBinding::None)]
    #[case(json!(0), PropertyBinding::None)]
    #[case(json!(9), PropertyBinding::After)]
    #[case(json!(42), PropertyBinding::After)]
    #[case(json!(-3), PropertyBinding::After)]
    #[case(json!(2.5), PropertyBinding::After)]
    #[case(json!("before"), PropertyBinding::Before)]
    #[case(json!("AFTER"), PropertyBinding::After)]
    #[case(json!("none"), PropertyBinding::None)]
    #[case(json!("9"), PropertyBinding::After)]
    #[case(json!("0"), PropertyBinding::None)]
    #[case(json!(""), PropertyBinding::None)]
    #[case(json!("yes"), PropertyBinding::After)]
    #[case(json!("false"), PropertyBinding::After)]
    #[case(json!([]), PropertyBinding::None)]
    #[case(json!([1]), PropertyBinding::After)]
    #[case(json!({"mode": 1}), PropertyBinding::After)]
    fn should_normalize_json_binding(#[case] input: Value, #[case] expected: PropertyBinding) {
        assert_eq!(PropertyBinding::from_json(&input), expected);
    }

    #[rstest]
    #[case("before", PropertyBinding::Before)]
    #[case(" None ", PropertyBinding::None)]
    #[case("1", PropertyBinding::Before)]
    #[case("", PropertyBinding::None)]
    #[case("sometimes", PropertyBinding::After)]
    fn should_normalize_string_binding(#[case] input: &str, #[case] expected: PropertyBinding) {
        assert_eq!(PropertyBinding::from(input), expected);
        assert_eq!(
            Argument::new("x")
                .unwrap()
                .set_property_binding(input)
                .property_binding(),
            expected
        );
    }

    #[test]
    fn should_expose_binding_codes() {
        assert_eq!(PropertyBinding::None.code(), 0);
        assert_eq!(PropertyBinding::Before.code(), 1);
        assert_eq!(PropertyBinding::After.code(), 9);
        assert_eq!(PropertyBinding::After.to_string(), "after");
    }
}
