//! Type annotations and their availability across PHP versions.
//!
//! See [VersionTableResolver](table::VersionTableResolver) for the default resolver.

use itertools::Itertools;

use crate::{declaration::TypeSpec, version::PhpVersion};

pub mod table;

pub use table::VersionTableResolver;

/// Canonical spelling of the array annotation.
pub const ARRAY_TYPE: &str = "array";

/// Suffix denoting "array of" in type names, e.g. `string[]`.
pub const ARRAY_SUFFIX: &str = "[]";

const NULL_TYPE: &str = "null";
const FALSE_TYPE: &str = "false";
const MIXED_TYPE: &str = "mixed";

/// Whether `type_name` denotes an array, either `array` or any `T[]`.
pub fn is_array_type(type_name: &str) -> bool {
    let type_name = type_name.trim();
    type_name.eq_ignore_ascii_case(ARRAY_TYPE) || type_name.ends_with(ARRAY_SUFFIX)
}

/// Gets the element type of a `T[]` type name.
pub fn array_element_type(type_name: &str) -> Option<&str> {
    type_name
        .trim()
        .strip_suffix(ARRAY_SUFFIX)
        .map(str::trim)
        .filter(|element| !element.is_empty())
}

/// Answer of a [TypeHintResolver] for one type name.
#[derive(Clone, PartialEq, Eq, Debug, new)]
pub struct TypeHint {
    supported: bool,
    spelling: String,
}

impl TypeHint {
    pub fn supported<S: Into<String>>(spelling: S) -> Self {
        Self::new(true, spelling.into())
    }

    pub fn unsupported<S: Into<String>>(spelling: S) -> Self {
        Self::new(false, spelling.into())
    }

    /// Whether the annotation can be rendered.
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Canonical spelling of the type.
    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    /// Gets the annotation text if it can be rendered.
    pub fn into_annotation(self) -> Option<String> {
        self.supported.then_some(self.spelling)
    }
}

/// Language features the rendering depends on.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum LanguageFeature {
    /// `?T` annotations.
    NullableTypes,
    /// `A|B` annotations.
    UnionTypes,
    /// `[...]` array literals instead of `array(...)`.
    ShortArraySyntax,
}

/// Answers which type annotations exist at a minimum target version.
///
/// Supportability must be monotonic: what is supported at version `V` is supported at every
/// version after `V`.
pub trait TypeHintResolver {
    /// Resolves a single type name.
    ///
    /// Array types always resolve to a supported `array` annotation.
    fn resolve(&self, type_name: &str, min_version: PhpVersion) -> TypeHint;

    fn supports(&self, feature: LanguageFeature, min_version: PhpVersion) -> bool;

    /// Gets the element type of a `T[]` type name, if that element can be annotated.
    fn element_type(&self, type_name: &str, min_version: PhpVersion) -> Option<String> {
        array_element_type(type_name)
            .filter(|element| self.resolve(element, min_version).is_supported())
            .map(str::to_owned)
    }

    /// Gets the element type of the first `T[]` name of a declared type.
    fn element_type_of(&self, type_spec: &TypeSpec, min_version: PhpVersion) -> Option<String> {
        type_spec
            .names()
            .iter()
            .find(|name| array_element_type(name).is_some())
            .and_then(|name| self.element_type(name, min_version))
    }

    /// Gets the annotation of a declared type, unions included.
    fn annotation(&self, type_spec: &TypeSpec, min_version: PhpVersion) -> Option<String> {
        let names = match type_spec {
            TypeSpec::Single(name) => return self.resolve(name, min_version).into_annotation(),
            TypeSpec::Union(names) => names,
        };

        // `?T` and `mixed` only stand alone.
        if names.iter().any(|name| is_standalone_type(name)) {
            return None;
        }

        if self.supports(LanguageFeature::UnionTypes, min_version) {
            let hints = names
                .iter()
                .map(|name| {
                    let hint = self.resolve(name, min_version);
                    if hint.is_supported() || !is_union_only_type(name) {
                        hint
                    } else {
                        TypeHint::supported(name.trim().to_ascii_lowercase())
                    }
                })
                .collect::<Vec<_>>();
            if hints.iter().all(TypeHint::is_supported) {
                return Some(hints.iter().map(TypeHint::spelling).unique().join("|"));
            }
        }

        if self.supports(LanguageFeature::NullableTypes, min_version) {
            if let [first, second] = names.as_slice() {
                let other = match (is_null_type(first), is_null_type(second)) {
                    (true, false) => Some(second),
                    (false, true) => Some(first),
                    _ => None,
                };
                return other
                    .and_then(|other| self.resolve(other, min_version).into_annotation())
                    .map(|annotation| format!("?{}", annotation));
            }
        }

        None
    }
}

impl<R> TypeHintResolver for &R
where
    R: TypeHintResolver + ?Sized,
{
    fn resolve(&self, type_name: &str, min_version: PhpVersion) -> TypeHint {
        R::resolve(self, type_name, min_version)
    }

    fn supports(&self, feature: LanguageFeature, min_version: PhpVersion) -> bool {
        R::supports(self, feature, min_version)
    }
}

fn is_null_type(type_name: &str) -> bool {
    type_name.trim().eq_ignore_ascii_case(NULL_TYPE)
}

fn is_standalone_type(type_name: &str) -> bool {
    let type_name = type_name.trim();
    type_name.starts_with('?') || type_name.eq_ignore_ascii_case(MIXED_TYPE)
}

fn is_union_only_type(type_name: &str) -> bool {
    is_null_type(type_name) || type_name.trim().eq_ignore_ascii_case(FALSE_TYPE)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("array", true)]
    #[case("ARRAY", true)]
    #[case("string[]", true)]
    #[case(" Foo\\Bar[] ", true)]
    #[case("string", false)]
    #[case("arrayable", false)]
    fn should_detect_array_types(#[case] type_name: &str, #[case] expected: bool) {
        assert_eq!(is_array_type(type_name), expected);
    }

    #[rstest]
    #[case("string[]", Some("string"))]
    #[case("int[][]", Some("int[]"))]
    #[case("[]", None)]
    #[case("array", None)]
    fn should_extract_element_type(#[case] type_name: &str, #[case] expected: Option<&str>) {
        assert_eq!(array_element_type(type_name), expected);
    }

    #[test]
    fn should_turn_hint_into_annotation() {
        assert_eq!(
            TypeHint::supported("int").into_annotation(),
            Some("int".to_owned())
        );
        assert_eq!(TypeHint::unsupported("resource").into_annotation(), None);
    }
}
