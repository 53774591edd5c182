use std::collections::BTreeMap;

use maplit::{btreemap, convert_args};

use super::{is_array_type, LanguageFeature, TypeHint, TypeHintResolver, ARRAY_TYPE};
use crate::{naming::is_class_name, version::PhpVersion};

/// Since when a built-in type can be used as a parameter annotation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Availability {
    Always,
    Since(PhpVersion),
    Never,
}

impl Availability {
    fn at(self, min_version: PhpVersion) -> bool {
        match self {
            Self::Always => true,
            Self::Since(version) => min_version >= version,
            Self::Never => false,
        }
    }
}

/// [TypeHintResolver] backed by read-only lookup tables.
///
/// Built-in names are matched case-insensitively, after alias canonicalization. Names missing from
/// the tables are class names, which can always be annotated when they are spelled correctly.
#[derive(Clone, Debug, new)]
pub struct VersionTableResolver {
    types: BTreeMap<String, Availability>,
    aliases: BTreeMap<String, String>,
    features: BTreeMap<LanguageFeature, PhpVersion>,
}

impl VersionTableResolver {
    /// Parameter types of PHP.
    pub fn php_types() -> BTreeMap<String, Availability> {
        use Availability::*;
        convert_args!(
            keys = String::from,
            btreemap!(
                "array" => Always,
                "self" => Since(PhpVersion::at(5, 0)),
                "parent" => Since(PhpVersion::at(5, 0)),
                "callable" => Since(PhpVersion::at(5, 4)),
                "bool" => Since(PhpVersion::at(7, 0)),
                "int" => Since(PhpVersion::at(7, 0)),
                "float" => Since(PhpVersion::at(7, 0)),
                "string" => Since(PhpVersion::at(7, 0)),
                "iterable" => Since(PhpVersion::at(7, 1)),
                "object" => Since(PhpVersion::at(7, 2)),
                "mixed" => Since(PhpVersion::at(8, 0)),
                "null" => Since(PhpVersion::at(8, 2)),
                "false" => Since(PhpVersion::at(8, 2)),
                "true" => Since(PhpVersion::at(8, 2)),
                "void" => Never,
                "never" => Never,
                "resource" => Never,
                "callback" => Never,
                "static" => Never,
            )
        )
    }

    /// Alternative spellings of PHP types, as found in doc blocks.
    pub fn php_aliases() -> BTreeMap<String, String> {
        convert_args!(btreemap!(
            "integer" => "int",
            "boolean" => "bool",
            "double" => "float",
        ))
    }

    pub fn php_features() -> BTreeMap<LanguageFeature, PhpVersion> {
        btreemap! {
            LanguageFeature::NullableTypes => PhpVersion::at(7, 1),
            LanguageFeature::UnionTypes => PhpVersion::at(8, 0),
            LanguageFeature::ShortArraySyntax => PhpVersion::at(5, 4),
        }
    }

    fn canonical<'a>(&'a self, lower_name: &'a str) -> &'a str {
        self.aliases
            .get(lower_name)
            .map(String::as_str)
            .unwrap_or(lower_name)
    }
}

impl Default for VersionTableResolver {
    fn default() -> Self {
        Self::new(Self::php_types(), Self::php_aliases(), Self::php_features())
    }
}

impl TypeHintResolver for VersionTableResolver {
    fn resolve(&self, type_name: &str, min_version: PhpVersion) -> TypeHint {
        let type_name = type_name.trim();
        if is_array_type(type_name) {
            return TypeHint::supported(ARRAY_TYPE);
        }

        if let Some(inner) = type_name.strip_prefix('?') {
            let inner = self.resolve(inner, min_version);
            let spelling = format!("?{}", inner.spelling());
            return TypeHint::new(
                inner.is_supported() && self.supports(LanguageFeature::NullableTypes, min_version),
                spelling,
            );
        }

        let lower_name = type_name.to_ascii_lowercase();
        let canonical = self.canonical(&lower_name);
        match self.types.get(canonical) {
            Some(availability) => TypeHint::new(availability.at(min_version), canonical.to_owned()),
            None if is_class_name(type_name) => TypeHint::supported(type_name),
            None => TypeHint::unsupported(type_name),
        }
    }

    fn supports(&self, feature: LanguageFeature, min_version: PhpVersion) -> bool {
        self.features
            .get(&feature)
            .map(|&since| min_version >= since)
            .unwrap_or(false)
    }
}
