//! Rendering configuration.

use std::{
    collections::BTreeSet,
    fmt::{Debug, Formatter},
};

use serde::Deserialize;

use crate::{
    type_hint::{LanguageFeature, TypeHintResolver, VersionTableResolver},
    version::PhpVersion,
};

const DEFAULT_INDENT_UNIT: &str = "    ";
const DEFAULT_ARRAY_ALIASES: [&str; 2] = ["[]", "array()"];

/// Configuration shared by all the renderers.
///
/// It is built once and read only afterwards, so a single configuration can serve concurrent
/// renders.
pub struct RenderConfig {
    pub(crate) min_version: PhpVersion,
    pub(crate) indent_unit: String,
    pub(crate) array_aliases: BTreeSet<String>,
    pub(crate) type_resolver: Box<dyn TypeHintResolver + Send + Sync>,
}

impl RenderConfig {
    /// Creates the default configuration for a minimum target version.
    pub fn new(min_version: PhpVersion) -> Self {
        Self {
            min_version,
            indent_unit: DEFAULT_INDENT_UNIT.to_owned(),
            array_aliases: DEFAULT_ARRAY_ALIASES
                .iter()
                .map(|alias| normalize_array_alias(alias))
                .collect(),
            type_resolver: Box::new(VersionTableResolver::default()),
        }
    }

    pub fn with_indent_unit<S: Into<String>>(mut self, indent_unit: S) -> Self {
        self.indent_unit = indent_unit.into();
        self
    }

    /// Replaces the strings recognized as empty array literals in default values.
    pub fn with_array_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.array_aliases = aliases
            .into_iter()
            .map(|alias| normalize_array_alias(alias.as_ref()))
            .collect();
        self
    }

    pub fn with_type_resolver<R>(mut self, type_resolver: R) -> Self
    where
        R: TypeHintResolver + Send + Sync + 'static,
    {
        self.type_resolver = Box::new(type_resolver);
        self
    }

    pub fn min_version(&self) -> PhpVersion {
        self.min_version
    }

    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    pub fn type_resolver(&self) -> &(dyn TypeHintResolver + Send + Sync) {
        self.type_resolver.as_ref()
    }

    /// Whether `value` spells an empty array literal.
    pub fn is_array_alias(&self, value: &str) -> bool {
        self.array_aliases.contains(&normalize_array_alias(value))
    }

    /// Whether array literals use brackets at the minimum target version.
    pub fn short_array_syntax(&self) -> bool {
        self.type_resolver
            .supports(LanguageFeature::ShortArraySyntax, self.min_version)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(PhpVersion::default())
    }
}

impl Debug for RenderConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderConfig")
            .field("min_version", &self.min_version)
            .field("indent_unit", &self.indent_unit)
            .field("array_aliases", &self.array_aliases)
            .finish_non_exhaustive()
    }
}

fn normalize_array_alias(alias: &str) -> String {
    alias
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Loadable form of [RenderConfig], every field is optional.
#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    pub min_version: Option<PhpVersion>,
    pub indent_unit: Option<String>,
    pub array_aliases: Option<Vec<String>>,
}

impl From<RenderSettings> for RenderConfig {
    fn from(settings: RenderSettings) -> Self {
        let mut config = Self::new(settings.min_version.unwrap_or_default());
        if let Some(indent_unit) = settings.indent_unit {
            config = config.with_indent_unit(indent_unit);
        }
        if let Some(array_aliases) = settings.array_aliases {
            config = config.with_array_aliases(array_aliases);
        }
        config
    }
}
