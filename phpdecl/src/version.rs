//! Target PHP versions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A PHP release number.
///
/// Versions are totally ordered, so "supported from version V" reads as `min_version >= V`.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display, new, Serialize, Deserialize,
)]
#[display(fmt = "{}.{}.{}", major, minor, patch)]
#[serde(try_from = "String", into = "String")]
pub struct PhpVersion {
    major: u16,
    minor: u16,
    patch: u16,
}

impl PhpVersion {
    /// Shorthand for `major.minor.0`.
    pub const fn at(major: u16, minor: u16) -> Self {
        Self {
            major,
            minor,
            patch: 0,
        }
    }

    pub fn major(&self) -> u16 {
        self.major
    }

    pub fn minor(&self) -> u16 {
        self.minor
    }

    pub fn patch(&self) -> u16 {
        self.patch
    }
}

impl Default for PhpVersion {
    fn default() -> Self {
        Self::at(7, 4)
    }
}

impl FromStr for PhpVersion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidVersion(s.to_owned());
        let mut parts = s.trim().split('.');
        let mut next = |required: bool| -> Result<u16, ValidationError> {
            match parts.next() {
                Some(part) => part.parse::<u16>().map_err(|_| invalid()),
                None if required => Err(invalid()),
                None => Ok(0),
            }
        };
        let major = next(true)?;
        let minor = next(false)?;
        let patch = next(false)?;
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::new(major, minor, patch))
    }
}

impl TryFrom<String> for PhpVersion {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PhpVersion> for String {
    fn from(value: PhpVersion) -> Self {
        value.to_string()
    }
}
