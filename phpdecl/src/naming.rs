//! Identifier helpers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// Prefix of PHP variables.
pub const VARIABLE_SIGIL: char = '$';

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*$")
        .expect("identifier regex")
});

static CLASS_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\\?[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*(\\[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*)*$",
    )
    .expect("class name regex")
});

/// Removes every leading variable sigil from `name`.
pub fn strip_variable_sigil(name: &str) -> &str {
    name.trim_start_matches(VARIABLE_SIGIL)
}

/// Prefixes `name` with exactly one variable sigil.
///
/// Applying it to an already prefixed name gives back the same name.
pub fn apply_variable_sigil(name: &str) -> String {
    format!("{}{}", VARIABLE_SIGIL, strip_variable_sigil(name))
}

/// Checks that `name` is a bare PHP identifier and returns it.
pub fn assert_valid_identifier(name: &str) -> Result<&str, ValidationError> {
    if IDENTIFIER.is_match(name) {
        Ok(name)
    } else {
        Err(ValidationError::InvalidIdentifier(name.to_owned()))
    }
}

/// Whether `name` is spelled like a (possibly namespaced) class name.
pub(crate) fn is_class_name(name: &str) -> bool {
    CLASS_NAME.is_match(name)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use assert_matches::assert_matches;
    use rand::{distributions::Alphanumeric, Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("foo", "foo")]
    #[case("$foo", "foo")]
    #[case("$$foo", "foo")]
    fn should_strip_sigil(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_variable_sigil(input), expected);
    }

    #[test]
    fn should_apply_sigil_idempotently() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..256 {
            let len = rng.gen_range(1..16);
            let mut name = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect::<String>();
            if rng.gen_bool(0.5) {
                name.insert(0, VARIABLE_SIGIL);
            }
            let once = apply_variable_sigil(&name);
            let twice = apply_variable_sigil(&once);
            assert_eq!(once, twice);
            assert!(once.starts_with('$'));
            assert!(!once[1..].starts_with('$'));
        }
    }

    #[rstest]
    #[case("foo")]
    #[case("_foo")]
    #[case("foo_2")]
    #[case("été")]
    fn should_accept_identifier(#[case] name: &str) {
        assert_eq!(assert_valid_identifier(name), Ok(name));
    }

    #[rstest]
    #[case("")]
    #[case("2foo")]
    #[case("foo-bar")]
    #[case("foo bar")]
    #[case("$foo")]
    fn should_reject_identifier(#[case] name: &str) {
        assert_matches!(
            assert_valid_identifier(name),
            Err(ValidationError::InvalidIdentifier(n)) if n == name
        );
    }

    #[rstest]
    #[case("DateTime", true)]
    #[case("\\App\\Model\\User", true)]
    #[case("App\\Model", true)]
    #[case("App\\", false)]
    #[case("string[]", false)]
    fn should_recognize_class_name(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_class_name(name), expected);
    }
}
