//! Errors raised while building declarations and rendering them.

use thiserror::Error;

/// Raised eagerly when a record is constructed or mutated with invalid data.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ValidationError {
    #[error("`{0}` is not a valid identifier")]
    InvalidIdentifier(String),
    #[error("an argument requires a name")]
    MissingName,
    #[error("unsupported default value: {0}")]
    UnsupportedDefault(String),
    #[error("a type list must contain at least one type name")]
    EmptyTypeList,
    #[error("`{0}` is not a valid version")]
    InvalidVersion(String),
    #[error("invalid positional argument: {0}")]
    InvalidPositional(String),
}

/// Raised when a clause has no single source to render from.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum RenderError {
    #[error("cannot render an assignment to an unnamed declaration")]
    UnnamedTarget,
    #[error("nothing to render: no value, reference, expression or invocation is set")]
    MissingSource,
    #[error("{0} sources are set where exactly one is expected")]
    AmbiguousSource(usize),
}
