//! PHP source rendering of declarations.

pub mod argument;
pub mod assignment;
pub mod binding;
pub mod list;
pub mod literal;
pub mod signature;

pub use argument::ArgumentRenderer;
pub use assignment::Assignment;
pub use binding::render_property_bindings;
pub use list::{ArgumentList, ArgumentListRenderer, Layout};
pub use signature::render_function_header;
