//! Function headers.

use super::list::ArgumentListRenderer;
use crate::{
    config::RenderConfig, declaration::argument::Argument, error::ValidationError,
    naming::assert_valid_identifier,
};

/// Renders `function name(...)`, the argument list laid out by [ArgumentListRenderer].
///
/// The first line is indented with `base_indent`.
pub fn render_function_header(
    config: &RenderConfig,
    name: &str,
    arguments: &[Argument],
    base_indent: &str,
) -> Result<Vec<String>, ValidationError> {
    let name = assert_valid_identifier(name)?;
    let mut lines = ArgumentListRenderer::new(config)
        .render(arguments, base_indent)
        .into_lines();
    if let Some(first) = lines.first_mut() {
        *first = format!("{}function {}{}", base_indent, name, first);
    }
    Ok(lines)
}
