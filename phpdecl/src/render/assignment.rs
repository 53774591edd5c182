//! Variable assignments, `$name = <source>;`.

use super::argument::ArgumentRenderer;
use crate::{
    config::RenderConfig,
    declaration::Declaration,
    error::{RenderError, ValidationError},
    naming::{apply_variable_sigil, assert_valid_identifier, strip_variable_sigil},
};

/// Assignment of a declared variable.
///
/// Exactly one source must be set: the default value of the declaration, a reference to another
/// variable, an already rendered expression or an already rendered invocation.
#[derive(Clone, PartialEq, Debug)]
pub struct Assignment {
    target: Declaration,
    reference: Option<String>,
    expression: Option<String>,
    invocation: Option<String>,
}

impl Assignment {
    pub fn new(target: Declaration) -> Self {
        Self {
            target,
            reference: None,
            expression: None,
            invocation: None,
        }
    }

    pub fn target(&self) -> &Declaration {
        &self.target
    }

    /// Assigns a reference to another variable.
    pub fn set_reference<N: AsRef<str>>(
        &mut self,
        variable: N,
    ) -> Result<&mut Self, ValidationError> {
        let variable = strip_variable_sigil(variable.as_ref().trim());
        assert_valid_identifier(variable)?;
        self.reference = Some(variable.to_owned());
        Ok(self)
    }

    /// Assigns a conditional expression, already rendered.
    pub fn set_expression<E: Into<String>>(&mut self, expression: E) -> &mut Self {
        self.expression = Some(expression.into());
        self
    }

    /// Assigns the result of an invocation, already rendered.
    pub fn set_invocation<E: Into<String>>(&mut self, invocation: E) -> &mut Self {
        self.invocation = Some(invocation.into());
        self
    }

    pub fn render(&self, config: &RenderConfig) -> Result<String, RenderError> {
        let name = self.target.name().ok_or(RenderError::UnnamedTarget)?;

        let sources = usize::from(self.target.default_value().is_some())
            + usize::from(self.reference.is_some())
            + usize::from(self.expression.is_some())
            + usize::from(self.invocation.is_some());
        if sources > 1 {
            return Err(RenderError::AmbiguousSource(sources));
        }

        let source = if let Some(default) = self.target.default_value() {
            ArgumentRenderer::new(config).render_default(default, self.target.type_spec())
        } else if let Some(reference) = &self.reference {
            format!("&{}", apply_variable_sigil(reference))
        } else if let Some(expression) = self.expression.as_ref().or(self.invocation.as_ref()) {
            expression.clone()
        } else {
            return Err(RenderError::MissingSource);
        };

        Ok(format!("{} = {};", apply_variable_sigil(name), source))
    }
}
