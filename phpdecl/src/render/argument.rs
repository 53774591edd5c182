use std::borrow::Cow;

use super::literal::{render_array_literal, render_scalar_literal, NULL_LITERAL};
use crate::{
    config::RenderConfig,
    declaration::{argument::Argument, DefaultValue, Scalar, TypeSpec},
    naming::apply_variable_sigil,
    type_hint::array_element_type,
};

const REFERENCE_MARKER: char = '&';

/// Renders one argument: annotation, reference marker, name and default value.
///
/// The output never ends with a delimiter, that is up to the caller.
#[derive(Clone, Copy, Debug, new)]
pub struct ArgumentRenderer<'c> {
    config: &'c RenderConfig,
}

impl<'c> ArgumentRenderer<'c> {
    pub fn render(&self, argument: &Argument) -> String {
        let argument = if argument.is_next_slot() {
            Cow::Owned(self.element_argument(argument))
        } else {
            Cow::Borrowed(argument)
        };

        let mut out = String::new();
        if let Some(annotation) = argument
            .type_spec()
            .and_then(|type_spec| self.annotation(type_spec))
        {
            out.push_str(&annotation);
            out.push(' ');
        }
        if argument.is_by_reference() {
            out.push(REFERENCE_MARKER);
        }
        out.push_str(&apply_variable_sigil(argument.name()));
        if let Some(default) = argument.default_value() {
            out.push_str(" = ");
            out.push_str(&self.render_default(default, argument.type_spec()));
        }
        out
    }

    /// Gets the signature of one element of a next-slot argument.
    ///
    /// The default is dropped and the type becomes the element type, when there is one.
    pub fn element_argument(&self, argument: &Argument) -> Argument {
        let mut element = argument.clone();
        element.clear_default();
        let element_type = argument.type_spec().and_then(|type_spec| {
            self.config
                .type_resolver()
                .element_type_of(type_spec, self.config.min_version())
        });
        match element_type {
            Some(element_type) => element.set_type(element_type),
            None => element.clear_type(),
        };
        element
    }

    /// Gets the annotation of a declared type at the minimum target version.
    pub fn annotation(&self, type_spec: &TypeSpec) -> Option<String> {
        self.config
            .type_resolver()
            .annotation(type_spec, self.config.min_version())
    }

    /// Renders a default value, the declared type acting as literal hint.
    pub fn render_default(&self, default: &DefaultValue, type_spec: Option<&TypeSpec>) -> String {
        match default {
            DefaultValue::Scalar(Scalar::Null) => NULL_LITERAL.to_owned(),
            DefaultValue::Scalar(Scalar::String(s)) if self.config.is_array_alias(s) => {
                self.empty_array()
            }
            DefaultValue::Scalar(Scalar::String(s))
                if s.trim().eq_ignore_ascii_case(NULL_LITERAL) =>
            {
                NULL_LITERAL.to_owned()
            }
            DefaultValue::Scalar(scalar) => {
                render_scalar_literal(scalar, type_spec.and_then(TypeSpec::single))
            }
            DefaultValue::Array(items) if items.is_empty() => self.empty_array(),
            DefaultValue::Array(items) => {
                let element_hint = type_spec.and_then(|type_spec| {
                    type_spec
                        .names()
                        .iter()
                        .find_map(|name| array_element_type(name))
                });
                render_array_literal(
                    items
                        .iter()
                        .map(|item| render_scalar_literal(item, element_hint)),
                    self.config.short_array_syntax(),
                )
            }
            DefaultValue::Expression(expression) => expression.clone(),
        }
    }

    fn empty_array(&self) -> String {
        render_array_literal(None, self.config.short_array_syntax())
    }
}
