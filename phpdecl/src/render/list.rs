use std::fmt::{Display, Formatter};

use itertools::Itertools;

use super::argument::ArgumentRenderer;
use crate::{config::RenderConfig, declaration::argument::Argument};

const MAX_INLINE_ARGUMENTS: usize = 4;

/// Layout of an argument list.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Layout {
    /// `()`
    Empty,
    /// `( $a )`
    Single,
    /// `($a, $b, $c)`
    Joined,
    /// One argument per line.
    OnePerLine,
}

impl Layout {
    /// Chooses the layout of a list of arguments.
    ///
    /// Two to four arguments stay on one line only when they are all bare names.
    pub fn choose(arguments: &[Argument]) -> Self {
        match arguments.len() {
            0 => Self::Empty,
            1 => Self::Single,
            2..=MAX_INLINE_ARGUMENTS if arguments.iter().all(Argument::is_plain) => Self::Joined,
            _ => Self::OnePerLine,
        }
    }
}

/// A rendered argument list, parentheses included.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ArgumentList {
    /// To be appended to the line under construction.
    Inline(String),
    /// The first line (the opening parenthesis) is appended to the line under construction, the
    /// other ones are complete lines, indentation included.
    Lines(Vec<String>),
}

impl ArgumentList {
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline(_))
    }

    pub fn into_lines(self) -> Vec<String> {
        match self {
            Self::Inline(line) => vec![line],
            Self::Lines(lines) => lines,
        }
    }
}

impl Display for ArgumentList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inline(line) => write!(f, "{}", line),
            Self::Lines(lines) => write!(f, "{}", lines.iter().join("\n")),
        }
    }
}

/// Renders argument lists, choosing their [Layout].
#[derive(Clone, Copy, Debug)]
pub struct ArgumentListRenderer<'c> {
    config: &'c RenderConfig,
    argument_renderer: ArgumentRenderer<'c>,
}

impl<'c> ArgumentListRenderer<'c> {
    pub fn new(config: &'c RenderConfig) -> Self {
        Self {
            config,
            argument_renderer: ArgumentRenderer::new(config),
        }
    }

    /// Renders `arguments` between parentheses.
    ///
    /// `base_indent` is the indentation of the line under construction, arguments laid out one
    /// per line get one more indentation level.
    pub fn render(&self, arguments: &[Argument], base_indent: &str) -> ArgumentList {
        let layout = Layout::choose(arguments);
        tracing::trace!(count = arguments.len(), ?layout, "argument list layout");
        match layout {
            Layout::Empty => ArgumentList::Inline("()".to_owned()),
            Layout::Single => ArgumentList::Inline(format!(
                "( {} )",
                self.argument_renderer.render(&arguments[0])
            )),
            Layout::Joined => ArgumentList::Inline(format!(
                "({})",
                arguments
                    .iter()
                    .map(|argument| self.argument_renderer.render(argument))
                    .join(", ")
            )),
            Layout::OnePerLine => {
                let indent = format!("{}{}", base_indent, self.config.indent_unit());
                let last = arguments.len() - 1;
                let mut lines = Vec::with_capacity(arguments.len() + 2);
                lines.push("(".to_owned());
                for (index, argument) in arguments.iter().enumerate() {
                    let separator = if index < last { "," } else { "" };
                    lines.push(format!(
                        "{}{}{}",
                        indent,
                        self.argument_renderer.render(argument),
                        separator
                    ));
                }
                lines.push(format!("{})", base_indent));
                ArgumentList::Lines(lines)
            }
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        declaration::{argument::PropertyBinding, spec::arguments},
        version::PhpVersion,
    };

    fn render(arguments: &[Argument]) -> ArgumentList {
        let config = RenderConfig::default();
        ArgumentListRenderer::new(&config).render(arguments, "    ")
    }

    #[test]
    fn should_render_empty_list() {
        assert_eq!(render(&[]), ArgumentList::Inline("()".to_owned()));
    }

    #[test]
    fn should_pad_single_argument() {
        let list = arguments(["x"]).unwrap();
        assert_eq!(render(&list), ArgumentList::Inline("( $x )".to_owned()));

        let mut typed = Argument::new("x").unwrap();
        typed.set_type("int").set_default(1_i64);
        assert_eq!(
            render(&[typed]),
            ArgumentList::Inline("( int $x = 1 )".to_owned())
        );
    }

    #[test]
    fn should_join_bare_names_without_padding() {
        let list = arguments(["a", "b", "c"]).unwrap();
        assert_eq!(render(&list), ArgumentList::Inline("($a, $b, $c)".to_owned()));

        let list = arguments(["a", "b", "c", "d"]).unwrap();
        assert_eq!(
            render(&list),
            ArgumentList::Inline("($a, $b, $c, $d)".to_owned())
        );
    }

    #[test]
    fn should_break_typed_lists() {
        let mut list = arguments(["a", "b"]).unwrap();
        list[1].set_type("string");
        assert_eq!(
            render(&list),
            ArgumentList::Lines(vec![
                "(".to_owned(),
                "        $a,".to_owned(),
                "        string $b".to_owned(),
                "    )".to_owned(),
            ])
        );
    }

    #[test]
    fn should_break_lists_with_references_or_bindings() {
        let mut list = arguments(["a", "b"]).unwrap();
        list[0].set_by_reference(true);
        assert_eq!(Layout::choose(&list), Layout::OnePerLine);

        let mut list = arguments(["a", "b"]).unwrap();
        list[0].set_property_binding(PropertyBinding::After);
        assert_eq!(Layout::choose(&list), Layout::OnePerLine);
    }

    #[test]
    fn should_break_long_lists() {
        let mut list = arguments(["a", "b", "c", "d", "e", "f"]).unwrap();
        list[2].set_default(3_i64);
        let lines = render(&list).into_lines();
        assert_eq!(
            lines,
            [
                "(",
                "        $a,",
                "        $b,",
                "        $c = 3,",
                "        $d,",
                "        $e,",
                "        $f",
                "    )",
            ]
        );

        let bare = arguments(["a", "b", "c", "d", "e"]).unwrap();
        assert_eq!(Layout::choose(&bare), Layout::OnePerLine);
    }

    #[test]
    fn should_use_configured_indent_unit() {
        let config = RenderConfig::new(PhpVersion::at(8, 0)).with_indent_unit("\t");
        let mut list = arguments(["a", "b"]).unwrap();
        list[0].set_type("int");
        let rendered = ArgumentListRenderer::new(&config).render(&list, "\t");
        assert_eq!(rendered.to_string(), "(\n\t\tint $a,\n\t\t$b\n\t)");
        assert!(!rendered.is_inline());
    }
}
