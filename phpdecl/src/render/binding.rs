//! Statements mirroring arguments into class properties.

use crate::{
    declaration::argument::{Argument, PropertyBinding},
    naming::apply_variable_sigil,
};

/// Renders the property assignments of the arguments bound with `mode`.
///
/// Next-slot arguments append to their array property instead of replacing it. Nothing is
/// rendered for [PropertyBinding::None].
pub fn render_property_bindings(arguments: &[Argument], mode: PropertyBinding) -> Vec<String> {
    if mode == PropertyBinding::None {
        return Vec::new();
    }
    arguments
        .iter()
        .filter(|argument| argument.property_binding() == mode)
        .map(|argument| {
            let slot = if argument.is_next_slot() { "[]" } else { "" };
            format!(
                "$this->{}{} = {};",
                argument.name(),
                slot,
                apply_variable_sigil(argument.name())
            )
        })
        .collect()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::declaration::spec::arguments;

    #[test]
    fn should_render_bindings_by_mode() {
        let mut list = arguments(["id", "tag", "name", "unbound"]).unwrap();
        list[0].set_property_binding(PropertyBinding::Before);
        list[1].set_type("string[]");
        list[1].set_next_slot(true).set_property_binding(true);
        list[2].set_property_binding(PropertyBinding::After);

        assert_eq!(
            render_property_bindings(&list, PropertyBinding::Before),
            ["$this->id = $id;", "$this->tag[] = $tag;"]
        );
        assert_eq!(
            render_property_bindings(&list, PropertyBinding::After),
            ["$this->name = $name;"]
        );
        assert!(render_property_bindings(&list, PropertyBinding::None).is_empty());
    }
}
