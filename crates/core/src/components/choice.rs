//! Options restricted to an enumerated set of values.

use super::preferred_option;
use crate::argument_spec::ArgumentSpec;
use crate::error::Result;
use crate::toolkit::{ControlKind, InputControl};

/// Shown until a value is picked. Never one of the choices.
pub const DEFAULT_SENTINEL: &str = "Select Option";

pub(crate) fn control_kind(spec: &ArgumentSpec) -> ControlKind<'_> {
    ControlKind::Dropdown {
        choices: spec.choices.as_deref().unwrap_or_default(),
        initial: DEFAULT_SENTINEL,
    }
}

/// Nothing selected, or one of the declared choices.
pub(crate) fn accepts(spec: &ArgumentSpec, value: &str) -> bool {
    value == DEFAULT_SENTINEL
        || spec
            .choices
            .as_ref()
            .is_some_and(|choices| choices.iter().any(|choice| choice == value))
}

/// Empty while nothing is selected, otherwise `<preferred spelling> <choice>`.
pub(crate) fn serialize(spec: &ArgumentSpec, control: &dyn InputControl) -> Result<String> {
    let selected = control.value();
    if selected == DEFAULT_SENTINEL {
        return Ok(String::new());
    }

    Ok(format!("{} {}", preferred_option(spec)?, selected))
}

#[cfg(test)]
mod tests {
    use super::DEFAULT_SENTINEL;
    use crate::components::test_support::spec;
    use crate::components::{Component, Variant};
    use crate::toolkit::memory::MemoryToolkit;

    fn mode_spec() -> crate::argument_spec::ArgumentSpec {
        let mut mode = spec("mode", &["-m", "--mode"]);
        mode.choices = Some(vec!["a".to_string(), "b".to_string()]);
        mode
    }

    #[test]
    fn test_no_selection_is_omitted() {
        let mode = mode_spec();
        let mut component = Component::new(Variant::Choice, &mode).unwrap();
        component.build(&mut MemoryToolkit).unwrap();

        assert_eq!(component.control().unwrap().value(), DEFAULT_SENTINEL);
        assert_eq!(component.serialize().unwrap(), "");
    }

    #[test]
    fn test_selection_uses_last_spelling() {
        let mode = mode_spec();
        let mut component = Component::new(Variant::Choice, &mode).unwrap();
        component.build(&mut MemoryToolkit).unwrap();
        component.control_mut().unwrap().set_value("b");

        let serialized = component.serialize().unwrap();
        assert_eq!(serialized, "--mode b");
        assert!(serialized.starts_with("--mode"));
    }

    #[test]
    fn test_sentinel_is_not_a_choice() {
        let mode = mode_spec();
        assert!(!mode
            .choices
            .unwrap()
            .iter()
            .any(|choice| choice == DEFAULT_SENTINEL));
    }

    #[test]
    fn test_default_preselects_choice() {
        let mut mode = mode_spec();
        mode.default = Some("a".to_string());
        let mut component = Component::new(Variant::Choice, &mode).unwrap();
        component.build(&mut MemoryToolkit).unwrap();

        assert_eq!(component.serialize().unwrap(), "--mode a");
    }
}
