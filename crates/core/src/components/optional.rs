//! Key/value options, e.g. `--outfile myfile.txt`.

use super::preferred_option;
use crate::argument_spec::ArgumentSpec;
use crate::error::Result;
use crate::toolkit::{ControlKind, InputControl};

pub(crate) fn control_kind() -> ControlKind<'static> {
    ControlKind::Text
}

/// `<preferred spelling> <value>`. The value is neither trimmed nor checked.
pub(crate) fn serialize(spec: &ArgumentSpec, control: &dyn InputControl) -> Result<String> {
    Ok(format!("{} {}", preferred_option(spec)?, control.value()))
}

#[cfg(test)]
mod tests {
    use crate::components::test_support::spec;
    use crate::components::{Component, Variant};
    use crate::toolkit::memory::MemoryToolkit;

    #[test]
    fn test_long_spelling_is_preferred() {
        let output = spec("output", &["-o", "--output"]);
        let mut component = Component::new(Variant::Optional, &output).unwrap();
        component.build(&mut MemoryToolkit).unwrap();
        component.control_mut().unwrap().set_value("file.txt");

        assert_eq!(component.serialize().unwrap(), "--output file.txt");
    }

    #[test]
    fn test_value_is_not_trimmed() {
        let output = spec("output", &["-o"]);
        let mut component = Component::new(Variant::Optional, &output).unwrap();
        component.build(&mut MemoryToolkit).unwrap();

        assert_eq!(component.serialize().unwrap(), "-o ");

        component.control_mut().unwrap().set_value(" a b ");
        assert_eq!(component.serialize().unwrap(), "-o  a b ");
    }

    #[test]
    fn test_output_starts_with_last_spelling() {
        for spellings in [vec!["-x"], vec!["-x", "--extra"], vec!["-x", "--ex", "--extra-long"]] {
            let extra = spec("extra", &spellings);
            let mut component = Component::new(Variant::Optional, &extra).unwrap();
            component.build(&mut MemoryToolkit).unwrap();
            component.control_mut().unwrap().set_value("value");

            let serialized = component.serialize().unwrap();
            assert!(serialized.starts_with(spellings[spellings.len() - 1]));
        }
    }
}
