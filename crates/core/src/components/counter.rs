//! Repeat-count options such as `-vvv`.
//!
//! An unset or unparseable count leaves the argument out instead of failing
//! the whole command line.

use log::warn;

use super::CounterJoin;
use crate::argument_spec::ArgumentSpec;
use crate::error::Error::MissingOptionStrings;
use crate::error::{Error, Result};
use crate::toolkit::{ControlKind, InputControl};

/// Highest count offered by the drop down.
pub const MAX_LEVEL: u8 = 6;

pub(crate) fn control_kind() -> ControlKind<'static> {
    ControlKind::Dropdown {
        choices: levels(),
        initial: "",
    }
}

fn levels() -> &'static [String] {
    static LEVELS: std::sync::OnceLock<Vec<String>> = std::sync::OnceLock::new();
    LEVELS.get_or_init(|| (1..=MAX_LEVEL).map(|level| level.to_string()).collect())
}

/// Unset, or one of the levels the drop down offers.
pub(crate) fn accepts(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.parse::<u8>().is_ok_and(|level| (1..=MAX_LEVEL).contains(&level))
}

pub(crate) fn serialize(
    spec: &ArgumentSpec,
    control: &dyn InputControl,
    join: CounterJoin,
) -> Result<String> {
    let option = spec
        .short_option()
        .ok_or_else(|| MissingOptionStrings(spec.dest.clone()))?;

    let value = control.value();
    let count = match value.trim().parse::<i64>() {
        Ok(count) if count <= 0 => return Ok(String::new()),
        Ok(count) if count > i64::from(MAX_LEVEL) => {
            warn!("Leaving out {}: count {} is above {}", spec, count, MAX_LEVEL);
            return Ok(String::new());
        }
        Ok(count) => usize::try_from(count).unwrap_or_default(),
        Err(e) => {
            warn!("Leaving out {}: {}", spec, Error::value_parse(&value, e));
            return Ok(String::new());
        }
    };

    let separator = match join {
        CounterJoin::Concatenate => "",
        CounterJoin::Spaced => " ",
    };

    Ok(vec![option; count].join(separator))
}

#[cfg(test)]
mod tests {
    use crate::components::test_support::spec;
    use crate::components::{Component, CounterJoin, SerializeOptions, Variant};
    use crate::toolkit::memory::MemoryToolkit;

    fn built_counter(value: &str) -> String {
        let verbose = spec("verbose", &["-v"]);
        let mut component = Component::new(Variant::Counter, &verbose).unwrap();
        component.build(&mut MemoryToolkit).unwrap();
        component.control_mut().unwrap().set_value(value);
        component.serialize().unwrap()
    }

    #[test]
    fn test_repeats_short_option_without_separator() {
        assert_eq!(built_counter("3"), "-v-v-v");
        assert_eq!(built_counter("1"), "-v");
        assert_eq!(built_counter(" 2 "), "-v-v");
    }

    #[test]
    fn test_unset_counter_is_omitted() {
        let verbose = spec("verbose", &["-v"]);
        let mut component = Component::new(Variant::Counter, &verbose).unwrap();
        component.build(&mut MemoryToolkit).unwrap();

        assert_eq!(component.control().unwrap().value(), "");
        assert_eq!(component.serialize().unwrap(), "");
    }

    #[test]
    fn test_garbage_and_non_positive_counts_are_omitted() {
        assert_eq!(built_counter("lots"), "");
        assert_eq!(built_counter("2.5"), "");
        assert_eq!(built_counter("0"), "");
        assert_eq!(built_counter("-3"), "");
    }

    #[test]
    fn test_counts_above_the_highest_level_are_omitted() {
        assert_eq!(built_counter("6"), "-v-v-v-v-v-v");
        assert_eq!(built_counter("7"), "");
        assert_eq!(built_counter("9223372036854775807"), "");
        assert_eq!(built_counter("99999999999999999999"), "");
    }

    #[test]
    fn test_accepts_only_offered_levels() {
        assert!(super::accepts(""));
        assert!(super::accepts("1"));
        assert!(super::accepts(" 6 "));
        assert!(!super::accepts("0"));
        assert!(!super::accepts("7"));
        assert!(!super::accepts("-1"));
        assert!(!super::accepts("many"));
    }

    #[test]
    fn test_first_spelling_is_repeated() {
        let verbose = spec("verbose", &["-v", "--verbose"]);
        let mut component = Component::new(Variant::Counter, &verbose).unwrap();
        component.build(&mut MemoryToolkit).unwrap();
        component.control_mut().unwrap().set_value("2");

        assert_eq!(component.serialize().unwrap(), "-v-v");
    }

    #[test]
    fn test_spaced_join() {
        let verbose = spec("verbose", &["-v"]);
        let mut component = Component::new(Variant::Counter, &verbose).unwrap();
        component.build(&mut MemoryToolkit).unwrap();
        component.control_mut().unwrap().set_value("3");

        let options = SerializeOptions {
            counter_join: CounterJoin::Spaced,
            ..SerializeOptions::default()
        };
        assert_eq!(component.serialize_with(options).unwrap(), "-v -v -v");
    }

    #[test]
    fn test_dropdown_offers_one_to_six() {
        assert_eq!(
            super::levels(),
            ["1", "2", "3", "4", "5", "6"].map(String::from).as_slice()
        );
    }
}
