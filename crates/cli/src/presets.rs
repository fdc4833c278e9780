//! Values given on the command line with `-p dest=value`.

use indexmap::IndexMap;
use rust_forms_core::argument_spec::ProgramDefinition;
use rust_forms_core::components::Variant;
use rust_forms_core::error::Error::{InvalidValue, UnknownDest, ValueFormat};
use rust_forms_core::error::Result;

/// Parse `dest=value` pairs, checking every dest is declared by `program`.
///
/// Only the first `=` separates the dest, so values may contain `=`.
/// Later pairs for the same dest replace earlier ones.
///
/// # Errors
///
/// Returns [`ValueFormat`] for a pair without `=` or with an empty dest,
/// [`UnknownDest`] for a dest the program does not declare and
/// [`InvalidValue`] for a value the argument's control cannot hold, such as
/// an undeclared choice or a level the counter does not offer.
pub fn parse_presets(
    program: &ProgramDefinition,
    named_values: &[String],
) -> Result<IndexMap<String, String>> {
    let mut presets = IndexMap::new();

    for named_value in named_values {
        let Some((dest, value)) = named_value.split_once('=') else {
            return Err(ValueFormat(named_value.clone()));
        };

        if dest.is_empty() {
            return Err(ValueFormat(named_value.clone()));
        }

        let Some(argument) = program.arguments.iter().find(|argument| argument.dest == dest) else {
            return Err(UnknownDest(dest.to_string()));
        };

        if !Variant::classify(argument).accepts(argument, value) {
            return Err(InvalidValue {
                dest: dest.to_string(),
                value: value.to_string(),
            });
        }

        presets.insert(dest.to_string(), value.to_string());
    }

    Ok(presets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_forms_core::argument_spec::ArgumentSpec;

    fn program() -> ProgramDefinition {
        ProgramDefinition {
            program: vec!["tool".to_string()],
            description: None,
            arguments: vec![
                ArgumentSpec {
                    dest: "output".to_string(),
                    option_strings: vec!["--output".to_string()],
                    ..ArgumentSpec::default()
                },
                ArgumentSpec {
                    dest: "query".to_string(),
                    ..ArgumentSpec::default()
                },
                ArgumentSpec {
                    dest: "mode".to_string(),
                    option_strings: vec!["--mode".to_string()],
                    choices: Some(vec!["a".to_string(), "b".to_string()]),
                    ..ArgumentSpec::default()
                },
                ArgumentSpec {
                    dest: "verbose".to_string(),
                    option_strings: vec!["-v".to_string()],
                    action: Some("count".to_string()),
                    ..ArgumentSpec::default()
                },
                ArgumentSpec {
                    dest: "force".to_string(),
                    option_strings: vec!["--force".to_string()],
                    action: Some("store_true".to_string()),
                    ..ArgumentSpec::default()
                },
            ],
        }
    }

    #[test]
    fn test_parse_presets() {
        let presets = parse_presets(
            &program(),
            &["output=a.txt".to_string(), "query=name=value".to_string()],
        )
        .unwrap();

        assert_eq!(presets.get("output").map(String::as_str), Some("a.txt"));
        assert_eq!(presets.get("query").map(String::as_str), Some("name=value"));
    }

    #[test]
    fn test_later_preset_wins() {
        let presets = parse_presets(
            &program(),
            &["output=a.txt".to_string(), "output=b.txt".to_string()],
        )
        .unwrap();

        assert_eq!(presets.len(), 1);
        assert_eq!(presets.get("output").map(String::as_str), Some("b.txt"));
    }

    #[test]
    fn test_missing_equals_sign() {
        let result = parse_presets(&program(), &["output".to_string()]);
        assert!(matches!(result, Err(ValueFormat(_))));

        let result = parse_presets(&program(), &["=value".to_string()]);
        assert!(matches!(result, Err(ValueFormat(_))));
    }

    #[test]
    fn test_unknown_dest() {
        let result = parse_presets(&program(), &["missing=1".to_string()]);
        assert!(matches!(result, Err(UnknownDest(dest)) if dest == "missing"));
    }

    #[test]
    fn test_values_must_fit_the_control() {
        let presets = parse_presets(
            &program(),
            &[
                "mode=b".to_string(),
                "verbose=2".to_string(),
                "force=true".to_string(),
            ],
        )
        .unwrap();
        assert_eq!(presets.len(), 3);

        for named_value in ["mode=zzz", "verbose=7", "verbose=9223372036854775807", "force=yes"] {
            let (dest, value) = named_value.split_once('=').unwrap();
            let result = parse_presets(&program(), &[named_value.to_string()]);
            assert!(
                matches!(&result, Err(InvalidValue { dest: d, value: v }) if d == dest && v == value),
                "{named_value} was accepted"
            );
        }
    }
}
