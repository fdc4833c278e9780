//! File handling and validation for rust-forms definitions.
//!
//! This module provides functions for reading argument definitions and for
//! reading and writing the values entered last time, along with validation
//! of the declared arguments.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use indexmap::IndexMap;
use log::info;
use serde::{Deserialize, Serialize};

use crate::argument_spec::{ArgumentSpec, ProgramDefinition};
use crate::components::Variant;
use crate::error::Error::{EmptyChoices, EmptyDest, InvalidValue, MissingOptionStrings, NonUniqueDest};
use crate::error::{Error, Result};

/// Values entered for a program, keyed by argument dest.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct LastValues {
    pub program: Vec<String>,
    pub values: IndexMap<String, String>,
}

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Reads the values entered last time from disk.
///
/// Returns None if the file doesn't exist.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML
/// - The YAML doesn't match the expected structure
pub fn get_last_values(last_values_path: &str) -> Result<Option<LastValues>> {
    if !Path::new(last_values_path).exists() {
        return Ok(None);
    }

    let reader = get_reader("last values", last_values_path)?;

    serde_yaml::from_reader(reader).map(Some).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "last values".to_string(),
            last_values_path.to_string(),
            e,
        )
    })
}

/// Writes the entered values to disk for the next run.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be created or written to
/// - Serialization to YAML fails
pub fn write_last_values(path: &str, last_values: &LastValues) -> Result<()> {
    let f = File::create(path)
        .map_err(|e| Error::io_error("last values".to_string(), path.to_string(), e))?;

    serde_yaml::to_writer(f, last_values).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "last values".to_string(),
            path.to_string(),
            e,
        )
    })?;

    info!("Saved {} values to `{}`", last_values.values.len(), path);
    Ok(())
}

fn validate_argument(argument: &ArgumentSpec) -> Result<()> {
    if argument.dest.trim().is_empty() {
        return Err(EmptyDest);
    }

    // Switches and counters only exist as options
    let is_switch = matches!(
        argument.action.as_deref(),
        Some("store_true" | "store_false" | "store_const" | "count")
    );

    if is_switch && argument.option_strings.is_empty() {
        return Err(MissingOptionStrings(argument.dest.clone()));
    }

    if argument.choices.as_ref().is_some_and(Vec::is_empty) {
        return Err(EmptyChoices(argument.dest.clone()));
    }

    if let Some(default) = &argument.default {
        if !Variant::classify(argument).accepts(argument, default) {
            return Err(InvalidValue {
                dest: argument.dest.clone(),
                value: default.clone(),
            });
        }
    }

    Ok(())
}

fn validate_arguments(arguments: &[ArgumentSpec]) -> Result<()> {
    let mut dests = HashSet::new();

    for argument in arguments {
        validate_argument(argument)?;

        if !dests.insert(argument.dest.as_str()) {
            return Err(NonUniqueDest(argument.dest.clone()));
        }
    }

    Ok(())
}

/// Loads and validates a program definition.
///
/// # Errors
///
/// Returns an error if:
/// - The definition file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The program or the argument list is empty
/// - An argument has an empty or non-unique dest, or an empty list of choices
/// - A default does not fit the argument's control
///
/// # Examples
///
/// ```no_run
/// use rust_forms_core::file_handling::get_program_definition;
///
/// let program = get_program_definition("/home/me/.rust-forms/arguments.yml")?;
/// println!("Loaded {} arguments", program.arguments.len());
/// # Ok::<(), rust_forms_core::error::Error>(())
/// ```
pub fn get_program_definition(definition_path: &str) -> Result<ProgramDefinition> {
    let reader = get_reader("definition", definition_path)?;

    let program: ProgramDefinition = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "definition".to_string(),
            definition_path.to_string(),
            e,
        )
    })?;

    if program.program.is_empty() {
        return Err(Error::EmptyProgram {
            path: definition_path.to_string(),
        });
    }

    if program.arguments.is_empty() {
        return Err(Error::empty_argument_definition(definition_path.to_string()));
    }

    validate_arguments(&program.arguments)?;

    Ok(program)
}
