//! Configuration path utilities for rust-forms.
//!
//! This module provides functions for resolving configuration file paths
//! and expanding shell variables like `~` in paths.

/// Default path for the argument definition file
const DEFAULT_DEFINITION_PATH: &str = "~/.rust-forms/arguments.yml";
/// Default path for storing the values entered last time
const DEFAULT_LAST_VALUES_PATH: &str = "~/.rust-forms/last_values.yml";

fn resolve(path_arg: Option<&str>, default: &str) -> String {
    shellexpand::tilde(path_arg.unwrap_or(default)).to_string()
}

/// Resolves the argument definition file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// definition path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use rust_forms_core::config::get_definition_path;
///
/// // Use default path
/// let default_path = get_definition_path(None);
///
/// // Use custom path
/// let custom_path = get_definition_path(Some("/path/to/arguments.yml"));
/// assert_eq!(custom_path, "/path/to/arguments.yml");
/// ```
#[must_use]
pub fn get_definition_path(definition_path_arg: Option<&str>) -> String {
    resolve(definition_path_arg, DEFAULT_DEFINITION_PATH)
}

/// Resolves the last values file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// last values path. Shell expansions like `~` are resolved.
#[must_use]
pub fn get_last_values_path(last_values_path_arg: Option<&str>) -> String {
    resolve(last_values_path_arg, DEFAULT_LAST_VALUES_PATH)
}
