//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::Parser;
use rust_forms_core::components::{CounterJoin, FlagMode, SerializeOptions};

/// Command-line arguments for the rust-forms CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use rust_forms_cli::cli_args::Args;
///
/// let args = Args::parse_from(["rf", "--dry-run"]);
/// assert!(args.dry_run);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Path to the argument definition YAML of the program to fill in.
    ///
    /// If not provided, defaults to `~/.rust-forms/arguments.yml`.
    #[arg(long, short = 'c')]
    pub definition_path: Option<String>,

    /// Path to the file that stores the values entered last time.
    ///
    /// If not provided, defaults to `~/.rust-forms/last_values.yml`.
    #[arg(long, short = 'l')]
    pub last_values_path: Option<String>,

    /// Show the form and the command line it currently produces, without
    /// prompting for anything or saving values.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// Accept the assembled command line without asking for confirmation.
    #[arg(long, short = 'f', action)]
    pub force: bool,

    /// Skip saving the entered values for the next run.
    #[arg(long, short = 's', action)]
    pub skip_value_save: bool,

    /// Always emit flags, whether they are checked or not.
    #[arg(long, action)]
    pub legacy_flags: bool,

    /// Separate repeated counter options with spaces (`-v -v` instead of `-v-v`).
    #[arg(long, action)]
    pub spaced_counters: bool,

    /// Width used to wrap help text. Defaults to the terminal width.
    #[arg(long, short = 'w')]
    pub width: Option<u32>,

    /// Preset values in the format dest=value.
    ///
    /// Multiple values can be provided with repeated `-p` flags.
    ///
    /// # Examples
    /// ```bash
    /// rf -p output=small.png -p verbose=2
    /// ```
    #[arg(long = "value", short = 'p', action = clap::ArgAction::Append)]
    pub values: Vec<String>,
}

impl Args {
    #[must_use]
    pub fn serialize_options(&self) -> SerializeOptions {
        SerializeOptions {
            flag_mode: if self.legacy_flags {
                FlagMode::Always
            } else {
                FlagMode::WhenChecked
            },
            counter_join: if self.spaced_counters {
                CounterJoin::Spaced
            } else {
                CounterJoin::Concatenate
            },
        }
    }
}
