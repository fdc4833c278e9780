//! Rust Forms CLI Library
//!
//! This crate provides the terminal front end for rust-forms. It loads an
//! argument definition, shows a form with one component per argument, asks
//! for values and prints the command line they make up.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`presets`]: Values passed on the command line as `dest=value`
//! - [`prompting`]: Interactive value entry and confirmation
//! - [`rendering`]: Drawing component layouts in the terminal
//!
//! # Examples
//!
//! ```bash
//! # Fill in the program described by ~/.rust-forms/arguments.yml
//! rf
//!
//! # Use another definition and preset some values
//! rf -c convert.yml -p output=small.png -p verbose=2
//!
//! # Only show the form and the command line it produces
//! rf --dry-run
//! ```

pub mod cli_args;
pub mod presets;
pub mod prompting;
pub mod rendering;
