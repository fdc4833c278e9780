//! Rust Forms Core Library
//!
//! This crate provides the core functionality for rust-forms, a tool that turns
//! the declared arguments of a command-line program into input controls and
//! turns the values entered into those controls back into a command line.
//!
//! # Key Features
//!
//! - **Argument Specifications**: Parse and validate YAML-based argument declarations
//! - **Components**: Positional, optional, flag, choice and counter inputs behind one type
//! - **Serialization**: Produce the exact tokens the program expects for every argument
//! - **Help Reflow**: Re-wrap help text on resize without flicker
//! - **Toolkit Interfaces**: Traits for the widget toolkit, plus an in-memory implementation
//! - **Error Handling**: Comprehensive error types for all failure modes
//!
//! # Examples
//!
//! Building a form and assembling its command line:
//!
//! ```no_run
//! use rust_forms_core::file_handling::get_program_definition;
//! use rust_forms_core::form::Form;
//! use rust_forms_core::toolkit::memory::MemoryToolkit;
//!
//! let program = get_program_definition("/home/me/.rust-forms/arguments.yml")?;
//! let mut form = Form::new(&program)?;
//! form.build(&mut MemoryToolkit)?;
//! println!("{}", form.command_line()?);
//! # Ok::<(), rust_forms_core::error::Error>(())
//! ```

pub mod argument_spec;
pub mod components;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod form;
pub mod reflow;
pub mod toolkit;
