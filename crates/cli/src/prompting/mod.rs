//! Interactive value entry.
//!
//! Each component is prompted for in the way that suits its variant:
//! free text for positionals and options, yes/no for flags, a numbered
//! or fuzzy matched pick for choices and a level for counters.

// Export public items from submodules
pub mod input;
pub mod matching;
pub mod types;

// Re-exports for convenience
pub use input::{confirm_command_line, prompt_component};
pub use types::RunChoice;

/// Input that resets a choice or counter to "nothing selected"
pub const CLEAR_INPUT: &str = "-";
