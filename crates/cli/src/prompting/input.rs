use std::io::{BufRead, Write};

use itertools::Itertools;
use rust_forms_core::components::counter::MAX_LEVEL;
use rust_forms_core::components::{Component, Variant, DEFAULT_SENTINEL};
use rust_forms_core::error::Error::InputClosed;
use rust_forms_core::error::Result;
use rust_forms_core::toolkit::{TOGGLE_CHECKED, TOGGLE_UNCHECKED};

use super::matching::match_choice;
use super::types::RunChoice;
use super::CLEAR_INPUT;

/// Prints `prompt` and reads one trimmed line.
fn read_answer<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputClosed);
    }

    Ok(line.trim().to_string())
}

fn prompt_text<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &str,
    required: bool,
) -> Result<String> {
    loop {
        let prompt = if current.is_empty() {
            format!("Value for {label}: ")
        } else {
            format!("Value for {label} [{current}]: ")
        };

        let answer = read_answer(input, output, &prompt)?;

        if !answer.is_empty() {
            return Ok(answer);
        }

        if !current.is_empty() || !required {
            return Ok(current.to_string());
        }

        // No input and nothing to fall back on - ask again
    }
}

fn prompt_flag<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &str,
) -> Result<String> {
    let checked = current == TOGGLE_CHECKED;
    let options = if checked { "[Y/n]" } else { "[y/N]" };

    loop {
        let answer = read_answer(input, output, &format!("Enable {label}? {options}: "))?;

        match answer.to_lowercase().as_str() {
            "" => return Ok(current.to_string()),
            "y" | "yes" => return Ok(TOGGLE_CHECKED.to_string()),
            "n" | "no" => return Ok(TOGGLE_UNCHECKED.to_string()),
            _ => {}
        }
    }
}

fn prompt_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &str,
    choices: &[String],
) -> Result<String> {
    let listing = choices
        .iter()
        .enumerate()
        .map(|(index, choice)| format!("{}) {choice}", index + 1))
        .join("  ");

    loop {
        writeln!(output, "{listing}")?;
        let answer = read_answer(input, output, &format!("Choice for {label} [{current}]: "))?;

        if answer.is_empty() {
            return Ok(current.to_string());
        }

        if answer == CLEAR_INPUT {
            return Ok(DEFAULT_SENTINEL.to_string());
        }

        match match_choice(choices, &answer) {
            Some(choice) => return Ok(choice.to_string()),
            None => writeln!(output, "No choice matches `{answer}`")?,
        }
    }
}

fn prompt_counter<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &str,
) -> Result<String> {
    let shown = if current.is_empty() { "none" } else { current };

    loop {
        let answer = read_answer(
            input,
            output,
            &format!("Level for {label} (1-{MAX_LEVEL}, {CLEAR_INPUT} for none) [{shown}]: "),
        )?;

        if answer.is_empty() {
            return Ok(current.to_string());
        }

        if answer == CLEAR_INPUT {
            return Ok(String::new());
        }

        match answer.parse::<u8>() {
            Ok(level) if (1..=MAX_LEVEL).contains(&level) => return Ok(level.to_string()),
            _ => writeln!(output, "Pick a level between 1 and {MAX_LEVEL}")?,
        }
    }
}

/// Prompts for a new value of `component` and stores it in its control.
///
/// An empty answer keeps the current value. Positionals that have to be
/// given are asked for until they have a value.
///
/// # Errors
///
/// Returns an error if the component has not been built, or if reading or
/// writing fails, including the input being closed.
pub fn prompt_component<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    component: &mut Component<'_>,
) -> Result<()> {
    let label = component.label();
    let current = component.control()?.value();
    let spec = component.spec();

    let value = match component.variant() {
        Variant::Positional => {
            let required = matches!(spec.nargs.as_deref(), None | Some("+"));
            prompt_text(input, output, &label, &current, required)?
        }
        Variant::Optional => prompt_text(input, output, &label, &current, false)?,
        Variant::Flag => prompt_flag(input, output, &label, &current)?,
        Variant::Choice => prompt_choice(
            input,
            output,
            &label,
            &current,
            spec.choices.as_deref().unwrap_or_default(),
        )?,
        Variant::Counter => prompt_counter(input, output, &label, &current)?,
    };

    component.control_mut()?.set_value(&value);
    Ok(())
}

/// Confirms with the user whether the assembled command line is final
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn confirm_command_line<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<RunChoice> {
    loop {
        let answer = read_answer(
            input,
            output,
            "Use this command line? ([Y]es/[n]o/[c]hange values): ",
        )?;

        match answer.to_lowercase().as_str() {
            "" | "y" => return Ok(RunChoice::Yes),
            "n" => return Ok(RunChoice::No),
            "c" => return Ok(RunChoice::ChangeValues),
            _ => {}
        }
    }
}
