//! Character cell toolkit kept entirely in memory.
//!
//! Widths are measured in characters, which is what a terminal front end
//! needs, and it also makes the toolkit handy for tests.

use super::{ControlKind, HelpAnnotation, InputControl, Toolkit, TOGGLE_CHECKED, TOGGLE_UNCHECKED};

#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryToolkit;

impl Toolkit for MemoryToolkit {
    fn create_control(&mut self, kind: ControlKind<'_>) -> Box<dyn InputControl> {
        match kind {
            ControlKind::Text => Box::new(TextInput::default()),
            ControlKind::Toggle { checked } => Box::new(Toggle { checked }),
            ControlKind::Dropdown { choices, initial } => Box::new(Dropdown {
                choices: choices.to_vec(),
                value: initial.to_string(),
            }),
        }
    }

    fn create_help(&mut self, text: &str) -> Box<dyn HelpAnnotation> {
        Box::new(WrappingText::new(text))
    }
}

fn char_width(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}

#[derive(Debug, Default, Clone)]
pub struct TextInput {
    value: String,
}

impl InputControl for TextInput {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn width(&self) -> u32 {
        char_width(&self.value)
    }
}

#[derive(Debug, Default, Clone)]
pub struct Toggle {
    checked: bool,
}

impl InputControl for Toggle {
    fn value(&self) -> String {
        if self.checked {
            TOGGLE_CHECKED.to_string()
        } else {
            TOGGLE_UNCHECKED.to_string()
        }
    }

    fn set_value(&mut self, value: &str) {
        self.checked = value.trim().eq_ignore_ascii_case(TOGGLE_CHECKED);
    }

    fn width(&self) -> u32 {
        // "[x]"
        3
    }
}

/// Editable drop down: the list offers `choices` but any text can be set.
#[derive(Debug, Default, Clone)]
pub struct Dropdown {
    choices: Vec<String>,
    value: String,
}

impl InputControl for Dropdown {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn width(&self) -> u32 {
        self.choices
            .iter()
            .map(|choice| char_width(choice))
            .chain(std::iter::once(char_width(&self.value)))
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Default, Clone)]
pub struct WrappingText {
    text: String,
}

impl WrappingText {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl HelpAnnotation for WrappingText {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn wrap(&mut self, width: u32) {
        self.text = wrap_text(&self.text, width as usize);
    }

    fn width(&self) -> u32 {
        self.text.lines().map(char_width).max().unwrap_or(0)
    }
}

/// Greedy word wrap. Existing line breaks are kept and words longer than
/// `width` get a line of their own.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();

    for source_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in source_line.split_whitespace() {
            let word_width = word.chars().count();

            if current_width > 0 && current_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }

            current.push_str(word);
            current_width += word_width;
        }

        lines.push(current);
    }

    lines.join("\n")
}
