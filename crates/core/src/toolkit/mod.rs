//! Interfaces to the widget toolkit that realizes a form.
//!
//! Components never draw anything themselves. They ask a [`Toolkit`] for
//! editable controls and wrapping help labels, and describe how those pieces
//! are arranged with a [`LayoutNode`] tree that the toolkit turns into real
//! containers.

pub mod memory;

use std::fmt::Debug;

/// Text value reported by a checked toggle.
pub const TOGGLE_CHECKED: &str = "true";
/// Text value reported by an unchecked toggle.
pub const TOGGLE_UNCHECKED: &str = "false";

/// Size of the container a form is laid out in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The shape of control a component asks the toolkit for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ControlKind<'a> {
    /// Free-text single line input.
    Text,
    /// Boolean check box.
    Toggle { checked: bool },
    /// Single selection drop down, showing `initial` until something is picked.
    Dropdown {
        choices: &'a [String],
        initial: &'a str,
    },
}

/// An editable control holding a scalar text value.
pub trait InputControl: Debug {
    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);

    /// Current rendered width.
    fn width(&self) -> u32;
}

/// A static, wrapping text label.
pub trait HelpAnnotation: Debug {
    fn text(&self) -> String;

    fn set_text(&mut self, text: &str);

    /// Re-wrap the current text so no line is wider than `width`.
    fn wrap(&mut self, width: u32);

    /// Current rendered width.
    fn width(&self) -> u32;
}

/// Factory for the controls a component needs.
pub trait Toolkit {
    fn create_control(&mut self, kind: ControlKind<'_>) -> Box<dyn InputControl>;

    fn create_help(&mut self, text: &str) -> Box<dyn HelpAnnotation>;
}

/// Declarative layout returned by a component build.
///
/// [`LayoutNode::Help`] and [`LayoutNode::Control`] stand for the widgets
/// owned by the component that produced the tree.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LayoutNode {
    Column(Vec<LayoutNode>),
    Row(Vec<LayoutNode>),
    Label { text: String, bold: bool },
    Note(String),
    Help,
    Control { expand: bool },
    /// Fixed gap.
    Spacer(u16),
    /// Flexible gap taking a share of the free space.
    Stretch(u16),
}
