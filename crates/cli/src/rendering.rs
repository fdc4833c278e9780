//! Draws component layouts in the terminal.
//!
//! Fixed and flexible spacers only matter to pixel based toolkits, in the
//! terminal every leaf simply takes its own lines.

use std::io::Write;

use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{queue, terminal};
use log::debug;
use rust_forms_core::components::{Component, Variant};
use rust_forms_core::error::Result;
use rust_forms_core::toolkit::{LayoutNode, Size, TOGGLE_CHECKED};

/// Gap between the pieces of a row, in cells.
const ROW_GAP: usize = 2;

/// Used when there is no terminal to measure.
pub const FALLBACK_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Size to lay the form out in: `width` if given, otherwise the terminal's.
#[must_use]
pub fn form_size(width: Option<u32>) -> Size {
    if let Some(width) = width {
        return Size::new(width, FALLBACK_SIZE.height);
    }

    match terminal::size() {
        Ok((columns, rows)) if columns > 0 => Size::new(u32::from(columns), u32::from(rows)),
        Ok(_) => {
            debug!("Terminal reports no columns, using {:?}", FALLBACK_SIZE);
            FALLBACK_SIZE
        }
        Err(e) => {
            debug!("Could not measure the terminal ({}), using {:?}", e, FALLBACK_SIZE);
            FALLBACK_SIZE
        }
    }
}

/// Short text standing for the current state of a component's control.
///
/// # Errors
///
/// Returns an error if the component has not been built.
pub fn control_display(component: &Component<'_>) -> Result<String> {
    let value = component.control()?.value();

    Ok(match component.variant() {
        Variant::Flag if value == TOGGLE_CHECKED => "[x]".to_string(),
        Variant::Flag => "[ ]".to_string(),
        Variant::Choice | Variant::Counter => format!("[{value} v]"),
        Variant::Positional | Variant::Optional => format!("> {value}"),
    })
}

fn help_lines(component: &Component<'_>) -> Result<Vec<String>> {
    Ok(component
        .help()?
        .map(|help| help.text().lines().map(ToString::to_string).collect::<Vec<_>>())
        .unwrap_or_default())
}

fn print_help_line<W: Write>(out: &mut W, prefix: &str, line: &str) -> Result<()> {
    queue!(
        out,
        Print(prefix),
        SetForegroundColor(Color::DarkGrey),
        Print(line),
        ResetColor,
        Print("\n")
    )?;
    Ok(())
}

fn render_row<W: Write>(out: &mut W, component: &Component<'_>, children: &[LayoutNode]) -> Result<()> {
    let mut prefix = String::new();
    let mut lines = Vec::new();

    for child in children {
        match child {
            LayoutNode::Control { .. } => prefix.push_str(&control_display(component)?),
            LayoutNode::Spacer(_) => prefix.push_str(&" ".repeat(ROW_GAP)),
            LayoutNode::Help => lines.extend(help_lines(component)?),
            LayoutNode::Label { text, .. } | LayoutNode::Note(text) => prefix.push_str(text),
            LayoutNode::Column(_) | LayoutNode::Row(_) | LayoutNode::Stretch(_) => {}
        }
    }

    if lines.is_empty() {
        queue!(out, Print(prefix), Print("\n"))?;
        return Ok(());
    }

    let indent = " ".repeat(prefix.chars().count());
    for (index, line) in lines.iter().enumerate() {
        let line_prefix = if index == 0 { prefix.as_str() } else { indent.as_str() };
        print_help_line(out, line_prefix, line)?;
    }

    Ok(())
}

fn render_node<W: Write>(out: &mut W, component: &Component<'_>, node: &LayoutNode) -> Result<()> {
    match node {
        LayoutNode::Column(children) => {
            for child in children {
                render_node(out, component, child)?;
            }
        }
        LayoutNode::Row(children) => render_row(out, component, children)?,
        LayoutNode::Label { text, bold } => {
            if *bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(out, Print(text), SetAttribute(Attribute::Reset), Print("\n"))?;
        }
        LayoutNode::Note(text) => {
            queue!(
                out,
                SetForegroundColor(Color::Yellow),
                Print(text),
                ResetColor,
                Print("\n")
            )?;
        }
        LayoutNode::Help => {
            for line in help_lines(component)? {
                print_help_line(out, "", &line)?;
            }
        }
        LayoutNode::Control { .. } => {
            let shown = control_display(component)?;
            queue!(out, Print(shown), Print("\n"))?;
        }
        LayoutNode::Spacer(_) | LayoutNode::Stretch(_) => {}
    }

    Ok(())
}

/// Draw `layout`, the layout returned when `component` was built.
///
/// # Errors
///
/// Returns an error if writing fails or the component has not been built.
pub fn render_component<W: Write>(
    out: &mut W,
    component: &Component<'_>,
    layout: &LayoutNode,
) -> Result<()> {
    render_node(out, component, layout)?;
    queue!(out, Print("\n"))?;
    out.flush()?;
    Ok(())
}
