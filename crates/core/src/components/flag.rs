//! Boolean switches, e.g. `--verbose`.
//!
//! A check box reads better next to its description than above it, so when
//! there is help text the toggle and the text share one row.

use super::{preferred_option, FlagMode, ONE_OR_MORE_NOTE};
use crate::argument_spec::ArgumentSpec;
use crate::error::Result;
use crate::toolkit::{ControlKind, InputControl, LayoutNode, TOGGLE_CHECKED, TOGGLE_UNCHECKED};

pub(crate) fn control_kind(spec: &ArgumentSpec) -> ControlKind<'static> {
    let checked = spec
        .default
        .as_deref()
        .is_some_and(|default| default.eq_ignore_ascii_case(TOGGLE_CHECKED));
    ControlKind::Toggle { checked }
}

/// The text values a toggle understands.
pub(crate) fn accepts(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case(TOGGLE_CHECKED) || value.eq_ignore_ascii_case(TOGGLE_UNCHECKED)
}

pub(crate) fn layout(spec: &ArgumentSpec, has_help: bool) -> LayoutNode {
    let mut column = vec![
        LayoutNode::Label {
            text: super::label_for(spec),
            bold: true,
        },
        LayoutNode::Spacer(6),
    ];

    if spec.requires_one_or_more() {
        column.push(LayoutNode::Note(ONE_OR_MORE_NOTE.to_string()));
    }

    if has_help {
        column.push(LayoutNode::Row(vec![
            LayoutNode::Control { expand: false },
            LayoutNode::Spacer(6),
            LayoutNode::Help,
        ]));
    } else {
        column.push(LayoutNode::Stretch(1));
        column.push(LayoutNode::Control { expand: true });
    }

    LayoutNode::Column(column)
}

pub(crate) fn serialize(
    spec: &ArgumentSpec,
    control: &dyn InputControl,
    mode: FlagMode,
) -> Result<String> {
    let option = preferred_option(spec)?;

    match mode {
        FlagMode::Always => Ok(option.to_string()),
        FlagMode::WhenChecked if control.value() == TOGGLE_CHECKED => Ok(option.to_string()),
        FlagMode::WhenChecked => Ok(String::new()),
    }
}
