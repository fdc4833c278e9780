//! Positional arguments are identified by where they appear, so the value is
//! written out as is. Keeping positionals in declaration order is up to
//! whoever assembles the command line.

use crate::toolkit::{ControlKind, InputControl};

pub(crate) fn control_kind() -> ControlKind<'static> {
    ControlKind::Text
}

pub(crate) fn serialize(control: &dyn InputControl) -> String {
    control.value()
}
