//! Widgets built on the control state machine.
//!
//! Each widget is one `Context` method: it takes a layout slot, runs
//! [`Context::update_control`](crate::Context::update_control), draws itself
//! and reports a [`Response`](crate::Response).

mod button;
mod text;
mod textbox;
mod tree;
mod value;

use crate::id::Id;

/// Whether a numeric widget is temporarily shown as a textbox.
///
/// Shift-clicking a slider or number box switches it to
/// [`EditMode::TextEditing`]; confirming the edit or moving focus away
/// switches back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Every numeric widget draws normally.
    #[default]
    Normal,
    /// The numeric widget with this id is being typed into.
    TextEditing(Id),
}
