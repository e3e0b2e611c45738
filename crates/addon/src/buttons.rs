//! Editor toolbar wiring.

use serde_json::Value;

use uncloze_common::hooks::ToolbarButton;

use crate::config;

/// Command routed back when the button or the helper's key chord fires:
/// strip every marker in the selection (or the whole field).
pub const REMOVE_COMMAND: &str = "uncloze:remove";

/// Alternate command: strip only the marker enclosing the caret. Not bound
/// to a button; hosts can offer it as an extra keybinding.
pub const REMOVE_AT_CARET_COMMAND: &str = "uncloze:remove-at-caret";

/// Build the toolbar button with the current chord in its tooltip.
pub fn remove_clozes_button(config_value: Option<&Value>) -> ToolbarButton {
    let hotkey = config::resolve_hotkey(config_value);
    ToolbarButton {
        id: "uncloze".into(),
        label: "RC".into(),
        tooltip: format!("Remove clozes in selected text ({hotkey})"),
        command: REMOVE_COMMAND.into(),
        keys: Some(hotkey),
    }
}
