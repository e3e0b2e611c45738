//! Add-on configuration.
//!
//! The host owns the config store and hands the add-on its section as JSON.
//! One option is recognized.

use serde_json::Value;

/// Chord bound when the config is absent or unusable.
pub const DEFAULT_HOTKEY: &str = "Ctrl+Alt+Shift+R";

/// Resolve the effective key chord from the add-on's JSON config.
///
/// Anything other than a string that is non-blank after trimming falls back
/// to [`DEFAULT_HOTKEY`]; a usable value is returned untrimmed. Resolved on
/// every use, never cached, so config edits apply without a restart.
pub fn resolve_hotkey(config: Option<&Value>) -> String {
    match config.and_then(|c| c.get("hotkey")).and_then(Value::as_str) {
        Some(chord) if !chord.trim().is_empty() => chord.to_string(),
        _ => DEFAULT_HOTKEY.to_string(),
    }
}
