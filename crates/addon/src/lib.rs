//! Cloze-removal add-on: capability gating, script injection, and host
//! registration.
//!
//! The add-on attaches to two host lifecycle hooks. On every render event
//! it decides whether the helper script belongs in the outgoing content
//! (always in the editor, only with the companion add-on enabled in review
//! surfaces). When the editor assembles its toolbar it contributes one
//! button. Commands fired by either path run the cloze transform from
//! `uncloze-markup` against the focused field.

pub mod assets;
pub mod buttons;
pub mod companion;
pub mod config;
mod error;
pub mod inject;

use std::sync::Arc;

use tracing::debug;

use uncloze_common::hooks::{AddonHost, HostHooks};
use uncloze_markup::FieldBuffer;

use crate::{buttons::remove_clozes_button, companion::CompanionGate};

pub use error::{Error, Result};

/// This add-on's id in the host's config store.
pub const ADDON_ID: &str = "uncloze";

/// Wire the add-on into the host's lifecycle hooks.
///
/// Registers one content hook and one button hook. Neither is allowed to
/// fail; every internal failure degrades to "no injection" or the default
/// chord. The companion gate is created here so its memoized state lives
/// exactly as long as the host process.
pub fn register(host: Arc<dyn AddonHost>, hooks: &mut HostHooks) {
    let gate = Arc::new(CompanionGate::new(host.addons_dir()));

    let content_host = Arc::clone(&host);
    hooks.on_content(Box::new(move |web, surface| {
        let config_value = content_host.addon_config(ADDON_ID);
        if let Some(payload) = inject::decide_injection(&gate, surface, config_value.as_ref()) {
            payload.append_to(web);
        }
    }));

    hooks.on_buttons(Box::new(move |toolbar| {
        let config_value = host.addon_config(ADDON_ID);
        toolbar.push(remove_clozes_button(config_value.as_ref()));
    }));

    debug!(addon = ADDON_ID, "registered");
}

/// Route a command fired by the toolbar button or the helper script's key
/// chord against the focused field. Returns whether the command was ours.
pub fn handle_command(command: &str, field: &mut FieldBuffer) -> bool {
    match command {
        buttons::REMOVE_COMMAND => {
            field.remove_clozes();
            true
        },
        buttons::REMOVE_AT_CARET_COMMAND => {
            field.remove_cloze_at_caret();
            true
        },
        _ => false,
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use serde_json::{Value, json};

    use uncloze_common::webview::{RenderSurface, WebContent};

    use super::*;

    struct FakeHost {
        addons_dir: PathBuf,
        config: Option<Value>,
    }

    impl AddonHost for FakeHost {
        fn addon_config(&self, addon: &str) -> Option<Value> {
            (addon == ADDON_ID).then(|| self.config.clone()).flatten()
        }

        fn addons_dir(&self) -> PathBuf {
            self.addons_dir.clone()
        }
    }

    fn registered_hooks(config: Option<Value>) -> HostHooks {
        let host = Arc::new(FakeHost {
            addons_dir: PathBuf::from("/nonexistent"),
            config,
        });
        let mut hooks = HostHooks::new();
        register(host, &mut hooks);
        hooks
    }

    #[test]
    fn editor_render_gets_the_script() {
        let hooks = registered_hooks(None);
        let mut web = WebContent::new();
        hooks.fire_content(&mut web, RenderSurface::Editor);
        assert!(web.head.contains("editor.js"));
        assert!(web.head.contains(inject::HOTKEY_GLOBAL));
    }

    #[test]
    fn reviewer_render_stays_clean_without_the_companion() {
        let hooks = registered_hooks(None);
        let mut web = WebContent::new();
        hooks.fire_content(&mut web, RenderSurface::Reviewer);
        assert!(web.head.is_empty());
    }

    #[test]
    fn configured_chord_reaches_the_toolbar() {
        let hooks = registered_hooks(Some(json!({"hotkey": "Ctrl+J"})));
        let mut toolbar = Vec::new();
        hooks.fire_buttons(&mut toolbar);
        assert_eq!(toolbar.len(), 1);
        assert!(toolbar[0].tooltip.contains("Ctrl+J"));
    }

    #[test]
    fn remove_command_strips_the_field() {
        let mut field = FieldBuffer::new("{{c1::Paris}} is in {{c2::France::country}}");
        assert!(handle_command(buttons::REMOVE_COMMAND, &mut field));
        assert_eq!(field.text(), "Paris is in France");
    }

    #[test]
    fn caret_command_strips_one_marker() {
        let text = "{{c1::a}} {{c2::b}}";
        let mut field = FieldBuffer::new(text).with_caret(text.find("{{c2").unwrap() + 6);
        assert!(handle_command(buttons::REMOVE_AT_CARET_COMMAND, &mut field));
        assert_eq!(field.text(), "{{c1::a}} b");
    }

    #[test]
    fn unknown_commands_are_not_ours() {
        let mut field = FieldBuffer::new("{{c1::x}}");
        assert!(!handle_command("someone-else:run", &mut field));
        assert_eq!(field.text(), "{{c1::x}}");
    }
}
