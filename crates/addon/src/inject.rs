//! Injection decision engine.
//!
//! Decides, per render event, whether the helper script is attached to the
//! outgoing webview content, and builds the head fragment when it is. No
//! failure on this path may reach the host; anything that goes wrong reads
//! as "no injection".

use {serde_json::Value, tracing::debug};

use uncloze_common::webview::{RenderSurface, WebContent};

use crate::{assets, companion::CompanionGate, config};

/// Client global the helper script reads its key chord from.
pub const HOTKEY_GLOBAL: &str = "UnclozeHotkey";

/// Head fragment attached to an eligible render event.
///
/// The inline config snippet must precede the script reference: the helper
/// reads the hotkey global at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionPayload {
    hotkey: String,
    script_src: String,
}

impl InjectionPayload {
    fn new(hotkey: String) -> Self {
        Self {
            hotkey,
            script_src: assets::script_url(),
        }
    }

    /// Render the fragment: config snippet first, then the script tag.
    pub fn to_head_html(&self) -> String {
        // JSON-encode the chord so arbitrary config strings cannot break
        // out of the inline script.
        let encoded = serde_json::to_string(&self.hotkey)
            .unwrap_or_else(|_| format!("{:?}", config::DEFAULT_HOTKEY));
        format!(
            r#"<script>window.{HOTKEY_GLOBAL} = {encoded};</script><script src="{src}"></script>"#,
            src = self.script_src
        )
    }

    /// Append the fragment to the render event's existing head content.
    pub fn append_to(&self, web: &mut WebContent) {
        web.head.push_str(&self.to_head_html());
    }
}

/// Decide whether this render event gets the helper script.
///
/// The editor always does; review-type surfaces only while the companion
/// add-on is enabled; anything else never. The companion gate is not even
/// consulted for editor renders.
pub fn decide_injection(
    gate: &CompanionGate,
    surface: RenderSurface,
    config_value: Option<&Value>,
) -> Option<InjectionPayload> {
    let eligible = match surface {
        RenderSurface::Editor => true,
        RenderSurface::Reviewer | RenderSurface::Previewer => gate.enabled(),
        RenderSurface::Other => false,
    };
    if !eligible {
        return None;
    }

    let hotkey = config::resolve_hotkey(config_value);
    debug!(surface = %surface, %hotkey, "attaching helper script");
    Some(InjectionPayload::new(hotkey))
}
