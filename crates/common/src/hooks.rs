//! Host lifecycle hook points.
//!
//! The host fires these synchronously from its UI thread, one event at a
//! time, so dispatch needs no locking. A hook is not allowed to fail the
//! host's render or toolbar assembly; the signatures carry no `Result`.

use std::path::PathBuf;

use {serde_json::Value, tracing::debug};

use crate::webview::{RenderSurface, WebContent};

// ── AddonHost ───────────────────────────────────────────────────────────────

/// Services the host provides to add-ons.
pub trait AddonHost: Send + Sync {
    /// JSON configuration stored for the named add-on, if any.
    fn addon_config(&self, addon: &str) -> Option<Value>;

    /// Root directory add-ons are installed under, one subdirectory per id.
    fn addons_dir(&self) -> PathBuf;
}

// ── ToolbarButton ───────────────────────────────────────────────────────────

/// Descriptor for one editor toolbar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarButton {
    /// Stable identifier.
    pub id: String,
    /// Short visible label.
    pub label: String,
    /// Hover tooltip.
    pub tooltip: String,
    /// Command id the host routes back when the button fires.
    pub command: String,
    /// Key chord bound to the same command, if any.
    pub keys: Option<String>,
}

// ── HostHooks ───────────────────────────────────────────────────────────────

/// Hook fired on every render event, before content is served.
pub type ContentHook = Box<dyn Fn(&mut WebContent, RenderSurface) + Send + Sync>;

/// Hook fired while the editor assembles its toolbar.
pub type ButtonHook = Box<dyn Fn(&mut Vec<ToolbarButton>) + Send + Sync>;

/// Registration surface for host lifecycle hooks.
///
/// Add-ons receive `&mut HostHooks` at startup and append their callbacks;
/// the host fires them in registration order.
#[derive(Default)]
pub struct HostHooks {
    content_hooks: Vec<ContentHook>,
    button_hooks: Vec<ButtonHook>,
}

impl HostHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook on "content about to be rendered".
    pub fn on_content(&mut self, hook: ContentHook) {
        self.content_hooks.push(hook);
        debug!(count = self.content_hooks.len(), "content hook registered");
    }

    /// Register a hook on "toolbar buttons assembled".
    pub fn on_buttons(&mut self, hook: ButtonHook) {
        self.button_hooks.push(hook);
        debug!(count = self.button_hooks.len(), "button hook registered");
    }

    /// Fire all content hooks for one render event.
    pub fn fire_content(&self, web: &mut WebContent, surface: RenderSurface) {
        debug!(surface = %surface, count = self.content_hooks.len(), "dispatching render event");
        for hook in &self.content_hooks {
            hook(web, surface);
        }
    }

    /// Fire all button hooks over the toolbar under assembly.
    pub fn fire_buttons(&self, buttons: &mut Vec<ToolbarButton>) {
        for hook in &self.button_hooks {
            hook(buttons);
        }
    }
}
