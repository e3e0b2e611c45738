//! Render-event content types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// UI surface a render event targets.
///
/// The adapter at the host boundary maps the host's own window handles into
/// this enumeration; surface kinds a given host version does not ship simply
/// never occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderSurface {
    /// The note editor.
    Editor,
    /// The card review screen.
    Reviewer,
    /// The card previewer opened from the browser.
    Previewer,
    /// Any surface the add-on does not recognize.
    Other,
}

impl fmt::Display for RenderSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Outgoing webview content for a single render event.
///
/// Hooks may append to the fragments below before the host serves them.
/// Nothing here outlives the event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebContent {
    /// Markup appended inside `<head>`.
    pub head: String,
    /// Script URLs loaded after the head markup.
    pub js: Vec<String>,
    /// Stylesheet URLs.
    pub css: Vec<String>,
}

impl WebContent {
    pub fn new() -> Self {
        Self::default()
    }
}
