//! Host-boundary types shared across uncloze crates.
//!
//! The host application owns the actual editor, reviewer, and previewer
//! windows; these types are the narrow surface of them the add-on core sees.

pub mod hooks;
pub mod webview;

pub use hooks::{AddonHost, HostHooks, ToolbarButton};
pub use webview::{RenderSurface, WebContent};
