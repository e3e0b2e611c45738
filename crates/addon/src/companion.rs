//! Companion add-on capability gate.
//!
//! Injection into review-type surfaces only makes sense while the companion
//! editing add-on is installed and enabled, so its state is probed from the
//! companion's on-disk metadata and memoized for the process lifetime.
//! There is no invalidation path: toggling the companion mid-session is not
//! picked up until the host restarts. That staleness window is part of the
//! contract, not something to paper over with polling.

use std::{path::PathBuf, sync::OnceLock};

use {
    serde::Deserialize,
    tracing::{debug, warn},
};

use crate::error::Result;

/// Id the companion add-on is installed under.
pub const COMPANION_ADDON_ID: &str = "385888438";

/// Subset of the host's per-add-on metadata file this gate reads.
#[derive(Debug, Default, Deserialize)]
struct CompanionMeta {
    #[serde(default)]
    disabled: bool,
}

/// Write-once gate over the companion's enabled state.
pub struct CompanionGate {
    addons_dir: PathBuf,
    companion_id: String,
    state: OnceLock<bool>,
}

impl CompanionGate {
    pub fn new(addons_dir: PathBuf) -> Self {
        Self::with_companion_id(addons_dir, COMPANION_ADDON_ID)
    }

    /// Gate for a companion installed under a non-default id.
    pub fn with_companion_id(addons_dir: PathBuf, companion_id: impl Into<String>) -> Self {
        Self {
            addons_dir,
            companion_id: companion_id.into(),
            state: OnceLock::new(),
        }
    }

    /// Whether the companion is installed and enabled.
    ///
    /// The filesystem is touched at most once; the first answer is reused
    /// for every later call. Probe failures read as disabled, since a
    /// render event must never fail because of companion-state inspection.
    pub fn enabled(&self) -> bool {
        *self.state.get_or_init(|| match self.probe() {
            Ok(enabled) => {
                debug!(companion = %self.companion_id, enabled, "companion state probed");
                enabled
            },
            Err(error) => {
                warn!(companion = %self.companion_id, %error, "companion probe failed, treating as disabled");
                false
            },
        })
    }

    fn probe(&self) -> Result<bool> {
        let companion_dir = self.addons_dir.join(&self.companion_id);
        if !companion_dir.is_dir() {
            return Ok(false);
        }
        let meta_path = companion_dir.join("meta.json");
        if !meta_path.is_file() {
            // installed, never toggled: no metadata means enabled
            return Ok(true);
        }
        let raw = std::fs::read_to_string(&meta_path)?;
        let meta: CompanionMeta = serde_json::from_str(&raw)?;
        Ok(!meta.disabled)
    }
}
