//! Embedded web assets.
//!
//! The helper script ships inside the crate and is handed to the host by
//! relative path under a fixed, add-on-namespaced route prefix. The host
//! serves the bytes; nothing here touches the filesystem at runtime.

use include_dir::{Dir, include_dir};

static ASSETS: Dir = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Route prefix the host serves this add-on's assets under.
pub const WEB_PREFIX: &str = "/_addons/uncloze/web/";

/// URL of the helper script, as referenced from injected heads.
pub fn script_url() -> String {
    format!("{WEB_PREFIX}editor.js")
}

/// Look up an embedded asset by its path relative to [`WEB_PREFIX`].
pub fn web_export(path: &str) -> Option<&'static [u8]> {
    ASSETS.get_file(path).map(|f| f.contents())
}

/// Content type for an asset path.
pub fn mime_for_path(path: &str) -> &'static str {
    match path.rsplit('.').next().unwrap_or("") {
        "js" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_url_is_under_the_addon_prefix() {
        let url = script_url();
        assert!(url.starts_with(WEB_PREFIX));
        assert!(url.ends_with("editor.js"));
    }

    #[test]
    fn helper_script_is_embedded() {
        let bytes = web_export("editor.js").unwrap();
        let source = std::str::from_utf8(bytes).unwrap();
        assert!(source.contains("UnclozeHotkey"));
    }

    #[test]
    fn unknown_asset_resolves_to_nothing() {
        assert!(web_export("missing.js").is_none());
    }

    #[test]
    fn scripts_are_served_as_javascript() {
        assert_eq!(
            mime_for_path("editor.js"),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(mime_for_path("unknown.bin"), "application/octet-stream");
    }
}
