//! Clipboard access for the copy-discord-handle buttons.
//!
//! Fire-and-forget: the returned promise is dropped, and the UI shows
//! its "Copied!" feedback optimistically. Requires a browser environment.

/// Write `text` to the system clipboard.
pub fn copy_text(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(text);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}
