//! Clipboard copy for share links.
//!
//! Self-contained module wrapping `arboard`. No coupling to UI, networking,
//! or application state.

/// Errors that can occur when writing to the clipboard.
#[derive(Debug)]
pub enum ClipboardError {
    /// Clipboard access failed (no display server, unsupported platform).
    Unavailable(String),
    /// The write itself failed.
    WriteFailed(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "Clipboard unavailable: {}", msg),
            ClipboardError::WriteFailed(msg) => write!(f, "Clipboard write failed: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Copy text to the system clipboard.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}

/// Compose the deep link for a post: base URL plus topic and post ids.
pub fn share_link(base: &str, topic_id: &str, post_id: &str) -> String {
    format!("{}?topic={}&post={}", base, topic_id, post_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_link() {
        assert_eq!(
            share_link("https://example.org/archive", "t1", "p9"),
            "https://example.org/archive?topic=t1&post=p9"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ClipboardError::Unavailable("no display".to_string()).to_string(),
            "Clipboard unavailable: no display"
        );
        assert_eq!(
            ClipboardError::WriteFailed("denied".to_string()).to_string(),
            "Clipboard write failed: denied"
        );
    }
}
