//! Messages for async communication with the app.

use crate::models::ForumData;

/// Messages posted back to the event loop by spawned tasks.
#[derive(Debug)]
pub enum AppMessage {
    /// A dataset fetch completed.
    DatasetLoaded {
        /// Load sequence token; stale tokens are dropped
        seq: u64,
        /// The freshly parsed dataset
        data: ForumData,
    },
    /// A dataset fetch failed.
    DatasetFailed {
        /// Load sequence token; stale tokens are dropped
        seq: u64,
        /// User-facing error message
        error: String,
    },
}
