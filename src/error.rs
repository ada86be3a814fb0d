//! Error types for dataset loading.
//!
//! Rendering never fails hard: dangling id references empty a slice or
//! shorten the breadcrumb trail, and missing optional fields fall back to
//! fixed placeholder text. The only failure surfaced to the user is
//! [`LoadError`], shown as a blocking message with a retry action.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure to fetch or parse the forum dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Transport-level failure (connection, timeout).
    #[error("failed to fetch forum data: {0}")]
    Http(#[from] HttpError),
    /// The server answered with a non-success status.
    #[error("forum data request returned status {status}")]
    Status { status: u16 },
    /// The body was not the expected JSON structure.
    #[error("failed to parse forum data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    /// Message shown to the user in the blocking error state.
    pub fn user_message(&self) -> String {
        format!("Could not load forum data. Please try again later. ({})", self)
    }
}
