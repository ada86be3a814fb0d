//! The freshness marker.
//!
//! One timestamp recording the last successful dataset load, persisted
//! client-locally under a fixed file name. It is written as a
//! human-readable locale-style string and parsed back with the same chrono
//! format, and is used only for the advisory staleness comparison - it is
//! not a correctness guarantee of any kind.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use color_eyre::{eyre::WrapErr, Result};

/// Fixed file name the marker is stored under.
pub const MARKER_FILE: &str = "last_updated";

/// Human-readable format the marker is written and parsed with.
const MARKER_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

/// File-backed store for the freshness marker.
#[derive(Debug, Clone)]
pub struct FreshnessStore {
    path: PathBuf,
}

impl FreshnessStore {
    /// Create a store under the user data directory, creating the
    /// directory if needed.
    pub fn new() -> Result<Self> {
        let dir = dirs::data_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("could not determine user data directory"))?
            .join("velt");
        if !dir.exists() {
            fs::create_dir_all(&dir).wrap_err("Failed to create data directory")?;
        }
        Ok(Self {
            path: dir.join(MARKER_FILE),
        })
    }

    /// Create a store at an explicit path (used by tests).
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Record now as the last successful load time.
    pub fn stamp(&self) -> Result<()> {
        let marker = Local::now().format(MARKER_FORMAT).to_string();
        fs::write(&self.path, marker)
            .wrap_err_with(|| format!("Failed to write freshness marker to {:?}", self.path))
    }

    /// The raw stored marker string, for the last-updated footer.
    pub fn display_string(&self) -> Option<String> {
        fs::read_to_string(&self.path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// The stored marker parsed back with the write format.
    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        let raw = self.display_string()?;
        let naive = NaiveDateTime::parse_from_str(&raw, MARKER_FORMAT).ok()?;
        Local.from_local_datetime(&naive).single()
    }

    /// Whether the marker is older than `max_age`.
    ///
    /// A missing or unreadable marker is not stale: staleness only ever
    /// compares against a recorded load, matching the advisory nature of
    /// the check.
    pub fn is_stale(&self, max_age: Duration) -> bool {
        let Some(last) = self.last_updated() else {
            return false;
        };
        let age = Local::now().signed_duration_since(last);
        match age.to_std() {
            Ok(age) => age > max_age,
            // Marker from the future (clock change); treat as fresh
            Err(_) => false,
        }
    }
}
