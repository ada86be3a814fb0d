//! Runtime configuration.
//!
//! Settings for the archive reader: where the exported dataset lives, how
//! many items render per page, and how often the staleness checker fires.
//! Use the builder pattern to customize behavior; `from_env` applies
//! environment overrides on top of the defaults.

use std::time::Duration;

/// Default URL of the exported forum dataset.
pub const DEFAULT_DATA_URL: &str = "http://localhost:8000/forum_data.json";

/// Default number of topics/posts per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Default staleness-check interval (1 hour).
pub const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 3600;

/// Configuration for the reader.
///
/// # Example
///
/// ```ignore
/// use velt::config::Config;
///
/// let config = Config::default()
///     .with_data_url("https://archive.example.org/forum_data.json")
///     .with_page_size(50);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URL the full dataset document is fetched from
    pub data_url: String,
    /// Items per page in the topics and posts views
    pub page_size: usize,
    /// How often the staleness checker ticks, and how old the freshness
    /// marker may be before a reload is triggered
    pub update_interval: Duration,
    /// Base URL for share links; defaults to `data_url` when unset
    pub share_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            update_interval: Duration::from_secs(DEFAULT_UPDATE_INTERVAL_SECS),
            share_base_url: None,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dataset URL.
    pub fn with_data_url(mut self, url: impl Into<String>) -> Self {
        self.data_url = url.into();
        self
    }

    /// Set the page size used by the topics and posts views.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Set the staleness-check interval.
    pub fn with_update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = interval;
        self
    }

    /// Set the base URL used when composing share links.
    pub fn with_share_base_url(mut self, url: impl Into<String>) -> Self {
        self.share_base_url = Some(url.into());
        self
    }

    /// Build a config from the environment.
    ///
    /// Recognized variables:
    /// - `VELT_DATA_URL` - dataset URL
    /// - `VELT_PAGE_SIZE` - items per page
    /// - `VELT_UPDATE_INTERVAL_SECS` - staleness interval in seconds
    /// - `VELT_SHARE_BASE_URL` - base URL for share links
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("VELT_DATA_URL") {
            config.data_url = url;
        }
        if let Some(size) = std::env::var("VELT_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            config.page_size = size.max(1);
        }
        if let Some(secs) = std::env::var("VELT_UPDATE_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.update_interval = Duration::from_secs(secs);
        }
        if let Ok(url) = std::env::var("VELT_SHARE_BASE_URL") {
            config.share_base_url = Some(url);
        }

        config
    }

    /// The base URL share links are composed against.
    pub fn share_base(&self) -> &str {
        self.share_base_url.as_deref().unwrap_or(&self.data_url)
    }
}
