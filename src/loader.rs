//! Data loader.
//!
//! Fetches the exported dataset document through the [`HttpClient`] port
//! and parses it into a [`ForumData`]. Every call re-fetches the full
//! document - there is no partial or incremental fetch and no server-side
//! filtering; all slicing happens client-side in the resolver. A
//! successful load stamps the freshness marker as a side effect.

use std::sync::Arc;

use crate::error::LoadError;
use crate::freshness::FreshnessStore;
use crate::models::ForumData;
use crate::traits::{Headers, HttpClient};

/// Loader for the dataset document.
#[derive(Clone)]
pub struct DataLoader {
    client: Arc<dyn HttpClient>,
    url: String,
    freshness: FreshnessStore,
}

impl DataLoader {
    /// Create a loader fetching `url` through `client`.
    pub fn new(client: Arc<dyn HttpClient>, url: impl Into<String>, freshness: FreshnessStore) -> Self {
        Self {
            client,
            url: url.into(),
            freshness,
        }
    }

    /// Fetch and parse the full dataset.
    ///
    /// Fails with [`LoadError`] on transport failure, a non-success status,
    /// or a body that does not parse as the expected structure. On success
    /// the freshness marker is stamped; a marker write failure is logged
    /// and does not fail the load.
    pub async fn load(&self) -> Result<ForumData, LoadError> {
        tracing::debug!(url = %self.url, "fetching forum dataset");

        let response = self.client.get(&self.url, &Headers::new()).await?;
        if !response.is_success() {
            return Err(LoadError::Status {
                status: response.status,
            });
        }

        let data: ForumData = response.json()?;
        tracing::info!(
            categories = data.categories.len(),
            forums = data.forums.len(),
            topics = data.topics.len(),
            posts = data.posts.len(),
            "forum dataset loaded"
        );

        if let Err(e) = self.freshness.stamp() {
            tracing::warn!("failed to stamp freshness marker: {e}");
        }

        Ok(data)
    }

    /// The freshness store this loader stamps.
    pub fn freshness(&self) -> &FreshnessStore {
        &self.freshness
    }
}
