//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`LoadPhase`] - Where the current load-and-render cycle stands
//! - [`AppMessage`] - Messages for async communication
//! - [`NavIntent`] - Navigation intents handed back by the presentation layer

mod messages;
mod navigation;
mod view;

pub use messages::AppMessage;
pub use navigation::NavIntent;
pub use view::ViewState;

use std::sync::Arc;

use color_eyre::Result;
use tokio::sync::mpsc;

use crate::adapters::ReqwestHttpClient;
use crate::config::Config;
use crate::freshness::FreshnessStore;
use crate::loader::DataLoader;
use crate::models::ForumData;
use crate::nav::NavState;
use crate::resolver::{resolve, ResolvedView};

/// Where the current load cycle stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// A fetch is in flight and no usable dataset is on screen yet
    Loading,
    /// A dataset snapshot is loaded and rendering
    Ready,
    /// The last load failed; the message replaces the content area until
    /// the user retries
    Failed(String),
}

/// The application controller.
///
/// Owns the single [`NavState`] instance, the current dataset snapshot,
/// and the async plumbing for loads. The dataset reference is swapped
/// wholesale on each successful load; all reads within one render cycle
/// use that one snapshot.
pub struct App {
    /// Runtime configuration
    pub config: Config,
    /// Navigation coordinates
    pub nav: NavState,
    /// Current dataset snapshot, if any load has succeeded
    pub dataset: Option<Arc<ForumData>>,
    /// Load cycle phase
    pub phase: LoadPhase,
    /// Selection index within the current list
    pub selected: usize,
    /// Set when the user asks to exit
    pub should_quit: bool,
    /// Set when the next loop iteration should redraw
    pub needs_redraw: bool,
    /// Transient status-line message (share copied, quote stub)
    pub notice: Option<String>,
    /// Sender half of the app message channel
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver half; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    loader: DataLoader,
    /// Sequence token of the most recent load; results carrying an older
    /// token are superseded and dropped
    load_seq: u64,
}

impl App {
    /// Create the app with the production HTTP adapter.
    pub fn new(config: Config) -> Result<Self> {
        let freshness = FreshnessStore::new()?;
        let loader = DataLoader::new(
            Arc::new(ReqwestHttpClient::new()),
            config.data_url.clone(),
            freshness,
        );
        Ok(Self::with_loader(config, loader))
    }

    /// Create the app around an explicit loader (used by tests).
    pub fn with_loader(config: Config, loader: DataLoader) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            config,
            nav: NavState::new(),
            dataset: None,
            phase: LoadPhase::Loading,
            selected: 0,
            should_quit: false,
            needs_redraw: true,
            notice: None,
            message_tx,
            message_rx: Some(message_rx),
            loader,
            load_seq: 0,
        }
    }

    /// Kick off a fresh load of the full dataset.
    ///
    /// The fetch runs in a spawned task and posts its result back over the
    /// message channel tagged with a sequence token, so a slower superseded
    /// response can never clobber a newer navigation's render.
    pub fn start_load(&mut self) {
        self.load_seq += 1;
        let seq = self.load_seq;
        self.phase = LoadPhase::Loading;
        self.notice = None;
        self.mark_dirty();

        let loader = self.loader.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match loader.load().await {
                Ok(data) => {
                    let _ = tx.send(AppMessage::DatasetLoaded { seq, data });
                }
                Err(e) => {
                    tracing::warn!("dataset load failed: {e}");
                    let _ = tx.send(AppMessage::DatasetFailed {
                        seq,
                        error: e.user_message(),
                    });
                }
            }
        });
    }

    /// Apply a message from the async side.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::DatasetLoaded { seq, data } => {
                if seq != self.load_seq {
                    tracing::debug!(seq, latest = self.load_seq, "dropping superseded load");
                    return;
                }
                self.dataset = Some(Arc::new(data));
                self.phase = LoadPhase::Ready;
                self.selected = 0;
                self.mark_dirty();
            }
            AppMessage::DatasetFailed { seq, error } => {
                if seq != self.load_seq {
                    tracing::debug!(seq, latest = self.load_seq, "dropping superseded failure");
                    return;
                }
                self.phase = LoadPhase::Failed(error);
                self.mark_dirty();
            }
        }
    }

    /// Staleness-checker tick: reload when the freshness marker has aged
    /// past the configured interval. Advisory only; a load already in
    /// flight is left alone.
    pub fn tick_staleness(&mut self) {
        if self.phase == LoadPhase::Loading {
            return;
        }
        if self
            .loader
            .freshness()
            .is_stale(self.config.update_interval)
        {
            tracing::info!("forum data is stale, reloading");
            self.start_load();
        }
    }

    /// The freshness marker string for the last-updated footer.
    pub fn last_updated(&self) -> Option<String> {
        self.loader.freshness().display_string()
    }

    /// Number of selectable rows in the current view.
    pub fn selectable_len(&self) -> usize {
        let Some(data) = self.dataset.as_deref() else {
            return 0;
        };
        match resolve(data, &self.nav, self.config.page_size) {
            ResolvedView::Forums { categories } => {
                categories.iter().map(|c| c.forums.len()).sum()
            }
            ResolvedView::Topics { page_items, .. } => page_items.len(),
            ResolvedView::Posts { page_items, .. } => page_items.len(),
        }
    }

    /// Move selection up in the current list.
    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.mark_dirty();
        }
    }

    /// Move selection down in the current list.
    pub fn select_next(&mut self) {
        let max = self.selectable_len();
        if max > 0 && self.selected < max - 1 {
            self.selected += 1;
            self.mark_dirty();
        }
    }

    /// Mark the app to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }
}
