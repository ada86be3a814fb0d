//! View state construction for UI rendering.
//!
//! [`App::view_state`] builds a [`ViewState`] snapshot containing
//! everything the UI needs for one render: the load phase, derived
//! breadcrumbs, the resolved content slice, pagination descriptors, and
//! the footer strings. The UI imports this struct instead of `App`,
//! keeping the presentation layer swappable.

use super::{App, LoadPhase};
use crate::nav::Breadcrumb;
use crate::pagination::{self, PageControls};
use crate::resolver::{resolve, ResolvedView};

/// Everything the presentation layer needs for one render.
#[derive(Debug)]
pub struct ViewState<'a> {
    /// Load cycle phase
    pub phase: LoadPhase,
    /// Breadcrumb trail, rebuilt from the navigation coordinates
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Resolved content slice; `None` until a dataset has loaded
    pub resolved: Option<ResolvedView<'a>>,
    /// Pagination descriptors; `None` when controls must not render
    pub controls: Option<PageControls>,
    /// Selection index within the current list
    pub selected: usize,
    /// Current page, 1-based
    pub page: usize,
    /// Page count of the resolved slice
    pub total_pages: usize,
    /// Raw freshness marker string for the footer
    pub last_updated: Option<String>,
    /// Transient status-line message
    pub notice: Option<String>,
}

impl App {
    /// Build the view state for one render.
    ///
    /// Recomputes the derived navigation data every time: breadcrumbs come
    /// from the coordinates plus the dataset snapshot, and `total_pages`
    /// is refreshed from the resolved slice so prev/next intents act on
    /// current numbers. Pagination controls are omitted for the forums
    /// view, for empty result sets, and for single pages.
    pub fn view_state(&mut self) -> ViewState<'_> {
        let last_updated = self.last_updated();
        let page_size = self.config.page_size;

        let resolved = self
            .dataset
            .as_deref()
            .map(|data| resolve(data, &self.nav, page_size));

        let total_pages = resolved.as_ref().map(|r| r.total_pages()).unwrap_or(1);
        self.nav.total_pages = total_pages;

        let breadcrumbs = match self.dataset.as_deref() {
            Some(data) => self.nav.breadcrumbs(data),
            None => Vec::new(),
        };

        let controls = resolved
            .as_ref()
            .filter(|r| r.paginates() && !r.is_empty())
            .and_then(|r| pagination::build(self.nav.page, r.total_pages()));

        ViewState {
            phase: self.phase.clone(),
            breadcrumbs,
            resolved,
            controls,
            selected: self.selected,
            page: self.nav.page,
            total_pages,
            last_updated,
            notice: self.notice.clone(),
        }
    }
}
