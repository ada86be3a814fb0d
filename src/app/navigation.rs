//! Navigation intents and methods for the App.
//!
//! The presentation layer hands back plain [`NavIntent`] values; the app
//! translates each into a [`crate::nav::NavState`] mutation followed by a
//! fresh load-and-render cycle, matching the one-direction data flow of
//! the render protocol.

use super::App;
use crate::clipboard;
use crate::nav::View;
use crate::resolver::{resolve, ResolvedView};

/// A navigation intent from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    /// Return to the forums overview
    Home,
    /// Open a forum's topic list
    OpenForum(String),
    /// Open a topic's post list
    OpenTopic(String),
    /// Jump to a specific page (1-based)
    SetPage(usize),
    /// Move one page back
    PrevPage,
    /// Move one page forward
    NextPage,
    /// Re-run the load cycle after a failure
    Retry,
}

impl App {
    /// Apply a navigation intent and start the resulting load cycle.
    ///
    /// Every effective navigation re-fetches the full document; intents
    /// that would not change anything (same page, prev on the first page,
    /// next on the last) are ignored without a reload.
    pub fn handle_intent(&mut self, intent: NavIntent) {
        match intent {
            NavIntent::Home => self.nav.reset_to_home(),
            NavIntent::OpenForum(id) => self.nav.open_forum(id),
            NavIntent::OpenTopic(id) => self.nav.open_topic(id),
            NavIntent::SetPage(page) => {
                if page == self.nav.page {
                    return;
                }
                self.nav.set_page(page);
            }
            NavIntent::PrevPage => {
                if self.nav.page <= 1 {
                    return;
                }
                self.nav.prev_page();
            }
            NavIntent::NextPage => {
                if self.nav.page >= self.nav.total_pages {
                    return;
                }
                self.nav.next_page();
            }
            NavIntent::Retry => {}
        }
        self.selected = 0;
        self.start_load();
    }

    /// Navigate one breadcrumb level up from the current view.
    pub fn go_back(&mut self) {
        match self.nav.view {
            View::Forums => {}
            View::Topics => self.handle_intent(NavIntent::Home),
            View::Posts => {
                let parent_forum = self
                    .dataset
                    .as_deref()
                    .zip(self.nav.topic_id.as_deref())
                    .and_then(|(data, id)| data.topic(id))
                    .and_then(|topic| topic.forum_id.clone());
                match parent_forum {
                    Some(forum_id) => self.handle_intent(NavIntent::OpenForum(forum_id)),
                    None => self.handle_intent(NavIntent::Home),
                }
            }
        }
    }

    /// Open whatever the selection points at in the current view.
    ///
    /// Forums view opens the selected forum, topics view the selected
    /// topic; the posts view has no drill-down.
    pub fn activate_selection(&mut self) {
        let Some(data) = self.dataset.clone() else {
            return;
        };
        let intent = match resolve(data.as_ref(), &self.nav, self.config.page_size) {
            ResolvedView::Forums { categories } => categories
                .iter()
                .flat_map(|c| c.forums.iter())
                .nth(self.selected)
                .map(|forum| NavIntent::OpenForum(forum.id.clone())),
            ResolvedView::Topics { page_items, .. } => page_items
                .get(self.selected)
                .map(|topic| NavIntent::OpenTopic(topic.id.clone())),
            ResolvedView::Posts { .. } => None,
        };
        if let Some(intent) = intent {
            self.handle_intent(intent);
        }
    }

    /// Copy a deep link to the selected post to the clipboard.
    pub fn share_selected_post(&mut self) {
        let Some(data) = self.dataset.clone() else {
            return;
        };
        let ResolvedView::Posts { page_items, .. } =
            resolve(data.as_ref(), &self.nav, self.config.page_size)
        else {
            return;
        };
        let Some(post) = page_items.get(self.selected) else {
            return;
        };
        let Some(topic_id) = self.nav.topic_id.as_deref() else {
            return;
        };

        let url = clipboard::share_link(self.config.share_base(), topic_id, &post.id);
        match clipboard::copy_text(&url) {
            Ok(()) => {
                tracing::info!(post = %post.id, "share link copied");
                self.notice = Some("Post URL copied to clipboard".to_string());
            }
            Err(e) => {
                tracing::warn!("could not copy share link: {e}");
                self.notice = Some(format!("Could not copy URL. Copy it manually: {url}"));
            }
        }
        self.mark_dirty();
    }

    /// Quote the selected post. Stub: reply functionality does not exist
    /// in a static archive.
    pub fn quote_selected_post(&mut self) {
        let Some(data) = self.dataset.clone() else {
            return;
        };
        let ResolvedView::Posts { page_items, .. } =
            resolve(data.as_ref(), &self.nav, self.config.page_size)
        else {
            return;
        };
        let Some(post) = page_items.get(self.selected) else {
            return;
        };

        tracing::info!(post = %post.id, "quote post");
        self.notice = Some("Quote will be available in a future update".to_string());
        self.mark_dirty();
    }
}
