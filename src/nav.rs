//! Navigation state for the archive reader.
//!
//! [`NavState`] is the view-coordinate machine: which view is showing,
//! which forum/topic is selected, and the current page. It is pure data
//! plus derivation logic with no I/O, owned by the [`crate::app::App`]
//! controller so it can be unit-tested without a terminal.

use crate::models::ForumData;

/// Which content view is currently displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// Category/forum overview (the home view)
    #[default]
    Forums,
    /// Topic list for the selected forum
    Topics,
    /// Post list for the selected topic
    Posts,
}

/// Target of a breadcrumb activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrumbTarget {
    /// Return to the forums overview
    Home,
    /// Open a forum's topic list
    Forum(String),
    /// Open a topic's post list
    Topic(String),
}

/// One entry in the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Display label
    pub label: String,
    /// Navigation target when activated
    pub target: CrumbTarget,
}

/// The current navigation coordinates.
///
/// `total_pages` is derived: it is refreshed from the resolved slice on
/// every render and only stored here so prev/next intents can consult it.
/// Breadcrumbs are never stored; they are rebuilt from the coordinates and
/// the dataset on each render via [`NavState::breadcrumbs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    /// Current view
    pub view: View,
    /// Selected forum, set when the view requires it
    pub forum_id: Option<String>,
    /// Selected topic, set when the view requires it
    pub topic_id: Option<String>,
    /// Current page, 1-based
    pub page: usize,
    /// Page count of the last resolved slice
    pub total_pages: usize,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            view: View::Forums,
            forum_id: None,
            topic_id: None,
            page: 1,
            total_pages: 1,
        }
    }
}

impl NavState {
    /// Create the startup state (forums view, page 1).
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the home view defaults.
    pub fn reset_to_home(&mut self) {
        self.view = View::Forums;
        self.forum_id = None;
        self.topic_id = None;
        self.page = 1;
    }

    /// Navigate to a forum's topic list.
    pub fn open_forum(&mut self, forum_id: impl Into<String>) {
        self.view = View::Topics;
        self.forum_id = Some(forum_id.into());
        self.topic_id = None;
        self.page = 1;
    }

    /// Navigate to a topic's post list.
    ///
    /// `forum_id` is left as-is; the posts view recovers its forum context
    /// by looking up `topic.forum_id` rather than trusting a stale value.
    pub fn open_topic(&mut self, topic_id: impl Into<String>) {
        self.view = View::Posts;
        self.topic_id = Some(topic_id.into());
        self.page = 1;
    }

    /// Jump to a specific page (1-based; values below 1 are treated as 1).
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Move to the previous page if not already on the first.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Move to the next page if not already on the last resolved page.
    pub fn next_page(&mut self) {
        if self.page < self.total_pages {
            self.page += 1;
        }
    }

    /// Derive the breadcrumb trail for the current coordinates.
    ///
    /// Always starts with a Home entry. The topics view appends the current
    /// forum when it resolves; the posts view appends the owning forum (when
    /// it resolves) and then the topic. Unresolvable ids silently produce a
    /// shorter trail.
    pub fn breadcrumbs(&self, data: &ForumData) -> Vec<Breadcrumb> {
        let mut crumbs = vec![Breadcrumb {
            label: "Home".to_string(),
            target: CrumbTarget::Home,
        }];

        match self.view {
            View::Forums => {}
            View::Topics => {
                if let Some(forum) = self.forum_id.as_deref().and_then(|id| data.forum(id)) {
                    crumbs.push(Breadcrumb {
                        label: forum.name.clone(),
                        target: CrumbTarget::Forum(forum.id.clone()),
                    });
                }
            }
            View::Posts => {
                if let Some(topic) = self.topic_id.as_deref().and_then(|id| data.topic(id)) {
                    if let Some(forum) = topic.forum_id.as_deref().and_then(|id| data.forum(id)) {
                        crumbs.push(Breadcrumb {
                            label: forum.name.clone(),
                            target: CrumbTarget::Forum(forum.id.clone()),
                        });
                    }
                    crumbs.push(Breadcrumb {
                        label: topic.title.clone(),
                        target: CrumbTarget::Topic(topic.id.clone()),
                    });
                }
            }
        }

        crumbs
    }
}
