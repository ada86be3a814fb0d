//! View resolver.
//!
//! Given the dataset and the current [`NavState`], selects the relevant
//! entity slice (categories/forums, topics, or posts) and computes the
//! pagination bounds. The result borrows from the dataset snapshot; nothing
//! is cloned or re-sorted, so source document order is preserved.

use crate::models::{Forum, ForumData, Post, Topic};
use crate::nav::{NavState, View};

/// A category as presented by the forums view.
///
/// Either a real category from the dataset or the synthetic default
/// category wrapping bare top-level forums.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView<'a> {
    /// Category id ("default" for the synthetic wrapper)
    pub id: &'a str,
    /// Category display name
    pub name: &'a str,
    /// Forums in this category
    pub forums: &'a [Forum],
}

/// The resolved content slice for the current navigation coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedView<'a> {
    /// Category/forum overview; never paginated. An empty list means the
    /// dataset-level empty state.
    Forums {
        /// Categories to render, each with its nested forums
        categories: Vec<CategoryView<'a>>,
    },
    /// Topic list for the current forum.
    Topics {
        /// The forum itself, when its id resolves
        forum: Option<&'a Forum>,
        /// Full filtered slice, dataset order
        items: Vec<&'a Topic>,
        /// The current page's portion of `items`
        page_items: Vec<&'a Topic>,
        /// `max(1, ceil(items.len() / page_size))`
        total_pages: usize,
    },
    /// Post list for the current topic.
    Posts {
        /// The topic itself, when its id resolves
        topic: Option<&'a Topic>,
        /// The owning forum, recovered via `topic.forum_id`
        forum: Option<&'a Forum>,
        /// Full filtered slice, dataset order
        items: Vec<&'a Post>,
        /// The current page's portion of `items`
        page_items: Vec<&'a Post>,
        /// `max(1, ceil(items.len() / page_size))`
        total_pages: usize,
    },
}

impl ResolvedView<'_> {
    /// Page count for the resolved slice; the forums view never paginates.
    pub fn total_pages(&self) -> usize {
        match self {
            ResolvedView::Forums { .. } => 1,
            ResolvedView::Topics { total_pages, .. } => *total_pages,
            ResolvedView::Posts { total_pages, .. } => *total_pages,
        }
    }

    /// True when the logical result set is empty.
    ///
    /// Callers render the fixed empty-state message for an empty view and
    /// must skip pagination controls entirely, even though `total_pages`
    /// still computes to 1.
    pub fn is_empty(&self) -> bool {
        match self {
            ResolvedView::Forums { categories } => categories.is_empty(),
            ResolvedView::Topics { items, .. } => items.is_empty(),
            ResolvedView::Posts { items, .. } => items.is_empty(),
        }
    }

    /// True for views that paginate (topics and posts).
    pub fn paginates(&self) -> bool {
        !matches!(self, ResolvedView::Forums { .. })
    }
}

/// Page count for a slice: `ceil(len / page_size)`, minimum 1 so that
/// pagination controls degrade to "1 of 1" instead of dividing by zero.
pub fn total_page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size).max(1)
}

/// The portion of `items` visible on a 1-based page.
///
/// A page past the end yields an empty slice; out-of-range pages are not
/// clamped (a dataset can shrink between reloads and the stale page simply
/// shows as empty).
pub fn page_slice<'a, T>(items: &[&'a T], page: usize, page_size: usize) -> Vec<&'a T> {
    let start = (page.max(1) - 1).saturating_mul(page_size);
    items.iter().skip(start).take(page_size).copied().collect()
}

/// Resolve the content slice for the current navigation coordinates.
pub fn resolve<'a>(data: &'a ForumData, nav: &NavState, page_size: usize) -> ResolvedView<'a> {
    match nav.view {
        View::Forums => ResolvedView::Forums {
            categories: resolve_categories(data),
        },
        View::Topics => {
            let forum = nav.forum_id.as_deref().and_then(|id| data.forum(id));
            let items = match nav.forum_id.as_deref() {
                Some(id) => data.topics_in_forum(id),
                None => Vec::new(),
            };
            let page_items = page_slice(&items, nav.page, page_size);
            let total_pages = total_page_count(items.len(), page_size);
            ResolvedView::Topics {
                forum,
                items,
                page_items,
                total_pages,
            }
        }
        View::Posts => {
            let topic = nav.topic_id.as_deref().and_then(|id| data.topic(id));
            let forum = topic
                .and_then(|t| t.forum_id.as_deref())
                .and_then(|id| data.forum(id));
            let items = match nav.topic_id.as_deref() {
                Some(id) => data.posts_in_topic(id),
                None => Vec::new(),
            };
            let page_items = page_slice(&items, nav.page, page_size);
            let total_pages = total_page_count(items.len(), page_size);
            ResolvedView::Posts {
                topic,
                forum,
                items,
                page_items,
                total_pages,
            }
        }
    }
}

/// Categories for the forums view, with the bare-forums fallback.
fn resolve_categories(data: &ForumData) -> Vec<CategoryView<'_>> {
    if !data.categories.is_empty() {
        data.categories
            .iter()
            .map(|c| CategoryView {
                id: &c.id,
                name: &c.name,
                forums: &c.forums,
            })
            .collect()
    } else if !data.forums.is_empty() {
        vec![CategoryView {
            id: "default",
            name: "Forums",
            forums: &data.forums,
        }]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(json: &str) -> ForumData {
        serde_json::from_str(json).unwrap()
    }

    fn topics_nav(forum_id: &str, page: usize) -> NavState {
        let mut nav = NavState::new();
        nav.open_forum(forum_id);
        nav.set_page(page);
        nav
    }

    #[test]
    fn test_forums_view_with_categories() {
        let data = dataset(
            r#"{
                "categories": [
                    {"id": "c1", "name": "Main", "forums": [{"id": "f1", "name": "A"}]},
                    {"id": "c2", "name": "Other", "forums": []}
                ],
                "forums": [{"id": "f9", "name": "Flat"}]
            }"#,
        );
        let nav = NavState::new();
        match resolve(&data, &nav, 20) {
            ResolvedView::Forums { categories } => {
                // Categories win over the flat list
                assert_eq!(categories.len(), 2);
                assert_eq!(categories[0].name, "Main");
                assert_eq!(categories[0].forums.len(), 1);
                assert!(categories[1].forums.is_empty());
            }
            other => panic!("expected forums view, got {:?}", other),
        }
    }

    #[test]
    fn test_forums_view_bare_forums_get_default_category() {
        let data = dataset(r#"{"forums": [{"id": "f1", "name": "A"}, {"id": "f2", "name": "B"}]}"#);
        let nav = NavState::new();
        match resolve(&data, &nav, 20) {
            ResolvedView::Forums { categories } => {
                assert_eq!(categories.len(), 1);
                assert_eq!(categories[0].id, "default");
                assert_eq!(categories[0].name, "Forums");
                assert_eq!(categories[0].forums.len(), 2);
            }
            other => panic!("expected forums view, got {:?}", other),
        }
    }

    #[test]
    fn test_forums_view_empty_dataset() {
        let data = dataset("{}");
        let resolved = resolve(&data, &NavState::new(), 20);
        assert!(resolved.is_empty());
        assert!(!resolved.paginates());
        assert_eq!(resolved.total_pages(), 1);
    }

    #[test]
    fn test_topics_filter_preserves_dataset_order() {
        // Scenario from the contract: two topics in source order, one page
        let data = dataset(
            r#"{
                "forums": [{"id": "f1", "name": "General", "topic_count": 2}],
                "topics": [
                    {"id": "t1", "forum_id": "f1", "title": "Hi", "created_at": "2024-01-01T00:00:00Z"},
                    {"id": "t2", "forum_id": "f1", "title": "Bye", "created_at": "2024-01-02T00:00:00Z"}
                ]
            }"#,
        );
        match resolve(&data, &topics_nav("f1", 1), 20) {
            ResolvedView::Topics {
                forum,
                page_items,
                total_pages,
                ..
            } => {
                assert_eq!(forum.unwrap().name, "General");
                let ids: Vec<&str> = page_items.iter().map(|t| t.id.as_str()).collect();
                assert_eq!(ids, vec!["t1", "t2"]);
                assert_eq!(total_pages, 1);
            }
            other => panic!("expected topics view, got {:?}", other),
        }
    }

    #[test]
    fn test_topics_pagination_no_clamp() {
        // 45 topics, page size 20: pages 1-3 exist; page 4 is empty but
        // total_pages stays 3 (no auto-clamp on out-of-range pages)
        let topics: Vec<String> = (0..45)
            .map(|i| format!(r#"{{"id": "t{i}", "forum_id": "f1", "title": "T{i}"}}"#))
            .collect();
        let json = format!(
            r#"{{"forums": [{{"id": "f1", "name": "Big"}}], "topics": [{}]}}"#,
            topics.join(",")
        );
        let data = dataset(&json);

        for (page, expected_len) in [(1, 20), (2, 20), (3, 5), (4, 0)] {
            match resolve(&data, &topics_nav("f1", page), 20) {
                ResolvedView::Topics {
                    items,
                    page_items,
                    total_pages,
                    ..
                } => {
                    assert_eq!(items.len(), 45);
                    assert_eq!(page_items.len(), expected_len, "page {}", page);
                    assert_eq!(total_pages, 3);
                }
                other => panic!("expected topics view, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_page_item_length_property() {
        let items_src: Vec<u32> = (0..37).collect();
        let items: Vec<&u32> = items_src.iter().collect();
        let page_size = 10;
        let total = total_page_count(items.len(), page_size);
        assert_eq!(total, 4);
        for page in 1..=total {
            let page_items = page_slice(&items, page, page_size);
            let expected = page_size.min(items.len() - (page - 1) * page_size);
            assert_eq!(page_items.len(), expected);
            assert!(page_items.len() <= page_size);
        }
    }

    #[test]
    fn test_total_page_count_minimum_one() {
        assert_eq!(total_page_count(0, 20), 1);
        assert_eq!(total_page_count(1, 20), 1);
        assert_eq!(total_page_count(20, 20), 1);
        assert_eq!(total_page_count(21, 20), 2);
    }

    #[test]
    fn test_empty_topics_slice_signals_empty() {
        let data = dataset(r#"{"forums": [{"id": "f1", "name": "Quiet"}], "topics": []}"#);
        let resolved = resolve(&data, &topics_nav("f1", 1), 20);
        assert!(resolved.is_empty());
        assert!(resolved.paginates());
        assert_eq!(resolved.total_pages(), 1);
    }

    #[test]
    fn test_posts_view_recovers_forum_from_topic() {
        let data = dataset(
            r#"{
                "forums": [{"id": "f1", "name": "General"}],
                "topics": [{"id": "t1", "forum_id": "f1", "title": "Hi"}],
                "posts": [
                    {"id": "p1", "topic_id": "t1", "content": "first"},
                    {"id": "p2", "topic_id": "t1", "content": "second"}
                ]
            }"#,
        );
        let mut nav = NavState::new();
        // Stale forum pointer; the posts view must not trust it
        nav.open_forum("ghost");
        nav.open_topic("t1");
        match resolve(&data, &nav, 20) {
            ResolvedView::Posts {
                topic,
                forum,
                page_items,
                ..
            } => {
                assert_eq!(topic.unwrap().id, "t1");
                assert_eq!(forum.unwrap().id, "f1");
                let ids: Vec<&str> = page_items.iter().map(|p| p.id.as_str()).collect();
                assert_eq!(ids, vec!["p1", "p2"]);
            }
            other => panic!("expected posts view, got {:?}", other),
        }
    }

    #[test]
    fn test_posts_dangling_topic_yields_empty() {
        let data = dataset(r#"{"posts": [{"id": "p1", "topic_id": "t1"}]}"#);
        let mut nav = NavState::new();
        nav.open_topic("missing");
        let resolved = resolve(&data, &nav, 20);
        assert!(resolved.is_empty());
    }
}
