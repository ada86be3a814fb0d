//! End-to-end navigation flow: load, drill into a forum and topic, page
//! through results, and walk back out. Drives the App directly with the
//! mock HTTP client; every effective navigation re-fetches the document.

use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::mpsc;

use velt::adapters::mock::{MockHttpClient, MockResponse};
use velt::app::{App, AppMessage, LoadPhase, NavIntent};
use velt::config::Config;
use velt::freshness::FreshnessStore;
use velt::loader::DataLoader;
use velt::nav::{CrumbTarget, View};
use velt::resolver::ResolvedView;
use velt::traits::Response;

const URL: &str = "http://localhost:8000/forum_data.json";

const DATASET: &str = r#"{
    "categories": [{
        "id": "c1",
        "name": "Community",
        "forums": [
            {"id": "f1", "name": "General", "description": "Anything goes"},
            {"id": "f2", "name": "Support"}
        ]
    }],
    "topics": [
        {"id": "t1", "forum_id": "f1", "title": "Welcome"},
        {"id": "t2", "forum_id": "f1", "title": "Rules"},
        {"id": "t3", "forum_id": "f1", "title": "Introductions"},
        {"id": "t4", "forum_id": "f2", "title": "Help me"}
    ],
    "posts": [
        {"id": "p1", "topic_id": "t1", "author": "ada", "content": "<p>Hello</p>"},
        {"id": "p2", "topic_id": "t1", "author": "bob", "content": "<p>Hi back</p>"}
    ]
}"#;

fn test_app(dir: &tempfile::TempDir) -> (App, mpsc::UnboundedReceiver<AppMessage>, MockHttpClient) {
    let client = MockHttpClient::new();
    client.set_response(
        URL,
        MockResponse::Success(Response::new(200, Bytes::from(DATASET))),
    );
    let loader = DataLoader::new(
        Arc::new(client.clone()),
        URL,
        FreshnessStore::at(dir.path().join("last_updated")),
    );
    let mut app = App::with_loader(Config::default().with_page_size(2), loader);
    let rx = app.message_rx.take().unwrap();
    (app, rx, client)
}

/// Wait for the in-flight load and apply its result.
async fn pump(app: &mut App, rx: &mut mpsc::UnboundedReceiver<AppMessage>) {
    let msg = rx.recv().await.expect("load task should post a message");
    app.handle_message(msg);
}

#[tokio::test]
async fn test_full_drill_down_and_back() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, mut rx, client) = test_app(&dir);

    app.start_load();
    pump(&mut app, &mut rx).await;
    assert_eq!(app.phase, LoadPhase::Ready);
    assert_eq!(app.nav.view, View::Forums);
    assert_eq!(app.selectable_len(), 2);

    // Open the first forum via selection
    app.activate_selection();
    pump(&mut app, &mut rx).await;
    assert_eq!(app.nav.view, View::Topics);
    assert_eq!(app.nav.forum_id.as_deref(), Some("f1"));

    {
        let view = app.view_state();
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.breadcrumbs.len(), 2);
        assert_eq!(view.breadcrumbs[1].label, "General");
        match view.resolved.as_ref().unwrap() {
            ResolvedView::Topics { page_items, .. } => {
                assert_eq!(page_items.len(), 2);
                assert_eq!(page_items[0].title, "Welcome");
            }
            other => panic!("expected topics view, got {:?}", other),
        }
    }

    // Open the first topic
    app.activate_selection();
    pump(&mut app, &mut rx).await;
    assert_eq!(app.nav.view, View::Posts);
    assert_eq!(app.nav.topic_id.as_deref(), Some("t1"));

    {
        let view = app.view_state();
        assert_eq!(view.breadcrumbs.len(), 3);
        assert_eq!(view.breadcrumbs[1].target, CrumbTarget::Forum("f1".to_string()));
        assert_eq!(view.breadcrumbs[2].label, "Welcome");
        match view.resolved.as_ref().unwrap() {
            ResolvedView::Posts { page_items, .. } => {
                assert_eq!(page_items.len(), 2);
                assert_eq!(page_items[0].author.as_deref(), Some("ada"));
            }
            other => panic!("expected posts view, got {:?}", other),
        }
    }

    // Back walks up to the owning forum, then home
    app.go_back();
    pump(&mut app, &mut rx).await;
    assert_eq!(app.nav.view, View::Topics);
    assert_eq!(app.nav.forum_id.as_deref(), Some("f1"));

    app.go_back();
    pump(&mut app, &mut rx).await;
    assert_eq!(app.nav.view, View::Forums);
    assert!(app.nav.forum_id.is_none());

    // One fetch per effective navigation
    assert_eq!(client.get_requests().len(), 5);
}

#[tokio::test]
async fn test_paging_refetches_and_clamps_at_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, mut rx, client) = test_app(&dir);

    app.start_load();
    pump(&mut app, &mut rx).await;

    app.handle_intent(NavIntent::OpenForum("f1".to_string()));
    pump(&mut app, &mut rx).await;
    let _ = app.view_state(); // refresh total_pages (2)

    // Prev on page 1 is a no-op: no reload
    let before = client.get_requests().len();
    app.handle_intent(NavIntent::PrevPage);
    assert_eq!(client.get_requests().len(), before);
    assert_eq!(app.nav.page, 1);

    app.handle_intent(NavIntent::NextPage);
    pump(&mut app, &mut rx).await;
    assert_eq!(app.nav.page, 2);
    {
        let view = app.view_state();
        match view.resolved.as_ref().unwrap() {
            ResolvedView::Topics { page_items, .. } => {
                assert_eq!(page_items.len(), 1);
                assert_eq!(page_items[0].title, "Introductions");
            }
            other => panic!("expected topics view, got {:?}", other),
        }
    }

    // Next on the last page is a no-op
    let before = client.get_requests().len();
    app.handle_intent(NavIntent::NextPage);
    assert_eq!(client.get_requests().len(), before);
    assert_eq!(app.nav.page, 2);

    // Jumping to the current page is also a no-op
    app.handle_intent(NavIntent::SetPage(2));
    assert_eq!(client.get_requests().len(), before);
}

#[tokio::test]
async fn test_retry_after_failure() {
    let dir = tempfile::tempdir().unwrap();
    let client = MockHttpClient::new();
    client.set_response(
        URL,
        MockResponse::Success(Response::new(503, Bytes::from("unavailable"))),
    );
    let loader = DataLoader::new(
        Arc::new(client.clone()),
        URL,
        FreshnessStore::at(dir.path().join("last_updated")),
    );
    let mut app = App::with_loader(Config::default(), loader);
    let mut rx = app.message_rx.take().unwrap();

    app.start_load();
    pump(&mut app, &mut rx).await;
    assert!(matches!(app.phase, LoadPhase::Failed(_)));

    // The server recovers; retry succeeds
    client.set_response(
        URL,
        MockResponse::Success(Response::new(200, Bytes::from(DATASET))),
    );
    app.handle_intent(NavIntent::Retry);
    assert_eq!(app.phase, LoadPhase::Loading);
    pump(&mut app, &mut rx).await;
    assert_eq!(app.phase, LoadPhase::Ready);
    assert!(app.dataset.is_some());
}

#[tokio::test]
async fn test_dangling_forum_id_shows_empty_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, mut rx, _client) = test_app(&dir);

    app.start_load();
    pump(&mut app, &mut rx).await;

    app.handle_intent(NavIntent::OpenForum("missing".to_string()));
    pump(&mut app, &mut rx).await;
    assert_eq!(app.phase, LoadPhase::Ready);

    let view = app.view_state();
    match view.resolved.as_ref().unwrap() {
        ResolvedView::Topics { forum, items, .. } => {
            assert!(forum.is_none());
            assert!(items.is_empty());
        }
        other => panic!("expected topics view, got {:?}", other),
    }
    assert!(view.controls.is_none());
}
