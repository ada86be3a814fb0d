//! UI rendering for the forum reader.
//!
//! The render entry point consumes a [`ViewState`] snapshot rather than the
//! app itself, so everything it draws was derived in one place for the
//! frame: breadcrumbs on top, the resolved content slice in the middle,
//! pagination strip and status footer at the bottom.

mod breadcrumbs;
mod forums;
mod helpers;
mod pagination;
mod posts;
mod status;
mod theme;
mod topics;

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::app::{LoadPhase, ViewState};
use crate::resolver::ResolvedView;

/// Render one frame from the view state.
pub fn render(frame: &mut Frame, view: &ViewState) {
    let area = frame.area();

    if let LoadPhase::Failed(message) = &view.phase {
        status::render_error(frame, area, message);
        return;
    }
    let Some(resolved) = &view.resolved else {
        // First load still in flight
        status::render_loading(frame, area);
        return;
    };

    let footer_rows = if view.controls.is_some() { 2 } else { 1 };
    let [crumb_area, content_area, bottom_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(footer_rows),
    ])
    .areas(area);

    breadcrumbs::render(frame, crumb_area, &view.breadcrumbs);

    match resolved {
        ResolvedView::Forums { categories } => {
            forums::render(frame, content_area, categories, view.selected);
        }
        ResolvedView::Topics {
            forum,
            items,
            page_items,
            ..
        } => {
            topics::render(
                frame,
                content_area,
                *forum,
                page_items,
                items.is_empty(),
                view.selected,
            );
        }
        ResolvedView::Posts {
            topic,
            items,
            page_items,
            ..
        } => {
            posts::render(
                frame,
                content_area,
                *topic,
                page_items,
                items.is_empty(),
                view.selected,
            );
        }
    }

    if let Some(controls) = &view.controls {
        let [strip_area, footer_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(bottom_area);
        pagination::render(frame, strip_area, controls);
        status::render_footer(frame, footer_area, view);
    } else {
        status::render_footer(frame, bottom_area, view);
    }
}
