//! Breadcrumb trail rendering.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::nav::Breadcrumb;

use super::theme::{COLOR_ACCENT, COLOR_DIM};

/// Render the breadcrumb trail on one line.
///
/// The last crumb is the current location and renders in the accent color;
/// earlier crumbs are dim, matching their role as navigation targets.
pub fn render(frame: &mut Frame, area: Rect, crumbs: &[Breadcrumb]) {
    let mut spans: Vec<Span> = Vec::new();
    let last = crumbs.len().saturating_sub(1);
    for (i, crumb) in crumbs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(COLOR_DIM)));
        }
        let style = if i == last {
            Style::default().fg(COLOR_ACCENT)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(crumb.label.clone(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
