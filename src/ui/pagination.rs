//! Pagination strip rendering.
//!
//! Draws the descriptors from [`crate::pagination::build`] as one line:
//! prev/next arrows plus the page-number window with ellipsis gaps.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::pagination::{PageControls, PageEntry};

use super::theme::{COLOR_ACCENT, COLOR_DIM};

pub fn render(frame: &mut Frame, area: Rect, controls: &PageControls) {
    let enabled = Style::default().fg(COLOR_ACCENT);
    let disabled = Style::default().fg(COLOR_DIM);
    let active = Style::default()
        .fg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED);

    let mut spans = vec![Span::styled(
        "◀ Prev",
        if controls.prev_enabled { enabled } else { disabled },
    )];
    spans.push(Span::raw("  "));

    for entry in &controls.entries {
        match entry {
            PageEntry::Page { number, active: is_active } => {
                let style = if *is_active { active } else { disabled };
                spans.push(Span::styled(format!(" {} ", number), style));
            }
            PageEntry::Ellipsis => {
                spans.push(Span::styled(" … ", disabled));
            }
        }
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        "Next ▶",
        if controls.next_enabled { enabled } else { disabled },
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
}
