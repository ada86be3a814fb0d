//! Loading screen, error screen, and the status footer.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{LoadPhase, ViewState};

use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_NOTICE};

/// Full-screen loading message shown before the first dataset arrives.
pub fn render_loading(frame: &mut Frame, area: Rect) {
    let [center] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let msg = Paragraph::new(Line::styled(
        "Loading forum data…",
        Style::default().fg(COLOR_DIM),
    ))
    .centered();
    frame.render_widget(msg, center);
}

/// Full-screen error replacing the content area until the user retries.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let [msg_area, hint_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
    frame.render_widget(
        Paragraph::new(Line::styled(
            message.to_string(),
            Style::default()
                .fg(COLOR_ERROR)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        msg_area,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            "Press r to try again",
            Style::default().fg(COLOR_DIM),
        ))
        .centered(),
        hint_area,
    );
}

/// One-line footer: notice or freshness marker on the left, keybind hints
/// on the right.
pub fn render_footer(frame: &mut Frame, area: Rect, view: &ViewState) {
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(52)]).areas(area);

    let status = if let Some(notice) = &view.notice {
        Line::styled(notice.clone(), Style::default().fg(COLOR_NOTICE))
    } else if view.phase == LoadPhase::Loading {
        Line::styled("Refreshing…", Style::default().fg(COLOR_DIM))
    } else if let Some(updated) = &view.last_updated {
        Line::styled(
            format!("Last updated: {}", updated),
            Style::default().fg(COLOR_DIM),
        )
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(status), left);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "enter open · esc back · ←/→ page · s share · q quit",
            Style::default().fg(COLOR_DIM),
        ))
        .right_aligned(),
        right,
    );
}
