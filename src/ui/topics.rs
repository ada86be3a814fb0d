//! Topic list rendering for one forum.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::format::{self, UNKNOWN};
use crate::models::{Forum, Topic};

use super::helpers::truncate_to_width;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_TITLE};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    forum: Option<&Forum>,
    page_items: &[&Topic],
    empty: bool,
    selected: usize,
) {
    let title = forum.map(|f| f.name.as_str()).unwrap_or("Topics");
    let mut block = Block::bordered()
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(title.to_string());
    if let Some(description) = forum.map(|f| f.description.as_str()) {
        if !description.is_empty() {
            block = block.title_bottom(
                Line::styled(description.to_string(), Style::default().fg(COLOR_DIM)),
            );
        }
    }

    if empty {
        let msg = Paragraph::new(Line::styled(
            "No topics in this forum.",
            Style::default().fg(COLOR_DIM),
        ))
        .block(block);
        frame.render_widget(msg, area);
        return;
    }

    let items: Vec<ListItem> = page_items
        .iter()
        .map(|topic| {
            let title_width = area.width.saturating_sub(4) as usize;
            let mut lines = vec![Line::styled(
                truncate_to_width(&topic.title, title_width),
                Style::default().fg(COLOR_TITLE),
            )];
            lines.push(Line::styled(
                format!(
                    "  by {} · {} · {} replies · {} views",
                    topic.author.as_deref().unwrap_or(UNKNOWN),
                    format::format_date(topic.created_at.as_deref()),
                    topic.reply_count,
                    topic.views,
                ),
                Style::default().fg(COLOR_DIM),
            ));
            if let Some(last) = &topic.last_post {
                lines.push(Line::styled(
                    format!(
                        "  last post by {} ({})",
                        last.author.as_deref().unwrap_or(UNKNOWN),
                        format::format_date(last.created_at.as_deref()),
                    ),
                    Style::default().fg(COLOR_DIM),
                ));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
    );
    let mut state = ListState::default();
    state.select(page_items.get(selected).map(|_| selected));
    frame.render_stateful_widget(list, area, &mut state);
}
