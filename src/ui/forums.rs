//! Forums overview rendering.
//!
//! Categories render as section headers with their forums listed beneath,
//! in document order. The selection index counts forums only, flattened
//! across categories, so headers never take focus.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::format::{self, UNKNOWN};
use crate::resolver::CategoryView;

use super::helpers::truncate_to_width;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TITLE};

pub fn render(frame: &mut Frame, area: Rect, categories: &[CategoryView], selected: usize) {
    let block = Block::bordered()
        .border_style(Style::default().fg(COLOR_BORDER))
        .title("Forums");

    if categories.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No forums available.",
            Style::default().fg(COLOR_DIM),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mut items: Vec<ListItem> = Vec::new();
    let mut list_selected = None;
    let mut flat = 0usize;

    for category in categories {
        items.push(ListItem::new(Line::styled(
            category.name.to_string(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )));

        if category.forums.is_empty() {
            items.push(ListItem::new(Line::styled(
                "  No forums in this category",
                Style::default().fg(COLOR_DIM),
            )));
            continue;
        }

        for forum in category.forums {
            if flat == selected {
                list_selected = Some(items.len());
            }

            let mut lines = vec![Line::from(Span::styled(
                format!("  {}", forum.name),
                Style::default().fg(COLOR_TITLE),
            ))];
            if !forum.description.is_empty() {
                lines.push(Line::styled(
                    format!("    {}", forum.description),
                    Style::default().fg(COLOR_DIM),
                ));
            }
            let mut meta = format!("    {} topics · {} posts", forum.topic_count, forum.post_count);
            if let Some(last) = &forum.last_post {
                meta.push_str(&format!(
                    " · last: {} by {} ({})",
                    truncate_to_width(&last.title, 40),
                    last.author.as_deref().unwrap_or(UNKNOWN),
                    format::format_date(last.created_at.as_deref()),
                ));
            }
            lines.push(Line::styled(meta, Style::default().fg(COLOR_DIM)));

            items.push(ListItem::new(lines));
            flat += 1;
        }
    }

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
    );
    let mut state = ListState::default();
    state.select(list_selected);
    frame.render_stateful_widget(list, area, &mut state);
}
