//! Post list rendering for one topic.
//!
//! Post bodies arrive as HTML fragments from the export. The renderer
//! strips tags down to plain text, turning paragraph and line breaks into
//! newlines and decoding the common entities.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::format::{self, UNKNOWN};
use crate::models::{Post, Topic};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TITLE};

/// Rank label used when a post carries none.
const DEFAULT_RANK: &str = "Member";

pub fn render(
    frame: &mut Frame,
    area: Rect,
    topic: Option<&Topic>,
    page_items: &[&Post],
    empty: bool,
    selected: usize,
) {
    let title = topic.map(|t| t.title.as_str()).unwrap_or("Posts");
    let block = Block::bordered()
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(title.to_string());

    if empty {
        let msg = Paragraph::new(Line::styled(
            "No posts in this topic.",
            Style::default().fg(COLOR_DIM),
        ))
        .block(block);
        frame.render_widget(msg, area);
        return;
    }

    let items: Vec<ListItem> = page_items
        .iter()
        .map(|post| {
            let number = post
                .number
                .map(|n| format!("#{} ", n))
                .unwrap_or_default();
            let header = Line::from(vec![
                Span::styled(number, Style::default().fg(COLOR_DIM)),
                Span::styled(
                    post.author.as_deref().unwrap_or(UNKNOWN).to_string(),
                    Style::default()
                        .fg(COLOR_TITLE)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" [{}]", post.author_rank.as_deref().unwrap_or(DEFAULT_RANK)),
                    Style::default().fg(COLOR_HEADER),
                ),
                Span::styled(
                    format!(" · {}", format::format_date(post.created_at.as_deref())),
                    Style::default().fg(COLOR_DIM),
                ),
            ]);

            let mut lines = vec![header];
            for body_line in html_to_text(&post.content).lines() {
                lines.push(Line::from(format!("  {}", body_line)));
            }
            lines.push(Line::default());
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default();
    state.select(page_items.get(selected).map(|_| selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Reduce an HTML fragment to plain text.
///
/// `<br>` and closing block tags become newlines, all other tags are
/// dropped, and the handful of entities forum exports actually emit are
/// decoded. Blank lines are dropped.
pub fn html_to_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut chars = html.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '<' {
            out.push(c);
            continue;
        }
        let rest = &html[i..];
        let Some(end) = rest.find('>') else {
            // Unterminated tag; emit the remainder as-is
            out.push_str(rest);
            break;
        };
        let tag = rest[1..end].trim().to_ascii_lowercase();
        if tag.starts_with("br") || tag == "/p" || tag == "/div" || tag == "/li" {
            out.push('\n');
        }
        while let Some(&(j, _)) = chars.peek() {
            if j > i + end {
                break;
            }
            chars.next();
        }
    }

    let decoded = decode_entities(&out);

    decoded
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(html_to_text("hello world"), "hello world");
    }

    #[test]
    fn test_paragraphs_and_breaks() {
        assert_eq!(
            html_to_text("<p>first</p><p>second<br>third</p>"),
            "first\nsecond\nthird"
        );
    }

    #[test]
    fn test_tags_stripped() {
        assert_eq!(
            html_to_text("<b>bold</b> and <a href=\"x\">link</a>"),
            "bold and link"
        );
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(
            html_to_text("a &amp; b &lt;c&gt; &quot;d&quot; &#39;e&#39;&nbsp;f"),
            "a & b <c> \"d\" 'e' f"
        );
    }

    #[test]
    fn test_blank_lines_dropped() {
        assert_eq!(
            html_to_text("<p>one</p><p></p><p></p><p>two</p>"),
            "one\ntwo"
        );
    }

    #[test]
    fn test_unterminated_tag_passes_through() {
        assert_eq!(html_to_text("broken <tag"), "broken <tag");
    }
}
