//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CURSOR: &str = "▌";

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = match &field.value {
        FieldValue::Text(text) => text_line(text, is_active),
        FieldValue::Tags { tags, draft } => tags_line(tags, draft, is_active),
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn text_line(text: &str, is_active: bool) -> Line<'_> {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    if text.is_empty() && !is_active {
        return Line::from(Span::styled("(empty)", Style::default().fg(Color::DarkGray)));
    }

    let mut spans = vec![Span::styled(text, style)];
    if is_active {
        spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn tags_line<'a>(tags: &'a [String], draft: &'a str, is_active: bool) -> Line<'a> {
    if tags.is_empty() && draft.is_empty() && !is_active {
        return Line::from(Span::styled("(empty)", Style::default().fg(Color::DarkGray)));
    }

    let tag_style = Style::default().fg(Color::Black).bg(Color::Gray);
    let mut spans = Vec::with_capacity(tags.len() * 2 + 2);
    for tag in tags {
        spans.push(Span::styled(format!(" {tag} "), tag_style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(draft, Style::default().fg(Color::Cyan)));
    if is_active {
        spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_inactive_empty_text_shows_placeholder() {
        assert_eq!(line_text(&text_line("", false)), "(empty)");
    }

    #[test]
    fn test_active_text_has_cursor() {
        assert_eq!(line_text(&text_line("blog", true)), "blog▌");
        assert_eq!(line_text(&text_line("blog", false)), "blog");
    }

    #[test]
    fn test_tags_line_renders_chips_and_draft() {
        let tags = vec!["a.com".to_string(), "b.com".to_string()];
        assert_eq!(line_text(&tags_line(&tags, "c.", true)), " a.com   b.com  c.▌");
    }

    #[test]
    fn test_inactive_empty_tags_shows_placeholder() {
        assert_eq!(line_text(&tags_line(&[], "", false)), "(empty)");
    }
}
