//! Generated labels view

use super::layout::token_chip;
use crate::app::App;
use crate::labels::LabelToken;
use crate::state::FormFocus;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the labels panel: one row per label, key and value as clickable chips
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.form.focus() == FormFocus::Labels;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Labels ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.state.entries.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(Span::styled(
                "Enter an app name and at least one domain",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "to generate docker labels.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let chip_style = Style::default().fg(Color::White).bg(Color::Blue);
    let selected_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = app
        .state
        .entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let style_for = |token: LabelToken| {
                if is_focused
                    && idx == app.state.selected_entry
                    && token == app.state.selected_token
                {
                    selected_style
                } else {
                    chip_style
                }
            };
            Line::from(vec![
                Span::styled(token_chip(&entry.key), style_for(LabelToken::Key)),
                Span::raw(" "),
                Span::styled(token_chip(&entry.value), style_for(LabelToken::Value)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
