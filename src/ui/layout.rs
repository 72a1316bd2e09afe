//! Page geometry and status bar
//!
//! `PageLayout` is computed from the terminal area alone so that drawing and
//! mouse hit-testing agree on where everything is.

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use crate::labels::{ConfigEntry, LabelToken};
use crate::platform::COPY_ALL_SHORTCUT;
use crate::state::{FormFocus, NotificationKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Field height in rows (top border + content + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Areas of the single page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub title: Rect,
    pub app_name: Rect,
    pub domains: Rect,
    pub copy_all: Rect,
    pub labels: Rect,
    pub status_bar: Rect,
}

impl PageLayout {
    pub fn new(area: Rect) -> Self {
        // Reserve bottom line for status bar
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FIELD_HEIGHT),  // Title
                Constraint::Length(FIELD_HEIGHT),  // App
                Constraint::Length(FIELD_HEIGHT),  // Domain
                Constraint::Length(BUTTON_HEIGHT), // Copy all
                Constraint::Min(0),                // Labels
            ])
            .horizontal_margin(1)
            .split(outer[0]);

        Self {
            title: chunks[0],
            app_name: chunks[1],
            domains: chunks[2],
            copy_all: chunks[3],
            labels: chunks[4],
            status_bar: outer[1],
        }
    }

    /// Inner area of the bordered labels panel
    pub fn labels_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.labels)
    }

    /// Which focusable area contains the given cell
    pub fn focus_at(&self, col: u16, row: u16) -> Option<FormFocus> {
        let pos = Position::new(col, row);
        if self.app_name.contains(pos) {
            Some(FormFocus::AppName)
        } else if self.domains.contains(pos) {
            Some(FormFocus::Domains)
        } else if self.copy_all.contains(pos) {
            Some(FormFocus::CopyAll)
        } else if self.labels.contains(pos) {
            Some(FormFocus::Labels)
        } else {
            None
        }
    }
}

/// Screen area of one clickable label token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenArea {
    pub entry: usize,
    pub token: LabelToken,
    pub area: Rect,
}

/// Text drawn for a token chip
pub fn token_chip(text: &str) -> String {
    format!(" {text} ")
}

/// Lay out label chips one entry per row: key chip, one space, value chip.
/// Rows and chips outside `inner` are clipped.
pub fn label_token_areas(inner: Rect, entries: &[ConfigEntry]) -> Vec<TokenArea> {
    let mut areas = Vec::new();

    for (idx, entry) in entries.iter().enumerate().take(inner.height as usize) {
        let y = inner.y + idx as u16;
        let mut x = inner.x;

        for token in [LabelToken::Key, LabelToken::Value] {
            let width = Span::raw(token_chip(entry.token(token))).width() as u16;
            let area = Rect::new(x, y, width, 1).intersection(inner);
            if area.width > 0 {
                areas.push(TokenArea {
                    entry: idx,
                    token,
                    area,
                });
            }
            x = x.saturating_add(width).saturating_add(1);
        }
    }

    areas
}

/// Find the label token under the given cell
pub fn token_at(
    inner: Rect,
    entries: &[ConfigEntry],
    col: u16,
    row: u16,
) -> Option<(usize, LabelToken)> {
    let pos = Position::new(col, row);
    label_token_areas(inner, entries)
        .into_iter()
        .find(|t| t.area.contains(pos))
        .map(|t| (t.entry, t.token))
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_focus_hints(app.state.form.focus());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(notification) = &app.state.notification {
        let color = match notification.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Failure => Color::Red,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            notification.message.as_str(),
            Style::default().fg(color),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: area.height,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused area
fn get_focus_hints(focus: FormFocus) -> String {
    match focus {
        FormFocus::AppName => format!("Tab:next  ^U:clear  {COPY_ALL_SHORTCUT}:copy all"),
        FormFocus::Domains => {
            format!("Enter:add  Bksp:remove  ^U:clear  Tab:next  {COPY_ALL_SHORTCUT}:copy all")
        }
        FormFocus::CopyAll => "Enter:copy all  Tab:next".to_string(),
        FormFocus::Labels => "j/k:row  h/l:key/value  Enter:copy  Tab:next".to_string(),
    }
}
