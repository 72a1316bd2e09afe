//! Application state and core logic

use crate::clipboard::{ClipboardError, ClipboardProvider};
use crate::config::TuiConfig;
use crate::labels::{export_all, LabelToken};
use crate::platform::COPY_MODIFIER;
use crate::state::{AppState, Form, FormFocus, Notification};
use crate::ui::{token_at, PageLayout};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::Duration;

/// Message shown after a successful copy
const COPIED_MESSAGE: &str = "Copied!";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Clipboard used by copy actions
    clipboard: Box<dyn ClipboardProvider>,
    /// Lifetime of copy notifications
    notification_duration: Duration,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig, clipboard: Box<dyn ClipboardProvider>) -> Self {
        let mut state = AppState::default();
        state.refresh_entries();

        Self {
            state,
            clipboard,
            notification_duration: config.notification_duration(),
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Request exit at the end of the current loop iteration
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.state.clear_expired_notification();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) {
        // Global copy-all shortcut works from any focus
        if key.modifiers.contains(COPY_MODIFIER) && key.code == KeyCode::Char('y') {
            self.copy_all().await;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.state.form.next_field();
                return;
            }
            KeyCode::BackTab => {
                self.state.form.prev_field();
                return;
            }
            _ => {}
        }

        match self.state.form.focus() {
            focus if focus.is_input() => self.handle_input_key(key),
            FormFocus::CopyAll => self.handle_copy_all_key(key).await,
            _ => self.handle_labels_key(key).await,
        }
    }

    /// Edit the focused text or tag field
    fn handle_input_key(&mut self, key: KeyEvent) {
        let Some(field) = self.state.form.get_active_field_mut() else {
            return;
        };
        let changed = match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                field.clear();
                true
            }
            KeyCode::Char(c) if is_plain_char(key.modifiers) => {
                field.push_char(c);
                // Draft text is not part of the form until committed
                !field.is_tags()
            }
            KeyCode::Backspace => {
                field.pop_char();
                true
            }
            KeyCode::Enter if field.is_tags() => field.commit_draft(),
            KeyCode::Enter => {
                self.state.form.next_field();
                false
            }
            _ => false,
        };
        if changed {
            self.on_form_changed();
        }
    }

    async fn handle_copy_all_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.copy_all().await;
        }
    }

    async fn handle_labels_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('h') | KeyCode::Left => self.state.selected_token = LabelToken::Key,
            KeyCode::Char('l') | KeyCode::Right => self.state.selected_token = LabelToken::Value,
            KeyCode::Char(' ') => self.state.selected_token.toggle(),
            KeyCode::Enter | KeyCode::Char('y') => self.copy_selected_token().await,
            _ => {}
        }
    }

    /// Handle a mouse event
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some((height, width)) = self.terminal_size else {
            return;
        };

        let page = PageLayout::new(Rect::new(0, 0, width, height));
        let Some(focus) = page.focus_at(mouse.column, mouse.row) else {
            return;
        };
        self.state.form.set_focus(focus);

        match focus {
            FormFocus::CopyAll => self.copy_all().await,
            FormFocus::Labels => {
                if let Some((entry, token)) = token_at(
                    page.labels_inner(),
                    &self.state.entries,
                    mouse.column,
                    mouse.row,
                ) {
                    self.state.selected_entry = entry;
                    self.state.selected_token = token;
                    self.copy_selected_token().await;
                }
            }
            FormFocus::AppName | FormFocus::Domains => {}
        }
    }

    /// Recompute labels after any change to committed form values
    fn on_form_changed(&mut self) {
        let had_entries = self.state.can_export();
        self.state.refresh_entries();
        if had_entries != self.state.can_export() {
            tracing::debug!(valid = self.state.can_export(), "label form validity changed");
        }
    }

    /// Copy every label as `key: value` lines; inert without labels
    pub async fn copy_all(&mut self) {
        if !self.state.can_export() {
            return;
        }
        let text = export_all(&self.state.entries);
        self.copy_to_clipboard(text).await;
    }

    /// Copy the selected key or value verbatim
    pub async fn copy_selected_token(&mut self) {
        if let Some(text) = self.state.selected_text() {
            let text = text.to_string();
            self.copy_to_clipboard(text).await;
        }
    }

    async fn copy_to_clipboard(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        let len = text.len();
        match self.clipboard.set_text(text).await {
            Ok(()) => {
                tracing::info!(bytes = len, "copied to clipboard");
                self.state.notification =
                    Some(Notification::success(COPIED_MESSAGE, self.notification_duration));
            }
            Err(e) => self.report_copy_failure(&e),
        }
    }

    fn report_copy_failure(&mut self, error: &ClipboardError) {
        tracing::warn!(%error, "clipboard write failed");
        self.state.notification = Some(Notification::failure(
            error.to_string(),
            self.notification_duration,
        ));
    }
}

/// Character keys without Ctrl/Alt edit text fields
fn is_plain_char(modifiers: KeyModifiers) -> bool {
    !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}
