//! UI module for rendering the TUI

mod components;
mod forms;
mod labels_panel;
mod layout;

pub use layout::{token_at, PageLayout};

use crate::app::App;
use crate::state::{Form, FormFocus};
use components::render_button;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let page = PageLayout::new(frame.area());
    let focus = app.state.form.focus();

    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Traefik docker labels",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ]);
    frame.render_widget(title, page.title);

    let form = &app.state.form;
    for (idx, area) in [page.app_name, page.domains].into_iter().enumerate() {
        if let Some(field) = form.get_field(idx) {
            forms::draw_field(frame, area, field, form.active_field() == idx);
        }
    }

    render_button(
        frame,
        page.copy_all,
        "Copy All Labels",
        focus == FormFocus::CopyAll,
        app.state.can_export(),
    );

    labels_panel::draw(frame, page.labels, app);

    layout::draw_status_bar(frame, page.status_bar, app);
}
