//! UI module for rendering the TUI

mod components;
mod forms;
mod header;
pub mod layout;
mod menu;

use crate::app::App;
use layout::FormLayout;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = FormLayout::new(frame.area());

    header::draw_header(frame, &layout);
    forms::draw_card_form(frame, &layout, app);
    header::draw_status_bar(frame, layout.status_bar, app);

    // Overlays last so they cover the form
    if app.state.menu.open {
        menu::draw(frame, app);
    }
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
