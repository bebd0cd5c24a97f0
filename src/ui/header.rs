//! Header and status bar

use super::components::render_icon_button;
use super::layout::FormLayout;
use crate::app::App;
use crate::state::Focus;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TITLE: &str = "Register card form";

/// Draw the header: menu trigger on the left, centred title
pub fn draw_header(frame: &mut Frame, layout: &FormLayout) {
    let header = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(header, layout.header);

    render_icon_button(frame, layout.burger, "☰");

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    // Title sits on the middle row of the header
    let title_row = Rect {
        y: layout.title.y + 1,
        height: 1.min(layout.title.height),
        ..layout.title
    };
    frame.render_widget(title, title_row);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for what currently has focus
fn hints(app: &App) -> &'static str {
    if app.state.menu.open {
        return "j/k:nav  Esc:close menu";
    }
    match app.state.focus {
        Some(Focus::Field(_)) => "Tab:next  Esc:leave field  Enter/^S:submit  F2:menu",
        Some(Focus::Submit) => "Enter:submit  Tab:next  F2:menu",
        None => "Tab:focus form  F2:menu",
    }
}
