//! Menu drawer overlay

use super::components::render_icon_button;
use super::layout::MenuLayout;
use crate::app::App;
use crate::state::MENU_LINKS;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the drawer over a dimmed screen
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = MenuLayout::new(area);

    // The dimmed remainder of the screen acts as the close target
    frame
        .buffer_mut()
        .set_style(area, Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(Clear, layout.panel);
    let panel = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(panel, layout.panel);

    render_icon_button(frame, layout.back, "←");

    let title = Paragraph::new("Menu")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    frame.render_widget(title, layout.title);

    frame.render_widget(Paragraph::new("This is menu content"), layout.body);

    let links: Vec<Line> = MENU_LINKS
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            if idx == app.state.menu.selected_link {
                Line::from(Span::styled(
                    format!("› {label}"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {label}"))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(links), layout.links);
}
