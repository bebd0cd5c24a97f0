//! Card registration form rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::state::{FieldId, Focus};
use crate::ui::components::render_button;
use crate::ui::layout::FormLayout;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const NOTE: &str =
    "Submit button is disabled when inputs are invalid, values are printed to the log when submitted.";

/// Draw the form card: welcome line, inputs with inline errors, submit button and note
pub fn draw_card_form(frame: &mut Frame, layout: &FormLayout, app: &App) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(card, layout.card);

    let welcome = Paragraph::new(Line::from(Span::styled(
        format!("Welcome {}", app.config.first_name()),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(welcome, layout.welcome);

    let form = &app.state.form;
    let focused = app.state.focused_field();
    for field in FieldId::ALL {
        let error = app.field_error(field);
        draw_field(
            frame,
            layout.field_area(field),
            field,
            form.value(field),
            focused == Some(field),
            error.is_some(),
        );
        draw_field_error(frame, layout.error_area(field), error);
    }

    render_button(
        frame,
        layout.submit,
        "Submit",
        app.state.focus == Some(Focus::Submit),
        app.can_submit(),
    );

    let note = Paragraph::new(NOTE)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    frame.render_widget(note, layout.note);
}
