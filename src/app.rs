//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, FieldId, FormAction, Focus, MENU_LINKS};
use crate::submit::{submit_form, JsonLinesSink, LogSink, MultiSink, SubmitSink};
use crate::ui::layout::{FormHit, FormLayout, MenuHit, MenuLayout};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    pub config: TuiConfig,
    /// Where submitted cards go
    sink: Box<dyn SubmitSink>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    pub fn new(config: TuiConfig, sink: Box<dyn SubmitSink>) -> Self {
        Self {
            state: AppState::new(),
            config,
            sink,
            quit: false,
            terminal_size: None,
        }
    }

    /// Build the app with the sinks named in the configuration
    pub fn from_config(config: TuiConfig) -> Self {
        let mut sink = MultiSink::new().with(LogSink);
        if let Some(path) = &config.submission_log {
            tracing::info!("Appending submissions to {}", path.display());
            sink = sink.with(JsonLinesSink::new(path));
        }
        Self::new(config, Box::new(sink))
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Every field passes validation; touched state is irrelevant
    pub fn can_submit(&self) -> bool {
        self.state.submit_enabled()
    }

    /// Inline error for a field, if it was touched and is invalid
    pub fn field_error(&self, field: FieldId) -> Option<&'static str> {
        self.state.form.error(field)
    }

    fn screen_area(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }

    /// Forward the form to the sink and reset it, if valid
    pub fn submit(&mut self) {
        let valid = self.can_submit();
        match submit_form(&mut self.state.form, valid, self.sink.as_mut()) {
            Ok(Some(_)) => {
                self.state.status_message = Some("Card submitted".to_string());
                // The reset form disables the button, which drops its focus
                if self.state.focus == Some(Focus::Submit) {
                    self.state.blur();
                }
            }
            Ok(None) => tracing::debug!("Submit ignored: form is invalid"),
            Err(e) => {
                tracing::warn!("Submission failed: {e}");
                self.state.push_error(format!("Failed to submit card: {e}"));
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.quit = true;
            return Ok(());
        }

        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        if self.state.menu.open {
            return self.handle_menu_key(key);
        }

        match key.code {
            KeyCode::F(2) => self.state.open_menu(),
            KeyCode::Char('o') if ctrl => self.state.open_menu(),
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.state.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.state.focus_prev(),
            _ => match self.state.focus {
                Some(Focus::Field(field)) => self.handle_field_key(field, key),
                Some(Focus::Submit) => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit();
                    } else if key.code == KeyCode::Esc {
                        self.state.blur();
                    }
                }
                None => {}
            },
        }
        Ok(())
    }

    /// Keys while an input has focus
    fn handle_field_key(&mut self, field: FieldId, key: KeyEvent) {
        match key.code {
            // Implicit submission, like pressing Enter in a web form
            KeyCode::Enter => return self.submit(),
            KeyCode::Esc => return self.state.blur(),
            _ => {}
        }

        let form = &self.state.form;
        let action = match key.code {
            KeyCode::Backspace => form.backspace_action(field),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                FormAction::Set {
                    field,
                    value: String::new(),
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.append_action(field, c.encode_utf8(&mut [0; 4]))
            }
            _ => return,
        };
        self.state.form.dispatch(action);
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::F(2) => self.state.close_menu(),
            KeyCode::Down | KeyCode::Char('j') => self.state.menu.move_selection_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.menu.move_selection_up(),
            KeyCode::Enter => {
                // Links have no destination yet
                let link = MENU_LINKS[self.state.menu.selected_link];
                tracing::debug!("Menu link selected: {link}");
            }
            _ => {}
        }
        Ok(())
    }

    /// Append pasted text to the focused field through the input filter
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.menu.open || self.state.has_errors() {
            return;
        }
        if let Some(field) = self.state.focused_field() {
            let text = text.trim_end_matches(['\r', '\n']);
            let action = self.state.form.append_action(field, text);
            self.state.form.dispatch(action);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return Ok(());
        };
        if self.state.has_errors() {
            return Ok(());
        }

        let area = self.screen_area();
        if self.state.menu.open {
            let layout = MenuLayout::new(area);
            match layout.hit_test(mouse.column, mouse.row, MENU_LINKS.len()) {
                MenuHit::Back | MenuHit::Overlay => self.state.close_menu(),
                MenuHit::Link(idx) => self.state.menu.selected_link = idx,
                MenuHit::Panel => {}
            }
            return Ok(());
        }

        match FormLayout::new(area).hit_test(mouse.column, mouse.row) {
            Some(FormHit::MenuTrigger) => self.state.open_menu(),
            Some(FormHit::Field(field)) => self.state.set_focus(Some(Focus::Field(field))),
            Some(FormHit::Submit) if self.can_submit() => {
                self.state.set_focus(Some(Focus::Submit));
                self.submit();
            }
            // A disabled button takes no focus, so it acts like the page background
            Some(FormHit::Submit) | None => self.state.blur(),
        }
        Ok(())
    }
}
