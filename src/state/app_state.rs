//! Application state definitions

use super::forms::{FieldId, FormAction, FormState};
use std::collections::VecDeque;

/// Links listed in the menu drawer
pub const MENU_LINKS: &[&str] = &["Home", "About", "Contact"];

/// Which control currently receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    Submit,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldId::CardNumber)
    }
}

impl Focus {
    /// Focus ring: card number, CVC, expiry, submit button
    const RING: [Focus; 4] = [
        Focus::Field(FieldId::CardNumber),
        Focus::Field(FieldId::Cvc),
        Focus::Field(FieldId::Expiry),
        Focus::Submit,
    ];

    fn index(&self) -> usize {
        Self::RING.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::RING[(self.index() + 1) % Self::RING.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = self.index();
        if idx == 0 {
            Self::RING[Self::RING.len() - 1]
        } else {
            Self::RING[idx - 1]
        }
    }

    /// The field under focus, if focus is on a field
    pub fn field(&self) -> Option<FieldId> {
        match self {
            Focus::Field(field) => Some(*field),
            Focus::Submit => None,
        }
    }
}

/// Menu drawer state, independent from the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
    pub selected_link: usize,
}

impl MenuState {
    pub fn move_selection_down(&mut self) {
        if self.selected_link + 1 < MENU_LINKS.len() {
            self.selected_link += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_link = self.selected_link.saturating_sub(1);
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Card form values and touched flags
    pub form: FormState,
    /// Current keyboard focus; `None` once the focused field was blurred
    pub focus: Option<Focus>,
    pub menu: MenuState,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Queue of error messages shown one at a time in a dialog
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            focus: Some(Focus::default()),
            ..Default::default()
        }
    }

    pub fn focused_field(&self) -> Option<FieldId> {
        self.focus.and_then(|f| f.field())
    }

    /// Move focus, blurring (touching) the field that loses it
    pub fn set_focus(&mut self, target: Option<Focus>) {
        if self.focus == target {
            return;
        }
        self.blur();
        tracing::debug!("Focus moved to {target:?}");
        self.focus = target;
    }

    /// Drop focus from the current control; a focused field becomes touched
    pub fn blur(&mut self) {
        if let Some(field) = self.focused_field() {
            self.form.dispatch(FormAction::Touch(field));
        }
        self.focus = None;
    }

    /// The submit button is enabled, and focusable, only while the form is valid
    pub fn submit_enabled(&self) -> bool {
        self.form.is_valid()
    }

    pub fn focus_next(&mut self) {
        let mut target = self.focus.map(|f| f.next()).unwrap_or_default();
        if target == Focus::Submit && !self.submit_enabled() {
            target = target.next();
        }
        self.set_focus(Some(target));
    }

    pub fn focus_prev(&mut self) {
        let mut target = self.focus.map(|f| f.prev()).unwrap_or(Focus::Submit);
        if target == Focus::Submit && !self.submit_enabled() {
            target = target.prev();
        }
        self.set_focus(Some(target));
    }

    /// Open the menu drawer; the form loses focus
    pub fn open_menu(&mut self) {
        self.blur();
        self.menu = MenuState {
            open: true,
            selected_link: 0,
        };
        tracing::debug!("Menu opened");
    }

    pub fn close_menu(&mut self) {
        self.menu.open = false;
        tracing::debug!("Menu closed");
    }

    /// Push an error message for display
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
