//! Screen geometry shared by rendering and mouse hit-testing
//!
//! ```text
//! Row 0-2:  Header (menu trigger + title)
//! Row 3+:   Form card, centred
//! Bottom:   Status bar (1 row)
//! ```

use crate::state::FieldId;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Height of the header (with borders: top + content + bottom)
pub const HEADER_HEIGHT: u16 = 3;
/// Height of a bordered input
pub const FIELD_HEIGHT: u16 = 3;
/// Widest the form card grows
pub const CARD_MAX_WIDTH: u16 = 64;
/// Card height: borders, welcome line, spacers, inputs, errors, button and note
pub const CARD_HEIGHT: u16 = 19;
/// Menu trigger width
const BURGER_WIDTH: u16 = 5;
const SUBMIT_WIDTH: u16 = 14;
/// Width of the menu drawer
pub const MENU_WIDTH: u16 = 32;

/// Something clickable on the form screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormHit {
    MenuTrigger,
    Field(FieldId),
    Submit,
}

/// Something clickable while the menu is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuHit {
    Back,
    Link(usize),
    Panel,
    /// The dimmed background, which closes the menu
    Overlay,
}

/// Rectangles of every form screen element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub header: Rect,
    pub burger: Rect,
    pub title: Rect,
    pub card: Rect,
    pub welcome: Rect,
    pub card_number: Rect,
    pub card_number_error: Rect,
    pub cvc: Rect,
    pub cvc_error: Rect,
    pub expiry: Rect,
    pub expiry_error: Rect,
    pub submit: Rect,
    pub note: Rect,
    pub status_bar: Rect,
}

impl FormLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT), // Header
                Constraint::Min(0),                // Content
                Constraint::Length(1),             // Status bar
            ])
            .split(area);
        let (header, content, status_bar) = (rows[0], rows[1], rows[2]);

        let burger = Rect {
            width: BURGER_WIDTH.min(header.width),
            ..header
        };
        let title = Rect {
            x: header.x + burger.width,
            width: header.width.saturating_sub(burger.width * 2),
            ..header
        };

        let card = centered(content, CARD_MAX_WIDTH, CARD_HEIGHT);
        let inner = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(2)
            .vertical_margin(1)
            .constraints([
                Constraint::Length(1),            // Welcome
                Constraint::Length(1),            // Spacer
                Constraint::Length(FIELD_HEIGHT), // Card number
                Constraint::Length(1),            // Card number error
                Constraint::Length(FIELD_HEIGHT), // CVC + Expiry
                Constraint::Length(1),            // CVC + Expiry errors
                Constraint::Length(1),            // Spacer
                Constraint::Length(FIELD_HEIGHT), // Submit
                Constraint::Length(1),            // Spacer
                Constraint::Min(0),               // Note
            ])
            .split(card);

        let halves = |row: Rect| {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(row);
            (cols[0], cols[1])
        };
        let (cvc, expiry) = halves(inner[4]);
        let (cvc_error, expiry_error) = halves(inner[5]);

        let submit = Rect {
            width: SUBMIT_WIDTH.min(inner[7].width),
            ..inner[7]
        };

        Self {
            header,
            burger,
            title,
            card,
            welcome: inner[0],
            card_number: inner[2],
            card_number_error: inner[3],
            cvc,
            cvc_error,
            expiry,
            expiry_error,
            submit,
            note: inner[9],
            status_bar,
        }
    }

    pub fn field_area(&self, field: FieldId) -> Rect {
        match field {
            FieldId::CardNumber => self.card_number,
            FieldId::Cvc => self.cvc,
            FieldId::Expiry => self.expiry,
        }
    }

    pub fn error_area(&self, field: FieldId) -> Rect {
        match field {
            FieldId::CardNumber => self.card_number_error,
            FieldId::Cvc => self.cvc_error,
            FieldId::Expiry => self.expiry_error,
        }
    }

    /// Find the control under a mouse position
    pub fn hit_test(&self, column: u16, row: u16) -> Option<FormHit> {
        let pos = Position::new(column, row);
        if self.burger.contains(pos) {
            return Some(FormHit::MenuTrigger);
        }
        if self.submit.contains(pos) {
            return Some(FormHit::Submit);
        }
        FieldId::ALL
            .into_iter()
            .find(|field| self.field_area(*field).contains(pos))
            .map(FormHit::Field)
    }
}

/// Rectangles of the menu drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    pub panel: Rect,
    pub back: Rect,
    pub title: Rect,
    pub body: Rect,
    pub links: Rect,
}

impl MenuLayout {
    pub fn new(area: Rect) -> Self {
        let panel = Rect {
            width: MENU_WIDTH.min(area.width),
            ..area
        };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT), // Back button + title
                Constraint::Length(2),             // Body text
                Constraint::Min(0),                // Links
            ])
            .margin(1)
            .split(panel);

        let back = Rect {
            width: BURGER_WIDTH.min(rows[0].width),
            ..rows[0]
        };
        let title = Rect {
            x: back.x + back.width,
            width: rows[0].width.saturating_sub(back.width),
            ..rows[0]
        };

        Self {
            panel,
            back,
            title,
            body: rows[1],
            links: rows[2],
        }
    }

    /// Find what lies under a mouse position while the menu is open
    pub fn hit_test(&self, column: u16, row: u16, link_count: usize) -> MenuHit {
        let pos = Position::new(column, row);
        if !self.panel.contains(pos) {
            return MenuHit::Overlay;
        }
        if self.back.contains(pos) {
            return MenuHit::Back;
        }
        if self.links.contains(pos) {
            let idx = (row - self.links.y) as usize;
            if idx < link_count {
                return MenuHit::Link(idx);
            }
        }
        MenuHit::Panel
    }
}

/// Centre a box of at most `width` x `height` inside `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 30)
    }

    fn center_of(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    mod form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_header_and_status_bar_positions() {
            let layout = FormLayout::new(screen());
            assert_eq!(layout.header, Rect::new(0, 0, 80, HEADER_HEIGHT));
            assert_eq!(layout.status_bar, Rect::new(0, 29, 80, 1));
        }

        #[test]
        fn test_card_is_centred_and_capped() {
            let layout = FormLayout::new(screen());
            assert_eq!(layout.card.width, CARD_MAX_WIDTH);
            assert_eq!(layout.card.x, (80 - CARD_MAX_WIDTH) / 2);
        }

        #[test]
        fn test_fields_are_stacked_in_order() {
            let layout = FormLayout::new(screen());
            assert!(layout.card_number.y < layout.cvc.y);
            assert_eq!(layout.cvc.y, layout.expiry.y);
            assert!(layout.cvc.x < layout.expiry.x);
            assert!(layout.expiry.y < layout.submit.y);
            assert_eq!(layout.card_number.height, FIELD_HEIGHT);
        }

        #[test]
        fn test_errors_sit_under_their_fields() {
            let layout = FormLayout::new(screen());
            for field in FieldId::ALL {
                let input = layout.field_area(field);
                let error = layout.error_area(field);
                assert_eq!(error.y, input.y + input.height);
                assert_eq!(error.x, input.x);
            }
        }

        #[test]
        fn test_hit_test_finds_controls() {
            let layout = FormLayout::new(screen());
            for field in FieldId::ALL {
                let (col, row) = center_of(layout.field_area(field));
                assert_eq!(layout.hit_test(col, row), Some(FormHit::Field(field)));
            }
            let (col, row) = center_of(layout.submit);
            assert_eq!(layout.hit_test(col, row), Some(FormHit::Submit));
            assert_eq!(layout.hit_test(1, 1), Some(FormHit::MenuTrigger));
        }

        #[test]
        fn test_hit_test_blank_area_is_none() {
            let layout = FormLayout::new(screen());
            assert_eq!(layout.hit_test(79, 20), None);
        }

        #[test]
        fn test_tiny_terminal_does_not_panic() {
            let layout = FormLayout::new(Rect::new(0, 0, 10, 5));
            assert!(layout.card.width <= 10);
            let _ = layout.hit_test(3, 3);
        }
    }

    mod menu {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_panel_is_left_drawer() {
            let layout = MenuLayout::new(screen());
            assert_eq!(layout.panel, Rect::new(0, 0, MENU_WIDTH, 30));
        }

        #[test]
        fn test_hit_test_regions() {
            let layout = MenuLayout::new(screen());
            let (col, row) = center_of(layout.back);
            assert_eq!(layout.hit_test(col, row, 3), MenuHit::Back);
            assert_eq!(layout.hit_test(60, 10, 3), MenuHit::Overlay);
            assert_eq!(
                layout.hit_test(layout.links.x + 2, layout.links.y + 1, 3),
                MenuHit::Link(1)
            );
            assert_eq!(
                layout.hit_test(layout.links.x + 2, layout.links.y + 5, 3),
                MenuHit::Panel
            );
        }
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(10, 5, 20, 10);
        assert_eq!(centered(area, 40, 40), area);
        assert_eq!(centered(area, 10, 4), Rect::new(15, 8, 10, 4));
    }
}
