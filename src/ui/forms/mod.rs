//! Form rendering module
//!
//! - `field_renderer`: labeled inputs and inline error text
//! - `card_form`: the card registration form

mod card_form;
mod field_renderer;

pub use card_form::draw_card_form;
