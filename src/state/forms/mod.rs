//! Form domain layer
//!
//! Field descriptors, the reducer-style form state machine and the
//! derived per-field error projection.

mod field;
mod form_state;

pub use field::FieldId;
pub use form_state::{FormAction, FormState};
