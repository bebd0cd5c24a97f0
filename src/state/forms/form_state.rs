//! Card form state machine and derived error projection

use super::field::FieldId;
use crate::validation::{
    card_number_result, check_expiry, cvc_result, InvalidReason, ValidationResult,
};
#[cfg(test)]
use crate::validation::{check_expiry_at, YearMonth};
use std::collections::BTreeSet;

pub const CARD_NUMBER_ERROR: &str = "Enter 13–19 digits";
pub const CVC_ERROR: &str = "Enter 3–4 digits";
pub const EXPIRY_FORMAT_ERROR: &str = "Use MM/YY or MM/YYYY";
pub const EXPIRY_EXPIRED_ERROR: &str = "Card is expired";

/// Transitions accepted by [`FormState::reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Replace a field value. Digit-only fields must already be filtered.
    Set { field: FieldId, value: String },
    /// Mark a field as interacted with (blur)
    Touch(FieldId),
    /// Return to the initial empty, untouched state
    Reset,
}

/// Field values plus the set of touched fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub card_number: String,
    pub cvc: String,
    pub expiry: String,
    touched: BTreeSet<FieldId>,
}

impl FormState {
    /// Pure transition function
    pub fn reduce(self, action: FormAction) -> FormState {
        match action {
            FormAction::Set { field, value } => {
                let mut next = self;
                *next.value_mut(field) = value;
                next
            }
            FormAction::Touch(field) => {
                let mut next = self;
                next.touched.insert(field);
                next
            }
            FormAction::Reset => FormState::default(),
        }
    }

    /// Apply an action in place
    pub fn dispatch(&mut self, action: FormAction) {
        let current = std::mem::take(self);
        *self = current.reduce(action);
    }

    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::CardNumber => &self.card_number,
            FieldId::Cvc => &self.cvc,
            FieldId::Expiry => &self.expiry,
        }
    }

    fn value_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::CardNumber => &mut self.card_number,
            FieldId::Cvc => &mut self.cvc,
            FieldId::Expiry => &mut self.expiry,
        }
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(&field)
    }

    /// Build a `Set` action for `raw` after applying the field's input rules
    pub fn set_action(field: FieldId, raw: &str) -> FormAction {
        FormAction::Set {
            field,
            value: field.sanitize(raw),
        }
    }

    /// `Set` action appending typed or pasted text to the current value
    pub fn append_action(&self, field: FieldId, input: &str) -> FormAction {
        let raw = format!("{}{}", self.value(field), input);
        Self::set_action(field, &raw)
    }

    /// `Set` action removing the last character of the current value
    pub fn backspace_action(&self, field: FieldId) -> FormAction {
        let mut value = self.value(field).to_string();
        value.pop();
        FormAction::Set { field, value }
    }

    /// Validate one field against the local clock
    pub fn result(&self, field: FieldId) -> ValidationResult {
        match field {
            FieldId::CardNumber => card_number_result(&self.card_number),
            FieldId::Cvc => cvc_result(&self.cvc),
            FieldId::Expiry => check_expiry(&self.expiry),
        }
    }

    /// Error text for `result`, shown only once the field is touched
    fn touched_error(&self, field: FieldId, result: ValidationResult) -> Option<&'static str> {
        if !self.is_touched(field) {
            return None;
        }
        match (field, result) {
            (_, ValidationResult::Valid) => None,
            (FieldId::CardNumber, _) => Some(CARD_NUMBER_ERROR),
            (FieldId::Cvc, _) => Some(CVC_ERROR),
            (FieldId::Expiry, ValidationResult::Invalid(InvalidReason::Format)) => {
                Some(EXPIRY_FORMAT_ERROR)
            }
            (FieldId::Expiry, ValidationResult::Invalid(InvalidReason::Expired)) => {
                Some(EXPIRY_EXPIRED_ERROR)
            }
        }
    }

    pub fn error(&self, field: FieldId) -> Option<&'static str> {
        self.touched_error(field, self.result(field))
    }

    /// Every validator passes, regardless of touched state
    pub fn is_valid(&self) -> bool {
        FieldId::ALL.iter().all(|field| self.result(*field).is_valid())
    }
}

#[cfg(test)]
impl FormState {
    pub fn touched_count(&self) -> usize {
        self.touched.len()
    }

    /// Validate one field against the given month
    pub fn result_at(&self, field: FieldId, today: YearMonth) -> ValidationResult {
        match field {
            FieldId::Expiry => check_expiry_at(&self.expiry, today),
            _ => self.result(field),
        }
    }

    pub fn error_at(&self, field: FieldId, today: YearMonth) -> Option<&'static str> {
        self.touched_error(field, self.result_at(field, today))
    }

    pub fn is_valid_at(&self, today: YearMonth) -> bool {
        FieldId::ALL
            .iter()
            .all(|field| self.result_at(*field, today).is_valid())
    }
}
