//! Card form field descriptors

use crate::validation::only_digits;

/// The three inputs of the card form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    CardNumber,
    Cvc,
    Expiry,
}

impl FieldId {
    /// All fields in focus order
    pub const ALL: [FieldId; 3] = [FieldId::CardNumber, FieldId::Cvc, FieldId::Expiry];

    /// Accessible label shown as the field title
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::CardNumber => "Credit Card Number",
            FieldId::Cvc => "CVC",
            FieldId::Expiry => "Expiry",
        }
    }

    /// Hint rendered while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldId::CardNumber => "13–19 digits",
            FieldId::Cvc => "3–4 digits",
            FieldId::Expiry => "MM/YY or MM/YYYY",
        }
    }

    /// Maximum number of characters the field accepts
    pub fn max_len(&self) -> usize {
        match self {
            FieldId::CardNumber => 19,
            FieldId::Cvc => 4,
            FieldId::Expiry => 7,
        }
    }

    /// Whether non-digits are stripped before the value reaches state
    pub fn digits_only(&self) -> bool {
        matches!(self, FieldId::CardNumber | FieldId::Cvc)
    }

    /// Apply the input boundary rules: digit filter and length cap
    pub fn sanitize(&self, raw: &str) -> String {
        let filtered = if self.digits_only() {
            only_digits(raw)
        } else {
            raw.to_string()
        };
        filtered.chars().take(self.max_len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labels() {
        assert_eq!(FieldId::CardNumber.label(), "Credit Card Number");
        assert_eq!(FieldId::Cvc.label(), "CVC");
        assert_eq!(FieldId::Expiry.label(), "Expiry");
    }

    #[test]
    fn test_sanitize_strips_non_digits_for_card_number() {
        assert_eq!(FieldId::CardNumber.sanitize("41a1"), "411");
    }

    #[test]
    fn test_sanitize_caps_length() {
        assert_eq!(FieldId::CardNumber.sanitize(&"4".repeat(25)).len(), 19);
        assert_eq!(FieldId::Cvc.sanitize("12345"), "1234");
        assert_eq!(FieldId::Expiry.sanitize("12/20299"), "12/2029");
    }

    #[test]
    fn test_sanitize_keeps_expiry_verbatim() {
        assert_eq!(FieldId::Expiry.sanitize("1a/ 9"), "1a/ 9");
        assert!(!FieldId::Expiry.digits_only());
    }

    #[test]
    fn test_focus_order() {
        assert_eq!(
            FieldId::ALL,
            [FieldId::CardNumber, FieldId::Cvc, FieldId::Expiry]
        );
    }
}
