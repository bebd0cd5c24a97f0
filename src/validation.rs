//! Card field validators
//!
//! Pure functions mapping raw field input to validity. Nothing here touches
//! rendering or application state, so every rule can be tested on its own.

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

// `[0-9]` rather than `\d`: the regex crate's `\d` matches any Unicode digit.

/// 13 to 19 decimal digits
static CARD_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{13,19}$").expect("CARD_NUMBER_PATTERN failed"));

/// 3 or 4 decimal digits
static CVC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("CVC_PATTERN failed"));

/// `MM/YY` or `MM/YYYY`, month 01 to 12 with a leading zero
static EXPIRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/([0-9]{2}|[0-9]{4})$").expect("EXPIRY_PATTERN failed")
});

/// Why a field value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Input does not have the expected shape
    Format,
    /// Expiry date lies before the current month
    Expired,
}

/// Outcome of validating a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(InvalidReason),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Build a result from a plain format check
    fn from_format(ok: bool) -> Self {
        if ok {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(InvalidReason::Format)
        }
    }
}

/// A calendar month, ordered by `year * 12 + month`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The current month according to the local clock
    pub fn now() -> Self {
        let today = Local::now().date_naive();
        Self::new(today.year(), today.month())
    }

    fn ordinal(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month)
    }
}

/// Strip every non-digit character from user input
pub fn only_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// True iff `s` is 13 to 19 decimal digits with nothing else
pub fn is_valid_card_number(s: &str) -> bool {
    CARD_NUMBER_PATTERN.is_match(s)
}

/// True iff `s` is 3 or 4 decimal digits
pub fn is_valid_cvc(s: &str) -> bool {
    CVC_PATTERN.is_match(s)
}

/// Validate an expiry against the local clock
pub fn check_expiry(raw: &str) -> ValidationResult {
    check_expiry_at(raw, YearMonth::now())
}

/// Validate an expiry (`MM/YY` or `MM/YYYY`) against a reference month.
///
/// Two-digit years always land in the 2000s. The reference month itself
/// still counts as valid.
pub fn check_expiry_at(raw: &str, today: YearMonth) -> ValidationResult {
    let Some(expiry) = parse_expiry(raw) else {
        return ValidationResult::Invalid(InvalidReason::Format);
    };

    // Month and year come from the parser, but make sure they form a real date
    if NaiveDate::from_ymd_opt(expiry.year, expiry.month, 1).is_none() {
        return ValidationResult::Invalid(InvalidReason::Format);
    }

    if expiry.ordinal() < today.ordinal() {
        ValidationResult::Invalid(InvalidReason::Expired)
    } else {
        ValidationResult::Valid
    }
}

/// Parse the `MM/YY` / `MM/YYYY` shape, normalizing two-digit years
fn parse_expiry(raw: &str) -> Option<YearMonth> {
    let caps = EXPIRY_PATTERN.captures(raw.trim())?;
    let month: u32 = caps[1].parse().ok()?;
    let mut year: i32 = caps[2].parse().ok()?;
    if year < 100 {
        year += 2000;
    }

    Some(YearMonth::new(year, month))
}

/// Validate a card number as a [`ValidationResult`]
pub fn card_number_result(s: &str) -> ValidationResult {
    ValidationResult::from_format(is_valid_card_number(s))
}

/// Validate a CVC as a [`ValidationResult`]
pub fn cvc_result(s: &str) -> ValidationResult {
    ValidationResult::from_format(is_valid_cvc(s))
}
