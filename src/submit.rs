//! Submit controller and submission sinks
//!
//! A valid form is handed to a [`SubmitSink`] and then reset. Sinks only
//! record the values; nothing is sent anywhere.

use crate::state::{FormAction, FormState};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

/// Raw field values captured at submit time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSubmission {
    pub card_number: String,
    pub cvc: String,
    pub expiry: String,
}

impl CardSubmission {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            card_number: form.card_number.clone(),
            cvc: form.cvc.clone(),
            expiry: form.expiry.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write submission to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Destination for submitted card values
#[cfg_attr(test, mockall::automock)]
pub trait SubmitSink {
    fn submit(&mut self, submission: &CardSubmission) -> Result<(), SinkError>;
}

/// Emits each submission as a tracing event
#[derive(Debug, Default)]
pub struct LogSink;

impl SubmitSink for LogSink {
    fn submit(&mut self, submission: &CardSubmission) -> Result<(), SinkError> {
        tracing::info!(
            card_number = %submission.card_number,
            cvc = %submission.cvc,
            expiry = %submission.expiry,
            "Card submitted"
        );
        Ok(())
    }
}

/// Appends each submission as one JSON object per line
#[derive(Debug)]
pub struct JsonLinesSink {
    path: PathBuf,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> std::io::Result<File> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        OpenOptions::new().create(true).append(true).open(&self.path)
    }

    fn io_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SubmitSink for JsonLinesSink {
    fn submit(&mut self, submission: &CardSubmission) -> Result<(), SinkError> {
        let mut line = serde_json::to_string(submission)?;
        line.push('\n');
        let mut file = self.open().map_err(|e| self.io_error(e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

/// Forwards a submission to several sinks in order, stopping at the first failure
#[derive(Default)]
pub struct MultiSink {
    sinks: Vec<Box<dyn SubmitSink>>,
}

impl MultiSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl SubmitSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }
}

impl SubmitSink for MultiSink {
    fn submit(&mut self, submission: &CardSubmission) -> Result<(), SinkError> {
        for sink in &mut self.sinks {
            sink.submit(submission)?;
        }
        Ok(())
    }
}

/// Submit the form if every field is valid.
///
/// Returns `Ok(None)` without touching the sink when the form is invalid.
/// The form is reset only after the sink accepted the values.
pub fn submit_form(
    form: &mut FormState,
    is_valid: bool,
    sink: &mut dyn SubmitSink,
) -> Result<Option<CardSubmission>, SinkError> {
    if !is_valid {
        return Ok(None);
    }
    let submission = CardSubmission::from_form(form);
    sink.submit(&submission)?;
    form.dispatch(FormAction::Reset);
    Ok(Some(submission))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldId;
    use crate::validation::YearMonth;

    fn valid_form() -> FormState {
        FormState::default()
            .reduce(FormState::set_action(FieldId::CardNumber, "4111111111111111"))
            .reduce(FormState::set_action(FieldId::Cvc, "123"))
            .reduce(FormState::set_action(FieldId::Expiry, "12/29"))
            .reduce(FormAction::Touch(FieldId::Cvc))
    }

    fn expected() -> CardSubmission {
        CardSubmission {
            card_number: "4111111111111111".to_string(),
            cvc: "123".to_string(),
            expiry: "12/29".to_string(),
        }
    }

    mod controller {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_form_is_noop() {
            let mut form = FormState::default().reduce(FormState::set_action(FieldId::Cvc, "12"));
            let before = form.clone();
            let mut sink = MockSubmitSink::new();
            sink.expect_submit().never();

            let valid = form.is_valid_at(YearMonth::new(2026, 10));
            let result = submit_form(&mut form, valid, &mut sink).unwrap();

            assert!(result.is_none());
            assert_eq!(form, before);
        }

        #[test]
        fn test_valid_form_is_forwarded_and_reset() {
            let mut form = valid_form();
            let mut sink = MockSubmitSink::new();
            sink.expect_submit()
                .withf(|s| *s == expected())
                .times(1)
                .returning(|_| Ok(()));

            let valid = form.is_valid_at(YearMonth::new(2026, 10));
            let result = submit_form(&mut form, valid, &mut sink).unwrap();

            assert_eq!(result, Some(expected()));
            assert_eq!(form, FormState::default());
        }

        #[test]
        fn test_sink_failure_keeps_values() {
            let mut form = valid_form();
            let before = form.clone();
            let mut sink = MockSubmitSink::new();
            sink.expect_submit().times(1).returning(|_| {
                Err(SinkError::Io {
                    path: PathBuf::from("/nope"),
                    source: std::io::Error::other("disk full"),
                })
            });

            let result = submit_form(&mut form, true, &mut sink);

            assert!(result.is_err());
            assert_eq!(form, before);
        }
    }

    mod sinks {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submission_serializes_camel_case() {
            let json = serde_json::to_string(&expected()).unwrap();
            assert_eq!(
                json,
                r#"{"cardNumber":"4111111111111111","cvc":"123","expiry":"12/29"}"#
            );
        }

        #[test]
        fn test_log_sink_accepts_submission() {
            assert!(LogSink.submit(&expected()).is_ok());
        }

        #[test]
        fn test_json_lines_sink_appends() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("nested").join("submissions.jsonl");
            let mut sink = JsonLinesSink::new(&path);

            sink.submit(&expected()).unwrap();
            sink.submit(&expected()).unwrap();

            let content = fs::read_to_string(&path).unwrap();
            let records: Vec<CardSubmission> = content
                .lines()
                .map(|l| serde_json::from_str(l).unwrap())
                .collect();
            assert_eq!(records, vec![expected(), expected()]);
        }

        #[test]
        fn test_json_lines_sink_reports_path_on_failure() {
            let dir = tempfile::tempdir().unwrap();
            // A directory cannot be opened for appending
            let mut sink = JsonLinesSink::new(dir.path());
            let err = sink.submit(&expected()).unwrap_err();
            assert!(err.to_string().contains(&dir.path().display().to_string()));
        }

        #[test]
        fn test_multi_sink_fans_out_in_order() {
            let mut first = MockSubmitSink::new();
            first.expect_submit().times(1).returning(|_| Ok(()));
            let mut second = MockSubmitSink::new();
            second.expect_submit().times(1).returning(|_| Ok(()));

            let mut sink = MultiSink::new().with(first).with(second);
            assert!(sink.submit(&expected()).is_ok());
        }

        #[test]
        fn test_multi_sink_stops_at_first_failure() {
            let mut first = MockSubmitSink::new();
            first
                .expect_submit()
                .times(1)
                .returning(|_| Err(SinkError::Encode(serde_json::from_str::<u8>("x").unwrap_err())));
            let mut second = MockSubmitSink::new();
            second.expect_submit().never();

            let mut sink = MultiSink::new().with(first).with(second);
            assert!(sink.submit(&expected()).is_err());
        }

        #[test]
        fn test_empty_multi_sink_succeeds() {
            let mut sink = MultiSink::new();
            assert!(sink.submit(&expected()).is_ok());
        }
    }
}
