//! Wire data model for the remote poll service

use serde::{Deserialize, Serialize};

use crate::error::PollError;

/// Poll as returned by `GET {endpoint}/poll/{id}`.
///
/// The poll identifier is the lookup key held by the caller; the service
/// does not echo it in the body.
#[derive(Debug, Clone, Deserialize)]
pub struct Poll {
    pub title: String,
    #[serde(default)]
    pub description: String,

    /// Ordered option labels. Order is the column order of the grid.
    #[serde(rename = "x")]
    pub options: Vec<String>,

    #[serde(default)]
    pub responses: Vec<PollResponse>,
}

/// One respondent's recorded answers. Selections need not cover every
/// option; a missing pairing counts as unknown.
#[derive(Debug, Clone, Deserialize)]
pub struct PollResponse {
    pub name: String,
    #[serde(default)]
    pub selections: Vec<Selection>,
}

/// One recorded answer to one option, as transmitted by the service.
///
/// The value stays a raw string here; it is validated at the display
/// resolution boundary so a corrupt value is rejected, not coerced.
#[derive(Debug, Clone, Deserialize)]
pub struct Selection {
    #[serde(rename = "x")]
    pub option: String,
    #[serde(rename = "selection")]
    pub value: String,
}

/// Closed tri-state answer to one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionValue {
    Yes,
    No,
    Unknown,
}

impl SelectionValue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionValue::Yes => "yes",
            SelectionValue::No => "no",
            SelectionValue::Unknown => "unknown",
        }
    }

    /// Parse a wire value. Anything outside the enumeration is an error.
    pub fn from_wire(raw: &str) -> Result<Self, PollError> {
        match raw {
            "yes" => Ok(SelectionValue::Yes),
            "no" => Ok(SelectionValue::No),
            "unknown" => Ok(SelectionValue::Unknown),
            other => Err(PollError::UnknownSelectionValue(other.to_string())),
        }
    }

    /// Grid cell glyph: affirmative check, negative cross, neutral question.
    pub fn glyph(&self) -> &'static str {
        match self {
            SelectionValue::Yes => "✓",
            SelectionValue::No => "✗",
            SelectionValue::Unknown => "?",
        }
    }
}

/// Body for `POST {endpoint}/poll/respond/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRequest {
    pub name: String,
    pub selections: Vec<SubmissionSelection>,
}

/// One answered option within a submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionSelection {
    #[serde(rename = "x")]
    pub option: String,
    pub selection: SelectionValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_deserialization() {
        let sample_response = r#"{
            "title": "Lunch?",
            "description": "Pick the days that work",
            "x": ["Mon", "Tue"],
            "responses": [
                {
                    "name": "Al",
                    "selections": [
                        { "x": "Mon", "selection": "yes" }
                    ]
                }
            ]
        }"#;

        let poll: Poll = serde_json::from_str(sample_response).unwrap();
        assert_eq!(poll.title, "Lunch?");
        assert_eq!(poll.options, vec!["Mon", "Tue"]);
        assert_eq!(poll.responses.len(), 1);
        assert_eq!(poll.responses[0].name, "Al");
        assert_eq!(poll.responses[0].selections[0].option, "Mon");
        assert_eq!(poll.responses[0].selections[0].value, "yes");
    }

    #[test]
    fn test_poll_deserialization_defaults() {
        // description and responses may be absent entirely
        let sample_response = r#"{ "title": "Standup", "x": ["Wed"] }"#;

        let poll: Poll = serde_json::from_str(sample_response).unwrap();
        assert_eq!(poll.description, "");
        assert!(poll.responses.is_empty());
    }

    #[test]
    fn test_selection_value_wire_values() {
        assert_eq!(SelectionValue::from_wire("yes").unwrap(), SelectionValue::Yes);
        assert_eq!(SelectionValue::from_wire("no").unwrap(), SelectionValue::No);
        assert_eq!(
            SelectionValue::from_wire("unknown").unwrap(),
            SelectionValue::Unknown
        );
        assert!(SelectionValue::from_wire("maybe").is_err());
        assert!(SelectionValue::from_wire("").is_err());
        assert!(SelectionValue::from_wire("Yes").is_err());
    }

    #[test]
    fn test_submission_serialization() {
        let submission = SubmissionRequest {
            name: "Sam".to_string(),
            selections: vec![
                SubmissionSelection {
                    option: "Mon".to_string(),
                    selection: SelectionValue::No,
                },
                SubmissionSelection {
                    option: "Tue".to_string(),
                    selection: SelectionValue::Yes,
                },
            ],
        };

        let body = serde_json::to_string(&submission).unwrap();
        assert_eq!(
            body,
            r#"{"name":"Sam","selections":[{"x":"Mon","selection":"no"},{"x":"Tue","selection":"yes"}]}"#
        );
    }
}
