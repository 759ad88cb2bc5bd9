//! Draft response state owned by the view, and submission assembly

use crate::error::PollError;
use crate::models::{Poll, SelectionValue, SubmissionRequest, SubmissionSelection};

/// The not-yet-sent response being composed by the current user.
///
/// One slot per poll option, in option order; `None` means the user has not
/// touched that cell and the effective value is unknown. The view owns this
/// state outright, so nothing is read back out of the widget tree at submit
/// time.
#[derive(Debug, Clone)]
pub struct Draft {
    pub name: String,
    pub choices: Vec<Option<SelectionValue>>,
}

impl Draft {
    pub fn new(option_count: usize) -> Self {
        Self {
            name: String::new(),
            choices: vec![None; option_count],
        }
    }

    /// Effective value for one option column.
    pub fn effective(&self, index: usize) -> SelectionValue {
        self.choices
            .get(index)
            .copied()
            .flatten()
            .unwrap_or(SelectionValue::Unknown)
    }

    /// Cycle one cell: unknown -> yes -> no -> unknown.
    pub fn cycle(&mut self, index: usize) {
        if let Some(slot) = self.choices.get_mut(index) {
            let next = match slot.unwrap_or(SelectionValue::Unknown) {
                SelectionValue::Unknown => SelectionValue::Yes,
                SelectionValue::Yes => SelectionValue::No,
                SelectionValue::No => SelectionValue::Unknown,
            };
            *slot = Some(next);
        }
    }

    /// Effective values for every column, untouched cells included.
    pub fn effective_values(&self) -> Vec<SelectionValue> {
        (0..self.choices.len()).map(|i| self.effective(i)).collect()
    }
}

/// Pair each poll option with the chosen value at the same index, preserving
/// option order. A `values` slice shorter than the option list pads the tail
/// with unknown.
pub fn build_submission(poll: &Poll, name: &str, values: &[SelectionValue]) -> SubmissionRequest {
    let selections = poll
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| SubmissionSelection {
            option: option.clone(),
            selection: values.get(i).copied().unwrap_or(SelectionValue::Unknown),
        })
        .collect();

    SubmissionRequest {
        name: name.to_string(),
        selections,
    }
}

/// Raw-string form used by the `respond` command: empty or missing entries
/// normalize to unknown; anything else must be a recognized value.
pub fn build_submission_from_raw(
    poll: &Poll,
    name: &str,
    raw: &[String],
) -> Result<SubmissionRequest, PollError> {
    let mut values = Vec::with_capacity(poll.options.len());
    for i in 0..poll.options.len() {
        let value = match raw.get(i).map(String::as_str) {
            None | Some("") => SelectionValue::Unknown,
            Some(entry) => SelectionValue::from_wire(entry)?,
        };
        values.push(value);
    }
    Ok(build_submission(poll, name, &values))
}
