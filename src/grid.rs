//! Selection resolution for the respondents × options grid

use unicode_width::UnicodeWidthStr;

use crate::error::PollError;
use crate::models::{Poll, Selection, SelectionValue};

/// Effective display state for one option within one response.
///
/// First matching selection wins when the service sends duplicates; a
/// response that never mentions the option is unknown. A matching entry
/// carrying a value outside the tri-state enumeration is an error, never a
/// silent default.
pub fn resolve_display_state(
    option: &str,
    selections: &[Selection],
) -> Result<SelectionValue, PollError> {
    match selections.iter().find(|s| s.option == option) {
        Some(found) => SelectionValue::from_wire(&found.value),
        None => Ok(SelectionValue::Unknown),
    }
}

/// Fully resolved grid, one row per response in service order.
#[derive(Debug, Clone)]
pub struct PollGrid {
    pub rows: Vec<GridRow>,
}

/// One respondent row with an effective value per option column.
#[derive(Debug, Clone)]
pub struct GridRow {
    pub name: String,
    pub states: Vec<SelectionValue>,
}

impl PollGrid {
    /// Resolve every (response, option) cell up front, so corrupt data fails
    /// the whole render pass instead of a single cell mid-draw.
    pub fn from_poll(poll: &Poll) -> Result<Self, PollError> {
        let mut rows = Vec::with_capacity(poll.responses.len());
        for response in &poll.responses {
            let mut states = Vec::with_capacity(poll.options.len());
            for option in &poll.options {
                states.push(resolve_display_state(option, &response.selections)?);
            }
            rows.push(GridRow {
                name: response.name.clone(),
                states,
            });
        }
        Ok(Self { rows })
    }
}

/// Plain-text rendering of a resolved grid, used by the `show` command.
pub fn render_plain(poll: &Poll, grid: &PollGrid) -> String {
    let name_width = grid
        .rows
        .iter()
        .map(|row| row.name.width())
        .max()
        .unwrap_or(0)
        .max("Name".width());

    let mut out = String::new();
    out.push_str(&format!("{:<name_width$}", "Name"));
    for option in &poll.options {
        out.push_str(&format!("  {}", option));
    }
    out.push('\n');

    for row in &grid.rows {
        out.push_str(&format!("{:<name_width$}", row.name));
        for (option, state) in poll.options.iter().zip(&row.states) {
            // center the glyph under its column label
            let col = option.width().max(1);
            out.push_str(&format!("  {:^col$}", state.glyph()));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(option: &str, value: &str) -> Selection {
        Selection {
            option: option.to_string(),
            value: value.to_string(),
        }
    }

    fn lunch_poll() -> Poll {
        serde_json::from_str(
            r#"{
                "title": "Lunch?",
                "x": ["Mon", "Tue"],
                "responses": [
                    {
                        "name": "Al",
                        "selections": [ { "x": "Mon", "selection": "yes" } ]
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_selections_resolve_unknown() {
        assert_eq!(
            resolve_display_state("Mon", &[]).unwrap(),
            SelectionValue::Unknown
        );
    }

    #[test]
    fn test_explicit_selection_resolves_to_its_value() {
        for value in ["yes", "no", "unknown"] {
            let resolved =
                resolve_display_state("Mon", &[selection("Mon", value)]).unwrap();
            assert_eq!(resolved.as_str(), value);
        }
    }

    #[test]
    fn test_unmatched_option_resolves_unknown() {
        let selections = [selection("Mon", "yes")];
        assert_eq!(
            resolve_display_state("Tue", &selections).unwrap(),
            SelectionValue::Unknown
        );
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let selections = [selection("Mon", "no"), selection("Mon", "yes")];
        assert_eq!(
            resolve_display_state("Mon", &selections).unwrap(),
            SelectionValue::No
        );
    }

    #[test]
    fn test_corrupt_value_is_an_error() {
        let selections = [selection("Mon", "definitely")];
        let err = resolve_display_state("Mon", &selections).unwrap_err();
        assert!(matches!(err, PollError::UnknownSelectionValue(v) if v == "definitely"));
    }

    #[test]
    fn test_grid_resolves_implicit_unknowns() {
        let poll = lunch_poll();
        let grid = PollGrid::from_poll(&poll).unwrap();

        assert_eq!(grid.rows.len(), 1);
        assert_eq!(grid.rows[0].name, "Al");
        assert_eq!(
            grid.rows[0].states,
            vec![SelectionValue::Yes, SelectionValue::Unknown]
        );
    }

    #[test]
    fn test_grid_fails_on_corrupt_response() {
        let poll: Poll = serde_json::from_str(
            r#"{
                "title": "Lunch?",
                "x": ["Mon"],
                "responses": [
                    {
                        "name": "Al",
                        "selections": [ { "x": "Mon", "selection": "nope" } ]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert!(PollGrid::from_poll(&poll).is_err());
    }

    #[test]
    fn test_render_plain_layout() {
        let poll = lunch_poll();
        let grid = PollGrid::from_poll(&poll).unwrap();
        let text = render_plain(&poll, &grid);

        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "Name  Mon  Tue");
        assert_eq!(lines.next().unwrap(), "Al     ✓    ? ");
        assert!(lines.next().is_none());
    }
}
