//! Poll grid table: respondent rows plus the draft row being composed

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::ReadyView;
use crate::tui::ui::Theme;

const NAME_PLACEHOLDER: &str = "Your name";

pub fn render_poll(f: &mut Frame, area: Rect, view: &ReadyView, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title + description
            Constraint::Min(0),    // Grid
            Constraint::Length(4), // Instructions
        ])
        .split(area);

    draw_heading(f, chunks[0], view, theme);
    draw_grid(f, chunks[1], view, theme);
    draw_instructions(f, chunks[2], theme);
}

fn draw_heading(f: &mut Frame, area: Rect, view: &ReadyView, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(view.poll.title.clone(), theme.title)),
        Line::from(view.poll.description.clone()),
    ];

    let heading = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border),
    );
    f.render_widget(heading, area);
}

fn draw_grid(f: &mut Frame, area: Rect, view: &ReadyView, theme: &Theme) {
    let name_width = view
        .grid
        .rows
        .iter()
        .map(|row| row.name.width())
        .chain([view.draft.name.width(), NAME_PLACEHOLDER.width()])
        .max()
        .unwrap_or(0);
    let col_widths: Vec<usize> = view
        .poll
        .options
        .iter()
        .map(|option| option.width().max(3))
        .collect();

    let mut items = Vec::new();

    // Header: blank corner cell, then the option labels
    let mut header = vec![Span::raw(format!("{:<name_width$}", ""))];
    for (option, &col) in view.poll.options.iter().zip(&col_widths) {
        header.push(Span::raw("  "));
        header.push(Span::styled(format!("{:^col$}", option), theme.title));
    }
    items.push(ListItem::new(Line::from(header)));

    // One resolved row per recorded response
    for row in &view.grid.rows {
        let mut spans = vec![Span::raw(format!("{:<name_width$}", row.name))];
        for (state, &col) in row.states.iter().zip(&col_widths) {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("{:^col$}", state.glyph()),
                theme.state_style(*state),
            ));
        }
        items.push(ListItem::new(Line::from(spans)));
    }

    // Draft row: name cell plus one cyclable cell per option
    let (name_text, name_style) = if view.draft.name.is_empty() {
        (NAME_PLACEHOLDER.to_string(), theme.neutral)
    } else {
        (view.draft.name.clone(), ratatui::style::Style::default())
    };
    let mut draft_spans = vec![Span::styled(
        format!("{:<name_width$}", name_text),
        if view.focus == 0 { theme.focused } else { name_style },
    )];
    for (i, &col) in col_widths.iter().enumerate() {
        let value = view.draft.effective(i);
        let style = if view.focus == i + 1 {
            theme.focused
        } else {
            theme.state_style(value)
        };
        draft_spans.push(Span::raw("  "));
        draft_spans.push(Span::styled(format!("{:^col$}", value.glyph()), style));
    }
    items.push(ListItem::new(Line::from(draft_spans)));

    let title = format!("Responses ({})", view.grid.rows.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(theme.border),
    );
    f.render_widget(list, area);
}

fn draw_instructions(f: &mut Frame, area: Rect, theme: &Theme) {
    let instructions = vec![
        Line::from("Tab/Shift+Tab: Move between name and answers | Space: Cycle answer"),
        Line::from("Enter: Submit response | Esc: Dismiss notice / quit"),
    ];

    let widget = Paragraph::new(instructions).style(theme.hint).block(
        Block::default()
            .title("Instructions")
            .borders(Borders::ALL)
            .border_style(theme.border),
    );
    f.render_widget(widget, area);
}
