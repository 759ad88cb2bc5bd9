//! Poll view state and logic

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tracing::{error, info};

use crate::client::PollClient;
use crate::draft::{build_submission, Draft};
use crate::error::PollError;
use crate::grid::PollGrid;
use crate::models::Poll;
use crate::tui::table;
use crate::tui::ui::Theme;

/// View states. Ready is the steady state permitting repeated submissions;
/// Failed and Missing are terminal for the render pass.
pub enum ViewState {
    Loading,
    Failed(String),
    Missing,
    Ready(ReadyView),
}

/// Everything the Ready state owns: the cached poll, its resolved grid and
/// the draft being composed.
pub struct ReadyView {
    pub poll: Poll,
    pub grid: PollGrid,
    pub draft: Draft,
    /// Focused draft cell: 0 is the name field, 1..=options is a column
    pub focus: usize,
}

impl ReadyView {
    fn new(poll: Poll) -> Result<Self, PollError> {
        let grid = PollGrid::from_poll(&poll)?;
        let draft = Draft::new(poll.options.len());
        Ok(Self {
            poll,
            grid,
            draft,
            focus: 0,
        })
    }

    fn cell_count(&self) -> usize {
        self.poll.options.len() + 1
    }
}

/// Dismissible message shown in the bottom bar.
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    fn status(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    fn error(text: String) -> Self {
        Self {
            text,
            is_error: true,
        }
    }
}

/// Poll view application state
pub struct App {
    client: PollClient,
    poll_id: String,
    theme: Theme,
    pub state: ViewState,
    pub notice: Option<Notice>,
    pub should_quit: bool,
}

impl App {
    pub fn new(client: PollClient, poll_id: String, theme: Theme) -> Self {
        Self {
            client,
            poll_id,
            theme,
            state: ViewState::Loading,
            notice: None,
            should_quit: false,
        }
    }

    /// Initial fetch, and the re-fetch after a successful submission. A
    /// fresh Ready view carries a fresh empty draft.
    pub async fn load(&mut self) {
        self.state = match self.client.fetch_poll(&self.poll_id).await {
            Ok(Some(poll)) => match ReadyView::new(poll) {
                Ok(view) => ViewState::Ready(view),
                Err(e) => ViewState::Failed(format!("{:?}", e)),
            },
            Ok(None) => ViewState::Missing,
            Err(e) => ViewState::Failed(format!("{:?}", e)),
        };
    }

    /// Handle keyboard input events
    pub async fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        // An active notice swallows Esc before quit handling sees it
        if key.code == KeyCode::Esc && self.notice.is_some() {
            self.notice = None;
            return Ok(());
        }

        if matches!(self.state, ViewState::Ready(_)) {
            self.handle_ready_event(key).await?;
        } else if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
        }
        Ok(())
    }

    async fn handle_ready_event(&mut self, key: KeyEvent) -> Result<()> {
        let mut submit_requested = false;

        if let ViewState::Ready(view) = &mut self.state {
            match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab | KeyCode::Right => {
                    view.focus = (view.focus + 1) % view.cell_count();
                }
                KeyCode::BackTab | KeyCode::Left => {
                    view.focus = if view.focus == 0 {
                        view.cell_count() - 1
                    } else {
                        view.focus - 1
                    };
                }
                KeyCode::Char(' ') if view.focus > 0 => {
                    view.draft.cycle(view.focus - 1);
                }
                KeyCode::Char(c) if view.focus == 0 => {
                    view.draft.name.push(c);
                }
                KeyCode::Backspace if view.focus == 0 => {
                    view.draft.name.pop();
                }
                KeyCode::Enter => {
                    submit_requested = true;
                }
                _ => {}
            }
        }

        if submit_requested {
            self.submit().await?;
        }
        Ok(())
    }

    /// Assemble the draft and post it. The re-fetch is only initiated after
    /// the submission settles, and only on success; a failure keeps the
    /// cached poll and the draft untouched.
    async fn submit(&mut self) -> Result<()> {
        let submission = match &self.state {
            ViewState::Ready(view) => {
                build_submission(&view.poll, &view.draft.name, &view.draft.effective_values())
            }
            _ => return Ok(()),
        };

        match self.client.submit_response(&self.poll_id, &submission).await {
            Ok(()) => {
                info!("Response submitted for poll {}", self.poll_id);
                self.load().await;
                self.notice = Some(Notice::status(format!(
                    "Response recorded for '{}'",
                    submission.name
                )));
            }
            Err(e) => {
                error!("Submission failed for poll {}: {}", self.poll_id, e);
                self.notice = Some(Notice::error(format!("Submission failed: {}", e)));
            }
        }
        Ok(())
    }

    /// Draw the UI
    pub fn draw(&self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        match &self.state {
            ViewState::Loading => self.draw_message(f, chunks[0], "Loading...", self.theme.hint),
            ViewState::Missing => self.draw_message(f, chunks[0], "No poll", self.theme.title),
            ViewState::Failed(dump) => self.draw_failure(f, chunks[0], dump),
            ViewState::Ready(view) => table::render_poll(f, chunks[0], view, &self.theme),
        }

        self.draw_notice_bar(f, chunks[1]);
    }

    fn draw_message(&self, f: &mut Frame, area: Rect, text: &str, style: Style) {
        let widget = Paragraph::new(text.to_string()).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border),
        );
        f.render_widget(widget, area);
    }

    fn draw_failure(&self, f: &mut Frame, area: Rect, dump: &str) {
        // Raw diagnostic dump, not a friendly message
        let widget = Paragraph::new(dump.to_string())
            .style(self.theme.error)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title("Fetch failed")
                    .borders(Borders::ALL)
                    .border_style(self.theme.error),
            );
        f.render_widget(widget, area);
    }

    fn draw_notice_bar(&self, f: &mut Frame, area: Rect) {
        let (text, style) = match &self.notice {
            Some(notice) if notice.is_error => (notice.text.clone(), self.theme.error),
            Some(notice) => (notice.text.clone(), self.theme.notice),
            None => (
                "pollgrid | Enter: Submit | Esc: Quit".to_string(),
                self.theme.hint,
            ),
        };

        let bar = Paragraph::new(text).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border),
        );
        f.render_widget(bar, area);
    }
}
