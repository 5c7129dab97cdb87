pub mod render;
pub mod state;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use state::{AppState, FilterForm, Focus};
use std::io::stdout;
use std::time::Duration;
use tokio::sync::watch;

/// Commands the TUI sends back to the query engine.
#[derive(Debug, Clone)]
pub enum TuiCommand {
    /// Re-run the filter pipeline with fresh criteria.
    Apply(crate::query::Criteria),
    Quit,
}

/// Run the TUI. Reads state from `state_rx`, sends commands on `cmd_tx`.
pub async fn run_tui(
    state_rx: watch::Receiver<AppState>,
    cmd_tx: tokio::sync::mpsc::Sender<TuiCommand>,
    vocab: Vec<String>,
) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = tui_loop(&mut terminal, state_rx, cmd_tx, vocab).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn tui_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut state_rx: watch::Receiver<AppState>,
    cmd_tx: tokio::sync::mpsc::Sender<TuiCommand>,
    vocab: Vec<String>,
) -> Result<()> {
    let mut form = FilterForm::new(vocab);

    loop {
        let state = state_rx.borrow().clone();
        terminal.draw(|f| render::draw(f, &state, &form))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    let _ = cmd_tx.send(TuiCommand::Quit).await;
                    return Ok(());
                }

                let before = form.criteria();
                match key.code {
                    KeyCode::Tab => form.focus = form.focus.next(),
                    KeyCode::Esc => form.clear_focused(),
                    KeyCode::Up => match form.focus {
                        Focus::Tags => form.cursor_up(),
                        Focus::Results => form.result_offset = form.result_offset.saturating_sub(1),
                        _ => {}
                    },
                    KeyCode::Down => match form.focus {
                        Focus::Tags => form.cursor_down(),
                        Focus::Results => {
                            if form.result_offset + 1 < state.rows.len() {
                                form.result_offset += 1;
                            }
                        }
                        _ => {}
                    },
                    KeyCode::Char(' ') if form.focus == Focus::Tags => form.toggle_current_tag(),
                    KeyCode::Backspace if form.focus.is_text() => {
                        match form.focus {
                            Focus::Keyword => { form.keyword.pop(); }
                            Focus::DateStart => { form.date_start.pop(); }
                            Focus::DateEnd => { form.date_end.pop(); }
                            _ => {}
                        }
                    }
                    KeyCode::Char(ch) if form.focus.is_text() => match form.focus {
                        Focus::Keyword => form.keyword.push(ch),
                        Focus::DateStart => form.date_start.push(ch),
                        Focus::DateEnd => form.date_end.push(ch),
                        _ => {}
                    },
                    KeyCode::Char('q') => {
                        let _ = cmd_tx.send(TuiCommand::Quit).await;
                        return Ok(());
                    }
                    KeyCode::Char('c') => form.reset(),
                    _ => {}
                }

                // Only bother the engine when the criteria actually changed.
                let after = form.criteria();
                if after != before {
                    form.result_offset = 0;
                    let _ = cmd_tx.send(TuiCommand::Apply(after)).await;
                }
            }
        }

        // Pick up engine updates without blocking key handling.
        tokio::select! {
            _ = state_rx.changed() => {}
            _ = tokio::time::sleep(Duration::from_millis(50)) => {}
        }
    }
}
