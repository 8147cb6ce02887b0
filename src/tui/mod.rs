//! Terminal dashboard for a router summary
//!
//! Draws the summary text and a retry budget gauge coloured by tier. The
//! widget writes into shared cells from the feed task; the dashboard only
//! reads them on its own redraw cadence.

mod app;
mod constants;
mod helpers;
mod log_buffer;
mod ui;

pub use app::{DashboardApp, FeedHandle};
pub use log_buffer::{LogBuffer, LogMakeWriter};
pub use ui::render_ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Raw-mode alternate screen, restored on drop
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            leave_screen();
            previous_hook(panic_info);
        }));

        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        leave_screen();
        let _ = self.terminal.show_cursor();
    }
}

fn leave_screen() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Keys that close the dashboard: `q`, Esc and Ctrl-C
fn is_quit_key(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && match key.code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
}

/// Run the dashboard until the user quits or `shutdown_rx` fires
///
/// Sends on `shutdown_tx` when the user quits so the feed task stops too.
pub async fn run_tui(
    mut app: DashboardApp,
    shutdown_tx: mpsc::Sender<()>,
    mut shutdown_rx: mpsc::Receiver<()>,
) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let result = run_app(&mut guard.terminal, &mut app, &mut shutdown_rx).await;
    drop(guard);

    let _ = shutdown_tx.send(()).await;
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut DashboardApp,
    shutdown_rx: &mut mpsc::Receiver<()>,
) -> Result<()> {
    let mut refresh =
        tokio::time::interval(Duration::from_millis(constants::REFRESH_INTERVAL_MS));

    loop {
        terminal.draw(|f| ui::render_ui(f, app))?;

        tokio::select! {
            _ = shutdown_rx.recv() => break,
            _ = refresh.tick() => {
                app.update();

                if event::poll(Duration::ZERO)?
                    && let Event::Key(key) = event::read()?
                    && is_quit_key(&key)
                {
                    break;
                }
            }
        }
    }

    Ok(())
}
