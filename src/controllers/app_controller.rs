use std::time::Duration;
use chrono::Utc;
use crossterm::event::{self, Event};
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::controllers::post_controller::{self, Flow};
use crate::error::PostTuiError;
use crate::models::{Config, PostView};
use crate::views::{tui, CommentCursor, Focus};

const EVENT_POLL: Duration = Duration::from_millis(100);

pub async fn start_app(view: PostView, config: Config) -> Result<(), PostTuiError> {
    // Setup terminal
    let mut terminal = tui::setup_terminal()
        .map_err(|e| PostTuiError::Terminal(e.to_string()))?;
    info!(locale = ?view.locale(), "terminal ready");

    let res = run_app(&mut terminal, view, config.tick_rate()).await;

    // Restore terminal
    tui::restore_terminal(&mut terminal)
        .map_err(|e| PostTuiError::Terminal(e.to_string()))?;
    info!("terminal restored");

    if let Err(err) = &res {
        error!(%err, "app exited with error");
    }
    res
}

pub async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut view: PostView,
    tick_rate: Duration,
) -> Result<(), PostTuiError> {
    let mut events = spawn_event_reader();
    let mut ticker = tokio::time::interval(tick_rate);
    let mut cursor = CommentCursor::new();
    let mut focus = Focus::default();

    loop {
        terminal.draw(|f| tui::render_ui(f, &view, &mut cursor, focus, Utc::now()))?;

        tokio::select! {
            _ = ticker.tick() => {}
            received = events.recv() => match received {
                Some(Ok(Event::Key(key))) => {
                    if let Some(action) = post_controller::map_key(focus, key) {
                        if post_controller::apply(&mut view, &mut cursor, &mut focus, action) == Flow::Quit {
                            return Ok(());
                        }
                    }
                }
                // resize and friends only need the redraw at the top of the loop
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => {
                    warn!("event reader stopped");
                    return Ok(());
                }
            },
        }
    }
}

/// Reads terminal events on a blocking thread. The thread stops once the
/// receiver is dropped.
fn spawn_event_reader() -> mpsc::UnboundedReceiver<std::io::Result<Event>> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(EVENT_POLL) {
                Ok(true) => {
                    if tx.send(event::read()).is_err() {
                        break;
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    let _ = tx.send(Err(e));
                    break;
                }
            }
        }
    });
    rx
}
