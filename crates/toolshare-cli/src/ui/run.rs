use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use toolshare_core::{AppState, KvStore};
use tracing::info;

use super::app::App;
use super::render::render;

// ── main entry ───────────────────────────────────────────────────────────────

pub async fn run<S: KvStore>(state: AppState<S>) -> Result<()> {
    // Terminal setup — install a panic hook so we always restore the terminal
    // even if something panics, otherwise the shell is left in raw mode.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    // Keyboard reader thread; exits once the receiver is gone.
    let (key_tx, mut key_rx) = mpsc::channel::<Event>(32);
    tokio::task::spawn_blocking(move || loop {
        if key_tx.is_closed() {
            break;
        }
        if event::poll(Duration::from_millis(100)).unwrap_or(false) {
            if let Ok(ev) = event::read() {
                if key_tx.blocking_send(ev).is_err() {
                    break;
                }
            }
        }
    });

    let mut app = App::new(state);
    info!(mode = ?app.state.mode(), tools = app.state.registry().len(), "session started");

    let result = event_loop(&mut terminal, &mut key_rx, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    drop(key_rx);
    info!("session ended");
    result
}

async fn event_loop<S: KvStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    key_rx: &mut mpsc::Receiver<Event>,
    app: &mut App<S>,
) -> Result<()> {
    while !app.quit {
        terminal.draw(|f| render(app, f))?;

        let Some(ev) = key_rx.recv().await else { break };
        // Resize and focus events just trigger the redraw above.
        let Event::Key(key) = ev else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        app.handle_key(key);
    }
    Ok(())
}
