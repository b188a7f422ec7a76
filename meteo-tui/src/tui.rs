//! Terminal lifecycle and the async event loop.
//!
//! Key events come from a dedicated blocking thread, the simulated fetch
//! runs as a spawned task, and a short tick drives the spinner. The UI stays
//! responsive while a fetch is pending.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use meteo_core::{Config, WeatherProvider};

use crate::app::{App, Effect};
use crate::ui;

const TICK: Duration = Duration::from_millis(100);

pub async fn run(provider: Arc<dyn WeatherProvider>, config: &Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.default_city.clone());
    let result = event_loop(&mut terminal, &mut app, provider).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    provider: Arc<dyn WeatherProvider>,
) -> Result<()> {
    let mut keys = spawn_input_thread();
    let (fetch_tx, mut fetch_rx) = mpsc::channel(4);
    let mut tick = tokio::time::interval(TICK);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        let effect = tokio::select! {
            Some(key) = keys.recv() => app.handle_key(key),
            Some(outcome) = fetch_rx.recv() => {
                app.on_fetch_done(outcome);
                Effect::None
            }
            _ = tick.tick() => {
                app.on_tick();
                Effect::None
            }
        };

        match effect {
            Effect::Quit => break,
            Effect::Fetch(request) => {
                let provider = Arc::clone(&provider);
                let tx = fetch_tx.clone();
                tokio::spawn(async move {
                    let outcome = provider.get_weather(&request).await;
                    // The loop may already be gone on shutdown.
                    let _ = tx.send(outcome).await;
                });
            }
            Effect::None => {}
        }
    }

    Ok(())
}

/// Forward key presses from the blocking crossterm reader. The thread ends
/// when the receiver is dropped.
fn spawn_input_thread() -> mpsc::Receiver<KeyCode> {
    let (tx, rx) = mpsc::channel(32);

    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.blocking_send(key.code).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });

    rx
}
