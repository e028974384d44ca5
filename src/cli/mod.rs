//! TUI front-end entry (Ratatui + Crossterm)
//! - Spawns the spending poller
//! - Sets up terminal, drains poll events between frames

use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use log::{error, info};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::config::Settings;

pub mod api;
pub mod input;
pub mod poller;
pub mod state;
pub mod ui;
pub mod util;

pub async fn run(settings: Settings) -> Result<()> {
    let client = api::Client::new(&settings.api_base_url, settings.request_timeout)?;
    let mut app = state::App::new(client.endpoint());
    info!("polling {} every {:?}", client.endpoint(), settings.poll_interval);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let poller = poller::spawn(client, settings.poll_interval, tx);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, &mut app, &poller, &mut rx);

    poller.shutdown().await;
    info!("poller stopped");

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    res
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut state::App,
    poller: &poller::PollerHandle,
    rx: &mut mpsc::UnboundedReceiver<poller::PollEvent>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(ev) = rx.try_recv() {
            app.apply(ev);
        }

        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = input::map_key(key) {
                    if app.handle(action) {
                        poller.refresh();
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.quit {
            break;
        }

        if poller.is_finished() {
            error!("poller task ended while the dashboard was running");
            bail!("spending poller stopped unexpectedly");
        }
    }
    Ok(())
}

/// One fetch, printed as text. Errors propagate so the process exits non-zero.
pub async fn print_once(settings: &Settings) -> Result<()> {
    let client = api::Client::new(&settings.api_base_url, settings.request_timeout)?;
    let snapshot = client.fetch_spending().await?;
    println!("{}", ui::render_text(&snapshot));
    Ok(())
}
