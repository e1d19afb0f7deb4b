//! Interactive dashboard: terminal setup and the event loop.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    cursor::Show,
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pulse_client::{fetch_analysis, AnalysisProvider};
use ratatui::prelude::*;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::app::{App, AppEvent};
use crate::event::{handle_key_event, poll_event, Command};
use crate::ui;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Starts background work on the runtime; results come back as `AppEvent`s.
struct Dispatcher {
    handle: Handle,
    provider: Arc<dyn AnalysisProvider>,
    tx: UnboundedSender<AppEvent>,
}

impl Dispatcher {
    fn run(&self, command: Command) {
        match command {
            Command::Analyze(ticker) => self.analyze(ticker),
            Command::RefreshStatus => self.refresh_status(),
        }
    }

    fn analyze(&self, ticker: String) {
        info!(ticker = %ticker, "Starting analysis");
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = fetch_analysis(provider.as_ref(), &ticker).await;
            // The receiver is gone once the UI has exited.
            let _ = tx.send(AppEvent::AnalysisFinished(result));
        });
    }

    fn refresh_status(&self) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let health = provider.health().await;
            let cache = match provider.cache_stats().await {
                Ok(stats) => Some(stats),
                Err(e) => {
                    debug!(error = %e, "Cache statistics unavailable");
                    None
                }
            };
            let _ = tx.send(AppEvent::StatusChecked { health, cache });
        });
    }
}

/// Take over the terminal and run the dashboard until the user quits.
/// With `autostart`, the initial ticker is analyzed right away.
pub fn run(
    handle: Handle,
    provider: Arc<dyn AnalysisProvider>,
    mut app: App,
    autostart: bool,
) -> anyhow::Result<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher { handle, provider, tx };

    let mut terminal = setup_terminal()?;
    install_panic_hook();

    let result = run_app(&mut terminal, &mut app, &dispatcher, rx, autostart);

    restore_terminal()?;
    result
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let entered = execute!(io::stdout(), EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
    or_restore(entered, || {
        let _ = restore_terminal();
    })
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Run `restore` when a partially applied setup step failed.
fn or_restore<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

/// A panic while drawing must not leave the shell in raw mode.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    dispatcher: &Dispatcher,
    mut rx: UnboundedReceiver<AppEvent>,
    autostart: bool,
) -> anyhow::Result<()> {
    dispatcher.run(Command::RefreshStatus);
    if autostart {
        if let Some(ticker) = app.begin_analysis() {
            dispatcher.run(Command::Analyze(ticker));
        }
    }

    loop {
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Some(Event::Key(key)) = poll_event(TICK_RATE)? {
            if let Some(command) = handle_key_event(app, key) {
                dispatcher.run(command);
            }
        }

        if app.should_quit {
            break;
        }
    }

    info!("Dashboard closed");
    Ok(())
}
