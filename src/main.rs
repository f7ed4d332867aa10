use pawmatch::adapters::JsonFileStore;
use pawmatch::app::App;
use pawmatch::cli::{parse_args, run_cli_command};
use pawmatch::config::AppConfig;
use pawmatch::logging;
use pawmatch::terminal::{setup_panic_hook, TerminalManager};
use pawmatch::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::{Stream, StreamExt};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Event loop tick; drives card animations and toast expiry.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Flags like --version and --reset never touch the terminal
    if let Some(result) = run_cli_command(parse_args(std::env::args())) {
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    color_eyre::install()?;

    let config = AppConfig::load()?;
    let data_dir = config.data_dir()?;
    let log_path = logging::init(&data_dir)?;
    let store = Arc::new(JsonFileStore::in_dir(&data_dir));
    tracing::info!(data_dir = %data_dir.display(), log = %log_path.display(), "data directory ready");

    let mut app = App::new(config, store)?;

    setup_panic_hook();
    let runtime = tokio::runtime::Runtime::new()?;

    let mut manager = TerminalManager::new()?;
    let size = manager.size()?;
    app.set_terminal_size(size.width, size.height);

    let result = runtime.block_on(run_app(manager.terminal(), &mut app));
    manager.restore()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "event loop failed");
    }
    tracing::info!(matches = app.match_count(), "pawmatch exiting");
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    run_loop(terminal, app, EventStream::new()).await
}

/// Draw, tick and dispatch `events` until the app quits or the stream ends.
///
/// The ticker lives across iterations, so a steady stream of events
/// (mouse motion reports, for one) cannot starve the animations.
async fn run_loop<B, S>(terminal: &mut Terminal<B>, app: &mut App, mut events: S) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: Stream<Item = std::io::Result<Event>> + Unpin,
{
    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = events.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.set_terminal_size(width, height);
                    }
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => {
                        app.handle_mouse(mouse);
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.handle_paste(&text);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event error");
                    }
                    // stdin closed
                    None => app.quit(),
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
