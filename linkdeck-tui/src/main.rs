//! linkdeck TUI entry point.

use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use linkdeck_storage::{Catalog, JsonFileStore, Opened};
use linkdeck_tui::config::TuiConfig;
use linkdeck_tui::error::TuiError;
use linkdeck_tui::events::TuiEvent;
use linkdeck_tui::logging::init_logging;
use linkdeck_tui::notifications::NotificationLevel;
use linkdeck_tui::persistence;
use linkdeck_tui::state::{App, Flow};
use linkdeck_tui::traits::SystemOpener;
use linkdeck_tui::views::render_view;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{info, warn};

fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    init_logging(&config)?;

    let store = JsonFileStore::new(config.data_path.clone()).with_write_mode(config.write_mode);
    let Opened { catalog, problems } = Catalog::open(store);
    let mut app = App::new(catalog, config, SystemOpener);
    app.report_store_problems(&problems);

    match persistence::load(&app.config.ui_state_path) {
        Ok(Some(state)) => app.restore(state),
        Ok(None) => {}
        Err(err) => {
            warn!(error = %err, "Ignoring unreadable UI state");
            app.notify(
                NotificationLevel::Warning,
                format!("Could not restore UI state: {}", err),
            );
        }
    }

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard;

    run(&mut terminal, &mut app)?;

    if let Err(err) = persistence::save(&app.config.ui_state_path, &app.persisted_state()) {
        warn!(error = %err, "Failed to save UI state");
    }
    info!("Exiting");
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<JsonFileStore, SystemOpener>,
) -> Result<(), TuiError> {
    let tick_rate = Duration::from_millis(app.config.tick_rate_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| render_view(f, &*app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        let next = if event::poll(timeout)? {
            TuiEvent::from_terminal(event::read()?)
        } else {
            last_tick = Instant::now();
            Some(TuiEvent::Tick)
        };

        match next {
            Some(TuiEvent::Input(key)) => {
                if app.handle_key(key) == Flow::Quit {
                    return Ok(());
                }
            }
            Some(TuiEvent::Tick) => app.tick(chrono::Utc::now()),
            Some(TuiEvent::Resize { .. }) | None => {}
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}
