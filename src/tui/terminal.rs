//! Terminal setup and teardown
//!
//! Initializes and restores the terminal, with a panic hook that restores it
//! on crash.

use anyhow::Result;
use chrono::Local;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::info;

use crate::config::settings::Settings;
use crate::services::ExpenseStore;
use crate::storage::Persistence;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_key_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard until the user quits
pub fn run_tui<P: Persistence>(store: ExpenseStore<P>, settings: Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(store, settings);
    let events = EventHandler::default();

    info!("dashboard started");

    let result = event_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    info!("dashboard closed");

    result
}

fn event_loop<P: Persistence>(
    terminal: &mut Tui,
    app: &mut App<P>,
    events: &EventHandler,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key, Local::now().date_naive()),
            Event::Resize(_, _) | Event::Tick => {}
        }
    }

    Ok(())
}
