//! Trip viewer - itinerary, accommodations and currency converter
//!
//! A terminal UI application that shows a multi-day trip schedule, the
//! hotels booked for it, and a TWD/JPY converter with a remembered rate.

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use tripview::app::App;
use tripview::cli::{Cli, StartupConfig};
use tripview::{links, logging, ui};

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    if let Some(dir) = config.data_dir.clone().or_else(logging::default_data_dir) {
        if let Err(e) = logging::initialize_logging(&dir) {
            eprintln!("warning: logging disabled: {}", e);
        }
    }

    let store = config.rate_store();
    if config.reset_rate {
        if let Some(store) = &store {
            store.clear()?;
            info!("custom exchange rate cleared");
        }
    }

    // One-shot conversion, no terminal UI
    if let Some(amount) = &config.convert_amount {
        let app = App::with_startup_config(&config, store);
        println!("{}", app.info.converter.convert(amount));
        return Ok(());
    }

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_startup_config(&config, store);
    info!(view = %config.initial_view, day = %config.initial_day, "viewer started");

    // Main event loop
    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        for url in app.take_pending_links() {
            if let Err(e) = links::open_url(&url) {
                warn!(url = %url, error = %e, "failed to open link");
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
