//! LocalAuth TUI entry point
//!
//! A terminal demo of a biometric login screen with username/password
//! fallback. The biometric device is simulated; see the config file for
//! its profile.

use std::io;
use std::panic;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use localauth_tui::app::{App, TuiConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Restore the terminal before the default panic output runs.
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive("localauth_tui=info".parse()?))
        .init();

    let result = run_app().await;

    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
    }

    result
}

async fn run_app() -> Result<()> {
    let config = TuiConfig::load();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
