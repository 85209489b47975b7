//! Terminal UI for tic-tac-toe.
//!
//! This binary is the display layer: it reports cell selections to the
//! core engine, feeds measured cell centers back into the geometry
//! mapper, and renders marks, status text, and the winning-line overlay.

#![warn(missing_docs)]

mod app;
mod ui;

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;

/// Single-screen tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tictactoe", version)]
struct Cli {
    /// Write tracing logs to this file (stdout belongs to the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, App::new());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        let mut layout = None;
        terminal.draw(|frame| layout = Some(ui::draw(frame, &app)))?;

        // Layout-ready signal: the grid has been measured for this frame.
        if let Some(layout) = &layout {
            app.on_layout(layout);
        }

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse, layout.as_ref()),
                Event::Resize(_, _) => app.on_resize(),
                _ => {}
            }
        }

        if app.should_quit() {
            info!("Quit requested");
            return Ok(());
        }
    }
}
