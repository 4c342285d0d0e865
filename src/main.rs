use std::io;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;

mod app;
mod cli;
mod config;
mod error;
mod input;
mod layout;
mod suggest;
mod widgets;

use app::App;
use cli::Cli;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logging goes to stderr and would corrupt the TUI; debug builds only
    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }

    let mut app = App::new(&config.server)?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    // Run the application
    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result?;

    // Print the picked name only after the terminal is back to normal
    if let Some(text) = app.take_output() {
        println!("{text}");
    }

    Ok(())
}

/// Event loop: draw, poll terminal input, drain worker responses
fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Poll with a timeout so worker responses are picked up promptly
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key_event(key),
                Event::Mouse(mouse) => app.handle_mouse_event(mouse),
                _ => {}
            }
        }

        app.drain_responses();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
