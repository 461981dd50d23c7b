//! Binary entry point that glues the in-memory catalog to the TUI: parse the
//! command line, open the log sink, and drive the Ratatui event loop until the
//! user exits. Nothing is loaded or saved; every run starts empty.
use clap::Parser;
use movie_library::{logging, run_app, App, Config, Library};

/// Returning a `Result` bubbles fatal startup problems (for example running
/// without an interactive terminal) up to the shell instead of crashing
/// silently.
fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(&config)?;

    let mut app = App::new(Library::new(), config.show_instructions());
    run_app(&mut app)
}
