//! Ratatui front-end for the movie library: the numbered menu tree (main,
//! edit, view, genre), free-text prompts, and result lists. The shell owns the
//! `Library` and is the only place that talks to the terminal.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
