//! Core library surface for the Movie Library TUI application.
//!
//! The catalog itself (`models` + `library`) never touches the terminal; the
//! `ui` module is the interactive shell that drives it. Keeping the split in
//! the public API lets the `bin` target and the tests reuse the same pieces.
pub mod config;
pub mod error;
pub mod library;
pub mod logging;
pub mod models;
pub mod ui;

/// Startup configuration parsed from the command line.
pub use config::Config;

/// The core error type and its result alias.
pub use error::{LibraryError, Result};

/// The owned, always-sorted movie collection.
pub use library::Library;

/// The two domain types that other layers manipulate.
pub use models::{Genre, Movie};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
