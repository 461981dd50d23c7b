use thiserror::Error;

/// Failures raised by the catalog core. The core performs no I/O, so the
/// taxonomy is small; duplicate titles are a caller-side precondition and
/// never show up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("No movie titled \"{title}\" in the library.")]
    NotFound { title: String },
}

pub type Result<T> = std::result::Result<T, LibraryError>;
