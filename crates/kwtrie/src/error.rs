use std::path::PathBuf;

/// kwtrie error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Empty or whitespace-only keyword
    #[error("{0}")]
    InvalidInput(String),

    /// Lifecycle misuse, e.g. inserting into a built automaton
    #[error("state error: {0}")]
    State(String),

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file exceeds maximum size limit.
    #[error("file too large: {} ({} bytes, max: {} bytes)", .path.display(), .size, .max_size)]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },
}

/// Message reported for empty keywords. Existing consumers match on it.
pub const EMPTY_KEYWORD_MESSAGE: &str = "Provided string `keyword` is a null or empty string.";

impl Error {
    pub(crate) fn empty_keyword() -> Self {
        Error::InvalidInput(EMPTY_KEYWORD_MESSAGE.to_string())
    }
}

/// Result type using kwtrie Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// At least one keyword matched
    Success = 0,
    /// Nothing matched
    NoMatches = 1,
    /// Configuration, argument or keyword error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) | Error::InvalidInput(_) => {
                ExitCode::ConfigError
            }
            Error::State(_) => ExitCode::InternalError,
            Error::Io { .. } | Error::FileTooLarge { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
