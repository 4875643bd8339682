//! Size-gated input reading.
//!
//! Inputs larger than 10MB are rejected; anything above 1MB is logged.
//! Content must be valid UTF-8.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Size at which to log about large files (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Maximum file size to read (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Path shown for standard input.
pub const STDIN_PATH: &str = "-";

/// Text of one input with where it came from.
#[derive(Debug)]
pub struct Input {
    /// Display path, `-` for stdin.
    pub path: String,

    /// Decoded content.
    pub text: String,
}

/// Size-gated file reader.
pub struct FileReader {
    max_size: u64,
}

impl Default for FileReader {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl FileReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom max size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Read a file, checking size limits.
    ///
    /// Returns `Err(FileTooLarge)` for files exceeding max_size.
    pub fn read(&self, path: &Path) -> Result<Input> {
        let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
        let size = metadata.len();

        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large file"
            );
        }

        let mut file = File::open(path).map_err(|e| io_error(path, e))?;
        let mut buffer = Vec::with_capacity(size as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| io_error(path, e))?;

        Ok(Input {
            path: path.display().to_string(),
            text: decode(path, buffer)?,
        })
    }

    /// Read all of `source` as the stdin input, under the same size limit.
    pub fn read_stdin(&self, source: impl Read) -> Result<Input> {
        let path = PathBuf::from(STDIN_PATH);
        let mut buffer = Vec::new();
        source
            .take(self.max_size + 1)
            .read_to_end(&mut buffer)
            .map_err(|e| io_error(&path, e))?;

        let size = buffer.len() as u64;
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path,
                size,
                max_size: self.max_size,
            });
        }

        Ok(Input {
            path: STDIN_PATH.to_string(),
            text: decode(&path, buffer)?,
        })
    }
}

fn decode(path: &Path, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| io_error(path, io::Error::new(io::ErrorKind::InvalidData, e)))
}

fn io_error(path: &Path, source: io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
