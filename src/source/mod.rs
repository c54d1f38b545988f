//! Gesture script input sources.
//!
//! - File loading for a script on disk
//! - Stdin for piped scripts
//! - Unified InputSource enum for both

use crate::model::error::InputError;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for gesture scripts.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// Script file read on construction
    File(FileSource),
    /// Script piped on stdin
    Stdin(StdinSource),
}

impl InputSource {
    /// Consume the source and return the whole script text.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if stdin cannot be read.
    pub fn read_to_string(self) -> Result<String, InputError> {
        match self {
            InputSource::File(f) => Ok(f.into_contents()),
            InputSource::Stdin(s) => s.read_all(),
        }
    }
}

/// Detect and create appropriate input source.
///
/// # Logic:
/// 1. If file path is provided: create FileSource (loads on construction)
/// 2. If stdin is piped: use StdinSource
/// 3. Else: return InputError::NoInput
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is a terminal.
/// Returns `InputError::FileNotFound` if file does not exist.
/// Returns `InputError::Io` for I/O errors during file reading.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
