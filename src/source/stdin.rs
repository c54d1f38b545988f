//! Stdin-based script source for piped input.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};

/// Stdin source for a piped gesture script.
///
/// Refuses an interactive terminal so the binary never blocks waiting for
/// keyboard input when the user forgot to pipe a script.
pub struct StdinSource {
    reader: Box<dyn Read>,
}

impl std::fmt::Debug for StdinSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdinSource").finish_non_exhaustive()
    }
}

impl StdinSource {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }

        Ok(Self {
            reader: Box::new(stdin),
        })
    }

    /// Create StdinSource from any reader, bypassing the TTY check.
    pub fn from_reader(reader: impl Read + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Read until EOF.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures or invalid UTF-8.
    pub fn read_all(mut self) -> Result<String, InputError> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;
        Ok(text)
    }
}
