//! Error types for swipeable.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the replay binary
//!   - [`SwipeError`] - Construction-time rejections of the state machine
//!   - [`InputError`] - Script file/stdin reading failures
//!   - [`ScriptError`] - Gesture script lines that are not valid steps
//!   - [`ConfigError`] - Config file loading failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - `std::io::Error` - Writing replay output
//!
//! # Recovery Strategy
//!
//! [`SwipeError`] is always fatal: it is raised before any gesture can start, and once a
//! state machine exists none of its operations can fail. Every other error is reported by
//! the binary and ends the replay.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for the replay binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// The swipe configuration was rejected.
    #[error("Invalid swipe setup: {0}")]
    Swipe(#[from] SwipeError),

    /// The gesture script could not be read.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// A gesture script line is not a valid step.
    #[error("Failed to parse gesture script: {0}")]
    Script(#[from] ScriptError),

    /// The configuration file could not be loaded.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] LoggingError),

    /// Replay output could not be written.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Fatal setup errors of the swipe state machine.
///
/// Both variants are raised at construction or measurement time. There is no transient or
/// retryable condition inside the state machine itself.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SwipeError {
    /// Construction parameters are out of their domain: a swipe range outside `[0, 1]` or a
    /// direction that is neither left nor right.
    ///
    /// # Examples
    ///
    /// ```
    /// use swipeable::model::{Side, SwipeConfig, SwipeError};
    ///
    /// let err = SwipeConfig::new(Side::Left, 1.5).unwrap_err();
    /// assert!(matches!(err, SwipeError::InvalidConfiguration { .. }));
    /// ```
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the parameters.
        reason: String,
    },

    /// The container holds more than one draggable child.
    #[error("Precondition violated: {reason}")]
    PreconditionViolation {
        /// Which precondition failed.
        reason: String,
    },
}

/// Errors encountered when reading a gesture script from a file or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified script file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use swipeable::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.jsonl")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.jsonl"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// No script file was given and stdin is an interactive terminal.
    #[error("No input source: provide a script path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing gesture script lines.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScriptError {
    /// A line is not valid JSON or not a known step.
    ///
    /// # Examples
    ///
    /// ```
    /// use swipeable::model::error::ScriptError;
    ///
    /// let err = ScriptError::InvalidJson {
    ///     line: 3,
    ///     message: "unknown variant `fling`".to_string(),
    /// };
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    #[error("Invalid step at line {line}: {message}")]
    InvalidJson {
        /// 1-based line number in the script.
        line: usize,
        /// Parser error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn invalid_configuration_display() {
        let err = SwipeError::InvalidConfiguration {
            reason: "swipe range 1.5 is outside [0, 1]".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid configuration"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn precondition_violation_display() {
        let err = SwipeError::PreconditionViolation {
            reason: "container holds 2 children".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Precondition violated: container holds 2 children"
        );
    }

    #[test]
    fn input_error_no_input_display() {
        let msg = InputError::NoInput.to_string();
        assert!(msg.contains("No input source"));
        assert!(msg.contains("pipe data to stdin"));
    }

    #[test]
    fn input_error_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let input_err: InputError = io_err.into();
        let msg = input_err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn script_error_display_includes_line() {
        let err = ScriptError::InvalidJson {
            line: 42,
            message: "expected value".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 42"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn app_error_from_swipe_error() {
        let app_err: AppError = SwipeError::InvalidConfiguration {
            reason: "bad".to_string(),
        }
        .into();
        let msg = app_err.to_string();
        assert!(msg.contains("Invalid swipe setup"));
        assert!(msg.contains("bad"));
    }

    #[test]
    fn app_error_nested_io_through_input_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let input_err: InputError = io_err.into();
        let app_err: AppError = input_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Failed to read input"));
        assert!(msg.contains("IO error"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn app_error_from_script_error() {
        let app_err: AppError = ScriptError::InvalidJson {
            line: 7,
            message: "eof".to_string(),
        }
        .into();
        assert!(app_err.to_string().contains("line 7"));
    }
}
