//! Global error handling for codeprompt
//!
//! Fatal errors propagate to `main` and terminate the run; per-file errors
//! are reported and skipped by the scanner instead of being raised here.

use std::io;
use thiserror::Error;

/// Global error type for codeprompt operations
#[derive(Error, Debug)]
pub enum CodePromptError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Scan directory missing or not a directory
    #[error("Invalid directory: {0}")]
    InvalidDirectory(String),

    /// Output directory could not be created
    #[error("Could not create output directory: {0}")]
    OutputDirectory(String),

    /// Output file could not be written
    #[error("Output file error: {0}")]
    OutputFile(String),

    /// File content is not valid UTF-8
    #[error("UnicodeDecodeError: {0}")]
    Decode(String),
}

/// Specialized Result type for codeprompt operations
pub type Result<T> = std::result::Result<T, CodePromptError>;

/// Creates a CodePromptError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::CodePromptError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
