//! Error handling for codex2json
//!
//! This module provides the error types and user-facing error reporting for the
//! codex generator. The error system follows two principles:
//! 1. **Strongly-typed errors** so callers can tell argument problems from I/O failures
//! 2. **User-friendly messages** with details and suggestions for CLI users
//!
//! # Architecture
//!
//! - [`CodexError`] - Enumerated failure modes of the extractor, generator and config
//! - [`ErrorContext`] - Wrapper that adds details and suggestions for display
//! - [`user_friendly_error`] - Converts any [`anyhow::Error`] into an [`ErrorContext`]
//!
//! # Error Categories
//!
//! - **Invalid arguments**: [`CodexError::InvalidArgument`], raised before any I/O
//! - **I/O failures**: [`CodexError::FileReadError`], [`CodexError::DirectoryWalkError`],
//!   [`CodexError::OutputWriteError`], [`CodexError::Io`]
//! - **Serialization**: [`CodexError::Serialization`]
//! - **Configuration**: [`CodexError::ConfigError`]
//!
//! Malformed frontmatter is never an error. Documents that yield no metadata are
//! filtered out of the codex instead.
//!
//! # Examples
//!
//! ```rust,no_run
//! use codex2json::core::{CodexError, ErrorContext};
//!
//! let context = ErrorContext::new(CodexError::InvalidArgument {
//!     message: "Source directory not provided or does not exist.".to_string(),
//! })
//! .with_suggestion("Pass the path of an existing directory");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for codex generation.
///
/// Every variant except [`CodexError::InvalidArgument`] and
/// [`CodexError::ConfigError`] aborts a run after I/O has started. None of them
/// are retried, and no partial `codex.json` is left behind.
#[derive(Error, Debug)]
pub enum CodexError {
    /// The source directory was empty, missing, not a directory, or has no parent.
    ///
    /// Reported before the directory walk begins.
    #[error("{message}")]
    InvalidArgument {
        /// Description of the rejected argument
        message: String,
    },

    /// A document could not be opened or decoded as UTF-8.
    #[error("Failed to read '{path}': {reason}")]
    FileReadError {
        /// The document that failed to read
        path: String,
        /// Underlying I/O error message
        reason: String,
    },

    /// A directory below the source tree could not be listed.
    #[error("Failed to walk directory '{path}': {reason}")]
    DirectoryWalkError {
        /// The directory (or entry) the walk failed on
        path: String,
        /// Underlying walk error message
        reason: String,
    },

    /// The codex file could not be written.
    #[error("Failed to write '{path}': {reason}")]
    OutputWriteError {
        /// The output file path
        path: String,
        /// Underlying I/O error message
        reason: String,
    },

    /// The corpus could not be serialized to JSON.
    #[error("Failed to serialize codex: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration file problem.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Any other I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl CodexError {
    /// Shorthand for an [`CodexError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Whether this error is an I/O failure (read, walk, or write).
    #[must_use]
    pub const fn is_io_failure(&self) -> bool {
        matches!(
            self,
            Self::FileReadError { .. }
                | Self::DirectoryWalkError { .. }
                | Self::OutputWriteError { .. }
                | Self::Io(_)
        )
    }

    /// Whether this error was raised by argument validation.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

impl Clone for CodexError {
    fn clone(&self) -> Self {
        match self {
            Self::InvalidArgument {
                message,
            } => Self::InvalidArgument {
                message: message.clone(),
            },
            Self::FileReadError {
                path,
                reason,
            } => Self::FileReadError {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::DirectoryWalkError {
                path,
                reason,
            } => Self::DirectoryWalkError {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::OutputWriteError {
                path,
                reason,
            } => Self::OutputWriteError {
                path: path.clone(),
                reason: reason.clone(),
            },
            // serde_json::Error is not Clone
            Self::Serialization(e) => Self::Other {
                message: format!("Failed to serialize codex: {e}"),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            Self::Io(e) => Self::Io(std::io::Error::new(e.kind(), e.to_string())),
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Convenience alias for results carrying a [`CodexError`].
pub type Result<T> = std::result::Result<T, CodexError>;

/// Error wrapper with user-facing details and suggestions.
///
/// Displayed by the CLI as colored `error:`, `details:` and `suggestion:` lines
/// on stderr.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: CodexError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no details or suggestion.
    #[must_use]
    pub const fn new(error: CodexError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the context to stderr with terminal colors.
    ///
    /// - Error message: red and bold
    /// - Details: yellow
    /// - Suggestion: green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for the CLI.
///
/// [`CodexError`]s found anywhere in the chain get tailored suggestions. Plain
/// I/O errors are mapped by kind. Anything else is reported with its full cause
/// chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(codex_error) = error.chain().find_map(|e| e.downcast_ref::<CodexError>()) {
        return create_error_context(codex_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(CodexError::Io(std::io::Error::new(
                    io_error.kind(),
                    io_error.to_string(),
                )))
                .with_suggestion("Check the file and directory permissions")
                .with_details("codex2json could not access a file or directory it needed");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(CodexError::Io(std::io::Error::new(
                    io_error.kind(),
                    io_error.to_string(),
                )))
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(CodexError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax of your codex2json config file");
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(CodexError::Other {
        message,
    })
}

fn create_error_context(error: CodexError) -> ErrorContext {
    match &error {
        CodexError::InvalidArgument {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Pass the path of an existing directory that contains entry.md files"),
        CodexError::FileReadError {
            ..
        } => ErrorContext::new(error)
            .with_details("Every entry.md must be readable UTF-8 text; one bad file aborts the run")
            .with_suggestion("Fix or remove the unreadable document and run again"),
        CodexError::DirectoryWalkError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the permissions of the directories below the source directory"),
        CodexError::OutputWriteError {
            ..
        } => ErrorContext::new(error)
            .with_details("codex.json is written to the parent of the source directory")
            .with_suggestion("Make sure the parent directory is writable"),
        CodexError::ConfigError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Run 'codex2json config show' to inspect the active configuration"),
        CodexError::Serialization(_)
        | CodexError::Io(_)
        | CodexError::Other {
            ..
        } => ErrorContext::new(error),
    }
}
