//! Core types for codex2json
//!
//! This module holds the error system shared by the extractor, the codex
//! generator and the CLI:
//! - [`CodexError`] - Strongly-typed failure modes
//! - [`ErrorContext`] - User-facing wrapper with details and suggestions
//! - [`user_friendly_error`] - Converts any [`anyhow::Error`] for display
//!
//! # Examples
//!
//! ```rust,no_run
//! use codex2json::core::{CodexError, user_friendly_error};
//!
//! fn run() -> anyhow::Result<()> {
//!     Err(CodexError::invalid_argument("Source directory not provided or does not exist.").into())
//! }
//!
//! if let Err(e) = run() {
//!     user_friendly_error(e).display();
//! }
//! ```

pub mod error;

pub use error::{CodexError, ErrorContext, Result, user_friendly_error};
