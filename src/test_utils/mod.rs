//! Test utilities for codex2json
//!
//! Helpers for building temporary codex trees and sample entry documents,
//! shared by unit tests and the integration suite (via the `test-utils`
//! feature).
//!
//! # Example
//!
//! ```rust,ignore
//! use codex2json::test_utils::{EntryFixture, TestEnvironment};
//!
//! let env = TestEnvironment::new().unwrap();
//! env.write_entry("aster", &EntryFixture::aster()).unwrap();
//! assert!(env.source_dir().join("aster/entry.md").exists());
//! ```

pub mod environment;
pub mod fixtures;

pub use environment::TestEnvironment;
pub use fixtures::EntryFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` if given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
