//! Integration test suite for codex2json
//!
//! End-to-end tests that drive the `codex2json` binary and the library API
//! against temporary codex trees.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **generate**: Building `codex.json` through the CLI and the library
//! - **inspect**: Single-document extraction output
//! - **config**: Config file handling and its effect on generation

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod config;
mod generate;
mod inspect;
