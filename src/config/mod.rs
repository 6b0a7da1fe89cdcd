//! Configuration management for codex2json.
//!
//! A single optional TOML file tunes the generator: which file name marks an
//! entry document, what the output file is called, whether the walk is sorted
//! and whether the JSON is pretty-printed. See [`GlobalConfig`].

mod global;

pub use global::GlobalConfig;

use crate::codex::GeneratorOptions;

impl From<&GlobalConfig> for GeneratorOptions {
    fn from(config: &GlobalConfig) -> Self {
        Self {
            entry_file_name: config.entry_file_name.clone(),
            output_file_name: config.output_file_name.clone(),
            sorted_walk: config.sorted_walk,
            pretty: config.pretty,
        }
    }
}
