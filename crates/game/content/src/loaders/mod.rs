//! Content loaders for reading battle data from files.
//!
//! Each loader turns one RON/JSON/TOML file into `duel-core` types. Errors
//! carry the offending path; individual malformed catalog records are
//! skipped with a warning instead of failing the whole file.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod loadout;
pub mod sets;

pub use catalog::CatalogLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use loadout::LoadoutLoader;
pub use sets::SetLoader;

use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Data formats a file can be written in, chosen by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    Ron,
    Json,
}

impl Format {
    /// `.json` is JSON; everything else is read as RON.
    pub(crate) fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Ron,
        }
    }
}

/// Decode `content` in `format`.
///
/// RON goes through a JSON value so enum-valued fields are spelled as
/// strings in both formats (`tier: "top"`, `stat: "armor"`).
pub(crate) fn decode<T: DeserializeOwned>(content: &str, format: Format) -> LoadResult<T> {
    let value = match format {
        Format::Json => serde_json::from_str::<serde_json::Value>(content)?,
        Format::Ron => serde_json::to_value(ron::from_str::<ron::Value>(content)?)?,
    };
    Ok(serde_json::from_value(value)?)
}
