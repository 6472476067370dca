//! Battle configuration loader.

use std::path::Path;

use anyhow::Context;
use duel_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Absent keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        let config: BattleConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config TOML {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use duel_core::Side;

    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("create fixture");
        writeln!(file, "max_turns = 40\ninitiative_tie = \"right\"").expect("write fixture");

        let config = ConfigLoader::load(file.path()).expect("config loads");
        assert_eq!(config.max_turns, 40);
        assert_eq!(config.initiative_tie, Side::Right);
        assert_eq!(config.gold_cap, BattleConfig::DEFAULT_GOLD_CAP);
    }

    #[test]
    fn unknown_types_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("create fixture");
        writeln!(file, "max_turns = \"forever\"").expect("write fixture");
        assert!(ConfigLoader::load(file.path()).is_err());
    }
}
