//! Content factory for loading battle data from a data directory.

use std::path::{Path, PathBuf};

use duel_core::{BattleConfig, CombatantSpec, SetDefinition, StaticCatalog};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult, LoadoutLoader, SetLoader};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml        (optional)
/// ├── catalog.ron        or catalog.json
/// ├── sets.ron           (optional)
/// └── loadouts/
///     ├── knight.ron
///     └── rogue.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load `config.toml`, or the defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Path of the catalog file, preferring RON over JSON.
    pub fn catalog_path(&self) -> PathBuf {
        let ron = self.data_dir.join("catalog.ron");
        let json = self.data_dir.join("catalog.json");
        if !ron.exists() && json.exists() { json } else { ron }
    }

    /// Load the catalog file.
    pub fn load_catalog(&self) -> LoadResult<StaticCatalog> {
        CatalogLoader::load(&self.catalog_path())
    }

    /// Load `sets.ron`, or no sets when the file is absent.
    pub fn load_sets(&self) -> LoadResult<Vec<SetDefinition>> {
        let path = self.data_dir.join("sets.ron");
        if !path.exists() {
            return Ok(Vec::new());
        }
        SetLoader::load(&path)
    }

    /// Path of a loadout by name: `loadouts/{name}.ron`.
    pub fn loadout_path(&self, name: &str) -> PathBuf {
        self.data_dir.join("loadouts").join(format!("{name}.ron"))
    }

    /// Load a loadout by name, or from `name` itself when it names a file.
    pub fn load_loadout(&self, name: &str) -> LoadResult<CombatantSpec> {
        let direct = Path::new(name);
        if direct.is_file() {
            return LoadoutLoader::load(direct);
        }
        LoadoutLoader::load(&self.loadout_path(name))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(
            factory.loadout_path("knight"),
            Path::new("/tmp/data/loadouts/knight.ron")
        );
    }

    #[test]
    fn optional_files_default_when_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().expect("config"), BattleConfig::default());
        assert!(factory.load_sets().expect("sets").is_empty());
        assert!(factory.load_catalog().is_err(), "catalog is required");
    }

    #[test]
    fn loads_a_data_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("catalog.json"),
            r#"[{"id": "items/pebble", "name": "Pebble", "stats": {"armor": 1}}]"#,
        )
        .expect("write catalog");
        std::fs::create_dir(dir.path().join("loadouts")).expect("mkdir");
        std::fs::write(
            dir.path().join("loadouts/rogue.ron"),
            r#"(name: "Rogue", items: ["items/pebble"])"#,
        )
        .expect("write loadout");

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_catalog().expect("catalog").len(), 1);
        let rogue = factory.load_loadout("rogue").expect("loadout");
        assert_eq!(rogue.name, "Rogue");
        assert_eq!(rogue.items.len(), 1);
    }
}
