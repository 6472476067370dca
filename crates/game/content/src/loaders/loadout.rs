//! Combatant loadout loader.

use std::path::Path;

use anyhow::Context;
use duel_core::CombatantSpec;

use crate::loaders::{Format, LoadResult, decode, read_file};

/// Loader for one combatant specification from a RON (or JSON) file.
pub struct LoadoutLoader;

impl LoadoutLoader {
    pub fn load(path: &Path) -> LoadResult<CombatantSpec> {
        let content = read_file(path)?;
        let mut spec: CombatantSpec = decode(&content, Format::of(path))
            .with_context(|| format!("Failed to parse loadout {}", path.display()))?;

        if spec.name.is_empty() {
            spec.name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("combatant")
                .to_owned();
        }
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use duel_core::{EquippedItem, StatusKind, Tier};

    use super::*;

    #[test]
    fn loads_weapon_items_and_statuses() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("knight.ron");
        let mut file = std::fs::File::create(&path).expect("create fixture");
        write!(
            file,
            r#"(
                weapon: Some("weapons/granite_lance"),
                items: [
                    "items/gold_ring",
                    (id: "items/jade_ring", tier: "diamond"),
                ],
                statuses: {{"thorns": 2}},
            )"#
        )
        .expect("write fixture");

        let spec = LoadoutLoader::load(&path).expect("loadout loads");
        assert_eq!(spec.name, "knight");
        assert_eq!(spec.weapon, Some(EquippedItem::new("weapons/granite_lance")));
        assert_eq!(spec.items[1], EquippedItem::new("items/jade_ring").at(Tier::Top));
        assert_eq!(spec.statuses.get(&StatusKind::Thorns), Some(&2));
        assert!(spec.stats.is_none());
    }
}
