//! Catalog loader.
//!
//! A catalog file is either a list of records or a map from id to record
//! (the id is filled in from the key when the record omits it). Records are
//! decoded one at a time, so a single malformed entry only costs itself.
//!
//! RON enum values such as tiers, stats and scopes are written as strings
//! (`tier: "top"`), matching the JSON spelling.

use std::path::Path;

use anyhow::Context;
use duel_core::{CatalogRecord, StaticCatalog};
use serde_json::Value;

use crate::loaders::{Format, LoadResult, decode, read_file};

/// Loader for catalog records from RON or JSON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load every well-formed record of `path` into a [`StaticCatalog`].
    pub fn load(path: &Path) -> LoadResult<StaticCatalog> {
        let content = read_file(path)?;
        Self::parse(&content, Format::of(path))
            .with_context(|| format!("Failed to parse catalog {}", path.display()))
    }

    /// Load several files into one catalog. Later files override earlier
    /// records with the same id.
    pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> LoadResult<StaticCatalog> {
        let mut catalog = StaticCatalog::new();
        for path in paths {
            for record in Self::load(path.as_ref())?.records() {
                if catalog.insert(record.clone()).is_some() {
                    tracing::debug!(id = %record.id, "catalog record overridden");
                }
            }
        }
        Ok(catalog)
    }

    fn parse(content: &str, format: Format) -> LoadResult<StaticCatalog> {
        let entries: Value = decode(content, format)?;

        let mut catalog = StaticCatalog::new();
        let mut skipped = 0usize;
        for (position, entry) in Self::entries(entries)?.into_iter().enumerate() {
            match serde_json::from_value::<CatalogRecord>(entry) {
                Ok(record) => {
                    catalog.insert(record);
                }
                Err(error) => {
                    skipped += 1;
                    tracing::warn!(position, %error, "skipping malformed catalog record");
                }
            }
        }
        tracing::info!(records = catalog.len(), skipped, "catalog loaded");
        Ok(catalog)
    }

    fn entries(root: Value) -> LoadResult<Vec<Value>> {
        match root {
            Value::Array(entries) => Ok(entries),
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(key, mut entry)| {
                    if let Value::Object(fields) = &mut entry {
                        fields.entry("id").or_insert(Value::String(key));
                    }
                    entry
                })
                .collect()),
            other => anyhow::bail!("expected a list or map of records, found {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use duel_core::{
        ActionKind, Catalog, Identifier, SourceId, StatusKind, Tier, Trigger, ValueSpec,
    };

    use super::*;

    fn fixture(extension: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(extension)
            .tempfile()
            .expect("create fixture");
        file.write_all(content.as_bytes()).expect("write fixture");
        file
    }

    #[test]
    fn loads_ron_records_with_tiered_values() {
        let file = fixture(
            ".ron",
            r#"[
                (
                    id: "items/granite_lance",
                    name: "Granite Lance",
                    stats: (attack: Some(2), armor: Some(1)),
                    tags: ["Stone"],
                    effects: [
                        (
                            trigger: "battleStart",
                            actions: [
                                (type: "add_armor", value: Some((base: Some(1), gold: Some(2), diamond: Some(4)))),
                            ],
                        ),
                    ],
                ),
            ]"#,
        );

        let catalog = CatalogLoader::load(file.path()).expect("catalog loads");
        let record = catalog
            .record(&SourceId::from("items/granite_lance"))
            .expect("record present");
        assert_eq!(record.stats.attack, Some(2));
        assert_eq!(record.effects[0].trigger, Identifier::Known(Trigger::BattleStart));
        let value = record.effects[0].actions[0].value.expect("value");
        assert_eq!(value.resolve(Tier::Top), Some(4));
    }

    #[test]
    fn malformed_records_are_skipped() {
        let file = fixture(
            ".json",
            r#"[
                {"id": "items/ok", "name": "Fine", "effects": [
                    {"trigger": "onHit", "actions": [{"type": "add_status_to_enemy", "status": "poison", "value": 1}]}
                ]},
                {"id": "items/broken", "effects": "nonsense"},
                {"id": "items/odd", "name": "Odd", "effects": [
                    {"trigger": "onMoonrise", "actions": [{"type": "summon_dragon", "value": "lots"}]}
                ]}
            ]"#,
        );

        let catalog = CatalogLoader::load(file.path()).expect("catalog loads");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.record(&SourceId::from("items/broken")).is_none());

        let odd = catalog.record(&SourceId::from("items/odd")).expect("odd kept");
        assert_eq!(odd.effects[0].trigger, Identifier::Unknown("onMoonrise".into()));
        let action = &odd.effects[0].actions[0];
        assert_eq!(action.kind, Identifier::Unknown("summon_dragon".into()));
        assert_eq!(action.value, Some(ValueSpec::Malformed));

        let ok = catalog.record(&SourceId::from("items/ok")).expect("ok kept");
        let action = &ok.effects[0].actions[0];
        assert_eq!(action.kind, Identifier::Known(ActionKind::AddStatusToEnemy));
        assert_eq!(action.status, Some(StatusKind::Poison));
    }

    #[test]
    fn map_keys_fill_missing_ids() {
        let file = fixture(
            ".json",
            r#"{"weapons/twig": {"name": "Twig", "stats": {"atk": 1}}}"#,
        );
        let catalog = CatalogLoader::load(file.path()).expect("catalog loads");
        let twig = catalog.record(&SourceId::from("weapons/twig")).expect("twig");
        assert_eq!(twig.stats.attack, Some(1));
    }

    #[test]
    fn unreadable_root_is_an_error() {
        let file = fixture(".json", "42");
        let err = CatalogLoader::load(file.path()).expect_err("scalar root rejected");
        assert!(format!("{err:#}").contains("Failed to parse catalog"));
    }
}
