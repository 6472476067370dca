use std::collections::BTreeMap;
use std::fmt;

use crate::effect::EffectRule;
use crate::state::StatBlock;

/// Catalog key of the form `"<bucket>/<slug>"`, e.g. `items/granite_lance`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Part before the first `/`, or empty when there is none.
    pub fn bucket(&self) -> &str {
        self.0.split_once('/').map_or("", |(bucket, _)| bucket)
    }

    /// Part after the first `/`, or the whole id when there is none.
    pub fn slug(&self) -> &str {
        self.0.split_once('/').map_or(self.0.as_str(), |(_, slug)| slug)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One weapon, item, or upgrade definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogRecord {
    pub id: SourceId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: StatBlock,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<EffectRule>,
}

impl CatalogRecord {
    pub fn new(id: impl Into<SourceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stats: StatBlock::default(),
            tags: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_effect(mut self, rule: EffectRule) -> Self {
        self.effects.push(rule);
        self
    }
}

/// Read-only lookup of catalog records.
pub trait Catalog: Send + Sync {
    fn record(&self, id: &SourceId) -> Option<&CatalogRecord>;
}

/// In-memory catalog keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticCatalog {
    records: BTreeMap<SourceId, CatalogRecord>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record; returns the replaced one.
    pub fn insert(&mut self, record: CatalogRecord) -> Option<CatalogRecord> {
        self.records.insert(record.id.clone(), record)
    }

    pub fn with(mut self, record: CatalogRecord) -> Self {
        self.insert(record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &CatalogRecord> {
        self.records.values()
    }
}

impl FromIterator<CatalogRecord> for StaticCatalog {
    fn from_iter<T: IntoIterator<Item = CatalogRecord>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}

impl Catalog for StaticCatalog {
    fn record(&self, id: &SourceId) -> Option<&CatalogRecord> {
        self.records.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_split_into_bucket_and_slug() {
        let id = SourceId::from("items/granite_lance");
        assert_eq!(id.bucket(), "items");
        assert_eq!(id.slug(), "granite_lance");

        let bare = SourceId::from("lance");
        assert_eq!(bare.bucket(), "");
        assert_eq!(bare.slug(), "lance");
    }

    #[test]
    fn later_records_replace_earlier_ones() {
        let catalog: StaticCatalog = [
            CatalogRecord::new("items/a", "First"),
            CatalogRecord::new("items/a", "Second"),
        ]
        .into_iter()
        .collect();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.record(&SourceId::from("items/a")).map(|r| r.name.as_str()),
            Some("Second")
        );
    }
}
