//! Set bonus resolution.
//!
//! Runs once at battle start. Equipment is fixed for the battle, so the
//! active list is never recomputed.

use crate::env::{Catalog, SetDefinition, SetRequirement, SourceId};

const ITEMS_BUCKET: &str = "items";

/// Set definitions whose requirements are all met by `equipped`.
///
/// A definition without requirements never activates.
pub fn active_sets<'s>(
    equipped: &[&SourceId],
    catalog: &dyn Catalog,
    sets: &'s [SetDefinition],
) -> Vec<&'s SetDefinition> {
    sets.iter()
        .filter(|set| {
            !set.requirements.is_empty()
                && set
                    .requirements
                    .iter()
                    .all(|requirement| satisfied(requirement, equipped, catalog))
        })
        .collect()
}

fn satisfied(requirement: &SetRequirement, equipped: &[&SourceId], catalog: &dyn Catalog) -> bool {
    match requirement {
        SetRequirement::AllOf { ids } => ids.iter().all(|id| equipped.contains(&id)),
        SetRequirement::TagCount { tag, count } => {
            let tagged = equipped
                .iter()
                .filter(|id| id.bucket() == ITEMS_BUCKET)
                .filter_map(|id| catalog.record(id))
                .filter(|record| record.tags.iter().any(|held| held == tag))
                .count();
            tagged >= *count as usize
        }
    }
}
