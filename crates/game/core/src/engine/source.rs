//! Effect sources and combatant construction.
//!
//! A source is anything that contributes effect rules: the weapon, each
//! equipped item, and every active set bonus. Sources borrow their rules from
//! the catalog for the whole battle.

use std::collections::BTreeMap;

use crate::config::BattleConfig;
use crate::effect::{EffectRule, Tier};
use crate::env::{CatalogRecord, SetDefinition, SourceId};
use crate::state::{Combatant, CombatantSpec, EquippedItem, StatBlock};

/// One entry of a combatant's effective source list.
#[derive(Clone, Copy, Debug)]
pub struct Source<'a> {
    pub id: &'a SourceId,
    pub name: &'a str,
    pub tier: Tier,
    pub tags: &'a [String],
    pub rules: &'a [EffectRule],
}

impl<'a> Source<'a> {
    pub fn equipped(record: &'a CatalogRecord, tier: Tier) -> Self {
        Self {
            id: &record.id,
            name: &record.name,
            tier,
            tags: &record.tags,
            rules: &record.effects,
        }
    }

    pub fn set_bonus(set: &'a SetDefinition) -> Self {
        Self {
            id: &set.id,
            name: &set.name,
            tier: Tier::Base,
            tags: &set.tags,
            rules: &set.effects,
        }
    }
}

/// Equipped entries paired with their catalog records.
pub(crate) type Resolved<'s, 'a> = Vec<(&'s EquippedItem, &'a CatalogRecord)>;

/// Build a combatant from its specification and resolved equipment.
///
/// Stats come from the explicit block when present, otherwise from the
/// default health plus the sum of every equipped record's stats.
pub(crate) fn build_combatant(
    spec: &CombatantSpec,
    resolved: &Resolved<'_, '_>,
    config: &BattleConfig,
) -> Combatant {
    let stats = spec.stats.unwrap_or_else(|| {
        let default_health = i32::try_from(config.default_health).unwrap_or(i32::MAX);
        resolved.iter().fold(
            StatBlock::new(default_health, 0, 0, 0),
            |sum, (_, record)| sum.plus(record.stats),
        )
    });

    let health = non_negative(stats.health.unwrap_or(0));
    let armor = non_negative(stats.armor.unwrap_or(0));
    let mut fighter = Combatant::new(
        spec.name.clone(),
        health,
        stats.attack.unwrap_or(0),
        armor,
        stats.speed.unwrap_or(0),
    )
    .with_exposed_limit(config.exposed_limit);

    let mut tag_counts: BTreeMap<String, u32> = BTreeMap::new();
    for (_, record) in resolved {
        for tag in &record.tags {
            *tag_counts.entry(tag.clone()).or_default() += 1;
        }
    }
    fighter.tag_counts = tag_counts;

    for (status, stacks) in &spec.statuses {
        fighter.statuses.set(status, *stacks);
    }
    fighter
}

fn non_negative(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
