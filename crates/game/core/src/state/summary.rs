use std::collections::BTreeMap;

use crate::state::Combatant;

/// Aggregate statistics for one side, reported when requested.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideSummary {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub armor: u32,
    pub armor_after_battle_start: u32,
    pub health_after_battle_start: u32,
    pub attack: i32,
    pub speed: i32,
    pub gold: u32,
    pub strikes_attempted: u32,
    pub strikes_landed: u32,
    pub health_damage_dealt: u32,
    pub armor_destroyed_dealt: u32,
    pub statuses_gained: BTreeMap<String, u32>,
    pub times_exposed: u32,
    pub wounded: bool,
}

impl SideSummary {
    pub(crate) fn capture(fighter: &Combatant, after_battle_start: (u32, u32)) -> Self {
        let (armor_after_battle_start, health_after_battle_start) = after_battle_start;
        let counters = &fighter.counters;
        Self {
            name: fighter.name.clone(),
            health: fighter.health(),
            max_health: fighter.max_health(),
            armor: fighter.armor(),
            armor_after_battle_start,
            health_after_battle_start,
            attack: fighter.attack,
            speed: fighter.speed,
            gold: fighter.gold(),
            strikes_attempted: counters.strikes_attempted,
            strikes_landed: counters.strikes_landed,
            health_damage_dealt: counters.health_damage_dealt,
            armor_destroyed_dealt: counters.armor_destroyed_dealt,
            statuses_gained: counters.statuses_gained.clone(),
            times_exposed: fighter.exposed_count,
            wounded: fighter.is_wounded(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSummary {
    pub left: SideSummary,
    pub right: SideSummary,
}
