//! Mutable record for one side of a duel.
//!
//! Fields whose invariants matter (health, armor, gold) are private and only
//! change through the clamping mutators below. Mutators never dispatch
//! triggers; they report what happened so the engine can raise events.

use std::collections::BTreeMap;

use crate::effect::Trigger;
use crate::state::{Countdown, Stat, StatusStacks};

/// Installed by `multiply_triggers`: rules matching the filters repeat
/// `factor` times.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerMultiplier {
    /// Only rules with this trigger. `None` matches every trigger.
    pub trigger: Option<Trigger>,
    /// Only rules whose source carries this tag. `None` matches every source.
    pub tag: Option<String>,
    pub factor: u32,
}

impl TriggerMultiplier {
    pub fn applies(&self, trigger: Trigger, tags: &[String]) -> bool {
        self.trigger.is_none_or(|wanted| wanted == trigger)
            && self
                .tag
                .as_ref()
                .is_none_or(|wanted| tags.iter().any(|tag| tag == wanted))
    }
}

/// Per-battle counters reported in the summary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombatCounters {
    pub strikes_attempted: u32,
    pub strikes_landed: u32,
    pub health_damage_dealt: u32,
    pub armor_destroyed_dealt: u32,
    pub gold_gained: u32,
    pub statuses_gained: BTreeMap<String, u32>,
}

/// One side of a duel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    pub name: String,

    health: u32,
    max_health: u32,
    armor: u32,
    base_armor: u32,
    gold: u32,

    pub attack: i32,
    /// Bonus attack cleared at the owner's turn start.
    pub temp_attack: i32,
    pub speed: i32,

    pub statuses: StatusStacks,
    /// Item-specific state keyed by name. Zero counts as unset.
    pub flags: BTreeMap<String, i64>,
    pub countdowns: Vec<Countdown>,

    /// Tag occurrences across equipped sources, for tag conditions.
    pub tag_counts: BTreeMap<String, u32>,
    pub multipliers: Vec<TriggerMultiplier>,

    pub exposed_count: u32,
    pub exposed_limit: u32,
    /// Armor dropped from positive to zero since the last threshold check.
    armor_broken: bool,
    wounded: bool,

    /// Took damage since the owner's own turn started.
    pub struck: bool,
    /// Remaining turn ends on which thorns survive being struck.
    pub preserve_thorns: u32,
    pub freeze_inverts: bool,
    pub cannot_strike: bool,
    pub extra_strikes: u32,
    pub turn_count: u32,
    pub first_turn: bool,

    pub counters: CombatCounters,
}

impl Combatant {
    pub fn new(name: impl Into<String>, health: u32, attack: i32, armor: u32, speed: i32) -> Self {
        Self {
            name: name.into(),
            health,
            max_health: health,
            armor,
            base_armor: armor,
            gold: 0,
            attack,
            temp_attack: 0,
            speed,
            statuses: StatusStacks::new(),
            flags: BTreeMap::new(),
            countdowns: Vec::new(),
            tag_counts: BTreeMap::new(),
            multipliers: Vec::new(),
            exposed_count: 0,
            exposed_limit: 1,
            armor_broken: false,
            wounded: false,
            struck: false,
            preserve_thorns: 0,
            freeze_inverts: false,
            cannot_strike: false,
            extra_strikes: 0,
            turn_count: 0,
            first_turn: true,
            counters: CombatCounters::default(),
        }
    }

    pub fn with_exposed_limit(mut self, limit: u32) -> Self {
        self.exposed_limit = limit;
        self
    }

    // ===== accessors =====

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn armor(&self) -> u32 {
        self.armor
    }

    pub fn base_armor(&self) -> u32 {
        self.base_armor
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_full_health(&self) -> bool {
        self.health >= self.max_health
    }

    pub fn is_wounded(&self) -> bool {
        self.wounded
    }

    pub fn is_exposed(&self) -> bool {
        self.exposed_count > 0
    }

    /// Health at or below which the combatant counts as wounded.
    pub fn wounded_threshold(&self) -> u32 {
        self.max_health / 2
    }

    pub fn stat(&self, stat: Stat) -> i64 {
        match stat {
            Stat::Health => i64::from(self.health),
            Stat::MaxHealth => i64::from(self.max_health),
            Stat::MissingHealth => i64::from(self.max_health - self.health),
            Stat::Armor => i64::from(self.armor),
            Stat::BaseArmor => i64::from(self.base_armor),
            Stat::Attack => i64::from(self.attack),
            Stat::TempAttack => i64::from(self.temp_attack),
            Stat::Speed => i64::from(self.speed),
            Stat::Gold => i64::from(self.gold),
        }
    }

    pub fn flag(&self, name: &str) -> i64 {
        self.flags.get(name).copied().unwrap_or(0)
    }

    // ===== armor =====

    /// Armor removed by an outside force. Records a pending break when the
    /// armor goes from positive to zero. Returns the armor actually removed.
    pub fn destroy_armor(&mut self, amount: u32) -> u32 {
        let removed = self.armor.min(amount);
        if removed > 0 {
            self.armor -= removed;
            if self.armor == 0 {
                self.armor_broken = true;
            }
        }
        removed
    }

    /// Armor converted into something else. Never counts as a break.
    pub fn spend_armor(&mut self, amount: u32) -> u32 {
        let spent = self.armor.min(amount);
        self.armor -= spent;
        spent
    }

    /// Returns the armor gained.
    pub fn gain_armor(&mut self, amount: u32) -> u32 {
        let before = self.armor;
        self.armor = self.armor.saturating_add(amount);
        self.armor - before
    }

    /// Consume a pending armor break if the armor is still zero and the
    /// exposed budget allows another firing.
    pub fn take_exposed(&mut self) -> bool {
        let broken = core::mem::take(&mut self.armor_broken);
        if broken && self.armor == 0 && self.exposed_count < self.exposed_limit {
            self.exposed_count += 1;
            return true;
        }
        false
    }

    // ===== health =====

    /// Health removed by damage. Returns the health actually lost.
    pub fn lose_health(&mut self, amount: u32) -> u32 {
        let lost = self.health.min(amount);
        self.health -= lost;
        lost
    }

    /// Self-inflicted cost: never drops health below one.
    pub fn pay_health(&mut self, amount: u32) -> u32 {
        let payable = self.health.saturating_sub(1);
        self.lose_health(amount.min(payable))
    }

    /// Returns the health actually restored.
    pub fn restore_health(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_health - self.health);
        self.health += restored;
        restored
    }

    /// Mark wounded the first time health is at or below half of max.
    pub fn take_wounded(&mut self) -> bool {
        if !self.wounded && self.health <= self.wounded_threshold() {
            self.wounded = true;
            return true;
        }
        false
    }

    pub fn add_max_health(&mut self, amount: u32) {
        self.max_health = self.max_health.saturating_add(amount);
    }

    /// Scale max health, keeping the missing-health gap unchanged.
    pub fn multiply_max_health(&mut self, factor: u32) {
        let scaled = self.max_health.saturating_mul(factor);
        let grown = scaled.saturating_sub(self.max_health);
        self.max_health = scaled;
        self.health = self.health.saturating_add(grown).min(self.max_health);
    }

    // ===== stats =====

    pub fn adjust_attack(&mut self, delta: i64) {
        self.attack = clamp_i32(i64::from(self.attack) + delta);
    }

    pub fn adjust_speed(&mut self, delta: i64) {
        self.speed = clamp_i32(i64::from(self.speed) + delta);
    }

    /// Returns the gold actually gained under `cap`.
    pub fn add_gold(&mut self, amount: u32, cap: u32) -> u32 {
        let after = self.gold.saturating_add(amount).min(cap).max(self.gold);
        let gained = after - self.gold;
        self.gold = after;
        self.counters.gold_gained = self.counters.gold_gained.saturating_add(gained);
        gained
    }

    /// Clear per-turn state at the owner's turn start.
    pub fn reset_turn(&mut self) {
        self.temp_attack = 0;
        self.extra_strikes = 0;
        self.struck = false;
    }

    /// Combined factor of every multiplier matching a rule.
    pub fn trigger_factor(&self, trigger: Trigger, tags: &[String]) -> u32 {
        self.multipliers
            .iter()
            .filter(|multiplier| multiplier.applies(trigger, tags))
            .fold(1u32, |acc, multiplier| acc.saturating_mul(multiplier.factor))
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destroying_last_armor_records_a_break() {
        let mut fighter = Combatant::new("L", 10, 0, 2, 0);
        assert_eq!(fighter.destroy_armor(5), 2);
        assert!(fighter.take_exposed());
        assert!(!fighter.take_exposed(), "break is consumed");
    }

    #[test]
    fn spending_armor_is_not_a_break() {
        let mut fighter = Combatant::new("L", 10, 0, 2, 0);
        fighter.spend_armor(2);
        assert!(!fighter.take_exposed());
    }

    #[test]
    fn exposed_budget_limits_firings() {
        let mut fighter = Combatant::new("L", 10, 0, 1, 0);
        fighter.destroy_armor(1);
        assert!(fighter.take_exposed());
        fighter.gain_armor(1);
        fighter.destroy_armor(1);
        assert!(!fighter.take_exposed());

        fighter.exposed_limit += 1;
        fighter.gain_armor(1);
        fighter.destroy_armor(1);
        assert!(fighter.take_exposed());
    }

    #[test]
    fn wounded_fires_once_at_half_health() {
        let mut fighter = Combatant::new("L", 11, 0, 0, 0);
        fighter.lose_health(5);
        assert!(!fighter.take_wounded());
        fighter.lose_health(1);
        assert!(fighter.take_wounded());
        fighter.restore_health(10);
        fighter.lose_health(6);
        assert!(!fighter.take_wounded());
    }

    #[test]
    fn paying_health_leaves_one_point() {
        let mut fighter = Combatant::new("L", 3, 0, 0, 0);
        assert_eq!(fighter.pay_health(10), 2);
        assert_eq!(fighter.health(), 1);
    }

    #[test]
    fn gold_respects_cap() {
        let mut fighter = Combatant::new("L", 3, 0, 0, 0);
        assert_eq!(fighter.add_gold(7, 10), 7);
        assert_eq!(fighter.add_gold(7, 10), 3);
        assert_eq!(fighter.gold(), 10);
    }

    #[test]
    fn multipliers_filter_by_trigger_and_tag() {
        let mut fighter = Combatant::new("L", 3, 0, 0, 0);
        fighter.multipliers.push(TriggerMultiplier {
            trigger: None,
            tag: Some("Ring".into()),
            factor: 2,
        });
        fighter.multipliers.push(TriggerMultiplier {
            trigger: Some(Trigger::OnHit),
            tag: None,
            factor: 3,
        });
        let ring = vec!["Ring".to_string()];
        assert_eq!(fighter.trigger_factor(Trigger::OnHit, &ring), 6);
        assert_eq!(fighter.trigger_factor(Trigger::TurnEnd, &ring), 2);
        assert_eq!(fighter.trigger_factor(Trigger::TurnEnd, &[]), 1);
    }
}
