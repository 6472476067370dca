//! Armor-first damage and the exposed/wounded thresholds.

use crate::effect::{EventData, Trigger};
use crate::state::Side;

use super::Battle;

/// What one application of damage removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageDealt {
    pub armor: u32,
    pub health: u32,
}

impl DamageDealt {
    pub fn total(&self) -> u32 {
        self.armor + self.health
    }
}

/// Split `amount` into armor destroyed and health lost: armor absorbs first,
/// health loss is clamped at the remaining health.
pub fn split_damage(armor: u32, health: u32, amount: u32) -> DamageDealt {
    let to_armor = armor.min(amount);
    let to_health = (amount - to_armor).min(health);
    DamageDealt {
        armor: to_armor,
        health: to_health,
    }
}

impl Battle<'_> {
    /// Deal `amount` from `src` to `dst`, armor first.
    ///
    /// Raises `onDamaged` for `dst`, then checks its thresholds unless a
    /// strike is holding them back.
    pub(crate) fn apply_damage(
        &mut self,
        src: Side,
        dst: Side,
        amount: u32,
        by: Option<&str>,
    ) -> DamageDealt {
        let target = self.fighter_mut(dst);
        let dealt = split_damage(target.armor(), target.health(), amount);
        target.destroy_armor(dealt.armor);
        target.lose_health(dealt.health);
        target.struck = true;

        let src_name = self.fighter(src).name.clone();
        let dst_name = self.fighter(dst).name.clone();
        if dealt.armor > 0 {
            self.log
                .attributed(by, format!("{src_name} destroys {} armor", dealt.armor));
        }
        if dealt.health > 0 {
            self.log
                .attributed(by, format!("{src_name} hits {dst_name} for {}", dealt.health));
        }

        if src != dst {
            let counters = &mut self.fighter_mut(src).counters;
            counters.armor_destroyed_dealt =
                counters.armor_destroyed_dealt.saturating_add(dealt.armor);
            counters.health_damage_dealt =
                counters.health_damage_dealt.saturating_add(dealt.health);
        }

        if dealt.total() > 0 {
            let event = EventData {
                amount: dealt.total(),
                armor_lost: dealt.armor,
                health_lost: dealt.health,
                ..EventData::default()
            };
            self.run_trigger(Trigger::OnDamaged, dst, &event);
        }

        if !self.thresholds_deferred {
            self.check_thresholds(dst);
        }
        dealt
    }

    /// Raise `onExposed` / `onWounded` for `side` when due.
    pub(crate) fn check_thresholds(&mut self, side: Side) {
        if self.fighter_mut(side).take_exposed() {
            let line = format!("{} is exposed", self.fighter(side).name);
            self.log.push(line);
            self.run_trigger(Trigger::OnExposed, side, &EventData::default());
        }
        if self.fighter_mut(side).take_wounded() {
            let line = format!("{} is wounded", self.fighter(side).name);
            self.log.push(line);
            self.run_trigger(Trigger::OnWounded, side, &EventData::default());
        }
    }

    /// Re-check both sides once an effect chain has fully unwound.
    pub(crate) fn settle(&mut self) {
        if self.thresholds_deferred {
            return;
        }
        for side in Side::BOTH {
            self.check_thresholds(side);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armor_absorbs_before_health() {
        assert_eq!(
            split_damage(3, 10, 5),
            DamageDealt {
                armor: 3,
                health: 2
            }
        );
        assert_eq!(
            split_damage(0, 1, 5),
            DamageDealt {
                armor: 0,
                health: 1
            }
        );
        assert_eq!(split_damage(4, 4, 0).total(), 0);
    }
}
