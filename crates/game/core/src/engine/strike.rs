use crate::effect::{EventData, Trigger};
use crate::state::{Side, StatusKind};

use super::Battle;

impl Battle<'_> {
    /// Resolve one strike of `attacker` against its opponent.
    pub(crate) fn strike(&mut self, attacker: Side) {
        let defender = attacker.opponent();
        let fighter = self.fighter_mut(attacker);
        fighter.counters.strikes_attempted =
            fighter.counters.strikes_attempted.saturating_add(1);

        if fighter.statuses.has(&StatusKind::Stun) {
            fighter.statuses.remove(&StatusKind::Stun, 1);
            let line = format!("{} is stunned and misses the strike", fighter.name);
            self.log.push(line);
            return;
        }

        let base = (i64::from(fighter.attack) + i64::from(fighter.temp_attack)).max(0);
        let mut damage = u32::try_from(base).unwrap_or(u32::MAX);
        if fighter.statuses.has(&StatusKind::Freeze) {
            damage = if fighter.freeze_inverts {
                damage.saturating_mul(2)
            } else {
                damage / 2
            };
        }

        self.thresholds_deferred = true;
        let dealt = self.apply_damage(attacker, defender, damage, None);
        if dealt.total() > 0 {
            let counters = &mut self.fighter_mut(attacker).counters;
            counters.strikes_landed = counters.strikes_landed.saturating_add(1);
        }
        let event = EventData {
            amount: dealt.total(),
            armor_lost: dealt.armor,
            health_lost: dealt.health,
            ..EventData::default()
        };
        self.run_trigger(Trigger::OnHit, attacker, &event);
        self.thresholds_deferred = false;

        self.check_thresholds(defender);
        self.check_thresholds(attacker);
        self.run_trigger(Trigger::AfterStrike, attacker, &event);

        let thorns = self.fighter(defender).statuses.get(&StatusKind::Thorns);
        if thorns > 0 {
            self.apply_damage(defender, attacker, thorns, Some("Thorns"));
        }
    }
}
