//! Per-turn status ticking.

use crate::effect::{EventData, Trigger};
use crate::state::{Side, StatusKind};

use super::Battle;

impl Battle<'_> {
    /// Acid, poison and riptide, then countdowns. Runs before `turnStart`.
    pub(crate) fn turn_start_ticks(&mut self, side: Side) {
        let fighter = self.fighter_mut(side);
        fighter.reset_turn();

        let acid = fighter.statuses.get(&StatusKind::Acid);
        if acid > 0 {
            let lost = fighter.destroy_armor(acid);
            if lost > 0 {
                let line = format!("{} loses {lost} armor due to acid", fighter.name);
                self.log.push(line);
            }
        }

        let fighter = self.fighter_mut(side);
        let poison = fighter.statuses.get(&StatusKind::Poison);
        if poison > 0 {
            if fighter.armor() == 0 {
                fighter.lose_health(poison);
                let line = format!("{} suffers {poison} poison damage", fighter.name);
                self.log.push(line);
                self.run_trigger(Trigger::OnPoisonTick, side, &EventData::amount(poison));
            }
            self.fighter_mut(side).statuses.remove(&StatusKind::Poison, 1);
        }

        let fighter = self.fighter_mut(side);
        let riptide = fighter.statuses.get(&StatusKind::Riptide);
        if riptide > 0 {
            fighter.lose_health(riptide);
            fighter.statuses.remove(&StatusKind::Riptide, 1);
            let line = format!("{} suffers {riptide} riptide damage", fighter.name);
            self.log.push(line);
        }

        self.check_thresholds(side);
        self.tick_countdowns(side);
    }

    /// Regeneration, thorns upkeep and freeze decay. Runs before `turnEnd`.
    pub(crate) fn turn_end_ticks(&mut self, side: Side) {
        let regen = self.fighter(side).statuses.get(&StatusKind::Regeneration);
        if regen > 0 {
            self.heal(side, regen, None);
            self.fighter_mut(side)
                .statuses
                .remove(&StatusKind::Regeneration, 1);
        }

        let fighter = self.fighter_mut(side);
        if fighter.struck && fighter.statuses.has(&StatusKind::Thorns) {
            if fighter.preserve_thorns > 0 {
                fighter.preserve_thorns -= 1;
                let line = format!(
                    "{} preserves thorns ({} left)",
                    fighter.name, fighter.preserve_thorns
                );
                self.log.push(line);
            } else {
                fighter.statuses.clear(&StatusKind::Thorns);
            }
        }

        self.fighter_mut(side)
            .statuses
            .remove(&StatusKind::Freeze, 1);
    }
}
