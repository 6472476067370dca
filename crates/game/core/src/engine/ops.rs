//! Mutations that raise their own events: gaining armor, healing, gaining
//! status stacks.

use crate::effect::{EventData, Trigger};
use crate::state::{Side, StatusKind};

use super::Battle;

impl Battle<'_> {
    /// Returns the armor gained; raises `onGainArmor` when positive.
    pub(crate) fn gain_armor(&mut self, side: Side, amount: u32, by: Option<&str>) -> u32 {
        let fighter = self.fighter_mut(side);
        let gained = fighter.gain_armor(amount);
        if gained > 0 {
            let line = format!("{} gains {gained} armor", fighter.name);
            self.log.attributed(by, line);
            self.run_trigger(Trigger::OnGainArmor, side, &EventData::amount(gained));
        }
        gained
    }

    /// Returns the health restored; raises `onHeal` when positive.
    pub(crate) fn heal(&mut self, side: Side, amount: u32, by: Option<&str>) -> u32 {
        let fighter = self.fighter_mut(side);
        let healed = fighter.restore_health(amount);
        if healed > 0 {
            let line = format!("{} heals {healed}", fighter.name);
            self.log.attributed(by, line);
            self.run_trigger(Trigger::OnHeal, side, &EventData::amount(healed));
        }
        healed
    }

    /// Returns the stacks gained; raises `onGainStatus` when positive.
    pub(crate) fn add_status(
        &mut self,
        side: Side,
        status: &StatusKind,
        amount: u32,
        by: Option<&str>,
    ) -> u32 {
        let fighter = self.fighter_mut(side);
        let (before, after) = fighter.statuses.add(status, amount);
        let gained = after - before;
        if gained == 0 {
            return 0;
        }
        let tally = fighter
            .counters
            .statuses_gained
            .entry(status.to_string())
            .or_default();
        *tally = tally.saturating_add(gained);
        let line = format!("{} gains {gained} {status}", fighter.name);
        self.log.attributed(by, line);

        let event = EventData {
            status: Some(status.clone()),
            amount: gained,
            is_new: before == 0,
            ..EventData::default()
        };
        self.run_trigger(Trigger::OnGainStatus, side, &event);
        gained
    }
}
