//! Countdown registration and ticking.

use crate::effect::{EventData, Trigger};
use crate::state::{Countdown, Side};

use super::{ActionCtx, Battle};

impl Battle<'_> {
    /// Add `countdown` to `owner`'s list under a fresh id.
    pub(crate) fn start_countdown(&mut self, owner: Side, mut countdown: Countdown) {
        countdown.id = self.next_countdown_id();
        countdown.owner = owner;
        countdown.turns_total = countdown.turns_total.max(1);
        countdown.turns_left = countdown.turns_total;
        countdown.fired = false;

        let fighter = self.fighter_mut(owner);
        let line = format!(
            "{} starts countdown {} ({} turns)",
            fighter.name, countdown.name, countdown.turns_total
        );
        let source = countdown.source.clone();
        fighter.countdowns.push(countdown);
        self.log.attributed(Some(&source), line);
    }

    /// Tick `owner`'s countdowns once. Each one reaching zero runs its
    /// actions, raises `countdownFired`, then is removed.
    pub(crate) fn tick_countdowns(&mut self, owner: Side) {
        let fired: Vec<Countdown> = self
            .fighter_mut(owner)
            .countdowns
            .iter_mut()
            .filter_map(|countdown| countdown.tick().then(|| countdown.clone()))
            .collect();

        for countdown in fired {
            tracing::debug!(countdown = %countdown.name, side = %owner, "countdown fired");
            let line = format!("{}'s countdown {} fires", self.fighter(owner).name, countdown.name);
            self.log.attributed(Some(&countdown.source), line);

            let event = EventData {
                countdown: Some(countdown.clone()),
                ..EventData::default()
            };
            let ctx = ActionCtx {
                owner,
                source: &countdown.source,
                tier: countdown.tier,
                event: &event,
            };
            for action in countdown.actions.iter() {
                self.execute(action, &ctx);
            }
            self.run_trigger(Trigger::CountdownFired, owner, &event);
            self.fighter_mut(owner)
                .countdowns
                .retain(|held| held.id != countdown.id);
        }
    }
}
