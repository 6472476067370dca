use std::sync::Arc;

use crate::effect::{Action, Tier};

use super::Side;

/// Delayed one-shot effect owned by a single combatant.
///
/// Ticks once per owner turn start; fires when `turns_left` reaches zero and
/// is removed right after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Countdown {
    /// Unique within one battle; survives reordering of the list.
    pub id: u32,
    /// Combatant whose turn starts tick it and whose context its actions run in.
    pub owner: Side,
    pub name: String,
    pub turns_left: u32,
    /// Initial length, used by `restart_countdown`.
    pub turns_total: u32,
    pub tag: Option<String>,
    /// Name of the source that registered it, for log attribution.
    pub source: String,
    /// Tier of the registering source; the actions resolve against it.
    pub tier: Tier,
    pub actions: Arc<[Action]>,
    pub fired: bool,
}

impl Countdown {
    /// Advance by one owner turn start. Returns true when it fires now.
    pub fn tick(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.turns_left = self.turns_left.saturating_sub(1);
        if self.turns_left == 0 {
            self.fired = true;
            return true;
        }
        false
    }

    /// Shorten by `turns`, never below one remaining turn.
    pub fn reduce(&mut self, turns: u32) {
        self.turns_left = self.turns_left.saturating_sub(turns).max(1);
    }

    pub fn halve(&mut self) {
        self.turns_left = self.turns_left.div_ceil(2).max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countdown(turns: u32) -> Countdown {
        Countdown {
            id: 1,
            owner: Side::Left,
            name: "Fuse".into(),
            turns_left: turns,
            turns_total: turns,
            tag: None,
            source: "Bomb".into(),
            tier: Tier::Base,
            actions: Arc::from(Vec::new()),
            fired: false,
        }
    }

    #[test]
    fn fires_on_the_nth_tick_only() {
        let mut fuse = countdown(3);
        assert!(!fuse.tick());
        assert!(!fuse.tick());
        assert!(fuse.tick());
        assert!(!fuse.tick(), "fires exactly once");
    }

    #[test]
    fn reductions_keep_one_turn() {
        let mut fuse = countdown(5);
        fuse.reduce(10);
        assert_eq!(fuse.turns_left, 1);

        let mut fuse = countdown(5);
        fuse.halve();
        assert_eq!(fuse.turns_left, 3);
    }
}
