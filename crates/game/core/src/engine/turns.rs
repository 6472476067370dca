//! Turn scheduler.
//!
//! not started -> preBattle / battleStart -> alternating turns
//! (turn-start -> strikes -> turn-end) -> terminal.

use crate::effect::{EventData, Trigger};
use crate::state::Side;

use super::{Battle, BattleOutcome};

impl Battle<'_> {
    /// Run the battle to completion.
    pub fn run(mut self) -> BattleOutcome {
        let none = EventData::default();
        for trigger in [Trigger::PreBattle, Trigger::BattleStart] {
            for side in Side::BOTH {
                self.run_trigger(trigger, side, &none);
            }
        }
        self.after_battle_start =
            Side::BOTH.map(|side| (self.fighter(side).armor(), self.fighter(side).health()));

        let mut actor = self.initiative();
        tracing::debug!(first = %actor, max_turns = self.max_turns, "battle start");
        while self.round < self.max_turns && self.both_alive() {
            self.round += 1;
            self.take_turn(actor);
            actor = actor.opponent();
        }
        self.finish()
    }

    /// Faster combatant acts first; ties go to the configured side.
    fn initiative(&self) -> Side {
        let left = self.fighter(Side::Left).speed;
        let right = self.fighter(Side::Right).speed;
        match left.cmp(&right) {
            core::cmp::Ordering::Greater => Side::Left,
            core::cmp::Ordering::Less => Side::Right,
            core::cmp::Ordering::Equal => self.config.initiative_tie,
        }
    }

    fn take_turn(&mut self, actor: Side) {
        let none = EventData::default();
        let round = self.round;
        let fighter = self.fighter_mut(actor);
        fighter.turn_count += 1;
        let line = format!("-- Turn {round} -- {}", fighter.name);
        self.log.push(line);

        self.turn_start_ticks(actor);
        self.run_trigger(Trigger::TurnStart, actor, &none);

        let fighter = self.fighter(actor);
        let strikes = if fighter.cannot_strike {
            0
        } else {
            1 + fighter.extra_strikes
        };
        for _ in 0..strikes {
            if !self.both_alive() {
                break;
            }
            self.strike(actor);
        }

        self.turn_end_ticks(actor);
        self.run_trigger(Trigger::TurnEnd, actor, &none);
        self.fighter_mut(actor).first_turn = false;
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{BattleConfig, SimulateOptions};
    use crate::engine::{BattleResult, simulate};
    use crate::env::{BattleEnv, StaticCatalog};
    use crate::state::{CombatantSpec, StatBlock, StatusKind};

    fn fighter(name: &str, health: i32, attack: i32, speed: i32) -> CombatantSpec {
        CombatantSpec::new(name).with_stats(StatBlock::new(health, attack, 0, speed))
    }

    #[test]
    fn faster_side_strikes_first() {
        let catalog = StaticCatalog::new();
        let env = BattleEnv::new(&catalog);
        let outcome = simulate(
            &fighter("L", 5, 5, 0),
            &fighter("R", 5, 5, 1),
            &env,
            &SimulateOptions::new(0),
        );
        assert_eq!(outcome.result, BattleResult::RightWin);
        assert_eq!(outcome.rounds, 1);
        assert_eq!(outcome.log[0], "-- Turn 1 -- R");
    }

    #[test]
    fn speed_tie_follows_config() {
        let catalog = StaticCatalog::new();
        let env = BattleEnv::new(&catalog);
        let left = fighter("L", 5, 5, 0);
        let right = fighter("R", 5, 5, 0);

        let outcome = simulate(&left, &right, &env, &SimulateOptions::new(0));
        assert_eq!(outcome.result, BattleResult::LeftWin);

        let config = BattleConfig {
            initiative_tie: crate::state::Side::Right,
            ..BattleConfig::default()
        };
        let outcome = simulate(
            &left,
            &right,
            &env,
            &SimulateOptions::new(0).with_config(config),
        );
        assert_eq!(outcome.result, BattleResult::RightWin);
    }

    #[test]
    fn stun_cancels_one_strike() {
        let catalog = StaticCatalog::new();
        let env = BattleEnv::new(&catalog);
        let left = fighter("L", 10, 3, 1).with_status(StatusKind::Stun, 1);
        let outcome = simulate(
            &left,
            &fighter("R", 10, 0, 0),
            &env,
            &SimulateOptions::new(0).with_max_turns(3).with_summary(),
        );
        assert!(outcome.log.contains(&"L is stunned and misses the strike".to_string()));
        let summary = outcome.summary.expect("summary requested");
        assert_eq!(summary.left.strikes_attempted, 2);
        assert_eq!(summary.left.strikes_landed, 1);
        assert_eq!(summary.right.health, 7);
    }

    #[test]
    fn mutual_death_is_a_draw() {
        let catalog = StaticCatalog::new();
        let env = BattleEnv::new(&catalog);
        // Thorns reflect the killing blow back onto the attacker.
        let right = fighter("R", 2, 0, 0).with_status(StatusKind::Thorns, 5);
        let outcome = simulate(
            &fighter("L", 3, 4, 1),
            &right,
            &env,
            &SimulateOptions::new(0),
        );
        assert_eq!(outcome.result, BattleResult::Draw);
        assert_eq!(outcome.rounds, 1);
    }
}
