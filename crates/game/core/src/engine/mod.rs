//! Battle engine: dispatch, damage resolution, and turn scheduling.
//!
//! A [`Battle`] owns both combatants and the log for its whole run. Every
//! mutation flows through it: the scheduler drives phases, the dispatcher
//! matches equipped rules against events, and action handlers mutate state
//! and raise further events back through the dispatcher.

mod actions;
mod countdown;
mod damage;
mod dispatch;
mod log;
mod ops;
mod sets;
mod source;
mod strike;
mod ticks;
mod turns;

pub use damage::{DamageDealt, split_damage};
pub use log::BattleLog;
pub use sets::active_sets;
pub use source::Source;

use crate::config::{BattleConfig, SimulateOptions};
use crate::effect::{Identifier, Tier};
use crate::env::{BattleEnv, Dice, draw_seed};
use crate::state::{BattleSummary, Combatant, CombatantSpec, Side};

use source::{Resolved, build_combatant};

/// Terminal state of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleResult {
    LeftWin,
    RightWin,
    Draw,
}

/// Everything `simulate` returns.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    pub result: BattleResult,
    /// Turn count reached.
    pub rounds: u32,
    pub log: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub summary: Option<BattleSummary>,
}

/// Run a full battle between two specifications.
///
/// Never fails: unknown or malformed catalog data degrades to diagnostics
/// in the log. Identical inputs and seed produce identical logs.
pub fn simulate(
    left: &CombatantSpec,
    right: &CombatantSpec,
    env: &BattleEnv<'_>,
    options: &SimulateOptions,
) -> BattleOutcome {
    Battle::new(left, right, env, options).run()
}

/// Per-invocation context of an action: whose rule it is, which source it
/// came from, and the event being handled.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ActionCtx<'e> {
    pub owner: Side,
    pub source: &'e str,
    pub tier: Tier,
    pub event: &'e crate::effect::EventData,
}

impl ActionCtx<'_> {
    pub fn enemy(&self) -> Side {
        self.owner.opponent()
    }
}

/// One running battle.
pub struct Battle<'a> {
    config: BattleConfig,
    max_turns: u32,
    include_summary: bool,
    dice: &'a dyn Dice,
    seed: u64,
    nonce: u64,

    fighters: [Combatant; 2],
    sources: [Vec<Source<'a>>; 2],
    log: BattleLog,

    /// Current trigger nesting.
    depth: u32,
    /// Threshold checks are postponed while a strike resolves its hit.
    thresholds_deferred: bool,
    next_countdown_id: u32,
    round: u32,
    after_battle_start: [(u32, u32); 2],
}

impl<'a> Battle<'a> {
    pub fn new(
        left: &CombatantSpec,
        right: &CombatantSpec,
        env: &BattleEnv<'a>,
        options: &SimulateOptions,
    ) -> Self {
        let config = options.config.clone();
        let mut log = BattleLog::new();

        let [left_side, right_side] =
            [left, right].map(|spec| Self::equip(spec, env, &config, &mut log));
        let (left_fighter, left_sources) = left_side;
        let (right_fighter, right_sources) = right_side;

        Self {
            max_turns: options.effective_max_turns(),
            include_summary: options.include_summary,
            config,
            dice: env.dice(),
            seed: options.seed,
            nonce: 0,
            fighters: [left_fighter, right_fighter],
            sources: [left_sources, right_sources],
            log,
            depth: 0,
            thresholds_deferred: false,
            next_countdown_id: 1,
            round: 0,
            after_battle_start: [(0, 0); 2],
        }
    }

    /// Resolve one side's equipment into a combatant and its source list.
    fn equip(
        spec: &CombatantSpec,
        env: &BattleEnv<'a>,
        config: &BattleConfig,
        log: &mut BattleLog,
    ) -> (Combatant, Vec<Source<'a>>) {
        let catalog = env.catalog();
        let mut resolved: Resolved<'_, 'a> = Vec::new();
        for item in spec.equipped() {
            match catalog.record(&item.id) {
                Some(record) => resolved.push((item, record)),
                None => {
                    tracing::warn!(id = %item.id, combatant = %spec.name, "missing catalog record");
                    log.diagnostic(format!("{}: no catalog record for {}", spec.name, item.id));
                }
            }
        }

        let mut sources: Vec<Source<'a>> = resolved
            .iter()
            .map(|(item, record)| Source::equipped(*record, item.tier))
            .collect();

        let ids: Vec<_> = spec.equipped().map(|item| &item.id).collect();
        for set in active_sets(&ids, catalog, env.sets()) {
            tracing::debug!(set = %set.id, combatant = %spec.name, "set bonus active");
            let line = if set.description.is_empty() {
                format!("{} activates set bonus {}", spec.name, set.name)
            } else {
                format!("{} activates set bonus {}: {}", spec.name, set.name, set.description)
            };
            log.push(line);
            sources.push(Source::set_bonus(set));
        }

        for source in &sources {
            let unknown: Vec<_> = source
                .rules
                .iter()
                .filter_map(|rule| match &rule.trigger {
                    Identifier::Unknown(name) => Some(name.as_str()),
                    Identifier::Known(_) => None,
                })
                .collect();
            if !unknown.is_empty() {
                tracing::warn!(source = %source.id, ?unknown, "unknown triggers");
                log.diagnostic(format!(
                    "{}: unknown trigger {}",
                    source.name,
                    unknown.join(", ")
                ));
            }
        }

        (build_combatant(spec, &resolved, config), sources)
    }

    pub fn fighter(&self, side: Side) -> &Combatant {
        &self.fighters[side.index()]
    }

    pub(crate) fn fighter_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.fighters[side.index()]
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    fn both_alive(&self) -> bool {
        self.fighters.iter().all(Combatant::is_alive)
    }

    /// Draw an index in `0..len` from the battle's seeded dice.
    pub(crate) fn draw(&mut self, side: Side, len: usize) -> Option<usize> {
        let seed = draw_seed(self.seed, self.nonce, side);
        self.nonce += 1;
        self.dice.pick(seed, len)
    }

    pub(crate) fn next_countdown_id(&mut self) -> u32 {
        let id = self.next_countdown_id;
        self.next_countdown_id += 1;
        id
    }

    fn result(&self) -> BattleResult {
        let [left, right] = &self.fighters;
        match (left.is_alive(), right.is_alive()) {
            (false, false) | (true, true) => BattleResult::Draw,
            (false, true) => BattleResult::RightWin,
            (true, false) => BattleResult::LeftWin,
        }
    }

    fn finish(self) -> BattleOutcome {
        let result = self.result();
        tracing::info!(%result, rounds = self.round, "battle finished");
        let summary = self.include_summary.then(|| BattleSummary {
            left: crate::state::SideSummary::capture(&self.fighters[0], self.after_battle_start[0]),
            right: crate::state::SideSummary::capture(&self.fighters[1], self.after_battle_start[1]),
        });
        BattleOutcome {
            result,
            rounds: self.round,
            log: self.log.into_lines(),
            summary,
        }
    }
}
