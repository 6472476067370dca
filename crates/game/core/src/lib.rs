//! Deterministic duel engine driven by declarative item data.
//!
//! `duel-core` defines the combat rules (turn phases, damage resolution,
//! status ticks, thresholds) and the rule vocabulary catalog content is
//! written in. It performs no I/O: catalogs, set definitions and the seeded
//! dice are handed in through [`BattleEnv`], and a whole battle is
//! computed by one [`simulate`] call. Loading content from disk lives in
//! `duel-content`.
pub mod config;
pub mod effect;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use config::{BattleConfig, SimulateOptions};
pub use effect::{
    Action, ActionKind, Condition, ConditionContext, CountdownSpec, EffectRule, EventData,
    Identifier, RuleScope, Tier, TieredValue, Trigger, ValueSpec,
};
pub use engine::{
    Battle, BattleLog, BattleOutcome, BattleResult, DamageDealt, active_sets, simulate,
    split_damage,
};
pub use env::{
    BattleEnv, Catalog, CatalogRecord, Dice, SetDefinition, SetRequirement, SourceId,
    SplitMixDice, StaticCatalog, draw_seed,
};
pub use error::{ActionError, ErrorSeverity, GameError};
pub use state::{
    BattleSummary, CombatCounters, Combatant, CombatantSpec, Countdown, EquippedItem, Side,
    SideSummary, Stat, StatBlock, StatusKind, StatusStacks, Target, TriggerMultiplier,
};
