//! Combatant state and the value types it is built from.
//!
//! Nothing here dispatches events. Mutators clamp at the boundary so health,
//! armor and status stacks never go negative, and report what changed so the
//! engine can raise the matching triggers.
mod combatant;
mod countdown;
mod side;
mod spec;
mod stat;
mod status;
mod summary;

pub use combatant::{CombatCounters, Combatant, TriggerMultiplier};
pub use countdown::Countdown;
pub use side::{Side, Target};
pub use spec::{CombatantSpec, EquippedItem, StatBlock};
pub use stat::Stat;
pub use status::{StatusKind, StatusStacks};
pub use summary::{BattleSummary, SideSummary};
