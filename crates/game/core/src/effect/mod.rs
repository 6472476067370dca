//! Declarative effect rules: triggers, conditions, actions, tiered values.
//!
//! These types are the data contract between catalog content and the engine.
//! They are immutable once loaded; the engine only reads them.
pub mod action;
pub mod condition;
pub mod identifier;
pub mod trigger;
pub mod value;

pub use action::{Action, ActionKind, CountdownSpec};
pub use condition::{Condition, ConditionContext, all_hold};
pub use identifier::Identifier;
pub use trigger::Trigger;
pub use value::{Tier, TieredValue, ValueSpec};

use crate::state::{Countdown, StatusKind};

/// Whose events a rule listens to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RuleScope {
    /// Events that happen to the rule's owner.
    #[default]
    Owner,
    /// Events that happen to the owner's opponent.
    Enemy,
}

#[cfg(feature = "serde")]
const fn one() -> u32 {
    1
}

#[cfg(feature = "serde")]
fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// A trigger, optional conditions, and the actions to run when they hold.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectRule {
    pub trigger: Identifier<Trigger>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub conditions: Vec<Condition>,

    pub actions: Vec<Action>,

    /// Times the actions run per matching event.
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub repeat: u32,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_default"))]
    pub scope: RuleScope,

    /// Re-check the conditions before every repetition.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_default"))]
    pub per_repeat: bool,
}

impl EffectRule {
    pub fn new(trigger: Trigger) -> Self {
        Self {
            trigger: Identifier::Known(trigger),
            conditions: Vec::new(),
            actions: Vec::new(),
            repeat: 1,
            scope: RuleScope::Owner,
            per_repeat: false,
        }
    }

    /// Builder: append a condition.
    pub fn when(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Builder: append an action.
    pub fn then(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn repeat(mut self, times: u32) -> Self {
        self.repeat = times;
        self
    }

    pub fn scope(mut self, scope: RuleScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn per_repeat(mut self) -> Self {
        self.per_repeat = true;
        self
    }

    pub fn listens_to(&self, trigger: Trigger, scope: RuleScope) -> bool {
        self.scope == scope && self.trigger.is(&trigger)
    }
}

/// Event-specific payload handed to conditions and handlers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventData {
    /// Status key of an `onGainStatus` event.
    pub status: Option<StatusKind>,
    /// Amount gained, healed, or ticked.
    pub amount: u32,
    /// The status went from zero to positive stacks.
    pub is_new: bool,
    pub armor_lost: u32,
    pub health_lost: u32,
    /// The countdown of a `countdownFired` event.
    pub countdown: Option<Countdown>,
}

impl EventData {
    pub fn amount(amount: u32) -> Self {
        Self {
            amount,
            ..Self::default()
        }
    }
}
