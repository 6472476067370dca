//! Pure predicates over combatant state.

use crate::effect::EventData;
use crate::state::{Combatant, Stat, StatusKind, Target};

/// What a condition can observe: the rule owner, its opponent, and the
/// payload of the event being dispatched.
#[derive(Clone, Copy, Debug)]
pub struct ConditionContext<'a> {
    pub owner: &'a Combatant,
    pub opponent: &'a Combatant,
    pub event: &'a EventData,
}

impl<'a> ConditionContext<'a> {
    fn target(&self, target: Target) -> &'a Combatant {
        match target {
            Target::Owner => self.owner,
            Target::Enemy => self.opponent,
        }
    }
}

#[cfg(feature = "serde")]
const fn one() -> u32 {
    1
}

/// A condition attached to an effect rule.
///
/// Kinds this engine does not know decode as [`Condition::Unknown`] and
/// never hold.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Condition {
    HasStatus {
        status: StatusKind,
        #[cfg_attr(feature = "serde", serde(default = "one"))]
        min: u32,
    },
    LacksStatus {
        status: StatusKind,
    },
    EnemyHasStatus {
        status: StatusKind,
        #[cfg_attr(feature = "serde", serde(default = "one"))]
        min: u32,
    },
    EnemyLacksStatus {
        status: StatusKind,
    },
    HasArmor,
    NoArmor,
    EnemyHasArmor,
    #[cfg_attr(feature = "serde", serde(alias = "enemy_has_no_armor"))]
    EnemyNoArmor,
    #[cfg_attr(feature = "serde", serde(alias = "is_full_health"))]
    FullHealth,
    NotFullHealth,
    #[cfg_attr(feature = "serde", serde(alias = "is_first_turn"))]
    FirstTurn,
    /// Owner's own turn count is even (`even: true`) or odd.
    TurnParity {
        even: bool,
    },
    FlagSet {
        flag: String,
    },
    FlagEquals {
        flag: String,
        value: i64,
    },
    StatAtLeast {
        stat: Stat,
        value: i64,
        #[cfg_attr(feature = "serde", serde(default))]
        target: Target,
    },
    StatAtMost {
        stat: Stat,
        value: i64,
        #[cfg_attr(feature = "serde", serde(default))]
        target: Target,
    },
    StatEquals {
        stat: Stat,
        value: i64,
        #[cfg_attr(feature = "serde", serde(default))]
        target: Target,
    },
    /// Owner has at least `count` equipped sources tagged `tag`.
    TagCountAtLeast {
        tag: String,
        count: u32,
    },
    /// The status gained in an `onGainStatus` event.
    EventStatus {
        status: StatusKind,
    },
    /// The `onGainStatus` event took the status from zero stacks.
    EventNewStatus,
    EventAmountAtLeast {
        value: u32,
    },
    /// The fired countdown carries this tag.
    CountdownTag {
        tag: String,
    },
    Exposed,
    Wounded,
    And {
        conditions: Vec<Condition>,
    },
    Or {
        conditions: Vec<Condition>,
    },
    Not {
        condition: Box<Condition>,
    },
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl Condition {
    pub fn evaluate(&self, ctx: &ConditionContext<'_>) -> bool {
        let owner = ctx.owner;
        let opponent = ctx.opponent;
        match self {
            Self::HasStatus { status, min } => owner.statuses.get(status) >= (*min).max(1),
            Self::LacksStatus { status } => !owner.statuses.has(status),
            Self::EnemyHasStatus { status, min } => opponent.statuses.get(status) >= (*min).max(1),
            Self::EnemyLacksStatus { status } => !opponent.statuses.has(status),
            Self::HasArmor => owner.armor() > 0,
            Self::NoArmor => owner.armor() == 0,
            Self::EnemyHasArmor => opponent.armor() > 0,
            Self::EnemyNoArmor => opponent.armor() == 0,
            Self::FullHealth => owner.is_full_health(),
            Self::NotFullHealth => !owner.is_full_health(),
            Self::FirstTurn => owner.first_turn,
            Self::TurnParity { even } => (owner.turn_count % 2 == 0) == *even,
            Self::FlagSet { flag } => owner.flag(flag) != 0,
            Self::FlagEquals { flag, value } => owner.flag(flag) == *value,
            Self::StatAtLeast { stat, value, target } => ctx.target(*target).stat(*stat) >= *value,
            Self::StatAtMost { stat, value, target } => ctx.target(*target).stat(*stat) <= *value,
            Self::StatEquals { stat, value, target } => ctx.target(*target).stat(*stat) == *value,
            Self::TagCountAtLeast { tag, count } => {
                owner.tag_counts.get(tag).copied().unwrap_or(0) >= *count
            }
            Self::EventStatus { status } => ctx.event.status.as_ref() == Some(status),
            Self::EventNewStatus => ctx.event.is_new,
            Self::EventAmountAtLeast { value } => ctx.event.amount >= *value,
            Self::CountdownTag { tag } => ctx
                .event
                .countdown
                .as_ref()
                .and_then(|countdown| countdown.tag.as_ref())
                .is_some_and(|held| held == tag),
            Self::Exposed => owner.is_exposed(),
            Self::Wounded => owner.is_wounded(),
            Self::And { conditions } => conditions.iter().all(|c| c.evaluate(ctx)),
            Self::Or { conditions } => conditions.iter().any(|c| c.evaluate(ctx)),
            Self::Not { condition } => !condition.evaluate(ctx),
            Self::Unknown => false,
        }
    }

    /// True if this condition or any nested one is [`Condition::Unknown`].
    pub fn contains_unknown(&self) -> bool {
        match self {
            Self::Unknown => true,
            Self::And { conditions } | Self::Or { conditions } => {
                conditions.iter().any(Condition::contains_unknown)
            }
            Self::Not { condition } => condition.contains_unknown(),
            _ => false,
        }
    }
}

/// All conditions hold, evaluated in order with short-circuit.
pub fn all_hold(conditions: &[Condition], ctx: &ConditionContext<'_>) -> bool {
    conditions.iter().all(|condition| condition.evaluate(ctx))
}
