//! Declared actions: the instruction set of the rules language.

use crate::effect::{Identifier, Trigger, ValueSpec};
use crate::state::{Stat, StatusKind};

/// Every action identifier the engine implements.
///
/// Catalog names are snake_case. Names outside this list decode as
/// [`Identifier::Unknown`] and are reported at dispatch time.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    // ========================================================================
    // Stats
    // ========================================================================
    #[strum(to_string = "add_armor", serialize = "gain_armor")]
    AddArmor,
    LoseArmor,
    RemoveEnemyArmor,
    RegainBaseArmor,
    #[strum(to_string = "add_attack", serialize = "gain_attack")]
    AddAttack,
    LoseAttack,
    ReduceEnemyAttack,
    StealAttack,
    #[strum(to_string = "add_temp_attack", serialize = "gain_temp_attack")]
    AddTempAttack,
    AddTempAttackFromStatus,
    #[strum(to_string = "add_speed", serialize = "gain_speed")]
    AddSpeed,
    SpendSpeed,
    StealSpeed,
    AddExtraStrikes,
    AddMaxHealth,
    MultiplyMaxHealth,
    AddGold,

    // ========================================================================
    // Health
    // ========================================================================
    #[strum(to_string = "heal", serialize = "restore_health")]
    Heal,
    HealToFull,
    #[strum(to_string = "deal_damage", serialize = "deal_damage_to_enemy")]
    DealDamage,
    #[strum(to_string = "lose_health", serialize = "lose_hp")]
    LoseHealth,
    ConvertArmorToStatus,

    // ========================================================================
    // Status
    // ========================================================================
    #[strum(to_string = "add_status", serialize = "gain_status")]
    AddStatus,
    #[strum(to_string = "add_status_to_enemy", serialize = "give_enemy_status")]
    AddStatusToEnemy,
    AddStatusToEnemyFromStat,
    RemoveStatus,
    RemoveEnemyStatus,
    DecreaseRandomStatus,
    TransferRandomStatusToEnemy,
    TransferAllStatusesToEnemy,
    ClearStatuses,

    // ========================================================================
    // Flags & Modifiers
    // ========================================================================
    SetFlag,
    ClearFlag,
    AddFlag,
    InvertFreeze,
    PreserveThorns,
    ExtendExposedLimit,
    MultiplyTriggers,
    CannotStrike,

    // ========================================================================
    // Countdowns
    // ========================================================================
    #[strum(to_string = "add_countdown", serialize = "register_countdown")]
    AddCountdown,
    #[strum(to_string = "reduce_countdowns", serialize = "decrease_all_countdowns")]
    ReduceCountdowns,
    HalveCountdowns,
    RestartCountdown,

    // ========================================================================
    // Misc
    // ========================================================================
    Message,
}

/// A delayed effect declared inline by `add_countdown`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountdownSpec {
    pub name: String,
    /// Owner turn-starts until it fires. May be tier-scaled.
    pub turns: ValueSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tag: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actions: Vec<Action>,
}

impl CountdownSpec {
    pub fn new(name: impl Into<String>, turns: impl Into<ValueSpec>) -> Self {
        Self {
            name: name.into(),
            turns: turns.into(),
            tag: None,
            actions: Vec::new(),
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }
}

/// One action of an effect rule: an identifier plus its parameters.
///
/// Parameters are optional at the type level; handlers report the ones they
/// require through [`crate::ActionError::MissingParameter`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    #[cfg_attr(feature = "serde", serde(rename = "type", alias = "action"))]
    pub kind: Identifier<ActionKind>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub value: Option<ValueSpec>,

    /// Secondary amount, e.g. stacks gained by `convert_armor_to_status`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub amount: Option<ValueSpec>,

    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "key", skip_serializing_if = "Option::is_none")
    )]
    pub status: Option<StatusKind>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub stat: Option<Stat>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub flag: Option<String>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub tag: Option<String>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub trigger: Option<Trigger>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub countdown: Option<CountdownSpec>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub text: Option<String>,
}

impl Action {
    pub fn new(kind: ActionKind) -> Self {
        Self::with_identifier(Identifier::Known(kind))
    }

    /// An action whose identifier this engine does not implement.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::with_identifier(Identifier::Unknown(name.into()))
    }

    fn with_identifier(kind: Identifier<ActionKind>) -> Self {
        Self {
            kind,
            value: None,
            amount: None,
            status: None,
            stat: None,
            flag: None,
            tag: None,
            trigger: None,
            countdown: None,
            text: None,
        }
    }

    /// Builder: set value.
    pub fn value(mut self, value: impl Into<ValueSpec>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Builder: set secondary amount.
    pub fn amount(mut self, amount: impl Into<ValueSpec>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Builder: set status key.
    pub fn status(mut self, status: StatusKind) -> Self {
        self.status = Some(status);
        self
    }

    /// Builder: set stat.
    pub fn stat(mut self, stat: Stat) -> Self {
        self.stat = Some(stat);
        self
    }

    /// Builder: set flag name.
    pub fn flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    /// Builder: set tag filter.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Builder: set trigger filter.
    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Builder: set the countdown to register.
    pub fn countdown(mut self, countdown: CountdownSpec) -> Self {
        self.countdown = Some(countdown);
        self
    }

    /// Builder: set message text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_spellings_map_to_canonical_kinds() {
        assert_eq!("gain_armor".parse::<ActionKind>().unwrap(), ActionKind::AddArmor);
        assert_eq!(
            "register_countdown".parse::<ActionKind>().unwrap(),
            ActionKind::AddCountdown
        );
        assert_eq!(ActionKind::AddArmor.to_string(), "add_armor");
        assert_eq!(
            ActionKind::TransferRandomStatusToEnemy.to_string(),
            "transfer_random_status_to_enemy"
        );
    }

    #[test]
    fn unknown_action_keeps_its_name() {
        let action = Action::unknown("summon_dragon");
        assert_eq!(action.kind.to_string(), "summon_dragon");
    }
}
