//! Action table: one handler per [`ActionKind`].
//!
//! Handlers are the only code that mutates combatant state on behalf of
//! catalog rules. They run once per invocation; repetition belongs to the
//! dispatcher. A handler that cannot act returns an [`ActionError`], which
//! the dispatcher logs and treats as a no-op.
//!
//! ## Value defaults
//!
//! A missing or malformed `value` resolves to 1, except where a handler
//! documents otherwise (`multiply_max_health` and `multiply_triggers`
//! default to 2).

mod countdowns;
mod health;
mod modifiers;
mod stats;
mod status;

use crate::effect::{Action, ActionKind, ValueSpec, value::to_amount};
use crate::error::ActionError;
use crate::state::{Stat, StatusKind};

use super::{ActionCtx, Battle};

pub(crate) type ActionResult = Result<(), ActionError>;

pub(crate) fn apply(
    battle: &mut Battle<'_>,
    kind: ActionKind,
    action: &Action,
    ctx: &ActionCtx<'_>,
) -> ActionResult {
    use ActionKind::*;
    match kind {
        AddArmor | LoseArmor | RemoveEnemyArmor | RegainBaseArmor | AddAttack | LoseAttack
        | ReduceEnemyAttack | StealAttack | AddTempAttack | AddTempAttackFromStatus | AddSpeed
        | SpendSpeed | StealSpeed | AddExtraStrikes | AddMaxHealth | MultiplyMaxHealth
        | AddGold => stats::apply(battle, kind, action, ctx),

        Heal | HealToFull | DealDamage | LoseHealth | ConvertArmorToStatus => {
            health::apply(battle, kind, action, ctx)
        }

        AddStatus
        | AddStatusToEnemy
        | AddStatusToEnemyFromStat
        | RemoveStatus
        | RemoveEnemyStatus
        | DecreaseRandomStatus
        | TransferRandomStatusToEnemy
        | TransferAllStatusesToEnemy
        | ClearStatuses => status::apply(battle, kind, action, ctx),

        SetFlag | ClearFlag | AddFlag | InvertFreeze | PreserveThorns | ExtendExposedLimit
        | MultiplyTriggers | CannotStrike | Message => modifiers::apply(battle, kind, action, ctx),

        AddCountdown | ReduceCountdowns | HalveCountdowns | RestartCountdown => {
            countdowns::apply(battle, kind, action, ctx)
        }
    }
}

// ============================================================================
// Parameter helpers
// ============================================================================

/// Signed value at the source's tier, or `default`.
fn signed(spec: Option<&ValueSpec>, ctx: &ActionCtx<'_>, default: i64) -> i64 {
    spec.and_then(|spec| spec.resolve(ctx.tier)).unwrap_or(default)
}

/// `value` as a non-negative amount, defaulting to 1.
fn amount(action: &Action, ctx: &ActionCtx<'_>) -> u32 {
    to_amount(signed(action.value.as_ref(), ctx, 1))
}

/// A group handler was handed a kind it does not own.
fn outside_group(kind: ActionKind) -> ActionError {
    ActionError::NoTarget {
        action: kind,
        reason: "no handler in this group",
    }
}

fn status(kind: ActionKind, action: &Action) -> Result<&StatusKind, ActionError> {
    action
        .status
        .as_ref()
        .ok_or(ActionError::missing(kind, "status"))
}

fn stat(kind: ActionKind, action: &Action) -> Result<Stat, ActionError> {
    action.stat.ok_or(ActionError::missing(kind, "stat"))
}

fn flag(kind: ActionKind, action: &Action) -> Result<&str, ActionError> {
    action
        .flag
        .as_deref()
        .ok_or(ActionError::missing(kind, "flag"))
}
