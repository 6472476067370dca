use crate::effect::{Action, ActionKind, value::to_amount};
use crate::engine::{ActionCtx, Battle};
use crate::error::ActionError;
use crate::state::TriggerMultiplier;

use super::{ActionResult, amount, flag, outside_group, signed};

pub(super) fn apply(
    battle: &mut Battle<'_>,
    kind: ActionKind,
    action: &Action,
    ctx: &ActionCtx<'_>,
) -> ActionResult {
    let by = Some(ctx.source);
    let owner = ctx.owner;

    match kind {
        ActionKind::SetFlag => {
            let name = flag(kind, action)?;
            let value = signed(action.value.as_ref(), ctx, 1);
            battle.fighter_mut(owner).flags.insert(name.to_owned(), value);
        }
        ActionKind::ClearFlag => {
            let name = flag(kind, action)?;
            battle.fighter_mut(owner).flags.remove(name);
        }
        ActionKind::AddFlag => {
            let name = flag(kind, action)?;
            let delta = signed(action.value.as_ref(), ctx, 1);
            let entry = battle.fighter_mut(owner).flags.entry(name.to_owned()).or_default();
            *entry = entry.saturating_add(delta);
        }
        ActionKind::InvertFreeze => {
            let fighter = battle.fighter_mut(owner);
            if !fighter.freeze_inverts {
                fighter.freeze_inverts = true;
                let line = format!("{}'s freeze now doubles damage", fighter.name);
                battle.log.attributed(by, line);
            }
        }
        ActionKind::PreserveThorns => {
            let n = amount(action, ctx);
            let fighter = battle.fighter_mut(owner);
            fighter.preserve_thorns = fighter.preserve_thorns.saturating_add(n);
        }
        ActionKind::ExtendExposedLimit => {
            let n = amount(action, ctx);
            let fighter = battle.fighter_mut(owner);
            fighter.exposed_limit = fighter.exposed_limit.saturating_add(n);
        }
        ActionKind::MultiplyTriggers => {
            let factor = to_amount(signed(action.value.as_ref(), ctx, 2));
            if factor == 0 {
                return Err(ActionError::invalid(kind, "value", factor));
            }
            let multiplier = TriggerMultiplier {
                trigger: action.trigger,
                tag: action.tag.clone(),
                factor,
            };
            let fighter = battle.fighter_mut(owner);
            let scope = match (&multiplier.trigger, &multiplier.tag) {
                (Some(trigger), Some(tag)) => format!("{trigger} effects of {tag} items"),
                (Some(trigger), None) => format!("{trigger} effects"),
                (None, Some(tag)) => format!("effects of {tag} items"),
                (None, None) => "all effects".to_owned(),
            };
            let line = format!("{} repeats {scope} x{factor}", fighter.name);
            fighter.multipliers.push(multiplier);
            battle.log.attributed(by, line);
        }
        ActionKind::CannotStrike => {
            battle.fighter_mut(owner).cannot_strike = true;
        }
        ActionKind::Message => {
            let text = action
                .text
                .as_deref()
                .ok_or(ActionError::missing(kind, "text"))?;
            battle.log.attributed(by, text);
        }
        _ => return Err(outside_group(kind)),
    }
    Ok(())
}
