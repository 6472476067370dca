use crate::effect::{Action, ActionKind, value::to_amount};
use crate::error::ActionError;

use super::{ActionResult, amount, signed, status};
use crate::engine::{ActionCtx, Battle};

pub(super) fn apply(
    battle: &mut Battle<'_>,
    kind: ActionKind,
    action: &Action,
    ctx: &ActionCtx<'_>,
) -> ActionResult {
    let by = Some(ctx.source);
    let owner = ctx.owner;
    let enemy = ctx.enemy();
    let n = amount(action, ctx);
    let delta = signed(action.value.as_ref(), ctx, 1);

    match kind {
        ActionKind::AddArmor => {
            battle.gain_armor(owner, n, by);
        }
        ActionKind::LoseArmor => {
            let fighter = battle.fighter_mut(owner);
            let lost = fighter.destroy_armor(n);
            if lost > 0 {
                let line = format!("{} loses {lost} armor", fighter.name);
                battle.log.attributed(by, line);
            }
        }
        ActionKind::RemoveEnemyArmor => {
            let fighter = battle.fighter_mut(enemy);
            let lost = fighter.destroy_armor(n);
            if lost > 0 {
                let line = format!("{} loses {lost} armor", fighter.name);
                battle.log.attributed(by, line);
                let counters = &mut battle.fighter_mut(owner).counters;
                counters.armor_destroyed_dealt =
                    counters.armor_destroyed_dealt.saturating_add(lost);
            }
        }
        ActionKind::RegainBaseArmor => {
            let fighter = battle.fighter(owner);
            let missing = fighter.base_armor().saturating_sub(fighter.armor());
            battle.gain_armor(owner, missing, by);
        }
        ActionKind::AddAttack => {
            let fighter = battle.fighter_mut(owner);
            fighter.adjust_attack(delta);
            let line = format!("{} gains {delta} attack", fighter.name);
            battle.log.attributed(by, line);
        }
        ActionKind::LoseAttack => {
            let fighter = battle.fighter_mut(owner);
            fighter.adjust_attack(-delta);
            let line = format!("{} loses {delta} attack", fighter.name);
            battle.log.attributed(by, line);
        }
        ActionKind::ReduceEnemyAttack => {
            let fighter = battle.fighter_mut(enemy);
            fighter.adjust_attack(-delta);
            let line = format!("{} loses {delta} attack", fighter.name);
            battle.log.attributed(by, line);
        }
        ActionKind::StealAttack => {
            let available = to_amount(i64::from(battle.fighter(enemy).attack));
            let taken = n.min(available);
            if taken > 0 {
                battle.fighter_mut(enemy).adjust_attack(-i64::from(taken));
                let fighter = battle.fighter_mut(owner);
                fighter.adjust_attack(i64::from(taken));
                let line = format!("{} steals {taken} attack", fighter.name);
                battle.log.attributed(by, line);
            }
        }
        ActionKind::AddTempAttack => {
            let fighter = battle.fighter_mut(owner);
            fighter.temp_attack = fighter.temp_attack.saturating_add(clamp(delta));
            let line = format!("{} gains {delta} attack this turn", fighter.name);
            battle.log.attributed(by, line);
        }
        ActionKind::AddTempAttackFromStatus => {
            let key = status(kind, action)?;
            let fighter = battle.fighter_mut(owner);
            let stacks = fighter.statuses.get(key);
            if stacks > 0 {
                fighter.temp_attack = fighter.temp_attack.saturating_add(clamp(stacks.into()));
                let line = format!("{} gains {stacks} attack this turn from {key}", fighter.name);
                battle.log.attributed(by, line);
            }
        }
        ActionKind::AddSpeed => {
            let fighter = battle.fighter_mut(owner);
            fighter.adjust_speed(delta);
            let line = format!("{} gains {delta} speed", fighter.name);
            battle.log.attributed(by, line);
        }
        ActionKind::SpendSpeed => {
            let fighter = battle.fighter_mut(owner);
            let spent = n.min(to_amount(fighter.speed.into()));
            if spent > 0 {
                fighter.adjust_speed(-i64::from(spent));
                let line = format!("{} spends {spent} speed", fighter.name);
                battle.log.attributed(by, line);
            }
        }
        ActionKind::StealSpeed => {
            let available = to_amount(i64::from(battle.fighter(enemy).speed));
            let taken = n.min(available);
            if taken > 0 {
                battle.fighter_mut(enemy).adjust_speed(-i64::from(taken));
                let fighter = battle.fighter_mut(owner);
                fighter.adjust_speed(i64::from(taken));
                let line = format!("{} steals {taken} speed", fighter.name);
                battle.log.attributed(by, line);
            }
        }
        ActionKind::AddExtraStrikes => {
            let fighter = battle.fighter_mut(owner);
            fighter.extra_strikes = fighter.extra_strikes.saturating_add(n);
            let plural = if n == 1 { "" } else { "s" };
            let line = format!("{} gains {n} extra strike{plural}", fighter.name);
            battle.log.attributed(by, line);
        }
        ActionKind::AddMaxHealth => {
            let fighter = battle.fighter_mut(owner);
            fighter.add_max_health(n);
            let line = format!("{} gains {n} max health", fighter.name);
            battle.log.attributed(by, line);
        }
        ActionKind::MultiplyMaxHealth => {
            let factor = to_amount(signed(action.value.as_ref(), ctx, 2));
            if factor == 0 {
                return Err(ActionError::invalid(kind, "value", factor));
            }
            let fighter = battle.fighter_mut(owner);
            fighter.multiply_max_health(factor);
            let line = format!(
                "{}'s max health becomes {}",
                fighter.name,
                fighter.max_health()
            );
            battle.log.attributed(by, line);
        }
        ActionKind::AddGold => {
            let cap = battle.config.gold_cap;
            let fighter = battle.fighter_mut(owner);
            let gained = fighter.add_gold(n, cap);
            if gained > 0 {
                let line = format!("{} gains {gained} gold", fighter.name);
                battle.log.attributed(by, line);
            }
        }
        _ => return Err(super::outside_group(kind)),
    }
    Ok(())
}

fn clamp(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
