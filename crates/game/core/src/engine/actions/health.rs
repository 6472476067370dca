use crate::effect::{Action, ActionKind, value::to_amount};
use crate::engine::{ActionCtx, Battle};

use super::{ActionResult, amount, outside_group, signed, status};

pub(super) fn apply(
    battle: &mut Battle<'_>,
    kind: ActionKind,
    action: &Action,
    ctx: &ActionCtx<'_>,
) -> ActionResult {
    let by = Some(ctx.source);
    let owner = ctx.owner;

    match kind {
        ActionKind::Heal => {
            battle.heal(owner, amount(action, ctx), by);
        }
        ActionKind::HealToFull => {
            let fighter = battle.fighter(owner);
            let missing = fighter.max_health() - fighter.health();
            battle.heal(owner, missing, by);
        }
        ActionKind::DealDamage => {
            battle.apply_damage(owner, ctx.enemy(), amount(action, ctx), by);
        }
        ActionKind::LoseHealth => {
            let fighter = battle.fighter_mut(owner);
            let lost = fighter.pay_health(amount(action, ctx));
            if lost > 0 {
                let line = format!("{} loses {lost} health", fighter.name);
                battle.log.attributed(by, line);
            }
        }
        ActionKind::ConvertArmorToStatus => {
            let key = status(kind, action)?;
            let fighter = battle.fighter_mut(owner);
            let spent = fighter.spend_armor(amount(action, ctx));
            if spent > 0 {
                let gained = to_amount(signed(action.amount.as_ref(), ctx, i64::from(spent)));
                let line = format!("{} converts {spent} armor", fighter.name);
                battle.log.attributed(by, line);
                battle.add_status(owner, key, gained, by);
            }
        }
        _ => return Err(outside_group(kind)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::effect::{Action, ActionKind};
    use crate::env::StaticCatalog;
    use crate::state::{Side, StatBlock, StatusKind};

    use super::super::testing::{battle, run};

    #[test]
    fn deal_damage_hits_armor_first_and_exposes() {
        let catalog = StaticCatalog::new();
        let mut battle = battle(&catalog, StatBlock::new(10, 0, 0, 0), StatBlock::new(10, 0, 2, 0));
        run(&mut battle, Action::new(ActionKind::DealDamage).value(5));
        let right = battle.fighter(Side::Right);
        assert_eq!(right.armor(), 0);
        assert_eq!(right.health(), 7);
        assert_eq!(right.exposed_count, 1);
        assert!(battle.log().lines().contains(&"R is exposed".to_string()));
    }

    #[test]
    fn self_cost_keeps_one_health() {
        let catalog = StaticCatalog::new();
        let mut battle = battle(&catalog, StatBlock::new(4, 0, 0, 0), StatBlock::new(10, 0, 0, 0));
        run(&mut battle, Action::new(ActionKind::LoseHealth).value(9));
        let left = battle.fighter(Side::Left);
        assert_eq!(left.health(), 1);
        assert!(left.is_alive());
    }

    #[test]
    fn converting_armor_spends_without_exposing() {
        let catalog = StaticCatalog::new();
        let mut battle = battle(&catalog, StatBlock::new(10, 0, 1, 0), StatBlock::new(10, 0, 0, 0));
        run(
            &mut battle,
            Action::new(ActionKind::ConvertArmorToStatus)
                .status(StatusKind::Thorns)
                .amount(2),
        );
        let left = battle.fighter(Side::Left);
        assert_eq!(left.armor(), 0);
        assert_eq!(left.statuses.get(&StatusKind::Thorns), 2);
        assert_eq!(left.exposed_count, 0);
    }
}
