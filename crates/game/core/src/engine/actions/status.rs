use crate::effect::{Action, ActionKind, value::to_amount};
use crate::engine::{ActionCtx, Battle};
use crate::state::{Side, StatusKind};

use super::{ActionResult, amount, outside_group, signed, stat, status};

pub(super) fn apply(
    battle: &mut Battle<'_>,
    kind: ActionKind,
    action: &Action,
    ctx: &ActionCtx<'_>,
) -> ActionResult {
    let by = Some(ctx.source);
    let owner = ctx.owner;
    let enemy = ctx.enemy();

    match kind {
        ActionKind::AddStatus => {
            battle.add_status(owner, status(kind, action)?, amount(action, ctx), by);
        }
        ActionKind::AddStatusToEnemy => {
            battle.add_status(enemy, status(kind, action)?, amount(action, ctx), by);
        }
        ActionKind::AddStatusToEnemyFromStat => {
            let key = status(kind, action)?;
            let n = to_amount(battle.fighter(owner).stat(stat(kind, action)?));
            if n > 0 {
                battle.add_status(enemy, key, n, by);
            }
        }
        ActionKind::RemoveStatus => {
            remove(battle, owner, status(kind, action)?, amount(action, ctx), by);
        }
        ActionKind::RemoveEnemyStatus => {
            remove(battle, enemy, status(kind, action)?, amount(action, ctx), by);
        }
        ActionKind::DecreaseRandomStatus => {
            let held = battle.fighter(owner).statuses.held();
            let Some(index) = battle.draw(owner, held.len()) else {
                return Ok(());
            };
            let key = &held[index];
            let fighter = battle.fighter_mut(owner);
            let removed = fighter.statuses.remove(key, amount(action, ctx));
            let line = format!("{} decreases {removed} {key}", fighter.name);
            battle.log.attributed(by, line);
        }
        ActionKind::TransferRandomStatusToEnemy => {
            let held = battle.fighter(owner).statuses.held();
            let Some(index) = battle.draw(owner, held.len()) else {
                return Ok(());
            };
            let key = &held[index];
            let stacks = battle.fighter(owner).statuses.get(key);
            // Without a value the whole stack moves.
            let wanted = to_amount(signed(action.value.as_ref(), ctx, i64::from(stacks)));
            transfer(battle, owner, key, wanted, by);
        }
        ActionKind::TransferAllStatusesToEnemy => {
            let held = battle.fighter(owner).statuses.held();
            for key in &held {
                transfer(battle, owner, key, u32::MAX, by);
            }
        }
        ActionKind::ClearStatuses => match &action.status {
            Some(key) => {
                let fighter = battle.fighter_mut(owner);
                if fighter.statuses.clear(key) > 0 {
                    let line = format!("{} clears {key}", fighter.name);
                    battle.log.attributed(by, line);
                }
            }
            None => {
                let fighter = battle.fighter_mut(owner);
                if !fighter.statuses.is_empty() {
                    for key in fighter.statuses.held() {
                        fighter.statuses.clear(&key);
                    }
                    let line = format!("{} clears all statuses", fighter.name);
                    battle.log.attributed(by, line);
                }
            }
        },
        _ => return Err(outside_group(kind)),
    }
    Ok(())
}

fn remove(battle: &mut Battle<'_>, side: Side, key: &StatusKind, n: u32, by: Option<&str>) {
    let fighter = battle.fighter_mut(side);
    let removed = fighter.statuses.remove(key, n);
    if removed > 0 {
        let line = format!("{} loses {removed} {key}", fighter.name);
        battle.log.attributed(by, line);
    }
}

/// Move up to `wanted` stacks of `key` from `from` to its opponent.
fn transfer(battle: &mut Battle<'_>, from: Side, key: &StatusKind, wanted: u32, by: Option<&str>) {
    let to = from.opponent();
    let moved = battle.fighter_mut(from).statuses.remove(key, wanted);
    if moved == 0 {
        return;
    }
    let line = format!(
        "{} transfers {moved} {key} to {}",
        battle.fighter(from).name,
        battle.fighter(to).name
    );
    battle.log.attributed(by, line);
    battle.add_status(to, key, moved, by);
}

#[cfg(test)]
mod tests {
    use crate::effect::{Action, ActionKind};
    use crate::env::StaticCatalog;
    use crate::state::{Side, Stat, StatBlock, StatusKind};

    use super::super::testing::{battle, run};

    fn blank() -> StatBlock {
        StatBlock::new(10, 0, 0, 0)
    }

    #[test]
    fn from_stat_uses_the_owner_value() {
        let catalog = StaticCatalog::new();
        let mut battle = battle(&catalog, StatBlock::new(10, 0, 3, 0), blank());
        run(
            &mut battle,
            Action::new(ActionKind::AddStatusToEnemyFromStat)
                .stat(Stat::Armor)
                .status(StatusKind::Poison),
        );
        assert_eq!(battle.fighter(Side::Right).statuses.get(&StatusKind::Poison), 3);
    }

    #[test]
    fn missing_status_parameter_is_reported() {
        let catalog = StaticCatalog::new();
        let mut battle = battle(&catalog, blank(), blank());
        run(&mut battle, Action::new(ActionKind::AddStatus).value(2));
        assert!(battle.fighter(Side::Left).statuses.is_empty());
        assert!(
            battle
                .log()
                .lines()
                .iter()
                .any(|line| line.contains("requires a `status` parameter"))
        );
    }

    #[test]
    fn random_choices_never_go_negative() {
        let catalog = StaticCatalog::new();
        let mut battle = battle(&catalog, blank(), blank());
        run(&mut battle, Action::new(ActionKind::AddStatus).status(StatusKind::Regeneration).value(1));
        run(&mut battle, Action::new(ActionKind::DecreaseRandomStatus).value(5));
        run(&mut battle, Action::new(ActionKind::DecreaseRandomStatus));
        assert!(battle.fighter(Side::Left).statuses.is_empty());
    }

    #[test]
    fn transfer_moves_whole_stack_by_default() {
        let catalog = StaticCatalog::new();
        let mut battle = battle(&catalog, blank(), blank());
        run(&mut battle, Action::new(ActionKind::AddStatus).status(StatusKind::Poison).value(4));
        run(&mut battle, Action::new(ActionKind::TransferRandomStatusToEnemy));
        assert_eq!(battle.fighter(Side::Left).statuses.get(&StatusKind::Poison), 0);
        assert_eq!(battle.fighter(Side::Right).statuses.get(&StatusKind::Poison), 4);
        assert!(
            battle
                .log()
                .lines()
                .contains(&"Test Item: L transfers 4 poison to R".to_string())
        );
    }

    #[test]
    fn transfer_all_and_clear() {
        let catalog = StaticCatalog::new();
        let mut battle = battle(&catalog, blank(), blank());
        run(&mut battle, Action::new(ActionKind::AddStatus).status(StatusKind::Acid).value(2));
        run(&mut battle, Action::new(ActionKind::AddStatus).status(StatusKind::Stun).value(1));
        run(&mut battle, Action::new(ActionKind::TransferAllStatusesToEnemy));
        assert!(battle.fighter(Side::Left).statuses.is_empty());
        assert_eq!(battle.fighter(Side::Right).statuses.get(&StatusKind::Acid), 2);

        run(&mut battle, Action::new(ActionKind::AddStatus).status(StatusKind::Regeneration).value(3));
        run(&mut battle, Action::new(ActionKind::AddStatus).status(StatusKind::Thorns).value(3));
        run(&mut battle, Action::new(ActionKind::ClearStatuses).status(StatusKind::Regeneration));
        assert_eq!(battle.fighter(Side::Left).statuses.get(&StatusKind::Thorns), 3);
        run(&mut battle, Action::new(ActionKind::ClearStatuses));
        assert!(battle.fighter(Side::Left).statuses.is_empty());
    }
}
