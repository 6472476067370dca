use std::sync::Arc;

use crate::effect::{Action, ActionKind, value::to_amount};
use crate::engine::{ActionCtx, Battle};
use crate::error::ActionError;
use crate::state::Countdown;

use super::{ActionResult, amount, outside_group, signed};

pub(super) fn apply(
    battle: &mut Battle<'_>,
    kind: ActionKind,
    action: &Action,
    ctx: &ActionCtx<'_>,
) -> ActionResult {
    let by = Some(ctx.source);
    let owner = ctx.owner;

    match kind {
        ActionKind::AddCountdown => {
            let spec = action
                .countdown
                .as_ref()
                .ok_or(ActionError::missing(kind, "countdown"))?;
            let turns = to_amount(signed(Some(&spec.turns), ctx, 1));
            battle.start_countdown(
                owner,
                Countdown {
                    id: 0,
                    owner,
                    name: spec.name.clone(),
                    turns_left: turns,
                    turns_total: turns,
                    tag: spec.tag.clone(),
                    source: ctx.source.to_owned(),
                    tier: ctx.tier,
                    actions: Arc::from(spec.actions.clone()),
                    fired: false,
                },
            );
        }
        ActionKind::ReduceCountdowns => {
            let n = amount(action, ctx);
            let tag = action.tag.as_deref();
            let fighter = battle.fighter_mut(owner);
            let mut touched = 0;
            for countdown in fighter.countdowns.iter_mut().filter(|cd| !cd.fired) {
                if tag.is_none_or(|wanted| countdown.tag.as_deref() == Some(wanted)) {
                    countdown.reduce(n);
                    touched += 1;
                }
            }
            if touched > 0 {
                let line = format!("{}'s countdowns are reduced by {n}", fighter.name);
                battle.log.attributed(by, line);
            }
        }
        ActionKind::HalveCountdowns => {
            let fighter = battle.fighter_mut(owner);
            let mut touched = 0;
            for countdown in fighter.countdowns.iter_mut().filter(|cd| !cd.fired) {
                countdown.halve();
                touched += 1;
            }
            if touched > 0 {
                let line = format!("{}'s countdowns are halved", fighter.name);
                battle.log.attributed(by, line);
            }
        }
        ActionKind::RestartCountdown => {
            let fired = ctx.event.countdown.as_ref().ok_or(ActionError::NoTarget {
                action: kind,
                reason: "no countdown fired",
            })?;
            battle.start_countdown(fired.owner, fired.clone());
        }
        _ => return Err(outside_group(kind)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::effect::{Action, ActionKind, CountdownSpec, Tier, ValueSpec};
    use crate::env::StaticCatalog;
    use crate::state::{Side, StatBlock};

    use super::super::testing::{battle, run, run_at};

    fn blank() -> StatBlock {
        StatBlock::new(10, 0, 0, 0)
    }

    fn fuse(turns: impl Into<ValueSpec>) -> Action {
        Action::new(ActionKind::AddCountdown).countdown(
            CountdownSpec::new("Fuse", turns)
                .tag("bomb")
                .action(Action::new(ActionKind::DealDamage).value(3)),
        )
    }

    #[test]
    fn countdown_turns_follow_source_tier() {
        let catalog = StaticCatalog::new();
        let mut battle = battle(&catalog, blank(), blank());
        run_at(&mut battle, fuse(ValueSpec::tiered(4, 3, 2)), Tier::Top);
        let countdown = &battle.fighter(Side::Left).countdowns[0];
        assert_eq!(countdown.turns_left, 2);
        assert_eq!(countdown.source, "Test Item");
        assert_eq!(countdown.tier, Tier::Top);
    }

    #[test]
    fn reduce_respects_tag_and_floor() {
        let catalog = StaticCatalog::new();
        let mut battle = battle(&catalog, blank(), blank());
        run(&mut battle, fuse(5));
        run(
            &mut battle,
            Action::new(ActionKind::AddCountdown).countdown(CountdownSpec::new("Bell", 5)),
        );
        run(&mut battle, Action::new(ActionKind::ReduceCountdowns).value(9).tag("bomb"));
        let countdowns = &battle.fighter(Side::Left).countdowns;
        assert_eq!(countdowns[0].turns_left, 1);
        assert_eq!(countdowns[1].turns_left, 5);

        run(&mut battle, Action::new(ActionKind::HalveCountdowns));
        let countdowns = &battle.fighter(Side::Left).countdowns;
        assert_eq!(countdowns[0].turns_left, 1);
        assert_eq!(countdowns[1].turns_left, 3);
    }

    #[test]
    fn countdown_remembers_its_owner() {
        let catalog = StaticCatalog::new();
        let mut battle = battle(&catalog, blank(), blank());
        run(&mut battle, fuse(2));
        assert_eq!(battle.fighter(Side::Left).countdowns[0].owner, Side::Left);
        assert!(battle.fighter(Side::Right).countdowns.is_empty());
    }

    #[test]
    fn countdown_ids_are_unique() {
        let catalog = StaticCatalog::new();
        let mut battle = battle(&catalog, blank(), blank());
        run(&mut battle, fuse(2));
        run(&mut battle, fuse(2));
        let countdowns = &battle.fighter(Side::Left).countdowns;
        assert_ne!(countdowns[0].id, countdowns[1].id);
    }

    #[test]
    fn restart_outside_a_countdown_event_is_a_noop() {
        let catalog = StaticCatalog::new();
        let mut battle = battle(&catalog, blank(), blank());
        run(&mut battle, Action::new(ActionKind::RestartCountdown));
        assert!(battle.fighter(Side::Left).countdowns.is_empty());
        assert!(
            battle
                .log()
                .lines()
                .iter()
                .any(|line| line.contains("no countdown fired"))
        );
    }
}
