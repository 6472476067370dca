//! Effect dispatcher.
//!
//! For an event on combatant X: X's owner-scoped rules run first (weapon,
//! items in equip order, set bonuses), then the opponent's enemy-scoped
//! rules. Each rule finishes, side effects included, before the next starts.

use crate::effect::{
    Action, ConditionContext, EffectRule, EventData, Identifier, RuleScope, Trigger, all_hold,
};
use crate::error::{ActionError, GameError};
use crate::state::Side;

use super::{ActionCtx, Battle, Source, actions};

impl<'a> Battle<'a> {
    /// Raise `trigger` for `subject` and run every matching rule.
    pub(crate) fn run_trigger(&mut self, trigger: Trigger, subject: Side, event: &EventData) {
        if self.depth >= self.config.max_dispatch_depth {
            let err = ActionError::DispatchDepth {
                trigger: trigger.to_string(),
                depth: self.depth,
            };
            self.report(None, &err);
            return;
        }

        self.depth += 1;
        tracing::debug!(%trigger, side = %subject, depth = self.depth, "dispatch");
        self.run_rules(trigger, subject, RuleScope::Owner, event);
        self.run_rules(trigger, subject.opponent(), RuleScope::Enemy, event);
        self.depth -= 1;

        if self.depth == 0 {
            self.settle();
        }
    }

    fn run_rules(&mut self, trigger: Trigger, owner: Side, scope: RuleScope, event: &EventData) {
        let count = self.sources[owner.index()].len();
        for index in 0..count {
            let source = self.sources[owner.index()][index];
            for rule in source.rules {
                if rule.listens_to(trigger, scope) {
                    self.run_rule(source, rule, owner, trigger, event);
                }
            }
        }
    }

    fn run_rule(
        &mut self,
        source: Source<'a>,
        rule: &EffectRule,
        owner: Side,
        trigger: Trigger,
        event: &EventData,
    ) {
        if rule.conditions.iter().any(|condition| condition.contains_unknown()) {
            tracing::warn!(source = %source.id, %trigger, "unknown condition kind");
            self.log
                .diagnostic(format!("{}: unknown condition kind evaluates to false", source.name));
        }

        let factor = self.fighter(owner).trigger_factor(trigger, source.tags);
        let repeats = rule.repeat.saturating_mul(factor);
        let ctx = ActionCtx {
            owner,
            source: source.name,
            tier: source.tier,
            event,
        };

        let mut passed = self.conditions_hold(rule, owner, event);
        for round in 0..repeats {
            if round > 0 && rule.per_repeat {
                passed = self.conditions_hold(rule, owner, event);
            }
            if !passed {
                if rule.per_repeat {
                    continue;
                }
                break;
            }
            for action in &rule.actions {
                self.execute(action, &ctx);
            }
        }
    }

    fn conditions_hold(&self, rule: &EffectRule, owner: Side, event: &EventData) -> bool {
        let ctx = ConditionContext {
            owner: self.fighter(owner),
            opponent: self.fighter(owner.opponent()),
            event,
        };
        all_hold(&rule.conditions, &ctx)
    }

    /// Run one action, turning any failure into a diagnostic line.
    pub(crate) fn execute(&mut self, action: &Action, ctx: &ActionCtx<'_>) {
        match &action.kind {
            Identifier::Known(kind) => {
                if let Err(err) = actions::apply(self, *kind, action, ctx) {
                    self.report(Some(ctx.source), &err);
                }
            }
            Identifier::Unknown(name) => {
                tracing::warn!(source = ctx.source, action = %name, "unknown action");
                self.log
                    .diagnostic(format!("{}: unknown action `{name}`", ctx.source));
            }
        }
    }

    pub(crate) fn report(&mut self, source: Option<&str>, err: &ActionError) {
        tracing::warn!(
            code = err.error_code(),
            severity = err.severity().as_str(),
            source,
            "{err}"
        );
        match source {
            Some(source) => self.log.diagnostic(format!("{source}: {err}")),
            None => self.log.diagnostic(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SimulateOptions;
    use crate::effect::{Action, ActionKind, Condition, EffectRule, RuleScope, Trigger};
    use crate::env::{BattleEnv, CatalogRecord, StaticCatalog};
    use crate::state::{CombatantSpec, EquippedItem, Side, StatBlock, StatusKind};

    use super::super::{Battle, BattleLog};

    fn spec(name: &str, items: &[&str]) -> CombatantSpec {
        let mut spec = CombatantSpec::new(name).with_stats(StatBlock::new(10, 0, 0, 0));
        for id in items {
            spec = spec.with_item(EquippedItem::new(*id));
        }
        spec
    }

    fn start<'a>(catalog: &'a StaticCatalog, left: &[&str], right: &[&str]) -> Battle<'a> {
        let env = BattleEnv::new(catalog);
        Battle::new(
            &spec("L", left),
            &spec("R", right),
            &env,
            &SimulateOptions::new(1),
        )
    }

    #[test]
    fn repeat_and_multiplier_compound() {
        let catalog = StaticCatalog::new().with(
            CatalogRecord::new("items/ring", "Ring")
                .with_tag("Ring")
                .with_effect(
                    EffectRule::new(Trigger::BattleStart)
                        .repeat(2)
                        .then(Action::new(ActionKind::AddArmor).value(1)),
                ),
        );
        let mut battle = start(&catalog, &["items/ring"], &[]);
        battle.fighter_mut(Side::Left).multipliers.push(crate::state::TriggerMultiplier {
            trigger: None,
            tag: Some("Ring".into()),
            factor: 2,
        });
        battle.run_trigger(Trigger::BattleStart, Side::Left, &Default::default());
        assert_eq!(battle.fighter(Side::Left).armor(), 4);
    }

    #[test]
    fn conditions_are_checked_once_unless_per_repeat() {
        let once = EffectRule::new(Trigger::TurnStart)
            .repeat(3)
            .when(Condition::LacksStatus {
                status: StatusKind::Thorns,
            })
            .then(Action::new(ActionKind::AddStatus).status(StatusKind::Thorns));
        let per_repeat = once.clone().per_repeat();

        let catalog = StaticCatalog::new()
            .with(CatalogRecord::new("items/once", "Once").with_effect(once))
            .with(CatalogRecord::new("items/each", "Each").with_effect(per_repeat));

        let mut battle = start(&catalog, &["items/once"], &["items/each"]);
        battle.run_trigger(Trigger::TurnStart, Side::Left, &Default::default());
        battle.run_trigger(Trigger::TurnStart, Side::Right, &Default::default());
        assert_eq!(battle.fighter(Side::Left).statuses.get(&StatusKind::Thorns), 3);
        assert_eq!(battle.fighter(Side::Right).statuses.get(&StatusKind::Thorns), 1);
    }

    #[test]
    fn enemy_scoped_rules_react_to_opponent_events() {
        let catalog = StaticCatalog::new().with(
            CatalogRecord::new("items/vulture", "Vulture").with_effect(
                EffectRule::new(Trigger::OnWounded)
                    .scope(RuleScope::Enemy)
                    .then(Action::new(ActionKind::AddGold).value(2)),
            ),
        );
        let mut battle = start(&catalog, &["items/vulture"], &[]);
        battle.run_trigger(Trigger::OnWounded, Side::Right, &Default::default());
        battle.run_trigger(Trigger::OnWounded, Side::Left, &Default::default());
        assert_eq!(battle.fighter(Side::Left).gold(), 2);
    }

    #[test]
    fn unknown_actions_are_logged_and_skipped() {
        let catalog = StaticCatalog::new().with(
            CatalogRecord::new("items/odd", "Odd").with_effect(
                EffectRule::new(Trigger::BattleStart)
                    .then(Action::unknown("summon_dragon"))
                    .then(Action::new(ActionKind::AddArmor).value(1)),
            ),
        );
        let mut battle = start(&catalog, &["items/odd"], &[]);
        battle.run_trigger(Trigger::BattleStart, Side::Left, &Default::default());
        assert_eq!(battle.fighter(Side::Left).armor(), 1);
        assert!(battle.log().lines().iter().any(|line| {
            line.starts_with(BattleLog::DIAGNOSTIC_PREFIX) && line.contains("summon_dragon")
        }));
    }

    #[test]
    fn runaway_recursion_stops_at_depth_limit() {
        // Gaining armor grants armor again: unbounded without the depth guard.
        let catalog = StaticCatalog::new().with(
            CatalogRecord::new("items/loop", "Loop").with_effect(
                EffectRule::new(Trigger::OnGainArmor)
                    .then(Action::new(ActionKind::AddArmor).value(1)),
            ),
        );
        let mut battle = start(&catalog, &["items/loop"], &[]);
        battle.run_trigger(Trigger::OnGainArmor, Side::Left, &Default::default());
        let depth = battle.config.max_dispatch_depth;
        assert_eq!(battle.fighter(Side::Left).armor(), depth);
        assert!(
            battle
                .log()
                .lines()
                .iter()
                .any(|line| line.contains("dispatch depth"))
        );
    }
}
