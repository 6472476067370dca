use crate::state::Side;

/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Safety bound on the number of turns. Reaching it ends the battle in a draw.
    pub max_turns: u32,

    /// How many times `onExposed` may fire per combatant before items extend it.
    pub exposed_limit: u32,

    /// Upper bound on gold a combatant can hold.
    pub gold_cap: u32,

    /// Maximum nesting of trigger dispatch (a reaction raising another event).
    /// Deeper dispatches are dropped with a diagnostic line.
    pub max_dispatch_depth: u32,

    /// Health used when a combatant specification has no explicit stat block.
    pub default_health: u32,

    /// Side that acts first when both combatants have equal speed.
    pub initiative_tie: Side,
}

impl BattleConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_TURNS: u32 = 100;
    pub const DEFAULT_EXPOSED_LIMIT: u32 = 1;
    pub const DEFAULT_GOLD_CAP: u32 = 10;
    pub const DEFAULT_MAX_DISPATCH_DEPTH: u32 = 16;
    pub const DEFAULT_HEALTH: u32 = 10;

    pub fn new() -> Self {
        Self {
            max_turns: Self::DEFAULT_MAX_TURNS,
            exposed_limit: Self::DEFAULT_EXPOSED_LIMIT,
            gold_cap: Self::DEFAULT_GOLD_CAP,
            max_dispatch_depth: Self::DEFAULT_MAX_DISPATCH_DEPTH,
            default_health: Self::DEFAULT_HEALTH,
            initiative_tie: Side::Left,
        }
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-call options for [`crate::simulate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulateOptions {
    /// Overrides `config.max_turns` when set.
    pub max_turns: Option<u32>,

    /// Seed for every random choice made during the battle.
    pub seed: u64,

    /// Attach per-side aggregate statistics to the outcome.
    pub include_summary: bool,

    pub config: BattleConfig,
}

impl SimulateOptions {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    pub fn with_summary(mut self) -> Self {
        self.include_summary = true;
        self
    }

    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    /// Turn bound actually used by the scheduler.
    pub fn effective_max_turns(&self) -> u32 {
        self.max_turns.unwrap_or(self.config.max_turns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_max_turns_overrides_config() {
        let options = SimulateOptions::new(7).with_max_turns(12);
        assert_eq!(options.effective_max_turns(), 12);

        let options = SimulateOptions::new(7).with_config(BattleConfig::new().with_max_turns(30));
        assert_eq!(options.effective_max_turns(), 30);
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = BattleConfig::default();
        assert_eq!(config.max_turns, 100);
        assert_eq!(config.exposed_limit, 1);
        assert_eq!(config.initiative_tie, Side::Left);
    }
}
