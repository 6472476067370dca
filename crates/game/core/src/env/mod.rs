//! Read-only battle environment.
//!
//! The catalog, the set definitions and the dice are external
//! collaborators. [`BattleEnv`] bundles them so the engine can reach
//! everything it needs without coupling to concrete implementations.
mod catalog;
mod dice;
mod sets;

pub use catalog::{Catalog, CatalogRecord, SourceId, StaticCatalog};
pub use dice::{Dice, SplitMixDice, draw_seed};
pub use sets::{SetDefinition, SetRequirement};

static DEFAULT_DICE: SplitMixDice = SplitMixDice;

/// Aggregates the read-only collaborators of a battle.
#[derive(Clone, Copy)]
pub struct BattleEnv<'a> {
    catalog: &'a dyn Catalog,
    sets: &'a [SetDefinition],
    dice: &'a dyn Dice,
}

impl<'a> BattleEnv<'a> {
    /// Environment with no set definitions and the default dice.
    pub fn new(catalog: &'a dyn Catalog) -> Self {
        Self {
            catalog,
            sets: &[],
            dice: &DEFAULT_DICE,
        }
    }

    pub fn with_sets(mut self, sets: &'a [SetDefinition]) -> Self {
        self.sets = sets;
        self
    }

    pub fn with_dice(mut self, dice: &'a dyn Dice) -> Self {
        self.dice = dice;
        self
    }

    pub fn catalog(&self) -> &'a dyn Catalog {
        self.catalog
    }

    pub fn sets(&self) -> &'a [SetDefinition] {
        self.sets
    }

    pub fn dice(&self) -> &'a dyn Dice {
        self.dice
    }
}

impl core::fmt::Debug for BattleEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BattleEnv")
            .field("sets", &self.sets.len())
            .finish_non_exhaustive()
    }
}
