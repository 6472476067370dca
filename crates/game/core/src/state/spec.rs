//! Combatant specifications: the input a battle is built from.

use std::collections::BTreeMap;

use crate::effect::Tier;
use crate::env::SourceId;
use crate::state::StatusKind;

/// Base stat block. Missing entries count as zero when summed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatBlock {
    #[cfg_attr(feature = "serde", serde(alias = "hp"))]
    pub health: Option<i32>,
    #[cfg_attr(feature = "serde", serde(alias = "atk"))]
    pub attack: Option<i32>,
    pub armor: Option<i32>,
    pub speed: Option<i32>,
}

impl StatBlock {
    pub const fn new(health: i32, attack: i32, armor: i32, speed: i32) -> Self {
        Self {
            health: Some(health),
            attack: Some(attack),
            armor: Some(armor),
            speed: Some(speed),
        }
    }

    /// Entry-wise sum, treating missing entries as zero.
    pub fn plus(self, other: StatBlock) -> StatBlock {
        let add = |a: Option<i32>, b: Option<i32>| match (a, b) {
            (None, None) => None,
            (a, b) => Some(a.unwrap_or(0).saturating_add(b.unwrap_or(0))),
        };
        StatBlock {
            health: add(self.health, other.health),
            attack: add(self.attack, other.attack),
            armor: add(self.armor, other.armor),
            speed: add(self.speed, other.speed),
        }
    }
}

/// A catalog identifier equipped at a tier.
///
/// Decodes from a bare `"items/slug"` string or from `{ id, tier }`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawEquipped"))]
pub struct EquippedItem {
    pub id: SourceId,
    pub tier: Tier,
}

impl EquippedItem {
    pub fn new(id: impl Into<SourceId>) -> Self {
        Self {
            id: id.into(),
            tier: Tier::Base,
        }
    }

    pub fn at(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawEquipped {
    Bare(SourceId),
    Full {
        #[serde(alias = "slug", alias = "key")]
        id: SourceId,
        #[serde(default)]
        tier: Tier,
    },
}

#[cfg(feature = "serde")]
impl From<RawEquipped> for EquippedItem {
    fn from(raw: RawEquipped) -> Self {
        match raw {
            RawEquipped::Bare(id) => Self::new(id),
            RawEquipped::Full { id, tier } => Self { id, tier },
        }
    }
}

/// Everything needed to build one side of a duel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatantSpec {
    pub name: String,
    /// Overrides the stats derived from equipment when present.
    pub stats: Option<StatBlock>,
    pub weapon: Option<EquippedItem>,
    pub items: Vec<EquippedItem>,
    /// Initial stacks, applied after stats.
    pub statuses: BTreeMap<StatusKind, u32>,
}

impl CombatantSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_weapon(mut self, weapon: EquippedItem) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn with_item(mut self, item: EquippedItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_status(mut self, status: StatusKind, stacks: u32) -> Self {
        self.statuses.insert(status, stacks);
        self
    }

    /// Weapon first, then items in equip order.
    pub fn equipped(&self) -> impl Iterator<Item = &EquippedItem> {
        self.weapon.iter().chain(self.items.iter())
    }
}
