//! Status stacks carried by a combatant.
//!
//! A status is a named, non-negative stack count. The named kinds below have
//! per-turn tick semantics in the engine; any other name is carried as
//! [`StatusKind::Other`] so item-specific counters still work.

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

/// Name of a status stack.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusKind {
    /// Health loss each turn start while armor is zero, then decays by one.
    Poison,
    /// Armor loss equal to the stack each turn start.
    Acid,
    /// Health loss ignoring armor each turn start, then decays by one.
    Riptide,
    /// Halves strike damage (or doubles it when inverted); decays at turn end.
    Freeze,
    /// Each stack cancels one strike.
    Stun,
    /// Damage reflected to a striking attacker.
    Thorns,
    /// Healing at turn end, then decays by one.
    Regeneration,
    Purity,
    Other(String),
}

impl StatusKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Poison => "poison",
            Self::Acid => "acid",
            Self::Riptide => "riptide",
            Self::Freeze => "freeze",
            Self::Stun => "stun",
            Self::Thorns => "thorns",
            Self::Regeneration => "regen",
            Self::Purity => "purity",
            Self::Other(name) => name,
        }
    }
}

impl FromStr for StatusKind {
    type Err = core::convert::Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name.to_ascii_lowercase().as_str() {
            "poison" => Self::Poison,
            "acid" => Self::Acid,
            "riptide" => Self::Riptide,
            "freeze" => Self::Freeze,
            "stun" => Self::Stun,
            "thorns" => Self::Thorns,
            "regen" | "regeneration" => Self::Regeneration,
            "purity" => Self::Purity,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StatusKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StatusKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        let Ok(kind) = name.parse::<StatusKind>();
        Ok(kind)
    }
}

/// Stack counts keyed by status. Zero stacks are not stored.
///
/// Ordered so that random choices over "held statuses" are reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusStacks {
    stacks: BTreeMap<StatusKind, u32>,
}

impl StatusStacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: &StatusKind) -> u32 {
        self.stacks.get(kind).copied().unwrap_or(0)
    }

    pub fn has(&self, kind: &StatusKind) -> bool {
        self.get(kind) > 0
    }

    /// Add stacks; returns `(before, after)`.
    pub fn add(&mut self, kind: &StatusKind, amount: u32) -> (u32, u32) {
        let before = self.get(kind);
        let after = before.saturating_add(amount);
        self.set(kind, after);
        (before, after)
    }

    /// Remove up to `amount` stacks; returns how many were removed.
    pub fn remove(&mut self, kind: &StatusKind, amount: u32) -> u32 {
        let before = self.get(kind);
        let removed = before.min(amount);
        self.set(kind, before - removed);
        removed
    }

    /// Remove every stack of `kind`; returns the previous count.
    pub fn clear(&mut self, kind: &StatusKind) -> u32 {
        self.stacks.remove(kind).unwrap_or(0)
    }

    pub fn set(&mut self, kind: &StatusKind, count: u32) {
        if count == 0 {
            self.stacks.remove(kind);
        } else {
            self.stacks.insert(kind.clone(), count);
        }
    }

    /// Held statuses in stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&StatusKind, u32)> {
        self.stacks.iter().map(|(kind, count)| (kind, *count))
    }

    pub fn held(&self) -> Vec<StatusKind> {
        self.stacks.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}
