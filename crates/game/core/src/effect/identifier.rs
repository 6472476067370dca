//! Forward-compatible identifiers for closed enumerations.
//!
//! Catalog data may name triggers or actions this engine does not implement
//! yet. Those names are kept verbatim as [`Identifier::Unknown`] so they can be
//! reported instead of failing the whole record.

use core::fmt;
use core::str::FromStr;

/// A known enumeration value, or the raw name that did not parse.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Identifier<K> {
    Known(K),
    Unknown(String),
}

impl<K: FromStr> Identifier<K> {
    pub fn parse(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.parse::<K>() {
            Ok(kind) => Self::Known(kind),
            Err(_) => Self::Unknown(name),
        }
    }
}

impl<K> Identifier<K> {
    pub fn known(&self) -> Option<&K> {
        match self {
            Self::Known(kind) => Some(kind),
            Self::Unknown(_) => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl<K: PartialEq> Identifier<K> {
    pub fn is(&self, kind: &K) -> bool {
        self.known() == Some(kind)
    }
}

impl<K> From<K> for Identifier<K> {
    fn from(kind: K) -> Self {
        Self::Known(kind)
    }
}

impl<K: fmt::Display> fmt::Display for Identifier<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(kind) => kind.fmt(f),
            Self::Unknown(name) => f.write_str(name),
        }
    }
}

#[cfg(feature = "serde")]
impl<K: fmt::Display> serde::Serialize for Identifier<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, K: FromStr> serde::Deserialize<'de> for Identifier<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Trigger;

    #[test]
    fn unknown_names_are_preserved() {
        let id = Identifier::<Trigger>::parse("onSolarEclipse");
        assert!(id.is_unknown());
        assert_eq!(id.to_string(), "onSolarEclipse");
    }

    #[test]
    fn known_names_parse_to_kind() {
        let id = Identifier::<Trigger>::parse("battleStart");
        assert!(id.is(&Trigger::BattleStart));
    }
}
