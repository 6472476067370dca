//! Tier-scaled numeric values.

/// Scaling level of an equipped item instance.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Tier {
    #[default]
    Base,
    #[strum(to_string = "upgraded", serialize = "gold")]
    #[cfg_attr(feature = "serde", serde(alias = "gold"))]
    Upgraded,
    #[strum(to_string = "top", serialize = "diamond")]
    #[cfg_attr(feature = "serde", serde(alias = "diamond"))]
    Top,
}

/// Per-tier entries of a value. Missing entries fall back to `base`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TieredValue {
    #[cfg_attr(feature = "serde", serde(default))]
    pub base: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default, alias = "gold"))]
    pub upgraded: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default, alias = "diamond"))]
    pub top: Option<i64>,
}

/// Value attached to an action: a flat number or a tier-keyed triple.
///
/// Anything else found in catalog data decodes to [`ValueSpec::Malformed`],
/// which resolves to nothing and lets the handler apply its default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged, from = "RawValue"))]
pub enum ValueSpec {
    Flat(i64),
    Tiered(TieredValue),
    Malformed,
}

impl ValueSpec {
    pub const fn flat(value: i64) -> Self {
        Self::Flat(value)
    }

    pub const fn tiered(base: i64, upgraded: i64, top: i64) -> Self {
        Self::Tiered(TieredValue {
            base: Some(base),
            upgraded: Some(upgraded),
            top: Some(top),
        })
    }

    /// Select the entry for `tier`, falling back to the base entry.
    pub fn resolve(&self, tier: Tier) -> Option<i64> {
        match self {
            Self::Flat(value) => Some(*value),
            Self::Tiered(values) => {
                let picked = match tier {
                    Tier::Base => values.base,
                    Tier::Upgraded => values.upgraded,
                    Tier::Top => values.top,
                };
                picked.or(values.base)
            }
            Self::Malformed => None,
        }
    }
}

impl From<i64> for ValueSpec {
    fn from(value: i64) -> Self {
        Self::Flat(value)
    }
}

impl From<i32> for ValueSpec {
    fn from(value: i32) -> Self {
        Self::Flat(value.into())
    }
}

/// Lenient wire form; floats are floored, unknown shapes become `Malformed`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawValue {
    Int(i64),
    Float(f64),
    Tiered(TieredValue),
    Other(serde::de::IgnoredAny),
}

#[cfg(feature = "serde")]
impl From<RawValue> for ValueSpec {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Int(value) => Self::Flat(value),
            RawValue::Float(value) if value.is_finite() => Self::Flat(value.floor() as i64),
            RawValue::Float(_) => Self::Malformed,
            RawValue::Tiered(values) => Self::Tiered(values),
            RawValue::Other(_) => Self::Malformed,
        }
    }
}

/// Clamp a resolved value into a non-negative stack/point amount.
pub fn to_amount(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}
