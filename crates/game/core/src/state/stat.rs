/// Numeric quantities of a combatant that rules can read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stat {
    #[cfg_attr(feature = "serde", serde(alias = "hp"))]
    Health,
    #[cfg_attr(feature = "serde", serde(alias = "hp_max"))]
    MaxHealth,
    MissingHealth,
    Armor,
    BaseArmor,
    #[cfg_attr(feature = "serde", serde(alias = "atk"))]
    Attack,
    TempAttack,
    Speed,
    Gold,
}
