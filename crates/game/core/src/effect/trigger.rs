//! Battle events that effect rules can listen for.

/// Trigger name of an effect rule.
///
/// Names are camelCase in catalog data; snake_case spellings are accepted too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString)]
pub enum Trigger {
    /// Before battle start; used for setup such as exposed-budget changes.
    #[strum(to_string = "preBattle", serialize = "pre_battle")]
    PreBattle,
    #[strum(to_string = "battleStart", serialize = "battle_start")]
    BattleStart,
    #[strum(to_string = "turnStart", serialize = "turn_start")]
    TurnStart,
    /// Attacker's strike landed (fires for stunned-free strikes only).
    #[strum(to_string = "onHit", serialize = "on_hit")]
    OnHit,
    #[strum(to_string = "afterStrike", serialize = "after_strike")]
    AfterStrike,
    #[strum(to_string = "turnEnd", serialize = "turn_end")]
    TurnEnd,
    #[strum(to_string = "onExposed", serialize = "on_exposed")]
    OnExposed,
    #[strum(to_string = "onWounded", serialize = "on_wounded")]
    OnWounded,
    #[strum(to_string = "onDamaged", serialize = "on_damaged")]
    OnDamaged,
    #[strum(to_string = "onGainArmor", serialize = "on_gain_armor")]
    OnGainArmor,
    #[strum(to_string = "onGainStatus", serialize = "on_gain_status")]
    OnGainStatus,
    #[strum(to_string = "onHeal", serialize = "on_heal")]
    OnHeal,
    #[strum(to_string = "onPoisonTick", serialize = "on_poison_tick")]
    OnPoisonTick,
    #[strum(
        to_string = "countdownFired",
        serialize = "countdown_fired",
        serialize = "onCountdownTrigger"
    )]
    CountdownFired,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Trigger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Trigger {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse()
            .map_err(|_| serde::de::Error::custom(format!("unknown trigger `{name}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_camel_case() {
        assert_eq!(Trigger::OnExposed.to_string(), "onExposed");
        assert_eq!(Trigger::CountdownFired.to_string(), "countdownFired");
    }

    #[test]
    fn snake_case_spelling_parses() {
        assert_eq!("turn_start".parse::<Trigger>().unwrap(), Trigger::TurnStart);
        assert_eq!(
            "onCountdownTrigger".parse::<Trigger>().unwrap(),
            Trigger::CountdownFired
        );
    }
}
