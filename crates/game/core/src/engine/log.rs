/// Ordered, human-readable record of a battle.
///
/// Lines raised on behalf of an equipped source are prefixed with the
/// source's name so every effect reads as attributable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BattleLog {
    lines: Vec<String>,
}

impl BattleLog {
    /// Prefix of lines that report ignored or unusable catalog data.
    pub const DIAGNOSTIC_PREFIX: &'static str = "[diagnostic] ";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append a line, prefixed with `by` when set.
    pub fn attributed(&mut self, by: Option<&str>, line: impl AsRef<str>) {
        let line = line.as_ref();
        match by {
            Some(source) => self.lines.push(format!("{source}: {line}")),
            None => self.lines.push(line.to_string()),
        }
    }

    pub fn diagnostic(&mut self, line: impl AsRef<str>) {
        self.lines
            .push(format!("{}{}", Self::DIAGNOSTIC_PREFIX, line.as_ref()));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribution_prefixes_source_name() {
        let mut log = BattleLog::new();
        log.attributed(Some("Granite Lance"), "L gains 1 armor");
        log.attributed(None, "-- Turn 1 -- L");
        log.diagnostic("unknown action `fly`");
        assert_eq!(
            log.lines(),
            &[
                "Granite Lance: L gains 1 armor".to_string(),
                "-- Turn 1 -- L".to_string(),
                "[diagnostic] unknown action `fly`".to_string(),
            ]
        );
    }
}
