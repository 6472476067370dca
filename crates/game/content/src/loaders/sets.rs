//! Set definition loader.

use std::path::Path;

use anyhow::Context;
use duel_core::SetDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{Format, LoadResult, decode, read_file};

/// Set file structure: `(sets: [ ... ])`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetFile {
    pub sets: Vec<SetDefinition>,
}

/// Loader for set definitions from RON (or JSON) files.
pub struct SetLoader;

impl SetLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<SetDefinition>> {
        let content = read_file(path)?;
        let file: SetFile = decode(&content, Format::of(path))
            .with_context(|| format!("Failed to parse set definitions {}", path.display()))?;

        for set in file.sets.iter().filter(|set| set.requirements.is_empty()) {
            tracing::warn!(set = %set.id, "set has no requirements and will never activate");
        }
        Ok(file.sets)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use duel_core::{SetRequirement, SourceId};

    use super::*;

    #[test]
    fn loads_both_requirement_kinds() {
        let mut file = tempfile::Builder::new()
            .suffix(".ron")
            .tempfile()
            .expect("create fixture");
        write!(
            file,
            r#"(
                sets: [
                    (
                        id: "sets/highborn",
                        name: "Highborn",
                        requirements: [(kind: "tag-count", tag: "Ring", count: 2)],
                        effects: [
                            (trigger: "preBattle", actions: [(type: "multiply_triggers", tag: Some("Ring"))]),
                        ],
                    ),
                    (
                        id: "sets/iron_chain",
                        name: "Iron Chain",
                        requirements: [(kind: "all_of", ids: ["items/iron_links", "weapons/iron_flail"])],
                    ),
                ],
            )"#
        )
        .expect("write fixture");

        let sets = SetLoader::load(file.path()).expect("sets load");
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].requirements, vec![SetRequirement::tag_count("Ring", 2)]);
        assert_eq!(
            sets[1].requirements,
            vec![SetRequirement::AllOf {
                ids: vec![
                    SourceId::from("items/iron_links"),
                    SourceId::from("weapons/iron_flail")
                ],
            }]
        );
        assert!(sets[1].effects.is_empty());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = SetLoader::load(Path::new("/nonexistent/sets.ron")).expect_err("missing file");
        assert!(err.to_string().contains("/nonexistent/sets.ron"));
    }
}
