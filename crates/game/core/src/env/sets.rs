use crate::effect::EffectRule;
use crate::env::SourceId;

/// One requirement of a set bonus.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SetRequirement {
    /// Every listed id is equipped.
    #[cfg_attr(feature = "serde", serde(alias = "slugs"))]
    AllOf {
        #[cfg_attr(feature = "serde", serde(alias = "all"))]
        ids: Vec<SourceId>,
    },
    /// At least `count` equipped sources in the `items` bucket carry `tag`.
    #[cfg_attr(feature = "serde", serde(alias = "tag-count"))]
    TagCount { tag: String, count: u32 },
}

impl SetRequirement {
    pub fn all_of<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SourceId>,
    {
        Self::AllOf {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tag_count(tag: impl Into<String>, count: u32) -> Self {
        Self::TagCount {
            tag: tag.into(),
            count,
        }
    }
}

/// A multi-item synergy that becomes a virtual effect source when active.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetDefinition {
    /// Catalog-style id of the virtual source, e.g. `sets/iron_chain`.
    pub id: SourceId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// All must hold. An empty list never activates.
    pub requirements: Vec<SetRequirement>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<EffectRule>,
}

impl SetDefinition {
    pub fn new(id: impl Into<SourceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            requirements: Vec::new(),
            tags: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn requires(mut self, requirement: SetRequirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    pub fn with_effect(mut self, rule: EffectRule) -> Self {
        self.effects.push(rule);
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
