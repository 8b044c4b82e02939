use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Deepest ancestor generation whose Ahnentafel numbers still fit in a `u64`.
pub const MAX_GENERATIONS: u32 = 62;

/// Deepest descendant generation a view may show. The descent walk revisits families on a
/// malformed cyclic record, so its work grows with the branching factor raised to this limit.
pub const MAX_DESCENT_GENERATIONS: u32 = 16;

/// Which part of the record a view shows around its fulcrum.
///
/// Survives fulcrum changes; everything else in a [`crate::Graph`] is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ViewConfigJson", into = "ViewConfigJson")]
pub struct ViewConfig {
    max_descent_generations: u32,
    max_ancestor_generations: u32,
    parent_family: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            max_descent_generations: 1,
            max_ancestor_generations: 2,
            parent_family: 0,
        }
    }
}

impl ViewConfig {
    pub fn new(max_descent_generations: i64, max_ancestor_generations: i64) -> Result<Self> {
        Ok(Self {
            max_descent_generations: generation_limit(
                "maxDescentGenerations",
                max_descent_generations,
                MAX_DESCENT_GENERATIONS,
            )?,
            max_ancestor_generations: generation_limit(
                "maxAncestorGenerations",
                max_ancestor_generations,
                MAX_GENERATIONS,
            )?,
            parent_family: 0,
        })
    }

    /// Selects which of the fulcrum's child-of families supplies parents and siblings.
    pub fn show_family(mut self, index: usize) -> Self {
        self.parent_family = index;
        self
    }

    pub fn max_ancestors(self, generations: i64) -> Result<Self> {
        Ok(Self {
            max_ancestor_generations: generation_limit(
                "maxAncestorGenerations",
                generations,
                MAX_GENERATIONS,
            )?,
            ..self
        })
    }

    pub fn max_descendants(self, generations: i64) -> Result<Self> {
        Ok(Self {
            max_descent_generations: generation_limit(
                "maxDescentGenerations",
                generations,
                MAX_DESCENT_GENERATIONS,
            )?,
            ..self
        })
    }

    pub fn max_descent_generations(&self) -> u32 {
        self.max_descent_generations
    }

    pub fn max_ancestor_generations(&self) -> u32 {
        self.max_ancestor_generations
    }

    pub fn parent_family(&self) -> usize {
        self.parent_family
    }
}

fn generation_limit(name: &str, value: i64, max: u32) -> Result<u32> {
    if value < 0 {
        return Err(Error::InvalidConfiguration {
            message: format!("{name} must not be negative (got {value})"),
        });
    }
    if value > i64::from(max) {
        return Err(Error::InvalidConfiguration {
            message: format!("{name} must be at most {max} (got {value})"),
        });
    }
    Ok(value as u32)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewConfigJson {
    #[serde(default = "default_descent")]
    max_descent_generations: i64,
    #[serde(default = "default_ancestors")]
    max_ancestor_generations: i64,
    #[serde(default)]
    parent_family: usize,
}

fn default_descent() -> i64 {
    ViewConfig::default().max_descent_generations.into()
}

fn default_ancestors() -> i64 {
    ViewConfig::default().max_ancestor_generations.into()
}

impl TryFrom<ViewConfigJson> for ViewConfig {
    type Error = Error;

    fn try_from(raw: ViewConfigJson) -> Result<Self> {
        Ok(ViewConfig::new(raw.max_descent_generations, raw.max_ancestor_generations)?
            .show_family(raw.parent_family))
    }
}

impl From<ViewConfig> for ViewConfigJson {
    fn from(config: ViewConfig) -> Self {
        Self {
            max_descent_generations: config.max_descent_generations.into(),
            max_ancestor_generations: config.max_ancestor_generations.into(),
            parent_family: config.parent_family,
        }
    }
}
