use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration of folder categories, one root directory each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Folders named after consecutive integers (e.g. years)
    Range,
    /// Folders named from a literal list
    Named,
    /// Folders named `prefix + label`
    Prefixed,
    /// Folders created one after another with a pause in between
    Timed,
    /// Folders named from a list after normalization
    Standardized,
}

impl Category {
    /// Returns the default root directory name for this category
    pub fn default_dir_name(&self) -> &'static str {
        match self {
            Category::Range => "years",
            Category::Named => "names",
            Category::Prefixed => "prefixes",
            Category::Timed => "timed",
            Category::Standardized => "standardized",
        }
    }

    /// Returns all categories in orchestration order
    pub fn all() -> &'static [Category] {
        &[
            Category::Range,
            Category::Named,
            Category::Prefixed,
            Category::Timed,
            Category::Standardized,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Range => write!(f, "range"),
            Category::Named => write!(f, "named"),
            Category::Prefixed => write!(f, "prefixed"),
            Category::Timed => write!(f, "timed"),
            Category::Standardized => write!(f, "standardized"),
        }
    }
}
