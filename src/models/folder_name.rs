use serde::{Deserialize, Serialize};

/// Normalization flags applied to candidate folder names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameOptions {
    /// Convert the name to lowercase
    pub lowercase: bool,
    /// Remove every space character from the name
    pub remove_spaces: bool,
}

impl NameOptions {
    pub fn new(lowercase: bool, remove_spaces: bool) -> Self {
        Self {
            lowercase,
            remove_spaces,
        }
    }

    /// Lowercase and space-free, the standard form for region-like names
    pub fn standard() -> Self {
        Self::new(true, true)
    }

    /// Normalize a raw name: trim, then lowercase, then remove spaces.
    ///
    /// Returns `None` when nothing is left, so callers never materialize
    /// an empty folder name.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let mut name = raw.trim().to_string();

        if self.lowercase {
            name = name.to_lowercase();
        }

        if self.remove_spaces {
            name = name.replace(' ', "");
        }

        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}
