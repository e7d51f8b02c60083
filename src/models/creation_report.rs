use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::category::Category;

/// Outcome of a single folder-creation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationReport {
    /// Category the run wrote into
    pub category: Category,
    /// Root directory of the category
    pub root: PathBuf,
    /// Folders ensured by the run, in creation order
    pub created: Vec<PathBuf>,
    /// Raw inputs dropped because they normalized to an empty name
    pub skipped: Vec<String>,
}

impl CreationReport {
    pub fn new(category: Category, root: PathBuf) -> Self {
        Self {
            category,
            root,
            created: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn record_created(&mut self, path: PathBuf) {
        self.created.push(path);
    }

    pub fn record_skipped(&mut self, raw: impl Into<String>) {
        self.skipped.push(raw.into());
    }

    /// Folder names relative to the root, in creation order
    pub fn folder_names(&self) -> Vec<String> {
        self.created
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }

    pub fn created_count(&self) -> usize {
        self.created.len()
    }
}
