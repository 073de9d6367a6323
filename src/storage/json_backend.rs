use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::Expense;
use crate::utils::paths;

use super::{ExpenseStore, Result};

/// File-backed store persisting the whole collection as one JSON array.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted at the default data directory.
    pub fn new_default() -> Self {
        Self::new(paths::expenses_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExpenseStore for JsonStore {
    fn load(&self) -> Vec<Expense> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&data) {
            Ok(expenses) => expenses,
            Err(err) => {
                tracing::warn!(
                    "discarding unreadable expense data in `{}`: {err}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        let json = serde_json::to_string_pretty(expenses)?;
        paths::write_atomic(&self.path, &json)?;
        Ok(())
    }
}
