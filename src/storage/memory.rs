use std::sync::Mutex;

use crate::domain::Expense;

use super::{ExpenseStore, Result};

/// In-memory store for tests and embedders that manage durability
/// themselves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    expenses: Mutex<Vec<Expense>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            expenses: Mutex::new(expenses),
        }
    }
}

impl ExpenseStore for MemoryStore {
    fn load(&self) -> Vec<Expense> {
        self.expenses
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        if let Ok(mut guard) = self.expenses.lock() {
            *guard = expenses.to_vec();
        }
        Ok(())
    }
}
