//! Owning collection of expense records.

use std::collections::BTreeSet;

use chrono::{NaiveDate, Utc};

use crate::domain::Expense;
use crate::errors::ValidationError;
use crate::storage::ExpenseStore;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Owns the canonical expense collection and rewrites the persistence
/// store after every mutation. Ordering of the collection is incidental;
/// presentation ordering lives in [`crate::views`].
pub struct ExpenseRepository<S: ExpenseStore> {
    store: S,
    expenses: Vec<Expense>,
    last_id: i64,
}

impl<S: ExpenseStore> ExpenseRepository<S> {
    /// Opens the repository, seeding the collection from the store.
    pub fn open(store: S) -> Self {
        let expenses = store.load();
        let last_id = expenses.iter().map(|e| e.id).max().unwrap_or(0);
        Self {
            store,
            expenses,
            last_id,
        }
    }

    /// Validates the raw form inputs and records a new expense. Rejected
    /// input leaves the collection and durable state unchanged.
    pub fn add(
        &mut self,
        name: &str,
        amount_text: &str,
        category: &str,
        date_text: &str,
    ) -> Result<Expense, ValidationError> {
        let name = name.trim();
        let amount_text = amount_text.trim();
        let category = category.trim();
        let date_text = date_text.trim();
        if name.is_empty() || amount_text.is_empty() || category.is_empty() || date_text.is_empty()
        {
            return Err(ValidationError::MissingField);
        }
        let amount: f64 = amount_text
            .parse()
            .map_err(|_| ValidationError::InvalidAmount)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidAmount);
        }
        let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate)?;

        let expense = Expense::new(self.next_id(), name, amount, category, date);
        self.expenses.push(expense.clone());
        self.persist();
        Ok(expense)
    }

    /// Removes the expense with the given id, reporting whether anything
    /// was removed. Confirmation prompts are the caller's concern.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|expense| expense.id != id);
        if self.expenses.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Read-only snapshot of the current collection, no order guarantee.
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    /// Distinct non-empty categories in lexical order.
    pub fn categories(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .expenses
            .iter()
            .map(|expense| expense.category.as_str())
            .filter(|category| !category.is_empty())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Ids derive from the creation timestamp in milliseconds; the
    /// monotonic bump keeps them unique when adds land in the same
    /// millisecond or when the clock trails an id loaded from disk.
    fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.expenses) {
            tracing::warn!("failed to persist expense collection: {err}");
        }
    }
}
