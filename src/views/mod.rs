//! Pure derivations over collection snapshots. Nothing here mutates or
//! performs I/O; every function takes a snapshot and returns a view.

pub mod chart;
pub mod dates;

use std::collections::BTreeSet;

use crate::domain::Expense;

pub use chart::{format_amount, ChartData};

/// Active list filters. `category: None` is the "all categories" state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub category: Option<String>,
    pub search: String,
}

impl FilterCriteria {
    /// Resets both filters to the "show everything" state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drops a category selection that no longer exists in the collection,
    /// e.g. after the last record of that category was removed.
    pub fn normalized(mut self, categories: &[String]) -> Self {
        if let Some(selected) = &self.category {
            if !categories.iter().any(|category| category == selected) {
                self.category = None;
            }
        }
        self
    }
}

/// Aggregate figures for the summary panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub count: usize,
    pub total: f64,
}

/// Per-category aggregate feeding the breakdown panel and the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Applies the category and search filters, then orders the survivors by
/// date, most recent first. The category match is exact and
/// case-sensitive; the search term matches name or category
/// case-insensitively. The sort is stable, so equal-date records keep a
/// consistent relative order across calls.
pub fn filter_and_sort(records: &[Expense], criteria: &FilterCriteria) -> Vec<Expense> {
    let term = criteria.search.trim().to_lowercase();
    let mut visible: Vec<Expense> = records
        .iter()
        .filter(|expense| match &criteria.category {
            Some(category) => expense.category == *category,
            None => true,
        })
        .filter(|expense| {
            term.is_empty()
                || expense.name.to_lowercase().contains(&term)
                || expense.category.to_lowercase().contains(&term)
        })
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.date.cmp(&a.date));
    visible
}

/// Sum of all amounts. Callers pass the full collection: the headline
/// total stays collection-wide even while the visible list is filtered.
pub fn total(records: &[Expense]) -> f64 {
    records.iter().map(|expense| expense.amount).sum()
}

/// Record count and grand total in one pass over the snapshot.
pub fn totals(records: &[Expense]) -> Totals {
    Totals {
        count: records.len(),
        total: total(records),
    }
}

/// Groups amounts by category, largest spend first. Ties keep the order
/// the categories were first encountered in.
pub fn by_category(records: &[Expense]) -> Vec<CategoryTotal> {
    let mut groups: Vec<CategoryTotal> = Vec::new();
    for expense in records {
        match groups
            .iter_mut()
            .find(|group| group.category == expense.category)
        {
            Some(group) => group.total += expense.amount,
            None => groups.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
            }),
        }
    }
    groups.sort_by(|a, b| b.total.total_cmp(&a.total));
    groups
}

/// Distinct categories in lexical order, for filter dropdowns and input
/// suggestions.
pub fn category_labels(records: &[Expense]) -> Vec<String> {
    let set: BTreeSet<&str> = records
        .iter()
        .map(|expense| expense.category.as_str())
        .filter(|category| !category.is_empty())
        .collect();
    set.into_iter().map(str::to_string).collect()
}
