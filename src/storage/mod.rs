pub mod json_backend;
pub mod memory;

use crate::domain::Expense;
use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over persistence backends holding the expense collection.
///
/// Reads are permissive by contract: missing or unreadable state is
/// reported as an empty collection, never as an error. Writes replace the
/// durable state wholesale, last write wins.
pub trait ExpenseStore: Send + Sync {
    fn load(&self) -> Vec<Expense>;
    fn save(&self, expenses: &[Expense]) -> Result<()>;
}

pub use json_backend::JsonStore;
pub use memory::MemoryStore;
