pub mod expense;

pub use expense::Expense;
