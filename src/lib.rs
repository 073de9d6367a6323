#![doc(test(attr(deny(warnings))))]

//! Expense Core provides the repository, persistence, and derived-view
//! primitives behind a single-page expense tracker. A presentation layer
//! records expenses through [`repository::ExpenseRepository`] and renders
//! the projections computed by [`views`].

pub mod config;
pub mod domain;
pub mod errors;
pub mod repository;
pub mod storage;
pub mod utils;
pub mod views;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
