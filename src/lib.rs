//! Lookup service answering which chemical entities act as shared
//! intermediates between two molecular-function annotations, as mediated by
//! catalyzed reactions.
//!
//! The crate keeps a hexagonal layout: [`ontology`] holds the pure domain
//! constructs and the adapter contract, [`engine`] chains the graph lookups,
//! and [`controller`]/[`app`] expose the HTTP form surface over them.

pub mod app;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod logger;
pub mod ontology;
#[cfg(any(test, feature = "testing"))]
pub mod tests_cfg;

pub use error::Error;

/// Convenience result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
