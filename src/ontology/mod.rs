//! Core ontology domain primitives and contracts.
//!
//! The module defines the identifier value object, the graph-node entity and
//! the adapter trait describing the read capabilities the reaction engine
//! depends on, independently from any concrete store. Only
//! [`service`] knows about configuration and seed files.

pub mod adapters;
pub mod entities;
pub mod service;
#[cfg(any(test, feature = "testing"))]
pub mod test_support;
pub mod value_objects;
pub mod vocabulary;

pub use adapters::{Mapping, OntologyAdapter, RelationshipTriple};
pub use entities::{ChemicalEntity, Term};
pub use service::{AdapterError, AdapterHandle, InMemoryGraph, OntologyService};
pub use value_objects::Curie;
