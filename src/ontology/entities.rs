use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::value_objects::Curie;

/// A node in one of the ontology graphs.
///
/// A term carries an optional display label, its `is-a` parents,
/// cross-reference mappings into other namespaces and outgoing relationship
/// assertions grouped by predicate. Collections are ordered so traversals
/// stay deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Term {
    id: Curie,
    label: Option<String>,
    parents: BTreeSet<Curie>,
    mappings: BTreeSet<Curie>,
    relationships: BTreeMap<Curie, BTreeSet<Curie>>,
}

impl Term {
    /// Creates a new [`Term`] with the supplied identifier.
    #[must_use]
    pub fn new(id: Curie) -> Self {
        Self {
            id,
            label: None,
            parents: BTreeSet::new(),
            mappings: BTreeSet::new(),
            relationships: BTreeMap::new(),
        }
    }

    /// Sets a human friendly label for the term.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Adds a new `is-a` parent relation.
    pub fn add_parent(&mut self, parent: Curie) -> bool {
        self.parents.insert(parent)
    }

    /// Registers a cross-reference mapping into another namespace.
    pub fn add_mapping(&mut self, object: Curie) -> bool {
        self.mappings.insert(object)
    }

    /// Asserts an outgoing relationship to `object` under `predicate`.
    pub fn add_relationship(&mut self, predicate: Curie, object: Curie) -> bool {
        self.relationships.entry(predicate).or_default().insert(object)
    }

    /// Returns the unique identifier of the term.
    #[must_use]
    pub fn id(&self) -> &Curie {
        &self.id
    }

    /// Returns the optional label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the parent terms in lexical order.
    #[must_use]
    pub fn parents(&self) -> &BTreeSet<Curie> {
        &self.parents
    }

    /// Returns the mapped identifiers in lexical order.
    #[must_use]
    pub fn mappings(&self) -> &BTreeSet<Curie> {
        &self.mappings
    }

    /// Returns the relationship assertions grouped by predicate.
    #[must_use]
    pub fn relationships(&self) -> &BTreeMap<Curie, BTreeSet<Curie>> {
        &self.relationships
    }
}

/// A labelled chemical entity.
///
/// Constructed only while formatting a query response; it lives for the
/// duration of a single call and is never stored.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ChemicalEntity {
    /// Identifier of the chemical in the label store.
    pub id: Curie,
    /// Display label resolved from the label store.
    pub label: String,
}
