use std::collections::BTreeSet;

use async_trait::async_trait;

use super::value_objects::Curie;

/// A cross-reference mapping from a subject term to an equivalent identifier
/// in another namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mapping {
    /// Term the mapping originates from.
    pub subject: Curie,
    /// Mapped identifier in the target namespace.
    pub object: Curie,
}

/// A relationship assertion held by a graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationshipTriple {
    /// Term the assertion originates from.
    pub subject: Curie,
    /// Relation connecting subject and object.
    pub predicate: Curie,
    /// Target of the assertion.
    pub object: Curie,
}

/// Read capabilities the reaction engine requires from an ontology graph.
///
/// Adapters are read-only collaborators: no operation mutates the backing
/// store or retains results across calls, so a single instance can serve any
/// number of concurrent readers.
#[async_trait]
pub trait OntologyAdapter {
    /// Associated error type allowing infrastructure specific failures.
    type Error;

    /// Expands `roots` to all of their transitive subtypes under
    /// `predicate`.
    ///
    /// With `reflexive` set every root is part of the result, even when it
    /// has no subtypes at all.
    async fn descendants(
        &self,
        roots: &BTreeSet<Curie>,
        predicate: &Curie,
        reflexive: bool,
    ) -> Result<BTreeSet<Curie>, Self::Error>;

    /// Returns the cross-reference mappings of `subjects` into the namespace
    /// named by `target`.
    ///
    /// Implementors without mapping support must fail with their
    /// unsupported-adapter error. Subjects with no mappings contribute
    /// nothing.
    async fn cross_reference_mappings(
        &self,
        subjects: &BTreeSet<Curie>,
        target: &str,
    ) -> Result<Vec<Mapping>, Self::Error>;

    /// Returns all outgoing relationship triples of `subjects` under
    /// `predicate`.
    ///
    /// Subjects unknown to the graph contribute an empty relationship set,
    /// never an error.
    async fn relationship_triples(
        &self,
        subjects: &BTreeSet<Curie>,
        predicate: &Curie,
    ) -> Result<Vec<RelationshipTriple>, Self::Error>;

    /// Resolves the display label recorded for `id`.
    async fn label(&self, id: &Curie) -> Result<String, Self::Error>;
}
