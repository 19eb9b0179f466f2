//! Chains the three graph lookups answering which chemicals connect two
//! molecular functions.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::ontology::{
    entities::ChemicalEntity,
    service::{AdapterError, AdapterHandle, OntologyService},
    value_objects::Curie,
    vocabulary,
};

/// Pure-logic engine resolving molecular functions to the chemicals taking
/// part in the reactions they describe.
///
/// The engine holds shared read-only adapter handles and never mutates
/// them; every operation recomputes its result from the graphs alone, so
/// nothing is retained between calls.
#[derive(Clone)]
pub struct ReactionEngine {
    functions: Arc<AdapterHandle>,
    reactions: Arc<AdapterHandle>,
    chemicals: Arc<AdapterHandle>,
}

impl ReactionEngine {
    /// Creates an engine over the adapters bundled in `service`.
    #[must_use]
    pub fn new(service: &OntologyService) -> Self {
        Self {
            functions: service.functions(),
            reactions: service.reactions(),
            chemicals: service.chemicals(),
        }
    }

    /// Maps molecular functions to the reactions they describe.
    ///
    /// The input set is first expanded to all of its transitive subtypes
    /// (reflexively, so every input participates), then each member's
    /// cross-reference mappings into the reaction namespace are collected
    /// into a set. Fails with [`AdapterError::UnsupportedAdapter`] when the
    /// functions adapter cannot provide mappings; an empty input yields an
    /// empty set, not an error.
    pub async fn mfs_to_reactions(
        &self,
        functions: &BTreeSet<Curie>,
    ) -> Result<BTreeSet<Curie>, AdapterError> {
        let expanded = self
            .functions
            .descendants(functions, &vocabulary::is_a(), true)
            .await?;
        let mappings = self
            .functions
            .cross_reference_mappings(&expanded, vocabulary::REACTION_NAMESPACE)
            .await?;
        Ok(mappings.into_iter().map(|mapping| mapping.object).collect())
    }

    /// Collects every chemical participating in the supplied reactions.
    ///
    /// Reactions without participants, and identifiers unknown to the
    /// reaction graph, contribute nothing.
    pub async fn reactions_to_participants(
        &self,
        reactions: &BTreeSet<Curie>,
    ) -> Result<BTreeSet<Curie>, AdapterError> {
        let triples = self
            .reactions
            .relationship_triples(reactions, &vocabulary::has_participant())
            .await?;
        Ok(triples.into_iter().map(|triple| triple.object).collect())
    }

    /// Maps molecular functions straight to participant chemicals.
    pub async fn functions_to_chemicals(
        &self,
        functions: &BTreeSet<Curie>,
    ) -> Result<BTreeSet<Curie>, AdapterError> {
        let reactions = self.mfs_to_reactions(functions).await?;
        self.reactions_to_participants(&reactions).await
    }

    /// Computes the chemicals shared between the reactions reachable from
    /// `upstream` and from `downstream`, resolved to labelled entities.
    ///
    /// Both sides are resolved independently and intersected by identifier;
    /// each survivor costs one label lookup against the chemical store. The
    /// entities come back in identifier order, but callers must not rely on
    /// any particular ordering. Passing the same function twice degenerates
    /// to all chemicals reachable from it.
    pub async fn compute_intermediates(
        &self,
        upstream: &Curie,
        downstream: &Curie,
    ) -> Result<Vec<ChemicalEntity>, AdapterError> {
        let upstream_chemicals = self
            .functions_to_chemicals(&BTreeSet::from([upstream.clone()]))
            .await?;
        let downstream_chemicals = self
            .functions_to_chemicals(&BTreeSet::from([downstream.clone()]))
            .await?;

        let mut intermediates = Vec::new();
        for id in upstream_chemicals.intersection(&downstream_chemicals) {
            let label = self.chemicals.label(id).await?;
            intermediates.push(ChemicalEntity {
                id: id.clone(),
                label,
            });
        }
        Ok(intermediates)
    }
}
