//! Relationship vocabulary shared by the graph adapters.

use super::value_objects::Curie;

/// Subtype relation walked during descendant expansion.
pub const IS_A: &str = "rdfs:subClassOf";

/// Relates a reaction to a chemical entity it consumes or produces.
pub const HAS_PARTICIPANT: &str = "RO:0000057";

/// Namespace prefix of the reaction graph.
pub const REACTION_NAMESPACE: &str = "RHEA";

/// Returns the subtype relation as an identifier.
#[must_use]
pub fn is_a() -> Curie {
    Curie::new(IS_A)
}

/// Returns the participant relation as an identifier.
#[must_use]
pub fn has_participant() -> Curie {
    Curie::new(HAS_PARTICIPANT)
}
