//! Fixture graphs and doubles shared by unit and integration tests.
//!
//! The fixture dataset mirrors `data/demo/*.json`: a small GO-style
//! hierarchy of molecular functions mapped into RHEA reactions, the
//! reactions' participant assertions and the CHEBI label store.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;

use super::{
    adapters::{Mapping, OntologyAdapter, RelationshipTriple},
    entities::Term,
    service::{AdapterError, InMemoryGraph, OntologyService},
    value_objects::Curie,
    vocabulary,
};

/// Shorthand used throughout the tests.
#[must_use]
pub fn curie(text: &str) -> Curie {
    Curie::new(text)
}

fn add(graph: &mut InMemoryGraph, term: Term) {
    graph.add_term(term).expect("fixture term ids are unique");
}

/// Functional-annotation fixture graph: a subtype hierarchy with
/// cross-reference mappings into the reaction namespace.
#[must_use]
pub fn functions_graph() -> InMemoryGraph {
    let mut graph = InMemoryGraph::new();

    add(
        &mut graph,
        Term::new(curie("GO:0003824")).with_label("catalytic activity"),
    );

    let mut epimerases = Term::new(curie("GO:0016857"))
        .with_label("racemase and epimerase activity, acting on carbohydrates and derivatives");
    epimerases.add_parent(curie("GO:0003824"));
    add(&mut graph, epimerases);

    let mut gme = Term::new(curie("GO:0047918")).with_label("GDP-mannose 3,5-epimerase activity");
    gme.add_parent(curie("GO:0016857"));
    gme.add_mapping(curie("RHEA:18961"));
    add(&mut graph, gme);

    let mut hydro_lyases = Term::new(curie("GO:0016836")).with_label("hydro-lyase activity");
    hydro_lyases.add_parent(curie("GO:0003824"));
    add(&mut graph, hydro_lyases);

    let mut gmd =
        Term::new(curie("GO:0008446")).with_label("GDP-mannose 4,6-dehydratase activity");
    gmd.add_parent(curie("GO:0016836"));
    gmd.add_mapping(curie("RHEA:23820"));
    add(&mut graph, gmd);

    let mut glycosylases = Term::new(curie("GO:0019104")).with_label("DNA N-glycosylase activity");
    glycosylases.add_parent(curie("GO:0003824"));
    add(&mut graph, glycosylases);

    let mut dme =
        Term::new(curie("GO:0033699")).with_label("DNA 5-methylcytosine glycosylase activity");
    dme.add_parent(curie("GO:0019104"));
    dme.add_mapping(curie("RHEA:52128"));
    dme.add_mapping(curie("RHEA:52132"));
    add(&mut graph, dme);

    graph
}

/// Reaction fixture graph with `has-participant` assertions.
#[must_use]
pub fn reactions_graph() -> InMemoryGraph {
    let mut graph = InMemoryGraph::new();
    let participant_lists: &[(&str, &[&str])] = &[
        ("RHEA:23820", &["CHEBI:15377", "CHEBI:57527", "CHEBI:57964"]),
        ("RHEA:18961", &["CHEBI:57527", "CHEBI:57544"]),
        ("RHEA:52128", &["CHEBI:58326", "CHEBI:16991"]),
        ("RHEA:52132", &["CHEBI:58326", "CHEBI:137415"]),
    ];
    for (reaction, participants) in participant_lists {
        let mut term = Term::new(curie(reaction));
        for participant in *participants {
            term.add_relationship(vocabulary::has_participant(), curie(participant));
        }
        add(&mut graph, term);
    }
    graph
}

/// Chemical-label store fixture.
#[must_use]
pub fn chemicals_graph() -> InMemoryGraph {
    let mut graph = InMemoryGraph::new();
    let labels = [
        ("CHEBI:15377", "water"),
        ("CHEBI:57527", "GDP-alpha-D-mannose(2-)"),
        ("CHEBI:57964", "GDP-4-dehydro-6-deoxy-alpha-D-mannose(2-)"),
        ("CHEBI:57544", "GDP-beta-L-galactose(2-)"),
        ("CHEBI:16991", "double-stranded DNA"),
        ("CHEBI:58326", "DNA 5-methylcytosine"),
        ("CHEBI:137415", "abasic DNA"),
    ];
    for (id, label) in labels {
        add(&mut graph, Term::new(curie(id)).with_label(label));
    }
    graph
}

/// Service bundling the three fixture graphs.
#[must_use]
pub fn fixture_service() -> OntologyService {
    OntologyService::new(
        Arc::new(functions_graph()),
        Arc::new(reactions_graph()),
        Arc::new(chemicals_graph()),
    )
}

/// Adapter double without cross-reference mapping support.
///
/// Descendant expansion behaves reflexively with no edges, unknown subjects
/// yield empty relationship sets and no labels are recorded.
#[derive(Debug, Default)]
pub struct UnmappedGraph;

#[async_trait]
impl OntologyAdapter for UnmappedGraph {
    type Error = AdapterError;

    async fn descendants(
        &self,
        roots: &BTreeSet<Curie>,
        _predicate: &Curie,
        reflexive: bool,
    ) -> Result<BTreeSet<Curie>, Self::Error> {
        Ok(if reflexive {
            roots.clone()
        } else {
            BTreeSet::new()
        })
    }

    async fn cross_reference_mappings(
        &self,
        _subjects: &BTreeSet<Curie>,
        _target: &str,
    ) -> Result<Vec<Mapping>, Self::Error> {
        Err(AdapterError::UnsupportedAdapter)
    }

    async fn relationship_triples(
        &self,
        _subjects: &BTreeSet<Curie>,
        _predicate: &Curie,
    ) -> Result<Vec<RelationshipTriple>, Self::Error> {
        Ok(Vec::new())
    }

    async fn label(&self, id: &Curie) -> Result<String, Self::Error> {
        Err(AdapterError::MissingLabel { id: id.clone() })
    }
}
