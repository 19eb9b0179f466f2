use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    config::{GraphBackend, GraphSettings, OntologySettings},
    ontology::{
        adapters::{Mapping, OntologyAdapter, RelationshipTriple},
        entities::Term,
        value_objects::Curie,
        vocabulary,
    },
};

/// Type alias simplifying adapter trait object usage across the crate.
pub type AdapterHandle = dyn OntologyAdapter<Error = AdapterError> + Send + Sync + 'static;

/// Bundles the three graph adapters the reaction engine reads from.
///
/// Adapters are constructed once at process start and shared by reference
/// afterwards; the service itself holds no other state.
#[derive(Clone)]
pub struct OntologyService {
    functions: Arc<AdapterHandle>,
    reactions: Arc<AdapterHandle>,
    chemicals: Arc<AdapterHandle>,
}

impl std::fmt::Debug for OntologyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OntologyService").finish_non_exhaustive()
    }
}

impl OntologyService {
    /// Creates a new [`OntologyService`] from pre-built adapter handles.
    pub fn new(
        functions: Arc<AdapterHandle>,
        reactions: Arc<AdapterHandle>,
        chemicals: Arc<AdapterHandle>,
    ) -> Self {
        Self {
            functions,
            reactions,
            chemicals,
        }
    }

    /// Builds the three adapters from configuration settings.
    pub fn from_config(settings: &OntologySettings) -> Result<Self, AdapterError> {
        Ok(Self::new(
            build_adapter(&settings.functions)?,
            build_adapter(&settings.reactions)?,
            build_adapter(&settings.chemicals)?,
        ))
    }

    /// Returns a clone of the functional-annotation graph handle.
    pub fn functions(&self) -> Arc<AdapterHandle> {
        Arc::clone(&self.functions)
    }

    /// Returns a clone of the reaction graph handle.
    pub fn reactions(&self) -> Arc<AdapterHandle> {
        Arc::clone(&self.reactions)
    }

    /// Returns a clone of the chemical-label store handle.
    pub fn chemicals(&self) -> Arc<AdapterHandle> {
        Arc::clone(&self.chemicals)
    }
}

fn build_adapter(settings: &GraphSettings) -> Result<Arc<AdapterHandle>, AdapterError> {
    match settings.backend {
        GraphBackend::InMemory => {
            let graph = match &settings.seed {
                Some(path) => InMemoryGraph::load(path)?,
                None => InMemoryGraph::new(),
            };
            Ok(Arc::new(graph))
        }
    }
}

/// Errors raised by ontology adapters and their construction.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The backing store has no cross-reference mapping capability.
    #[error("adapter does not support cross-reference mappings")]
    UnsupportedAdapter,
    /// No display label is recorded for the identifier.
    #[error("no label recorded for `{id}`")]
    MissingLabel { id: Curie },
    /// Attempted to register a term with an existing identifier.
    #[error("term `{id}` already exists")]
    DuplicateTerm { id: Curie },
    /// Reading a configured seed file failed.
    #[error("failed to read ontology seed `{path}`: {source}")]
    SeedIo {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A configured seed file did not parse as a graph seed.
    #[error("malformed ontology seed `{path}`: {source}")]
    SeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// On-disk seed document: one entry per term.
#[derive(Debug, Deserialize)]
pub struct GraphSeed {
    /// Terms registered in the graph.
    pub terms: Vec<TermSeed>,
}

/// Seed entry describing a single term.
#[derive(Debug, Deserialize)]
pub struct TermSeed {
    /// Term identifier.
    pub id: Curie,
    /// Optional display label.
    #[serde(default)]
    pub label: Option<String>,
    /// `is-a` parents.
    #[serde(default)]
    pub parents: Vec<Curie>,
    /// Cross-reference mapping objects.
    #[serde(default)]
    pub mappings: Vec<Curie>,
    /// Outgoing relationship assertions.
    #[serde(default)]
    pub relationships: Vec<RelationshipSeed>,
}

/// Relationship assertion in a seed entry.
#[derive(Debug, Deserialize)]
pub struct RelationshipSeed {
    /// Relation connecting the enclosing term and `object`.
    pub predicate: Curie,
    /// Target identifier.
    pub object: Curie,
}

impl TermSeed {
    fn into_term(self) -> Term {
        let mut term = Term::new(self.id);
        if let Some(label) = self.label {
            term = term.with_label(label);
        }
        for parent in self.parents {
            term.add_parent(parent);
        }
        for object in self.mappings {
            term.add_mapping(object);
        }
        for relationship in self.relationships {
            term.add_relationship(relationship.predicate, relationship.object);
        }
        term
    }
}

/// Deterministically ordered in-memory graph backing a single ontology
/// domain.
///
/// Only the `is-a` hierarchy is indexed for traversal; descendant queries
/// with any other predicate expand nothing beyond the reflexive roots.
#[derive(Clone, Debug, Default)]
pub struct InMemoryGraph {
    terms: BTreeMap<Curie, Term>,
}

impl InMemoryGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a term, rejecting duplicate identifiers.
    pub fn add_term(&mut self, term: Term) -> Result<(), AdapterError> {
        let id = term.id().clone();
        if self.terms.contains_key(&id) {
            return Err(AdapterError::DuplicateTerm { id });
        }
        self.terms.insert(id, term);
        Ok(())
    }

    /// Loads a graph from a JSON seed file.
    pub fn load(path: &Path) -> Result<Self, AdapterError> {
        let raw = fs::read_to_string(path).map_err(|source| AdapterError::SeedIo {
            path: path.to_path_buf(),
            source,
        })?;
        let seed: GraphSeed =
            serde_json::from_str(&raw).map_err(|source| AdapterError::SeedParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_seed(seed)
    }

    /// Builds a graph from an already parsed seed document.
    pub fn from_seed(seed: GraphSeed) -> Result<Self, AdapterError> {
        let mut graph = Self::new();
        for term in seed.terms {
            graph.add_term(term.into_term())?;
        }
        Ok(graph)
    }

    /// Number of registered terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the graph holds no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[async_trait]
impl OntologyAdapter for InMemoryGraph {
    type Error = AdapterError;

    async fn descendants(
        &self,
        roots: &BTreeSet<Curie>,
        predicate: &Curie,
        reflexive: bool,
    ) -> Result<BTreeSet<Curie>, Self::Error> {
        let mut result = if reflexive {
            roots.clone()
        } else {
            BTreeSet::new()
        };
        if predicate.as_str() != vocabulary::IS_A {
            return Ok(result);
        }

        let mut visited = roots.clone();
        let mut queue: VecDeque<Curie> = roots.iter().cloned().collect();
        while let Some(current) = queue.pop_front() {
            for (id, term) in &self.terms {
                if term.parents().contains(&current) && visited.insert(id.clone()) {
                    result.insert(id.clone());
                    queue.push_back(id.clone());
                }
            }
        }
        Ok(result)
    }

    async fn cross_reference_mappings(
        &self,
        subjects: &BTreeSet<Curie>,
        target: &str,
    ) -> Result<Vec<Mapping>, Self::Error> {
        let mut mappings = Vec::new();
        for subject in subjects {
            let Some(term) = self.terms.get(subject) else {
                continue;
            };
            for object in term.mappings() {
                if object.prefix() == target {
                    mappings.push(Mapping {
                        subject: subject.clone(),
                        object: object.clone(),
                    });
                }
            }
        }
        Ok(mappings)
    }

    async fn relationship_triples(
        &self,
        subjects: &BTreeSet<Curie>,
        predicate: &Curie,
    ) -> Result<Vec<RelationshipTriple>, Self::Error> {
        let mut triples = Vec::new();
        for subject in subjects {
            let Some(term) = self.terms.get(subject) else {
                continue;
            };
            if let Some(objects) = term.relationships().get(predicate) {
                for object in objects {
                    triples.push(RelationshipTriple {
                        subject: subject.clone(),
                        predicate: predicate.clone(),
                        object: object.clone(),
                    });
                }
            }
        }
        Ok(triples)
    }

    async fn label(&self, id: &Curie) -> Result<String, Self::Error> {
        self.terms
            .get(id)
            .and_then(|term| term.label())
            .map(ToOwned::to_owned)
            .ok_or_else(|| AdapterError::MissingLabel { id: id.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::{AdapterError, GraphSeed, InMemoryGraph};
    use crate::ontology::adapters::OntologyAdapter;
    use crate::ontology::entities::Term;
    use crate::ontology::value_objects::Curie;
    use crate::ontology::vocabulary;
    use std::collections::BTreeSet;
    use std::path::Path;

    fn curie(text: &str) -> Curie {
        Curie::new(text)
    }

    fn set(ids: &[&str]) -> BTreeSet<Curie> {
        ids.iter().map(|id| curie(id)).collect()
    }

    fn hierarchy() -> InMemoryGraph {
        let mut graph = InMemoryGraph::new();
        let base = Term::new(curie("GO:0003824")).with_label("catalytic activity");
        let mut middle = Term::new(curie("GO:0019104"));
        middle.add_parent(curie("GO:0003824"));
        let mut leaf = Term::new(curie("GO:0033699"));
        leaf.add_parent(curie("GO:0019104"));
        leaf.add_mapping(curie("RHEA:52128"));
        leaf.add_mapping(curie("UNIPROT:P0"));
        graph.add_term(base).expect("base");
        graph.add_term(middle).expect("middle");
        graph.add_term(leaf).expect("leaf");
        graph
    }

    #[tokio::test]
    async fn descendants_are_transitive_and_reflexive() {
        let graph = hierarchy();
        let expanded = graph
            .descendants(&set(&["GO:0003824"]), &vocabulary::is_a(), true)
            .await
            .expect("expansion");
        assert_eq!(expanded, set(&["GO:0003824", "GO:0019104", "GO:0033699"]));
    }

    #[tokio::test]
    async fn non_reflexive_expansion_excludes_roots() {
        let graph = hierarchy();
        let expanded = graph
            .descendants(&set(&["GO:0019104"]), &vocabulary::is_a(), false)
            .await
            .expect("expansion");
        assert_eq!(expanded, set(&["GO:0033699"]));
    }

    #[tokio::test]
    async fn foreign_predicates_expand_nothing() {
        let graph = hierarchy();
        let expanded = graph
            .descendants(&set(&["GO:0003824"]), &curie("RO:0000057"), true)
            .await
            .expect("expansion");
        assert_eq!(expanded, set(&["GO:0003824"]));
    }

    #[tokio::test]
    async fn mappings_filter_by_target_namespace() {
        let graph = hierarchy();
        let mappings = graph
            .cross_reference_mappings(&set(&["GO:0033699", "GO:9999999"]), "RHEA")
            .await
            .expect("mappings");
        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings[0].subject, curie("GO:0033699"));
        assert_eq!(mappings[0].object, curie("RHEA:52128"));
    }

    #[tokio::test]
    async fn label_lookup_fails_for_unlabelled_terms() {
        let graph = hierarchy();
        assert_eq!(
            graph.label(&curie("GO:0003824")).await.expect("label"),
            "catalytic activity"
        );
        let err = graph
            .label(&curie("GO:0019104"))
            .await
            .expect_err("no label recorded");
        assert!(matches!(err, AdapterError::MissingLabel { id } if id == curie("GO:0019104")));
    }

    #[test]
    fn duplicate_terms_are_rejected() {
        let mut graph = InMemoryGraph::new();
        graph
            .add_term(Term::new(curie("GO:0003824")))
            .expect("first insert");
        let err = graph
            .add_term(Term::new(curie("GO:0003824")))
            .expect_err("duplicate");
        assert!(matches!(err, AdapterError::DuplicateTerm { id } if id == curie("GO:0003824")));
    }

    #[test]
    fn seeds_parse_into_graphs() {
        let seed: GraphSeed = serde_json::from_str(
            r#"{
                "terms": [
                    {
                        "id": "RHEA:23820",
                        "relationships": [
                            {"predicate": "RO:0000057", "object": "CHEBI:15377"}
                        ]
                    },
                    {"id": "CHEBI:15377", "label": "water"}
                ]
            }"#,
        )
        .expect("seed document");
        let graph = InMemoryGraph::from_seed(seed).expect("graph");
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn missing_seed_files_surface_the_path() {
        let err = InMemoryGraph::load(Path::new("/nonexistent/seed.json"))
            .expect_err("missing file");
        assert!(matches!(err, AdapterError::SeedIo { .. }));
    }
}
