//! Shared application fixtures for unit and integration tests.

use std::sync::Arc;

use crate::{
    app::AppContext,
    config::Config,
    engine::ReactionEngine,
    ontology::{
        service::OntologyService,
        test_support::{chemicals_graph, fixture_service, reactions_graph, UnmappedGraph},
    },
};

/// Builds an application context over the fixture graphs.
#[must_use]
pub fn get_app_context() -> AppContext {
    context_over(fixture_service())
}

/// Context whose functions adapter lacks cross-reference mapping support.
#[must_use]
pub fn unmapped_app_context() -> AppContext {
    context_over(OntologyService::new(
        Arc::new(UnmappedGraph),
        Arc::new(reactions_graph()),
        Arc::new(chemicals_graph()),
    ))
}

fn context_over(ontology: OntologyService) -> AppContext {
    let engine = Arc::new(ReactionEngine::new(&ontology));
    AppContext {
        config: Arc::new(Config::default()),
        ontology,
        engine,
    }
}
