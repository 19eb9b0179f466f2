//! Application assembly: context construction, routing and serving.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{
    config::Config, controller, engine::ReactionEngine, ontology::service::OntologyService,
    Result,
};

/// Shared state injected into every controller.
#[derive(Clone)]
pub struct AppContext {
    /// Resolved application configuration.
    pub config: Arc<Config>,
    /// The three ontology adapters, constructed once at startup.
    pub ontology: OntologyService,
    /// Engine resolving intermediates over the adapters.
    pub engine: Arc<ReactionEngine>,
}

/// Builds the application context from configuration.
///
/// Adapters are constructed exactly once here; everything downstream
/// receives shared handles.
pub fn create_context(config: Config) -> Result<AppContext> {
    let ontology = OntologyService::from_config(&config.ontology)?;
    let engine = Arc::new(ReactionEngine::new(&ontology));
    Ok(AppContext {
        config: Arc::new(config),
        ontology,
        engine,
    })
}

/// Assembles the full router over the supplied context.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .merge(controller::chemicals::routes())
        .merge(controller::monitoring::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Serves the application until interrupted.
pub async fn serve(ctx: AppContext) -> Result<()> {
    let address = format!("{}:{}", ctx.config.server.host, ctx.config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "listening");
    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(err.msg = %error, err.detail = ?error, "shutdown_signal_unavailable");
    }
}
