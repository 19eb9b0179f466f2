use axum::{
    extract::State,
    response::Response,
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::{
    app::AppContext,
    controller::format,
    ontology::{service::AdapterError, value_objects::Curie},
};

/// Raw form fields submitted from the query page.
#[derive(Debug, Deserialize)]
pub struct IntermediatesParams {
    pub upstream: String,
    pub downstream: String,
}

const QUERY_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Reaction intermediates</title>
</head>
<body>
<h2>Find intermediate chemicals between two molecular functions</h2>
<form id="query-form">
  <label>First molecular function
    <input name="upstream" placeholder="e.g. GO:0047918">
  </label>
  <label>Second molecular function
    <input name="downstream" placeholder="e.g. GO:0008446">
  </label>
  <button type="submit">Find chemicals</button>
</form>
<pre id="output"></pre>
<script>
document.getElementById('query-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const body = new URLSearchParams(new FormData(event.target));
  const response = await fetch('/chemicals', { method: 'POST', body });
  document.getElementById('output').textContent = await response.text();
});
</script>
</body>
</html>
"#;

/// Serves the two-field query form.
pub async fn index() -> Response {
    format::html(QUERY_PAGE)
}

/// Resolves the chemicals shared between the two submitted functions.
///
/// This is the only recovery point in the system: any fault raised by the
/// engine is rendered into the output pane as an `Error: ` message and never
/// propagates further.
pub async fn find(
    State(ctx): State<AppContext>,
    Form(params): Form<IntermediatesParams>,
) -> Response {
    let body = match intermediates_report(&ctx, &params).await {
        Ok(report) => report,
        Err(error) => {
            tracing::error!(err.msg = %error, err.detail = ?error, "intermediates_query_failed");
            format!("Error: {error}")
        }
    };
    format::text(body)
}

/// Runs the engine over the trimmed identifiers and renders one
/// `"{id}: {label}"` line per entity; an empty result renders as an empty
/// string.
async fn intermediates_report(
    ctx: &AppContext,
    params: &IntermediatesParams,
) -> Result<String, AdapterError> {
    let upstream = Curie::new(params.upstream.trim());
    let downstream = Curie::new(params.downstream.trim());
    let intermediates = ctx.engine.compute_intermediates(&upstream, &downstream).await?;
    let lines: Vec<String> = intermediates
        .iter()
        .map(|chemical| format!("{}: {}", chemical.id, chemical.label))
        .collect();
    Ok(lines.join("\n"))
}

/// Defines and returns the query routes.
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/", get(index))
        .route("/chemicals", post(find))
}
