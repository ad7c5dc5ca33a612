use crate::error::PipelineError;
use crate::observability::metrics::render as render_metrics;
use crate::pipeline::{PipelineRun, RubeGoldbergPipeline};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use hyper::Server;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<RubeGoldbergPipeline>,
}

#[derive(Debug, Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub success: bool,
    pub results: PipelineRun,
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        match self {
            PipelineError::EmptyInput => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": PipelineError::EmptyInput.to_string() })),
            )
                .into_response(),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "success": false, "error": other.to_string() })),
            )
                .into_response(),
        }
    }
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "rube-goldberg",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn prometheus_metrics() -> impl IntoResponse {
    render_metrics()
}

/// `POST /api/rube-goldberg` with `{"text": "..."}`.
async fn rube_goldberg(
    State(state): State<AppState>,
    payload: Result<Json<RunRequest>, JsonRejection>,
) -> Result<Json<RunResponse>, PipelineError> {
    let text = match payload {
        Ok(Json(RunRequest { text: Some(text) })) => text,
        Ok(_) => return Err(PipelineError::EmptyInput),
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection);
            return Err(PipelineError::EmptyInput);
        }
    };

    match state.pipeline.run(&text).await {
        Ok(results) => Ok(Json(RunResponse { success: true, results })),
        Err(e) => {
            if !matches!(e, PipelineError::EmptyInput) {
                error!("Pipeline run failed: {}", e);
            }
            Err(e)
        }
    }
}

/// Create the HTTP router with all routes
pub fn create_server(pipeline: Arc<RubeGoldbergPipeline>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        .route("/api/rube-goldberg", post(rube_goldberg))
        .with_state(AppState { pipeline })
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the given address
pub async fn start_server(
    pipeline: Arc<RubeGoldbergPipeline>,
    addr: SocketAddr,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_server(pipeline);

    info!("HTTP server running on http://{addr}");
    info!("Pipeline endpoint: POST http://{addr}/api/rube-goldberg");

    Server::bind(&addr).serve(app.into_make_service()).await?;

    Ok(())
}
