use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex, RwLock};
use tower_http::cors::{Any, CorsLayer};
use thiserror::Error;
use anyhow::Context;
use anyhow::Error as AnyhowError;
use tracing::{info, warn};

use lib::config::{clamp_batch_or, coerce_depth_or, MAX_BATCH_SIZE};
use lib::engine::query;
use lib::session::PendingExpansions;
use models::Element;
use models::SearchFilter;
use models::{GraphError, GraphResult};

mod config;
pub use crate::config::{load_rest_api_config, RestApiConfig};

// Define the REST API error enum
#[derive(Debug, Error)]
pub enum RestApiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] AnyhowError),
}

// Implement IntoResponse for RestApiError to convert it into an HTTP response
impl IntoResponse for RestApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            RestApiError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("IO error: {}", e)),
            RestApiError::SerdeJson(e) => (StatusCode::BAD_REQUEST, format!("JSON error: {}", e)),
            RestApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            RestApiError::Graph(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Graph error: {}", e))
            }
            RestApiError::Config(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Configuration error: {}", msg))
            }
            RestApiError::Anyhow(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Internal error: {}", e))
            }
        };

        let body = Json(json!({
            "status": "error",
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

// Shared state for the Axum application
#[derive(Clone)]
pub struct AppState {
    // Element snapshot. Requests clone the inner Arc at call start, so
    // a concurrent replace never tears an in-flight traversal.
    snapshot: Arc<RwLock<Arc<Vec<Element>>>>,
    // Overflow cache for capped expansions; one logical session.
    pending: Arc<Mutex<PendingExpansions>>,
    default_depth: usize,
    batch_size: usize,
}

impl AppState {
    pub fn new(elements: Vec<Element>, default_depth: usize, batch_size: usize) -> Self {
        AppState {
            snapshot: Arc::new(RwLock::new(Arc::new(elements))),
            pending: Arc::new(Mutex::new(PendingExpansions::new())),
            default_depth,
            batch_size,
        }
    }

    async fn snapshot(&self) -> Arc<Vec<Element>> {
        self.snapshot.read().await.clone()
    }

    /// Replaces the snapshot and drops overflow queues referring to the
    /// old one. Returns the previous snapshot.
    async fn replace_snapshot(&self, elements: Vec<Element>) -> Arc<Vec<Element>> {
        let next = Arc::new(elements);
        let previous = {
            let mut guard = self.snapshot.write().await;
            std::mem::replace(&mut *guard, next)
        };
        self.pending.lock().await.clear();
        previous
    }

    fn effective_depth(&self, raw: Option<i64>) -> usize {
        coerce_depth_or(raw, self.default_depth)
    }

    fn effective_batch(&self, raw: Option<i64>) -> usize {
        clamp_batch_or(raw, self.batch_size)
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub filters: Vec<SearchFilter>,
    pub depth: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ExpandRequest {
    #[serde(rename = "nodeId")]
    pub node_id: String,
    pub depth: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ExpandMoreRequest {
    #[serde(rename = "nodeId")]
    pub node_id: String,
    pub max: Option<i64>,
}

// Handler for the /api/v1/graph/search endpoint
async fn search_handler(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<Vec<Element>>, RestApiError> {
    let depth = state.effective_depth(payload.depth);
    let cap = state.effective_batch(payload.max);
    let snapshot = state.snapshot().await;
    let result = query::search(&snapshot, &payload.filters, depth, cap);
    info!(
        filters = payload.filters.len(),
        depth,
        cap,
        returned = result.len(),
        "graph search"
    );
    Ok(Json(result))
}

// Handler for the /api/v1/graph/expand endpoint
async fn expand_handler(
    State(state): State<AppState>,
    Json(payload): Json<ExpandRequest>,
) -> Result<Json<Vec<Element>>, RestApiError> {
    let depth = state.effective_depth(payload.depth);
    let batch = state.effective_batch(payload.max);
    let snapshot = state.snapshot().await;
    // Full neighborhood first; the session cache enforces the delivery
    // batch and queues the remainder under the expanded node.
    let full = query::expand(&snapshot, &payload.node_id, depth, 0);
    let delivered = state
        .pending
        .lock()
        .await
        .split_batch(&payload.node_id, full, batch);
    info!(
        node_id = %payload.node_id,
        depth,
        batch,
        returned = delivered.len(),
        "graph expand"
    );
    Ok(Json(delivered))
}

// Handler for the /api/v1/graph/expand/more endpoint
async fn expand_more_handler(
    State(state): State<AppState>,
    Json(payload): Json<ExpandMoreRequest>,
) -> Result<Json<Vec<Element>>, RestApiError> {
    let batch = state.effective_batch(payload.max);
    let delivered = state
        .pending
        .lock()
        .await
        .take_more(&payload.node_id, batch);
    Ok(Json(delivered))
}

// Handler for the /api/v1/graph/elements endpoint (snapshot refresh)
async fn replace_elements_handler(
    State(state): State<AppState>,
    Json(payload): Json<Vec<Element>>,
) -> Result<Json<Value>, RestApiError> {
    let (nodes, edges) = count_kinds(&payload);
    let previous = state.replace_snapshot(payload).await;
    info!(nodes, edges, replaced = previous.len(), "element snapshot replaced");
    Ok(Json(json!({
        "status": "success",
        "nodes": nodes,
        "edges": edges,
    })))
}

// Handler for the /api/v1/graph/status endpoint
async fn graph_status_handler(State(state): State<AppState>) -> Result<Json<Value>, RestApiError> {
    let snapshot = state.snapshot().await;
    let (nodes, edges) = count_kinds(&snapshot);
    Ok(Json(json!({
        "status": "success",
        "nodes": nodes,
        "edges": edges,
    })))
}

async fn health_check_handler() -> Json<Value> {
    Json(json!({
        "message": "Graph query REST API is healthy",
        "status": "ok",
    }))
}

fn count_kinds(elements: &[Element]) -> (usize, usize) {
    let nodes = elements.iter().filter(|e| e.is_node()).count();
    (nodes, elements.len() - nodes)
}

/// Reads the startup element snapshot. A missing file is tolerated and
/// yields an empty graph; a present but unparsable file is fatal.
pub fn load_elements(path: &Path) -> GraphResult<Vec<Element>> {
    if !path.exists() {
        warn!(path = %path.display(), "data file not found; starting with an empty snapshot");
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)?;
    let elements: Vec<Element> = serde_json::from_str(&content).map_err(|e| {
        GraphError::InvalidData(format!("Failed to parse data file {}: {}", path.display(), e))
    })?;
    Ok(elements)
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/api/v1/health", get(health_check_handler))
        .route("/api/v1/graph/status", get(graph_status_handler))
        .route("/api/v1/graph/search", post(search_handler))
        .route("/api/v1/graph/expand", post(expand_handler))
        .route("/api/v1/graph/expand/more", post(expand_more_handler))
        .route("/api/v1/graph/elements", post(replace_elements_handler))
        .with_state(state)
        .layer(cors)
}

// Main function to start the REST API server
pub async fn start_server(
    config: RestApiConfig,
    shutdown_rx: oneshot::Receiver<()>,
) -> Result<(), AnyhowError> {
    let elements = load_elements(&config.data_file)?;
    let (nodes, edges) = count_kinds(&elements);
    info!(nodes, edges, "loaded element snapshot");

    let state = AppState::new(elements, config.default_depth, config.batch_size);
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.host, config.port))?;
    info!(%addr, "REST API server listening");

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to address: {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
            info!("Received shutdown signal.");
        })
        .await
        .context("REST API server failed to start or run")?;

    info!("REST API server stopped.");
    Ok(())
}
