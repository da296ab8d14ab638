//! HTTP surface: health check, the MCP endpoint and card previews.

use crate::dispatch::McpServer;
use axum::{
    body::{Body, Bytes},
    extract::{Path, Query, State},
    http::{header::CONTENT_TYPE, Response as HttpResponse, StatusCode},
    response::Response,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use useless_protocol::serialize_json;
use useless_widget::{CardRenderer, Theme};

pub const MCP_ENDPOINT: &str = "/mcp";
pub const SERVER_TITLE: &str = "Useless - Cross-Occupational Learning MCP Server";

/// Shared, read-only state behind every route.
pub struct AppState {
    pub server: McpServer,
    pub renderer: CardRenderer,
}

#[derive(Debug, Serialize)]
struct HealthReport {
    name: &'static str,
    version: &'static str,
    status: &'static str,
    cards: usize,
    endpoint: &'static str,
}

#[derive(Debug, Deserialize)]
struct PreviewQuery {
    theme: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route(MCP_ENDPOINT, post(mcp))
        .route("/cards/:id/preview", get(preview))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let report = HealthReport {
        name: SERVER_TITLE,
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        cards: state.server.catalog().len(),
        endpoint: MCP_ENDPOINT,
    };
    json_response(StatusCode::OK, &report)
}

/// Dispatch-level errors are still 200; only bodies that cannot be
/// processed at all get a 500.
async fn mcp(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Response, StatusCode> {
    match state.server.handle_body(&body) {
        Ok(reply) => json_response(StatusCode::OK, &reply),
        Err(err) => {
            log::error!("MCP request error: {err}");
            json_response(StatusCode::INTERNAL_SERVER_ERROR, &err.into_reply())
        }
    }
}

async fn preview(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<PreviewQuery>,
) -> Result<Response, StatusCode> {
    let Some(card) = state.server.catalog().by_id(&id) else {
        let body = serde_json::json!({ "error": format!("Unknown card: {id}") });
        return json_response(StatusCode::NOT_FOUND, &body);
    };

    let theme = query
        .theme
        .as_deref()
        .map(Theme::from_name)
        .unwrap_or_default();
    let html = state.renderer.render(card, theme).map_err(|err| {
        log::error!("Failed to render card {id}: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    HttpResponse::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Body::from(html))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, StatusCode> {
    let bytes = serialize_json(value)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .into_bytes();

    HttpResponse::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(bytes))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
