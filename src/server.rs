// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP surface.
//!
//! | Route               | Response                                             |
//! |---------------------|------------------------------------------------------|
//! | `GET /search?q=...` | 200 JSON array of results, 400 `Bad request`         |
//! | `GET /health`       | 200 `{"status":"ready",...}`, 503 while not ready    |
//!
//! Every response carries `access-control-allow-origin: *`. The listener
//! comes up first; the index is built on a blocking task and queries get
//! 400 until it is ready.

use crate::build::build_from_files;
use crate::error::ServiceError;
use crate::search::{search_with, SearchOptions};
use crate::state::SearchService;
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{debug, error, info, Level};

/// Everything `serve` needs.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub catalog: PathBuf,
    pub synonyms: Option<PathBuf>,
    pub options: SearchOptions,
}

#[derive(Clone)]
struct AppState {
    service: SearchService,
    options: SearchOptions,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Every failed query looks the same to the client; the reason goes to the log.
struct BadRequest(ServiceError);

impl IntoResponse for BadRequest {
    fn into_response(self) -> Response {
        debug!(reason = %self.0, "rejected search request");
        (StatusCode::BAD_REQUEST, "Bad request").into_response()
    }
}

async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, BadRequest> {
    let query = params.q.unwrap_or_default();
    let index = state.service.index().map_err(BadRequest)?;
    let results = search_with(&index, &query, &state.options)
        .map_err(|err| BadRequest(err.into()))?;
    Ok(Json(results).into_response())
}

async fn health_handler(State(state): State<AppState>) -> Response {
    match state.service.index() {
        Ok(index) => Json(json!({
            "status": "ready",
            "breeds": index.len(),
        }))
        .into_response(),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": state.service.state_name() })),
        )
            .into_response(),
    }
}

/// The application router over an existing service handle.
pub fn router(service: SearchService, options: SearchOptions) -> Router {
    Router::new()
        .route("/search", get(search_handler))
        .route("/health", get(health_handler))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(AppState { service, options })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

/// Bind, start building the index in the background, and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let service = SearchService::new();
    let app = router(service.clone(), config.options);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "listening");

    let ServerConfig {
        catalog, synonyms, ..
    } = config;
    tokio::spawn(async move {
        let build = tokio::task::spawn_blocking(move || {
            build_from_files(&catalog, synonyms.as_deref())
        });
        match build.await {
            Ok(outcome) => service.install(outcome),
            Err(err) => service.mark_failed(format!("index build task failed: {err}")),
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}
