//! HTTP server for the dashboard
//!
//! Serves the page at `/`, a `/health` check, read-only JSON views of the
//! data under `/api`, and the selector callback endpoint.

use crate::callbacks::CallbackRegistry;
use crate::error::{AppError, Result};
use crate::figure::{build_figure, Figure};
use crate::page::render_page;
use crate::types::{CallbackRequest, CallbackResponse, HealthResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use worldcup_finals::{country_wins, finals, win_counts, CountryWins, MatchRecord};

/// Shared state for the HTTP server. Everything here is immutable once built.
pub struct ServerState {
    pub page: String,
    pub figure: Figure,
    pub callbacks: CallbackRegistry,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    /// Aggregate the data, render the figure and page, and bind the callbacks
    pub fn new() -> Result<Self> {
        let figure = build_figure(&country_wins());
        let page = render_page(&figure)?;

        Ok(Self {
            page,
            figure,
            callbacks: CallbackRegistry::dashboard(),
            started_at: Utc::now(),
        })
    }
}

pub type SharedState = Arc<ServerState>;

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/finals", get(get_finals))
        .route("/api/wins", get(get_wins))
        .route("/api/figure", get(get_figure))
        .route("/api/callback", post(callback))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server, returning once Ctrl-C is received
pub async fn start_server(state: SharedState, addr: SocketAddr) -> std::io::Result<()> {
    let router = create_router(state);
    info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

/// Dashboard page
async fn index(State(state): State<SharedState>) -> Html<String> {
    Html(state.page.clone())
}

/// Health check endpoint
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs: uptime_secs(state.started_at, Utc::now()),
        finals: finals().len(),
        countries: win_counts().len(),
    })
}

/// Whole seconds between `started_at` and `now`, zero if the clock stepped back
fn uptime_secs(started_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    (now - started_at).num_seconds().max(0) as u64
}

/// All finals in year order
async fn get_finals() -> Json<&'static [MatchRecord]> {
    Json(finals())
}

/// Win counts joined with territory codes
async fn get_wins() -> Json<Vec<CountryWins>> {
    Json(country_wins())
}

/// Choropleth figure
async fn get_figure(State(state): State<SharedState>) -> Json<Figure> {
    Json(state.figure.clone())
}

/// Dispatch a selector change to its bound handler
async fn callback(
    State(state): State<SharedState>,
    request: std::result::Result<Json<CallbackRequest>, JsonRejection>,
) -> std::result::Result<Json<CallbackResponse>, AppError> {
    let Json(request) = request?;
    let response = state.callbacks.dispatch(&request.input, &request.value)?;
    Ok(Json(response))
}
