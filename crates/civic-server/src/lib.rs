//! Civic Web Server
//!
//! Axum server for the Civic dashboards.
//!
//! - `GET /` and `GET /outlook` render the two dashboards as HTML
//! - `/api/*` exposes the same data (and ad hoc classification) as JSON
//!
//! Every request re-fetches from the configured data source and re-runs the
//! insight rules; nothing is cached between requests.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

use civic_core::{DashboardConfig, DataSource, InsightEngine};

mod handlers;
pub mod render;

/// Default port when neither a flag nor `PORT` is given
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Maximum number of rows accepted by the classify endpoints
pub const MAX_CLASSIFY_ROWS: usize = 1000;

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
pub struct AppState {
    pub source: Arc<dyn DataSource>,
    pub engine: InsightEngine,
    pub dashboard: DashboardConfig,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub source: &'static str,
}

/// Create the application router
pub fn create_router(
    source: Arc<dyn DataSource>,
    dashboard: DashboardConfig,
    config: ServerConfig,
) -> Router {
    let state = Arc::new(AppState {
        engine: dashboard.engine(),
        source,
        dashboard,
    });

    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/municipal", get(handlers::get_municipal))
        .route("/outlook", get(handlers::get_outlook))
        .route(
            "/insights/sustainability",
            post(handlers::classify_sustainability),
        )
        .route("/insights/outlook", post(handlers::classify_outlook));

    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    // Pages carry their own <style> block and inline SVG, no scripts
    let csp_value = HeaderValue::from_static(
        "default-src 'self'; script-src 'none'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; frame-ancestors 'none'",
    );

    Router::new()
        .route("/", get(handlers::municipal_page))
        .route("/outlook", get(handlers::outlook_page))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            csp_value,
        ))
}

/// Start the server with default server options
pub async fn serve(
    source: Arc<dyn DataSource>,
    dashboard: DashboardConfig,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    serve_with_config(source, dashboard, host, port, ServerConfig::default()).await
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    source: Arc<dyn DataSource>,
    dashboard: DashboardConfig,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    info!(source = source.name(), "Using data source");

    let app = create_router(source, dashboard, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    /// The data source failed; the detail is logged, not returned
    pub fn upstream(err: civic_core::Error) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: "Data source unavailable".to_string(),
            internal: Some(err.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(&format!("Invalid input: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<civic_core::Error> for AppError {
    fn from(err: civic_core::Error) -> Self {
        match err {
            civic_core::Error::InvalidData(msg) => Self::bad_request(&format!("Invalid input: {}", msg)),
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                // Return generic message to client
                message: "An internal error occurred".to_string(),
                // Keep full error for logging
                internal: Some(other.into()),
            },
        }
    }
}
