//! Test utilities for civic-core
//!
//! Provides a mock data-source server so `HttpSource` can be exercised
//! without a real external feed.
//!
//! Routes:
//! - `GET /municipal`, `GET /outlook` - the built-in samples
//! - `GET /down/municipal`, `GET /down/outlook` - 503
//! - `GET /partial/outlook` - a record with missing fields

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use std::net::SocketAddr;
use tokio::sync::oneshot;

use crate::datasets::{municipal_sample, outlook_sample};

/// Mock data-source server for tests
pub struct MockDataServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDataServer {
    /// Start the mock server on an available port
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/municipal", get(|| async { Json(municipal_sample()) }))
            .route("/outlook", get(|| async { Json(outlook_sample()) }))
            .route("/down/municipal", get(unavailable))
            .route("/down/outlook", get(unavailable))
            .route("/partial/outlook", get(partial_outlook));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Base URL serving valid samples
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Base URL whose endpoints answer 503
    pub fn down_url(&self) -> String {
        format!("http://{}/down", self.addr)
    }

    /// Base URL whose outlook endpoint returns incomplete rows
    pub fn partial_url(&self) -> String {
        format!("http://{}/partial", self.addr)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDataServer {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn unavailable() -> impl IntoResponse {
    (StatusCode::SERVICE_UNAVAILABLE, "feed offline")
}

async fn partial_outlook() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "records": [
            { "year": 2021, "carbon_emissions_tons": 118000.0, "renewable_energy_pct": 34.0 }
        ]
    }))
}
