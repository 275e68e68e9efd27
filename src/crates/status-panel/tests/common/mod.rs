//! Common test utilities: a mock backend and a gated probe

#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use status_panel::{Probe, ProbeError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

pub const PROBE_PATH: &str = "/api/test/";

#[derive(Clone)]
struct BackendState {
    hits: Arc<AtomicUsize>,
    status: StatusCode,
    body: &'static str,
}

/// A local backend serving a fixed reply on the probe path
pub struct MockBackend {
    pub url: String,
    hits: Arc<AtomicUsize>,
    server: JoinHandle<()>,
}

impl MockBackend {
    /// Number of requests served on the probe path
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn probe_endpoint(State(state): State<BackendState>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// Start a mock backend on an ephemeral port
pub async fn spawn_backend(status: StatusCode, body: &'static str) -> MockBackend {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = BackendState {
        hits: Arc::clone(&hits),
        status,
        body,
    };

    let app = Router::new()
        .route(PROBE_PATH, get(probe_endpoint))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Failed to read local addr");

    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock backend failed");
    });

    MockBackend {
        url: format!("http://{}{}", addr, PROBE_PATH),
        hits,
        server,
    }
}

/// URL of a port nothing listens on
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{}{}", addr, PROBE_PATH)
}

/// Probe that blocks until released, counting calls
pub struct GatedProbe {
    gate: Semaphore,
    calls: AtomicUsize,
    reply: std::result::Result<String, ProbeError>,
}

impl GatedProbe {
    pub fn new(reply: std::result::Result<String, ProbeError>) -> Arc<Self> {
        Arc::new(Self {
            gate: Semaphore::new(0),
            calls: AtomicUsize::new(0),
            reply,
        })
    }

    /// Let one pending fetch complete
    pub fn release(&self) {
        self.gate.add_permits(1);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Probe for GatedProbe {
    async fn fetch(&self) -> std::result::Result<String, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| ProbeError::ProbeFailed(e.to_string()))?;
        permit.forget();
        self.reply.clone()
    }
}
