//! Stub availability endpoint for integration tests.
//!
//! Serves canned replies on `POST /api/check-availability/` and records what it
//! received.

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::post,
};
use tokio::{net::TcpListener, task::JoinHandle};

/// What the stub answers with.
#[derive(Clone)]
pub enum StubReply {
    Json(StatusCode, serde_json::Value),
    Html(StatusCode, &'static str),
}

#[derive(Clone, Debug)]
pub struct Received {
    pub csrf_token: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct StubState {
    reply: StubReply,
    received: Arc<Mutex<Vec<Received>>>,
}

pub struct StubEndpoint {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Received>>>,
    handle: JoinHandle<()>,
}

impl StubEndpoint {
    pub async fn start(reply: StubReply) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            reply,
            received: received.clone(),
        };
        let app = Router::new()
            .route("/api/check-availability/", post(check_availability))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub endpoint");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub endpoint failed");
        });

        Self {
            addr,
            received,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for StubEndpoint {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn check_availability(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let csrf_token = headers
        .get("x-csrftoken")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state
        .received
        .lock()
        .unwrap()
        .push(Received { csrf_token, body });

    match state.reply {
        StubReply::Json(status, value) => (status, Json(value)).into_response(),
        StubReply::Html(status, html) => (status, Html(html)).into_response(),
    }
}

/// Base URL on which nothing is listening.
#[allow(dead_code)]
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}")
}
