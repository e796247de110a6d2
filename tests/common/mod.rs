#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;

use b12_submit::config::{self, Config};

/// A request as seen by the mock endpoint.
#[derive(Debug, Clone)]
pub struct Captured {
    pub content_type: Option<String>,
    pub signature: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    reply: String,
    delay: Duration,
    captured: Arc<Mutex<Vec<Captured>>>,
}

/// A running mock of the submission endpoint.
pub struct MockEndpoint {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl MockEndpoint {
    pub fn url(&self) -> String {
        format!("http://{}/apply/submission", self.addr)
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }
}

async fn receive(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    };

    state.captured.lock().unwrap().push(Captured {
        content_type: header("content-type"),
        signature: header("x-signature-256"),
        body: body.to_vec(),
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (state.status, state.reply.clone())
}

/// Spawn a mock endpoint that answers every POST with `status` and `reply`.
pub async fn spawn_endpoint(status: u16, reply: &str) -> MockEndpoint {
    spawn_endpoint_with_delay(status, reply, Duration::ZERO).await
}

pub async fn spawn_endpoint_with_delay(status: u16, reply: &str, delay: Duration) -> MockEndpoint {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status: StatusCode::from_u16(status).expect("valid status code"),
        reply: reply.to_string(),
        delay,
        captured: captured.clone(),
    };

    let app = Router::new()
        .route("/apply/submission", post(receive))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockEndpoint { addr, captured }
}

/// A resolved configuration pointed at `endpoint`.
pub fn test_config(endpoint: &str) -> Config {
    Config {
        email: "applicant@example.com".to_string(),
        name: config::APPLICANT_NAME.to_string(),
        resume_link: config::RESUME_LINK.to_string(),
        repository_link: "https://github.com/acme/app".to_string(),
        action_run_link: "https://github.com/acme/app/actions/runs/42".to_string(),
        endpoint: endpoint.to_string(),
        signing_secret: config::SIGNING_SECRET.to_string(),
        timeout: Duration::from_secs(5),
        log_level: "warn".to_string(),
    }
}

/// Resolve a `Config` from a fixed set of variables instead of the process environment.
pub fn resolve(vars: &[(&str, &str)]) -> Result<Config, config::ConfigError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| map.get(key).cloned())
}
