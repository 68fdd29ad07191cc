//! In-process mock backend for tests
//!
//! A small axum app bound to an ephemeral port that records every request
//! and answers the dashboard endpoints from configurable state.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// How `GET /dashboard/data` should answer
#[derive(Debug, Clone)]
pub enum SnapshotReply {
    Json(Value),
    Status(u16),
    /// 200 with a body that is not JSON
    Garbage,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub user_agent: Option<String>,
    pub body: Option<Value>,
}

pub struct BackendState {
    expected_token: String,
    snapshot: Mutex<SnapshotReply>,
    mutation_status: Mutex<u16>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl BackendState {
    pub fn new(expected_token: &str) -> Self {
        Self {
            expected_token: expected_token.to_string(),
            snapshot: Mutex::new(SnapshotReply::Json(json!({
                "balance": 0,
                "transactions": [],
                "categories": []
            }))),
            mutation_status: Mutex::new(200),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn set_snapshot(&self, reply: SnapshotReply) {
        *self.snapshot.lock().unwrap() = reply;
    }

    pub fn set_mutation_status(&self, status: u16) {
        *self.mutation_status.lock().unwrap() = status;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

/// Serve the mock backend and return its base URL
pub async fn spawn_backend(state: Arc<BackendState>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let router = Router::new().fallback(handle).with_state(state);
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn handle(
    State(state): State<Arc<BackendState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    };

    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        user_agent: header_value(header::USER_AGENT),
        body: serde_json::from_slice(&body).ok(),
    };
    state.requests.lock().unwrap().push(recorded.clone());

    match recorded.path.as_str() {
        "/auth/login" => return login(recorded.body.as_ref()),
        "/auth/register" => return register(recorded.body.as_ref()),
        _ => {}
    }

    let expected = format!("Bearer {}", state.expected_token);
    if recorded.authorization.as_deref() != Some(expected.as_str()) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "unauthorized"}))).into_response();
    }

    match (method, recorded.path.as_str()) {
        (Method::GET, "/dashboard/data") => {
            let reply = state.snapshot.lock().unwrap().clone();
            match reply {
                SnapshotReply::Json(value) => Json(value).into_response(),
                SnapshotReply::Status(code) => status_reply(code),
                SnapshotReply::Garbage => (StatusCode::OK, "<html>oops</html>").into_response(),
            }
        }
        (Method::GET, "/dashboard/stats_data") => Json(json!({
            "labels": ["Food"],
            "income": [0.0],
            "expense": [30.0]
        }))
        .into_response(),
        (Method::GET, "/dashboard/profile") => Json(json!({
            "id": 1,
            "username": "testuser",
            "email": "test@example.com"
        }))
        .into_response(),
        (Method::POST, "/dashboard/add_transaction")
        | (Method::POST, "/dashboard/add_category") => {
            status_reply(*state.mutation_status.lock().unwrap())
        }
        (Method::DELETE, path)
            if path.starts_with("/dashboard/delete_transaction/")
                || path.starts_with("/dashboard/delete_category/") =>
        {
            status_reply(*state.mutation_status.lock().unwrap())
        }
        (Method::PUT, path) if path.starts_with("/dashboard/edit_transaction/") => {
            status_reply(*state.mutation_status.lock().unwrap())
        }
        _ => (StatusCode::NOT_FOUND, Json(json!({"error": "Not Found"}))).into_response(),
    }
}

fn status_reply(code: u16) -> Response {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_success() {
        (status, Json(json!({"message": "ok"}))).into_response()
    } else {
        (status, Json(json!({"error": "rejected"}))).into_response()
    }
}

fn login(body: Option<&Value>) -> Response {
    let password = body.and_then(|b| b["password"].as_str());
    if password == Some("password123") {
        Json(json!({
            "token": "issued-token",
            "user": {"id": 1, "username": "testuser", "email": "test@example.com"}
        }))
        .into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid credentials"}))).into_response()
    }
}

fn register(body: Option<&Value>) -> Response {
    let field = |name: &str| body.and_then(|b| b[name].as_str()).unwrap_or_default();
    let (username, email, password) = (field("username"), field("email"), field("password"));

    let error = if password.len() < 6 {
        Some("Password must be at least 6 characters long")
    } else if email == "test@example.com" {
        Some("Email already exists")
    } else {
        None
    };
    if let Some(error) = error {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": error }))).into_response();
    }

    (
        StatusCode::CREATED,
        Json(json!({
            "message": "User registered successfully",
            "user": {"id": 2, "username": username, "email": email}
        })),
    )
        .into_response()
}
