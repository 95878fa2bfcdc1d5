//! In-process stand-in for the task-tracker API
//!
//! Serves `/api/users` and `/api/tasks` on an ephemeral local port and
//! records every request it receives, in arrival order.
#![allow(dead_code)]
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use reqwest::Url;
use serde_json::{json, Value};

use seeder::ApiClient;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Behavior {
    #[default]
    Normal,
    /// `POST /api/users` answers 400 like a duplicate email
    RejectUsers,
    /// `POST /api/users` answers 201 without an `_id`
    MalformedUsers,
    /// `POST /api/tasks` answers 500
    FailTasks,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: &'static str,
    pub query: HashMap<String, String>,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
pub struct MockApi {
    behavior: Behavior,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApi {
    pub async fn spawn(behavior: Behavior) -> (Self, SocketAddr) {
        let api = MockApi {
            behavior,
            ..Default::default()
        };

        let app = Router::new()
            .route("/api/users", get(list_users).post(create_user))
            .route("/api/tasks", post(create_task))
            .with_state(api.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (api, addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// `(method, path)` of every request, in order.
    pub fn calls(&self) -> Vec<(&'static str, &'static str)> {
        self.requests()
            .iter()
            .map(|request| (request.method, request.path))
            .collect()
    }

    pub fn bodies(&self, path: &str) -> Vec<Value> {
        self.requests()
            .into_iter()
            .filter(|request| request.method == "POST" && request.path == path)
            .map(|request| request.body)
            .collect()
    }

    fn record(
        &self,
        method: &'static str,
        path: &'static str,
        query: HashMap<String, String>,
        headers: &HeaderMap,
        body: Value,
    ) -> usize {
        let header_value = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method,
            path,
            query,
            content_type: header_value(header::CONTENT_TYPE),
            accept: header_value(header::ACCEPT),
            body,
        });
        requests
            .iter()
            .filter(|request| request.method == method && request.path == path)
            .count()
    }
}

/// Client pointed at the mock over plain HTTP.
pub fn client_for(addr: SocketAddr) -> ApiClient {
    let base_url = Url::parse(&format!("http://{addr}")).unwrap();
    ApiClient::with_base_url(base_url).unwrap()
}

async fn list_users(
    State(api): State<MockApi>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<Value> {
    api.record("GET", "/api/users", query, &headers, Value::Null);
    Json(json!({
        "message": "OK",
        "data": [{ "_id": "existing-1" }, { "_id": "existing-2" }],
    }))
}

async fn create_user(
    State(api): State<MockApi>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let n = api.record("POST", "/api/users", HashMap::new(), &headers, body.clone());

    match api.behavior {
        Behavior::RejectUsers => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "User with this email already exists", "data": {} })),
        ),
        Behavior::MalformedUsers => (
            StatusCode::CREATED,
            Json(json!({ "message": "User created successfully", "data": {} })),
        ),
        _ => {
            let mut user = body;
            user["_id"] = json!(format!("user-{n}"));
            user["pendingTasks"] = json!([]);
            (
                StatusCode::CREATED,
                Json(json!({ "message": "User created successfully", "data": user })),
            )
        }
    }
}

async fn create_task(
    State(api): State<MockApi>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let n = api.record("POST", "/api/tasks", HashMap::new(), &headers, body.clone());

    if api.behavior == Behavior::FailTasks {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Error creating task", "data": {} })),
        );
    }

    let mut task = body;
    task["_id"] = json!(format!("task-{n}"));
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Task created successfully", "data": task })),
    )
}
