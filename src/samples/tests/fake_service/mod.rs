// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// A fake Merchant API service. It records each request and replies with the
// next canned response.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct ServerState {
    pub responses: VecDeque<(StatusCode, Value)>,
    pub requests: Vec<Recorded>,
}

pub type SharedServerState = Arc<Mutex<ServerState>>;

pub struct FakeService {
    pub endpoint: String,
    pub state: SharedServerState,
    _server: JoinHandle<()>,
}

impl FakeService {
    pub fn requests(&self) -> Vec<Recorded> {
        self.state
            .lock()
            .expect("shared state is poisoned")
            .requests
            .clone()
    }
}

pub async fn start<I>(responses: I) -> anyhow::Result<FakeService>
where
    I: IntoIterator<Item = (StatusCode, Value)>,
{
    let state = Arc::new(Mutex::new(ServerState {
        responses: responses.into_iter().collect(),
        requests: Vec::new(),
    }));
    let app = axum::Router::new()
        .fallback(handler)
        .with_state(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server = tokio::spawn(async {
        axum::serve(listener, app).await.unwrap();
    });
    Ok(FakeService {
        endpoint: format!("http://{}:{}", addr.ip(), addr.port()),
        state,
        _server: server,
    })
}

async fn handler(
    State(state): State<SharedServerState>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let body = if body.is_empty() {
        None
    } else {
        Some(serde_json::from_slice::<Value>(&body).expect("request bodies are JSON"))
    };
    let authorization = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let mut state = state.lock().expect("shared state is poisoned");
    state.requests.push(Recorded {
        method,
        path: uri.path().to_string(),
        query,
        authorization,
        body,
    });
    let (status, body) = state.responses.pop_front().unwrap_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            serde_json::json!({"error": {"code": 400, "message": "exhausted responses"}}),
        )
    });
    (status, Json(body))
}
