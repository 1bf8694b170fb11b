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

//! The OAuth2 [installed application] flow.
//!
//! A user authorizes the application in a browser. Google redirects the
//! browser to a short-lived HTTP listener on the loopback interface, the
//! listener captures the authorization code, and the code is exchanged for
//! an access token and a refresh token.
//!
//! The resulting [StoredToken] is persisted so later runs skip the browser.
//!
//! [installed application]: https://developers.google.com/identity/protocols/oauth2/native-app

use crate::BuildResult;
use crate::build_errors::Error as BuilderError;
use crate::constants::{AUTHORIZATION_CODE_GRANT_TYPE, OAUTH2_AUTH_ENDPOINT, OAUTH2_TOKEN_ENDPOINT};
use crate::credentials::Credentials;
use crate::credentials::user_account::{UserTokenProvider, with_initial_token};
use crate::token::Token;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::Instant;

/// How long [InstalledFlow::run] waits for the browser redirect by default.
pub const DEFAULT_FLOW_TIMEOUT: Duration = Duration::from_secs(5 * 60);

const STATE_LENGTH: usize = 32;
const SUCCESS_PAGE: &str = "<h1>Success</h1>Authorized.";

/// The OAuth2 client configuration downloaded from the Google Cloud console.
///
/// The console produces a JSON file with either an `installed` or a `web`
/// section, both have the same fields.
#[derive(Clone, PartialEq, serde::Deserialize)]
pub struct ClientConfig {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_auth_uri")]
    pub auth_uri: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[censored]")
            .field("auth_uri", &self.auth_uri)
            .field("token_uri", &self.token_uri)
            .field("redirect_uris", &self.redirect_uris)
            .finish()
    }
}

fn default_auth_uri() -> String {
    OAUTH2_AUTH_ENDPOINT.to_string()
}

fn default_token_uri() -> String {
    OAUTH2_TOKEN_ENDPOINT.to_string()
}

#[derive(serde::Deserialize)]
struct ClientSecrets {
    installed: Option<ClientConfig>,
    web: Option<ClientConfig>,
}

impl ClientConfig {
    /// Parses the contents of a client secrets file.
    ///
    /// The `installed` section takes precedence over the `web` section.
    pub fn from_json(json: Value) -> BuildResult<Self> {
        let secrets =
            serde_json::from_value::<ClientSecrets>(json).map_err(BuilderError::parsing)?;
        secrets
            .installed
            .or(secrets.web)
            .ok_or_else(|| BuilderError::missing_field("installed"))
    }

    /// Reads and parses a client secrets file.
    pub async fn from_file(path: &Path) -> BuildResult<Self> {
        let json = super::load_json(path).await?;
        Self::from_json(json)
    }
}

/// An OAuth2 token as persisted between runs.
///
/// The `expiry` is a wall-clock timestamp, serialized in RFC 3339 format.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct StoredToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl std::fmt::Debug for StoredToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredToken")
            .field("access_token", &"[censored]")
            .field("token_type", &self.token_type)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[censored]"))
            .field("expiry", &self.expiry)
            .finish()
    }
}

/// Writes `token` to `path` as indented JSON.
///
/// On Unix the file is readable and writable by the owner and group only.
pub async fn store_token(path: &Path, token: &StoredToken) -> BuildResult<()> {
    let contents = serde_json::to_string_pretty(token).map_err(BuilderError::parsing)?;
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| BuilderError::flow(format!("error storing OAuth2 token: {e}")))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o660))
            .await
            .map_err(|e| BuilderError::flow(format!("error storing OAuth2 token: {e}")))?;
    }
    Ok(())
}

/// Loads a token saved by [store_token].
///
/// Returns `None` if the file is missing or cannot be parsed.
pub async fn load_token(path: &Path) -> Option<StoredToken> {
    let contents = match tokio::fs::read(path).await {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!("cannot read stored token {}: {e}", path.display());
            return None;
        }
    };
    match serde_json::from_slice(&contents) {
        Ok(token) => Some(token),
        Err(e) => {
            tracing::debug!("cannot parse stored token {}: {e}", path.display());
            None
        }
    }
}

/// Creates [Credentials] from a stored token.
///
/// The access token is used as-is until it expires. Then the credentials
/// use the refresh token and the client configuration to get a new one.
pub fn credentials_from_token(config: &ClientConfig, token: StoredToken) -> Credentials {
    let expires_at = token.expiry.map(|expiry| {
        let remaining = (expiry - Utc::now()).to_std().unwrap_or(Duration::ZERO);
        Instant::now() + remaining
    });
    let initial = Token {
        token: token.access_token,
        token_type: token.token_type,
        expires_at,
    };
    let provider = UserTokenProvider {
        client_id: config.client_id.clone(),
        client_secret: config.client_secret.clone(),
        refresh_token: token.refresh_token.unwrap_or_default(),
        endpoint: config.token_uri.clone(),
        scopes: None,
    };
    with_initial_token(initial, provider)
}

/// Runs the OAuth2 authorization code flow for installed applications.
///
/// # Example
/// ```no_run
/// # use merchant_auth::credentials::installed_flow::{ClientConfig, InstalledFlow};
/// # tokio_test::block_on(async {
/// let config = ClientConfig::from_file("client-secrets.json".as_ref()).await?;
/// let token = InstalledFlow::new(config, ["https://www.googleapis.com/auth/content"])
///     .run()
///     .await?;
/// # Ok::<(), merchant_auth::build_errors::Error>(())
/// # });
/// ```
#[derive(Debug)]
pub struct InstalledFlow {
    config: ClientConfig,
    scopes: Vec<String>,
    timeout: Duration,
    open_browser: bool,
}

impl InstalledFlow {
    pub fn new<I, S>(config: ClientConfig, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            config,
            scopes: scopes.into_iter().map(|s| s.into()).collect(),
            timeout: DEFAULT_FLOW_TIMEOUT,
            open_browser: true,
        }
    }

    /// Sets how long to wait for the user to complete the authorization.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Controls whether the flow tries to open the authorization URL in a
    /// browser. The URL is always logged.
    pub fn with_browser(mut self, open_browser: bool) -> Self {
        self.open_browser = open_browser;
        self
    }

    /// Runs the flow and returns the token obtained for the user.
    pub async fn run(&self) -> BuildResult<StoredToken> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(BuilderError::flow)?;
        let addr = listener.local_addr().map_err(BuilderError::flow)?;
        let redirect_uri = format!("http://{}:{}", addr.ip(), addr.port());

        let state = random_state();
        let auth_url = authorization_url(&self.config, &redirect_uri, &self.scopes, &state)?;

        let (result_tx, result_rx) = oneshot::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let app = callback_router(state, result_tx);
        let server = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        if self.open_browser {
            open_browser(auth_url.as_str());
        }
        tracing::info!("Authorize this app at: {auth_url}");

        let result = tokio::time::timeout(self.timeout, result_rx).await;
        let _ = shutdown_tx.send(());
        // In-flight responses complete in the background.
        drop(server);

        let code = match result {
            Err(_) => {
                return Err(BuilderError::flow(format!(
                    "timed out after {:?} waiting for the authorization callback",
                    self.timeout
                )));
            }
            Ok(Err(_)) => {
                return Err(BuilderError::flow(
                    "the authorization callback listener stopped unexpectedly",
                ));
            }
            Ok(Ok(Err(message))) => return Err(BuilderError::flow(message)),
            Ok(Ok(Ok(code))) => code,
        };
        tracing::info!("received the authorization code, exchanging it for a token");
        exchange_code(&self.config, &code, &redirect_uri).await
    }
}

fn random_state() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LENGTH)
        .map(char::from)
        .collect();
    format!("st{suffix}")
}

fn authorization_url(
    config: &ClientConfig,
    redirect_uri: &str,
    scopes: &[String],
    state: &str,
) -> BuildResult<url::Url> {
    url::Url::parse_with_params(
        &config.auth_uri,
        &[
            ("client_id", config.client_id.as_str()),
            ("redirect_uri", redirect_uri),
            ("response_type", "code"),
            ("scope", scopes.join(" ").as_str()),
            ("state", state),
            ("access_type", "offline"),
        ],
    )
    .map_err(BuilderError::parsing)
}

fn open_browser(url: &str) {
    let mut command = if cfg!(target_os = "macos") {
        tokio::process::Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = tokio::process::Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else {
        tokio::process::Command::new("xdg-open")
    };
    let spawned = command
        .arg(url)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn();
    if let Err(e) = spawned {
        tracing::warn!("cannot open a browser, copy the authorization URL manually: {e}");
    }
}

type CallbackResult = std::result::Result<String, String>;

#[derive(Clone)]
struct CallbackState {
    state: String,
    // Only the first callback result is delivered.
    result: Arc<Mutex<Option<oneshot::Sender<CallbackResult>>>>,
}

impl CallbackState {
    fn deliver(&self, result: CallbackResult) {
        let sender = match self.result.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(sender) = sender {
            let _ = sender.send(result);
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct CallbackParams {
    state: Option<String>,
    code: Option<String>,
}

fn callback_router(state: String, result: oneshot::Sender<CallbackResult>) -> Router {
    let state = CallbackState {
        state,
        result: Arc::new(Mutex::new(Some(result))),
    };
    Router::new()
        .route("/favicon.ico", get(|| async { StatusCode::NOT_FOUND }))
        .fallback(callback)
        .with_state(state)
}

async fn callback(State(state): State<CallbackState>, Query(params): Query<CallbackParams>) -> Response {
    if params.state.as_deref() != Some(state.state.as_str()) {
        let message = format!("state doesn't match: got {:?}", params.state);
        tracing::warn!("{message}");
        state.deliver(Err(message.clone()));
        return (StatusCode::INTERNAL_SERVER_ERROR, message).into_response();
    }
    match params.code.filter(|c| !c.is_empty()) {
        Some(code) => {
            state.deliver(Ok(code));
            Html(SUCCESS_PAGE).into_response()
        }
        None => {
            let message = "no code received".to_string();
            tracing::warn!("{message}");
            state.deliver(Err(message.clone()));
            (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
        }
    }
}

#[derive(serde::Deserialize)]
struct CodeExchangeResponse {
    access_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

async fn exchange_code(
    config: &ClientConfig,
    code: &str,
    redirect_uri: &str,
) -> BuildResult<StoredToken> {
    let form = [
        ("grant_type", AUTHORIZATION_CODE_GRANT_TYPE),
        ("code", code),
        ("client_id", config.client_id.as_str()),
        ("client_secret", config.client_secret.as_str()),
        ("redirect_uri", redirect_uri),
    ];
    let response = reqwest::Client::new()
        .post(config.token_uri.as_str())
        .form(&form)
        .send()
        .await
        .map_err(|e| BuilderError::flow(format!("token exchange error: {e}")))?;
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(BuilderError::flow(format!(
            "token exchange error [{status}]: {body}"
        )));
    }
    let response = response
        .json::<CodeExchangeResponse>()
        .await
        .map_err(|e| BuilderError::flow(format!("token exchange error: {e}")))?;
    Ok(StoredToken {
        access_token: response.access_token,
        token_type: response.token_type,
        refresh_token: response.refresh_token,
        expiry: response
            .expires_in
            .map(|secs| Utc::now() + Duration::from_secs(secs)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::tests::start;
    use axum::Form;
    use std::collections::HashMap;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    fn test_config(token_uri: &str) -> ClientConfig {
        ClientConfig {
            client_id: "test-client-id".to_string(),
            client_secret: "test-client-secret".to_string(),
            auth_uri: OAUTH2_AUTH_ENDPOINT.to_string(),
            token_uri: token_uri.to_string(),
            redirect_uris: vec!["http://localhost".to_string()],
        }
    }

    #[test_case("installed")]
    #[test_case("web")]
    fn client_config_from_json(section: &str) -> TestResult {
        let mut json = serde_json::Map::new();
        json.insert(
            section.to_string(),
            serde_json::json!({
                "client_id": "test-client-id",
                "client_secret": "test-client-secret",
                "token_uri": "https://test-only.example.com/token",
                "redirect_uris": ["http://localhost"],
            }),
        );
        let config = ClientConfig::from_json(Value::Object(json))?;
        assert_eq!(config.client_id, "test-client-id");
        assert_eq!(config.auth_uri, OAUTH2_AUTH_ENDPOINT);
        assert_eq!(config.token_uri, "https://test-only.example.com/token");
        assert_eq!(config.redirect_uris, vec!["http://localhost"]);
        Ok(())
    }

    #[test]
    fn client_config_missing_section() {
        let e = ClientConfig::from_json(serde_json::json!({"other": {}})).unwrap_err();
        assert!(e.is_missing_field(), "{e:?}");
    }

    #[test]
    fn client_config_malformed() {
        let json = serde_json::json!({"installed": {"client_id": "test-client-id"}});
        let e = ClientConfig::from_json(json).unwrap_err();
        assert!(e.is_parsing(), "{e:?}");
    }

    #[test]
    fn client_config_debug() {
        let fmt = format!("{:?}", test_config(OAUTH2_TOKEN_ENDPOINT));
        assert!(fmt.contains("test-client-id"), "{fmt}");
        assert!(!fmt.contains("test-client-secret"), "{fmt}");
    }

    #[test]
    fn state_is_random() {
        let a = random_state();
        let b = random_state();
        assert!(a.starts_with("st"), "{a}");
        assert_eq!(a.len(), STATE_LENGTH + 2);
        assert_ne!(a, b);
    }

    #[test]
    fn auth_url() -> TestResult {
        let config = test_config(OAUTH2_TOKEN_ENDPOINT);
        let url = authorization_url(
            &config,
            "http://127.0.0.1:1234",
            &["scope1".to_string(), "scope2".to_string()],
            "st-test-state",
        )?;
        assert!(url.as_str().starts_with(OAUTH2_AUTH_ENDPOINT), "{url}");
        let params = url.query_pairs().into_owned().collect::<HashMap<_, _>>();
        let want = HashMap::from(
            [
                ("client_id", "test-client-id"),
                ("redirect_uri", "http://127.0.0.1:1234"),
                ("response_type", "code"),
                ("scope", "scope1 scope2"),
                ("state", "st-test-state"),
                ("access_type", "offline"),
            ]
            .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        assert_eq!(params, want);
        Ok(())
    }

    async fn start_callback(
        state: &str,
    ) -> (String, oneshot::Receiver<CallbackResult>, tokio::task::JoinHandle<()>) {
        let (tx, rx) = oneshot::channel();
        let (endpoint, server) = start(callback_router(state.to_string(), tx)).await;
        (endpoint, rx, server)
    }

    #[tokio::test]
    async fn callback_success() -> TestResult {
        let (endpoint, rx, _server) = start_callback("st-good").await;
        let response = reqwest::get(format!("{endpoint}/?state=st-good&code=test-code")).await?;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(response.text().await?, SUCCESS_PAGE);
        assert_eq!(rx.await?, Ok("test-code".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn callback_state_mismatch() -> TestResult {
        let (endpoint, rx, _server) = start_callback("st-good").await;
        let response = reqwest::get(format!("{endpoint}/?state=st-bad&code=test-code")).await?;
        assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        let got = rx.await?;
        assert!(got.is_err_and(|m| m.contains("state doesn't match")));
        Ok(())
    }

    #[test_case("/?state=st-good"; "missing")]
    #[test_case("/?state=st-good&code="; "empty")]
    #[tokio::test]
    async fn callback_no_code(query: &str) -> TestResult {
        let (endpoint, rx, _server) = start_callback("st-good").await;
        let response = reqwest::get(format!("{endpoint}{query}")).await?;
        assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(rx.await?, Err("no code received".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn callback_favicon() -> TestResult {
        let (endpoint, mut rx, _server) = start_callback("st-good").await;
        let response = reqwest::get(format!("{endpoint}/favicon.ico")).await?;
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
        assert!(rx.try_recv().is_err(), "no result expected");
        Ok(())
    }

    #[tokio::test]
    async fn callback_first_result_wins() -> TestResult {
        let (endpoint, rx, _server) = start_callback("st-good").await;
        let first = reqwest::get(format!("{endpoint}/?state=st-good&code=first")).await?;
        assert_eq!(first.status(), reqwest::StatusCode::OK);
        let second = reqwest::get(format!("{endpoint}/?state=st-bad")).await?;
        assert_eq!(second.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(rx.await?, Ok("first".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn flow_timeout() {
        let flow = InstalledFlow::new(test_config(OAUTH2_TOKEN_ENDPOINT), ["scope"])
            .with_browser(false)
            .with_timeout(Duration::from_millis(50));
        let e = flow.run().await.unwrap_err();
        assert!(e.is_flow(), "{e:?}");
        assert!(e.to_string().contains("timed out"), "{e}");
    }

    #[tokio::test]
    async fn exchange_success() -> TestResult {
        let app = Router::new().route(
            "/token",
            axum::routing::post(|Form(form): Form<HashMap<String, String>>| async move {
                assert_eq!(form.get("grant_type").map(String::as_str), Some("authorization_code"));
                assert_eq!(form.get("code").map(String::as_str), Some("test-code"));
                assert_eq!(form.get("client_id").map(String::as_str), Some("test-client-id"));
                assert_eq!(
                    form.get("redirect_uri").map(String::as_str),
                    Some("http://127.0.0.1:1234")
                );
                axum::Json(serde_json::json!({
                    "access_token": "test-access-token",
                    "token_type": "Bearer",
                    "refresh_token": "test-refresh-token",
                    "expires_in": 3600,
                }))
            }),
        );
        let (endpoint, _server) = start(app).await;
        let config = test_config(&format!("{endpoint}/token"));
        let now = Utc::now();
        let token = exchange_code(&config, "test-code", "http://127.0.0.1:1234").await?;
        assert_eq!(token.access_token, "test-access-token");
        assert_eq!(token.refresh_token.as_deref(), Some("test-refresh-token"));
        assert!(
            token
                .expiry
                .is_some_and(|e| e >= now + Duration::from_secs(3600)),
            "{token:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn exchange_error() -> TestResult {
        let app = Router::new().route(
            "/token",
            axum::routing::post(|| async { (StatusCode::BAD_REQUEST, "invalid_grant") }),
        );
        let (endpoint, _server) = start(app).await;
        let config = test_config(&format!("{endpoint}/token"));
        let e = exchange_code(&config, "test-code", "http://127.0.0.1:1234")
            .await
            .unwrap_err();
        assert!(e.is_flow(), "{e:?}");
        assert!(e.to_string().contains("invalid_grant"), "{e}");
        Ok(())
    }

    fn test_token() -> StoredToken {
        StoredToken {
            access_token: "test-access-token".to_string(),
            token_type: "Bearer".to_string(),
            refresh_token: Some("test-refresh-token".to_string()),
            expiry: Some(Utc::now() + Duration::from_secs(3600)),
        }
    }

    #[tokio::test]
    async fn store_and_load() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("token.json");
        let token = test_token();
        store_token(&path, &token).await?;

        let contents = std::fs::read_to_string(&path)?;
        assert!(contents.contains("\n  \"access_token\": "), "{contents}");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path)?.permissions().mode();
            assert_eq!(mode & 0o777, 0o660, "{mode:o}");
        }

        let got = load_token(&path).await;
        assert_eq!(got, Some(token));
        Ok(())
    }

    #[tokio::test]
    async fn load_missing_or_malformed() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("token.json");
        assert_eq!(load_token(&path).await, None);
        std::fs::write(&path, "{ not json")?;
        assert_eq!(load_token(&path).await, None);
        Ok(())
    }

    #[test]
    fn stored_token_format() -> TestResult {
        let json = serde_json::json!({
            "access_token": "test-access-token",
            "token_type": "Bearer",
            "refresh_token": "test-refresh-token",
            "expiry": "2025-01-02T03:04:05Z",
        });
        let token = serde_json::from_value::<StoredToken>(json)?;
        assert_eq!(
            token.expiry,
            Some("2025-01-02T03:04:05Z".parse::<DateTime<Utc>>()?)
        );
        let fmt = format!("{token:?}");
        assert!(!fmt.contains("test-access-token"), "{fmt}");
        assert!(!fmt.contains("test-refresh-token"), "{fmt}");
        Ok(())
    }

    #[tokio::test]
    async fn credentials_from_valid_token() -> TestResult {
        // The token endpoint is unreachable, the stored token must be used.
        let config = test_config("http://127.0.0.1:1/token");
        let creds = credentials_from_token(&config, test_token());
        let token = creds.token().await?;
        assert_eq!(token.token, "test-access-token");
        Ok(())
    }

    #[tokio::test]
    async fn credentials_from_expired_token() -> TestResult {
        let app = Router::new().route(
            "/token",
            axum::routing::post(|axum::Json(body): axum::Json<Value>| async move {
                assert_eq!(body["refresh_token"], "test-refresh-token");
                axum::Json(serde_json::json!({
                    "access_token": "refreshed-access-token",
                    "token_type": "Bearer",
                    "expires_in": 3600,
                }))
            }),
        );
        let (endpoint, _server) = start(app).await;
        let config = test_config(&format!("{endpoint}/token"));
        let expired = StoredToken {
            expiry: Some(Utc::now() - Duration::from_secs(60)),
            ..test_token()
        };
        let creds = credentials_from_token(&config, expired);
        let token = creds.token().await?;
        assert_eq!(token.token, "refreshed-access-token");
        Ok(())
    }
}
