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

//! Types and functions to work with [Credentials].
//!
//! The Merchant API clients consume a [Credentials] value and use it to
//! authenticate each request. This module also implements the lookup of
//! [Application Default Credentials], the first source tried by the
//! [Authenticator].
//!
//! [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
//! [Authenticator]: crate::authenticator::Authenticator
//! [Credentials]: https://cloud.google.com/docs/authentication#credentials

pub mod installed_flow;
pub mod mds;
pub mod service_account;
pub mod user_account;

use crate::build_errors::Error as BuilderError;
use crate::constants::{CONTENT_SCOPE, GOOGLE_APPLICATION_CREDENTIALS_VAR};
use crate::token::Token;
use crate::{BuildResult, Result};
use http::HeaderMap;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// An implementation of [crate::credentials::dynamic::CredentialsProvider].
///
/// Represents a [Credentials] used to obtain auth [Token]s and the
/// corresponding request headers.
///
/// Credentials are cheap to clone, all clones share the same token cache.
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: dynamic::CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns a valid access token, refreshing it if needed.
    pub async fn token(&self) -> Result<Token> {
        self.inner.token().await
    }

    /// Returns the headers to authenticate a request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

pub mod dynamic {
    use super::{HeaderMap, Result, Token};

    /// The trait implemented by every credential source.
    ///
    /// Applications rarely implement this trait. The exception are tests,
    /// which may need credentials that never contact a token endpoint.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: std::fmt::Debug + Send + Sync {
        /// Asynchronously retrieves a token.
        async fn token(&self) -> Result<Token>;

        /// Asynchronously constructs the auth headers.
        async fn headers(&self) -> Result<HeaderMap>;
    }
}

/// A builder for [Application Default Credentials].
///
/// The lookup checks, in order:
/// 1. The file named by the `GOOGLE_APPLICATION_CREDENTIALS` environment
///    variable.
/// 2. The gcloud well-known file, created by
///    `gcloud auth application-default login`.
/// 3. The metadata server, if the code is running on Google Cloud.
///
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
#[derive(Debug)]
pub struct Builder {
    scopes: Vec<String>,
    metadata_endpoint: Option<String>,
    environment: Option<Environment>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            scopes: vec![CONTENT_SCOPE.to_string()],
            metadata_endpoint: None,
            environment: None,
        }
    }
}

impl Builder {
    /// Sets the [scopes] requested for the access tokens.
    ///
    /// [scopes]: https://developers.google.com/identity/protocols/oauth2/scopes
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Overrides the metadata server endpoint probed in the last step.
    pub fn with_metadata_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.metadata_endpoint = Some(endpoint.into());
        self
    }

    #[cfg(test)]
    fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Returns the first [Credentials] found in the environment.
    pub async fn build(self) -> BuildResult<Credentials> {
        let environment = self
            .environment
            .clone()
            .unwrap_or_else(Environment::from_process);
        if let Some(path) = environment.credentials_file {
            tracing::debug!("loading credentials from {}", path.display());
            let contents = load_json(&path).await?;
            return self.from_json(contents);
        }
        if let Some(path) = environment.well_known_file.filter(|p| p.is_file()) {
            tracing::debug!("loading credentials from {}", path.display());
            let contents = load_json(&path).await?;
            return self.from_json(contents);
        }
        let mut builder = mds::Builder::default().with_scopes(self.scopes.clone());
        if let Some(endpoint) = self.metadata_endpoint.clone() {
            builder = builder.with_endpoint(endpoint);
        }
        if builder.probe().await {
            tracing::debug!("using the metadata server credentials");
            return Ok(builder.build());
        }
        Err(BuilderError::loading(
            "unable to find application default credentials",
        ))
    }

    fn from_json(self, js: Value) -> BuildResult<Credentials> {
        let cred_type = extract_credential_type(&js)?.to_string();
        match cred_type.as_str() {
            "authorized_user" => user_account::Builder::new(js)
                .with_scopes(self.scopes)
                .build(),
            "service_account" => service_account::Builder::new(js)
                .with_scopes(self.scopes)
                .build(),
            other => Err(BuilderError::unknown_type(format!(
                "credentials type {other:?} is not supported"
            ))),
        }
    }
}

// The parts of the process environment consulted by the lookup.
#[derive(Clone, Debug, Default)]
struct Environment {
    credentials_file: Option<PathBuf>,
    well_known_file: Option<PathBuf>,
}

impl Environment {
    fn from_process() -> Self {
        Self {
            credentials_file: std::env::var_os(GOOGLE_APPLICATION_CREDENTIALS_VAR)
                .map(PathBuf::from),
            well_known_file: well_known_file(),
        }
    }
}

pub(crate) async fn load_json(path: &Path) -> BuildResult<Value> {
    let contents = tokio::fs::read(path).await.map_err(BuilderError::loading)?;
    serde_json::from_slice(&contents).map_err(BuilderError::parsing)
}

fn extract_credential_type(json: &Value) -> BuildResult<&str> {
    json.get("type")
        .ok_or_else(|| BuilderError::parsing("no `type` field found."))?
        .as_str()
        .ok_or_else(|| BuilderError::parsing("`type` field is not a string."))
}

fn well_known_file() -> Option<PathBuf> {
    let base = if cfg!(target_os = "windows") {
        PathBuf::from(std::env::var_os("APPDATA")?)
    } else {
        PathBuf::from(std::env::var_os("HOME")?).join(".config")
    };
    Some(
        base.join("gcloud")
            .join("application_default_credentials.json"),
    )
}

/// Credentials for tests that must not contact any token endpoint.
pub mod testing {
    use super::*;

    /// A simple credentials implementation to use in tests.
    ///
    /// Always returns the token `test-only-token`.
    pub fn test_credentials() -> Credentials {
        Credentials::from(TestCredentials)
    }

    /// Credentials that always fail to produce a token.
    pub fn error_credentials(is_transient: bool) -> Credentials {
        Credentials::from(ErrorCredentials(is_transient))
    }

    #[derive(Debug)]
    struct TestCredentials;

    #[async_trait::async_trait]
    impl dynamic::CredentialsProvider for TestCredentials {
        async fn token(&self) -> Result<Token> {
            Ok(Token {
                token: "test-only-token".to_string(),
                token_type: "Bearer".to_string(),
                expires_at: None,
            })
        }

        async fn headers(&self) -> Result<HeaderMap> {
            crate::headers_util::build_bearer_headers(&self.token().await?)
        }
    }

    #[derive(Debug)]
    struct ErrorCredentials(bool);

    #[async_trait::async_trait]
    impl dynamic::CredentialsProvider for ErrorCredentials {
        async fn token(&self) -> Result<Token> {
            Err(crate::errors::CredentialsError::from_msg(
                self.0,
                "test-only error credentials",
            ))
        }

        async fn headers(&self) -> Result<HeaderMap> {
            Err(crate::errors::CredentialsError::from_msg(
                self.0,
                "test-only error credentials",
            ))
        }
    }
}
