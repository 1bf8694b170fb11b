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

//! [Metadata Service] Credentials type.
//!
//! Workloads running on Google Cloud (GCE, GKE, Cloud Run) obtain access
//! tokens for their attached service account from the metadata service. No
//! key files are involved.
//!
//! [Metadata Service]: https://cloud.google.com/compute/docs/metadata/overview

use crate::Result;
use crate::constants::GCE_METADATA_HOST_VAR;
use crate::credentials::Credentials;
use crate::credentials::dynamic::CredentialsProvider;
use crate::errors;
use crate::headers_util::build_bearer_headers;
use crate::token::{Token, TokenProvider};
use crate::token_cache::TokenCache;
use http::HeaderMap;
use reqwest::Client;
use std::time::Duration;
use tokio::time::Instant;

const METADATA_FLAVOR_VALUE: &str = "Google";
const METADATA_FLAVOR: &str = "metadata-flavor";
const METADATA_ROOT: &str = "http://metadata.google.internal";
const MDS_DEFAULT_URI: &str = "/computeMetadata/v1/instance/service-accounts/default";
const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Creates [Credentials] backed by the metadata service.
#[derive(Debug, Default)]
pub struct Builder {
    endpoint: Option<String>,
    scopes: Option<Vec<String>>,
    probe_timeout: Option<Duration>,
}

impl Builder {
    /// Sets the endpoint for these credentials.
    ///
    /// If not set, the credentials use `http://${GCE_METADATA_HOST}` when the
    /// environment variable is set, and `http://metadata.google.internal`
    /// otherwise.
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the [scopes] for these credentials.
    ///
    /// [scopes]: https://developers.google.com/identity/protocols/oauth2/scopes
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Sets how long [probe](Builder::probe) waits for the metadata service.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = Some(timeout);
        self
    }

    fn resolve_endpoint(&self) -> String {
        resolve_endpoint(
            self.endpoint.clone(),
            std::env::var(GCE_METADATA_HOST_VAR).ok(),
        )
    }

    /// Returns true if the metadata service answers within the probe timeout.
    ///
    /// A real metadata service tags every response with
    /// `Metadata-Flavor: Google`, other servers at the same address do not.
    pub async fn probe(&self) -> bool {
        let endpoint = self.resolve_endpoint();
        let timeout = self.probe_timeout.unwrap_or(DEFAULT_PROBE_TIMEOUT);
        let request = Client::new()
            .get(format!("{}/", endpoint.trim_end_matches('/')))
            .header(METADATA_FLAVOR, METADATA_FLAVOR_VALUE)
            .send();
        tokio::select! {
            _ = tokio::time::sleep(timeout) => {
                tracing::debug!("metadata service probe at {endpoint} timed out");
                false
            }
            response = request => match response {
                Ok(r) => r
                    .headers()
                    .get(METADATA_FLAVOR)
                    .is_some_and(|v| v == METADATA_FLAVOR_VALUE),
                Err(e) => {
                    tracing::debug!("metadata service probe at {endpoint} failed: {e}");
                    false
                }
            },
        }
    }

    /// Returns a [Credentials] instance with the configured settings.
    pub fn build(self) -> Credentials {
        let endpoint = self.resolve_endpoint();
        let token_provider = MdsTokenProvider {
            endpoint,
            scopes: self.scopes,
        };
        Credentials::from(MdsCredentials {
            token_provider: TokenCache::new(token_provider),
        })
    }
}

fn resolve_endpoint(explicit: Option<String>, metadata_host: Option<String>) -> String {
    explicit
        .or_else(|| metadata_host.map(|host| format!("http://{host}")))
        .unwrap_or_else(|| METADATA_ROOT.to_string())
}

#[derive(Debug)]
struct MdsCredentials<T>
where
    T: TokenProvider,
{
    token_provider: T,
}

#[async_trait::async_trait]
impl<T> CredentialsProvider for MdsCredentials<T>
where
    T: TokenProvider,
{
    async fn token(&self) -> Result<Token> {
        self.token_provider.token().await
    }

    async fn headers(&self) -> Result<HeaderMap> {
        let token = self.token().await?;
        build_bearer_headers(&token)
    }
}

#[derive(Debug, serde::Deserialize)]
struct MdsTokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
    token_type: String,
}

#[derive(Debug, Clone)]
struct MdsTokenProvider {
    endpoint: String,
    scopes: Option<Vec<String>>,
}

#[async_trait::async_trait]
impl TokenProvider for MdsTokenProvider {
    async fn token(&self) -> Result<Token> {
        let request = Client::new()
            .get(format!(
                "{}{MDS_DEFAULT_URI}/token",
                self.endpoint.trim_end_matches('/')
            ))
            .header(METADATA_FLAVOR, METADATA_FLAVOR_VALUE);
        let request = match &self.scopes {
            Some(scopes) => request.query(&[("scopes", scopes.join(","))]),
            None => request,
        };

        let response = request.send().await.map_err(errors::transient)?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.map_err(errors::transient)?;
            return Err(errors::from_http_error(status, body));
        }
        let response = response
            .json::<MdsTokenResponse>()
            .await
            .map_err(|e| errors::CredentialsError::new(!e.is_decode(), e))?;
        Ok(Token {
            token: response.access_token,
            token_type: response.token_type,
            expires_at: response
                .expires_in
                .map(|d| Instant::now() + Duration::from_secs(d)),
        })
    }
}
