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

//! [Service Account] Credentials type.
//!
//! A service account is an account for an application or compute workload
//! instead of an individual end user. The Merchant API samples look for a
//! [service account key] named `service-account.json` in the sample
//! configuration directory.
//!
//! The key contains an RSA private key. These credentials sign a JWT
//! assertion with that key and exchange it at the key's `token_uri` for an
//! access token, using the [JWT bearer] grant.
//!
//! Services account keys should be treated as any other secret with security
//! implications. Think of them as unencrypted passwords.
//!
//! [JWT bearer]: https://datatracker.ietf.org/doc/html/rfc7523
//! [Service Account]: https://cloud.google.com/iam/docs/service-account-overview
//! [service account key]: https://cloud.google.com/iam/docs/keys-create-delete#creating

mod jws;

use crate::build_errors::Error as BuilderError;
use crate::constants::{CONTENT_SCOPE, JWT_BEARER_GRANT_TYPE, OAUTH2_TOKEN_ENDPOINT};
use crate::credentials::Credentials;
use crate::credentials::dynamic::CredentialsProvider;
use crate::errors::{self, CredentialsError};
use crate::headers_util::build_bearer_headers;
use crate::token::{Token, TokenProvider};
use crate::token_cache::TokenCache;
use crate::{BuildResult, Result};
use base64::prelude::{BASE64_URL_SAFE_NO_PAD, Engine as _};
use http::HeaderMap;
use jws::{CLOCK_SKEW_FUDGE, DEFAULT_TOKEN_TIMEOUT, JwsClaims, JwsHeader};
use reqwest::Client;
use rustls::crypto::CryptoProvider;
use rustls::sign::Signer;
use rustls_pki_types::PrivateKeyDer;
use rustls_pki_types::pem::PemObject;
use serde_json::Value;
use std::time::Duration;
use tokio::time::Instant;

/// A builder for service account [Credentials].
///
/// # Example
/// ```
/// # use merchant_auth::credentials::service_account::Builder;
/// let key = serde_json::json!({ /* add details here */ });
/// let credentials = Builder::new(key)
///     .with_scopes(["https://www.googleapis.com/auth/content"])
///     .build();
/// ```
pub struct Builder {
    service_account_key: Value,
    scopes: Option<Vec<String>>,
}

impl Builder {
    /// Creates a new builder from the service account key JSON.
    pub fn new(service_account_key: Value) -> Self {
        Self {
            service_account_key,
            scopes: None,
        }
    }

    /// Sets the [scopes] requested for the access tokens.
    ///
    /// Defaults to the Merchant API scope.
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

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns a parsing error if the key cannot be deserialized, or if it
    /// does not contain a usable PEM private key.
    pub fn build(self) -> BuildResult<Credentials> {
        let key = serde_json::from_value::<ServiceAccountKey>(self.service_account_key)
            .map_err(BuilderError::parsing)?;
        // Fail early on malformed keys, a bad key file is a configuration
        // problem and should surface before any request is made.
        signer(&key.private_key).map_err(BuilderError::parsing)?;
        let scopes = self
            .scopes
            .unwrap_or_else(|| vec![CONTENT_SCOPE.to_string()])
            .join(" ");
        let token_provider = ServiceAccountTokenProvider { key, scopes };
        Ok(Credentials::from(ServiceAccountCredentials {
            token_provider: TokenCache::new(token_provider),
        }))
    }
}

/// A representation of a [service account key] in the format described by
/// [aip/4112].
///
/// [aip/4112]: https://google.aip.dev/auth/4112
/// [service account key]: https://cloud.google.com/iam/docs/keys-create-delete#creating
#[derive(serde::Deserialize, Clone, PartialEq)]
pub struct ServiceAccountKey {
    /// The client email address of the service account.
    pub client_email: String,
    /// ID of the service account's private key.
    #[serde(default)]
    pub private_key_id: Option<String>,
    /// The PEM-encoded private key associated with the service account.
    pub private_key: String,
    /// The project id the service account belongs to.
    #[serde(default)]
    pub project_id: Option<String>,
    /// The endpoint used to exchange the signed assertion for a token.
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    OAUTH2_TOKEN_ENDPOINT.to_string()
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &"[censored]")
            .field("project_id", &self.project_id)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

#[derive(Debug)]
struct ServiceAccountCredentials<T>
where
    T: TokenProvider,
{
    token_provider: T,
}

#[async_trait::async_trait]
impl<T> CredentialsProvider for ServiceAccountCredentials<T>
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

#[derive(Debug)]
struct ServiceAccountTokenProvider {
    key: ServiceAccountKey,
    scopes: String,
}

#[derive(serde::Serialize)]
struct JwtBearerRequest<'a> {
    grant_type: &'a str,
    assertion: &'a str,
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    token_type: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

impl ServiceAccountTokenProvider {
    fn assertion(&self) -> Result<String> {
        let signer = signer(&self.key.private_key)?;
        // The claims encode a unix timestamp, `Instant` has no epoch.
        let now = chrono::Utc::now() - CLOCK_SKEW_FUDGE;
        let claims = JwsClaims {
            iss: self.key.client_email.clone(),
            scope: self.scopes.clone(),
            aud: self.key.token_uri.clone(),
            exp: now + DEFAULT_TOKEN_TIMEOUT,
            iat: now,
        };
        let header = JwsHeader {
            alg: "RS256",
            typ: "JWT",
            kid: self.key.private_key_id.as_deref(),
        };
        let encoded_header_claims = format!("{}.{}", header.encode()?, claims.encode()?);
        let sig = signer
            .sign(encoded_header_claims.as_bytes())
            .map_err(errors::permanent)?;
        Ok(format!(
            "{encoded_header_claims}.{}",
            BASE64_URL_SAFE_NO_PAD.encode(sig)
        ))
    }
}

#[async_trait::async_trait]
impl TokenProvider for ServiceAccountTokenProvider {
    async fn token(&self) -> Result<Token> {
        let assertion = self.assertion()?;
        let response = Client::new()
            .post(&self.key.token_uri)
            .form(&JwtBearerRequest {
                grant_type: JWT_BEARER_GRANT_TYPE,
                assertion: &assertion,
            })
            .send()
            .await
            .map_err(errors::transient)?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.map_err(errors::transient)?;
            return Err(errors::from_http_error(status, body));
        }
        let response = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| CredentialsError::new(!e.is_decode(), e))?;
        Ok(Token {
            token: response.access_token,
            token_type: response.token_type,
            expires_at: response
                .expires_in
                .map(|d| Instant::now() + Duration::from_secs(d)),
        })
    }
}

// Creates a signer using the private key stored in the service account key.
fn signer(private_key: &str) -> Result<Box<dyn Signer>> {
    let key_provider = CryptoProvider::get_default().map_or_else(
        || rustls::crypto::aws_lc_rs::default_provider().key_provider,
        |p| p.key_provider,
    );
    let key = PrivateKeyDer::from_pem_slice(private_key.as_bytes()).map_err(|e| {
        errors::permanent_from_str(format!(
            "cannot find a PEM private key in the service account key: {e}"
        ))
    })?;
    let sk = key_provider
        .load_private_key(key)
        .map_err(errors::permanent)?;
    sk.choose_scheme(&[rustls::SignatureScheme::RSA_PKCS1_SHA256])
        .ok_or_else(|| {
            errors::permanent_from_str(
                "unable to choose the RSA_PKCS1_SHA256 signing scheme, the key does not support it",
            )
        })
}
