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

//! Finds credentials for the Merchant API samples.
//!
//! The [Authenticator] tries, in order:
//!
//! 1. [Application Default Credentials].
//! 2. A service account key in `service-account.json`.
//! 3. An OAuth2 client in `client-secrets.json`. The user token is read from
//!    `token.json` or, if there is none, obtained with the
//!    [installed application flow](crate::credentials::installed_flow) and
//!    saved to `token.json`.
//!
//! The files are in the configuration directory, by default
//! `$HOME/shopping-samples/content`.
//!
//! Only a missing file moves the search to the next source. A file that
//! exists but cannot be read or parsed is an error.
//!
//! [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials

use crate::BuildResult;
use crate::build_errors::Error as BuilderError;
use crate::constants::{
    CLIENT_SECRETS_FILE, CONFIG_DIR, CONTENT_SCOPE, SERVICE_ACCOUNT_FILE, TOKEN_FILE,
};
use crate::credentials::installed_flow::{
    ClientConfig, DEFAULT_FLOW_TIMEOUT, InstalledFlow, credentials_from_token, load_token,
    store_token,
};
use crate::credentials::{self, Credentials, service_account};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Entry point to find the credentials used by the samples.
///
/// # Example
/// ```no_run
/// # use merchant_auth::authenticator::Authenticator;
/// # tokio_test::block_on(async {
/// let credentials = Authenticator::builder().build().await?;
/// let headers = credentials.headers().await?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// # });
/// ```
#[derive(Debug)]
pub struct Authenticator;

impl Authenticator {
    /// Returns a builder with the default settings.
    pub fn builder() -> Builder {
        Builder::default()
    }
}

/// Configures the credential search.
#[derive(Debug)]
pub struct Builder {
    scopes: Vec<String>,
    config_dir: Option<PathBuf>,
    flow_timeout: Duration,
    application_default: bool,
    open_browser: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            scopes: vec![CONTENT_SCOPE.to_string()],
            config_dir: None,
            flow_timeout: DEFAULT_FLOW_TIMEOUT,
            application_default: true,
            open_browser: true,
        }
    }
}

impl Builder {
    /// Sets the scopes requested by the credentials.
    ///
    /// Defaults to `https://www.googleapis.com/auth/content`.
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets the directory holding the credential files.
    pub fn with_config_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    /// Sets how long the OAuth2 flow waits for the user.
    pub fn with_flow_timeout(mut self, timeout: Duration) -> Self {
        self.flow_timeout = timeout;
        self
    }

    /// Enables or disables the Application Default Credentials lookup.
    ///
    /// Enabled by default.
    pub fn with_application_default(mut self, enabled: bool) -> Self {
        self.application_default = enabled;
        self
    }

    /// Controls whether the OAuth2 flow opens a browser.
    pub fn with_browser(mut self, open_browser: bool) -> Self {
        self.open_browser = open_browser;
        self
    }

    /// Returns the credentials from the first available source.
    ///
    /// # Errors
    ///
    /// Fails with an error where [is_no_credentials] is true if no source is
    /// available. The error lists the files checked.
    ///
    /// [is_no_credentials]: crate::build_errors::Error::is_no_credentials
    pub async fn build(self) -> BuildResult<Credentials> {
        if self.application_default {
            match credentials::Builder::default()
                .with_scopes(self.scopes.clone())
                .build()
                .await
            {
                Ok(credentials) => {
                    tracing::info!("Using Application Default Credentials.");
                    return Ok(credentials);
                }
                Err(e) => tracing::debug!("application default credentials not available: {e}"),
            }
        }

        let config_dir = match self.config_dir.clone() {
            Some(dir) => dir,
            None => default_config_dir(home_dir())?,
        };

        let service_account_path = config_dir.join(SERVICE_ACCOUNT_FILE);
        if service_account_path.exists() {
            return self.service_account(&service_account_path).await;
        }

        let client_secrets_path = config_dir.join(CLIENT_SECRETS_FILE);
        if client_secrets_path.exists() {
            return self
                .installed_app(&client_secrets_path, &config_dir.join(TOKEN_FILE))
                .await;
        }

        Err(BuilderError::no_credentials(vec![
            service_account_path,
            client_secrets_path,
        ]))
    }

    async fn service_account(&self, path: &Path) -> BuildResult<Credentials> {
        tracing::info!("Loading service account from {}.", path.display());
        let json = credentials::load_json(path).await?;
        let email = json
            .get("client_email")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let credentials = service_account::Builder::new(json)
            .with_scopes(self.scopes.clone())
            .build()?;
        tracing::info!("Service account credentials for user {email} found.");
        Ok(credentials)
    }

    async fn installed_app(
        &self,
        client_secrets_path: &Path,
        token_path: &Path,
    ) -> BuildResult<Credentials> {
        tracing::info!(
            "Loading OAuth2 client from {}.",
            client_secrets_path.display()
        );
        let config = ClientConfig::from_file(client_secrets_path).await?;
        tracing::info!(
            "OAuth2 client credentials for application {} found.",
            config.client_id
        );

        let token = match load_token(token_path).await {
            Some(token) => {
                tracing::info!(
                    "Using token stored in {} for authentication.",
                    token_path.display()
                );
                token
            }
            None => {
                tracing::info!(
                    "No stored token found in {}, re-authenticating.",
                    token_path.display()
                );
                let token = InstalledFlow::new(config.clone(), self.scopes.clone())
                    .with_timeout(self.flow_timeout)
                    .with_browser(self.open_browser)
                    .run()
                    .await?;
                store_token(token_path, &token).await?;
                token
            }
        };
        Ok(credentials_from_token(&config, token))
    }
}

fn home_dir() -> Option<OsString> {
    std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"))
}

fn default_config_dir(home: Option<OsString>) -> BuildResult<PathBuf> {
    let home = home
        .filter(|h| !h.is_empty())
        .ok_or_else(|| BuilderError::loading("cannot determine the home directory"))?;
    Ok(PathBuf::from(home).join(CONFIG_DIR))
}
