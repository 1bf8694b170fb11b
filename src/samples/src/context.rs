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

//! The configuration shared by all the samples in one run.

use anyhow::Context as _;
use merchant_api::accounts_v1::client::{AccountsService, DeveloperRegistrationService};
use merchant_api::client_builder::ClientBuilder;
use merchant_api::products_v1::client::ProductInputsService;
use merchant_auth::authenticator::Authenticator;
use merchant_auth::credentials::Credentials;
use std::path::PathBuf;

/// The user agent sent by the sample clients.
pub const USER_AGENT: &str = concat!("merchant-samples-rust/", env!("CARGO_PKG_VERSION"));

/// Holds the configuration used by the samples to create clients.
///
/// The default context authenticates with the
/// [Authenticator][merchant_auth::authenticator::Authenticator] and sends
/// requests to the production endpoint.
#[derive(Clone, Debug, Default)]
pub struct Context {
    config_dir: Option<PathBuf>,
    endpoint: Option<String>,
    credentials: Option<Credentials>,
}

impl Context {
    /// Creates a context with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the directory with the credential files.
    pub fn with_config_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    /// Overrides the Merchant API endpoint.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Uses `credentials` instead of running the [Authenticator].
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.credentials = Some(v.into());
        self
    }

    /// Returns the credentials for this run.
    pub async fn credentials(&self) -> anyhow::Result<Credentials> {
        if let Some(c) = &self.credentials {
            return Ok(c.clone());
        }
        let builder = Authenticator::builder();
        let builder = match &self.config_dir {
            Some(dir) => builder.with_config_dir(dir),
            None => builder,
        };
        let credentials = builder.build().await.context("failed to authenticate")?;
        Ok(credentials)
    }

    /// Creates an [AccountsService] client.
    pub async fn accounts_service(&self) -> anyhow::Result<AccountsService> {
        let builder = self.configure(AccountsService::builder()).await?;
        builder
            .build()
            .await
            .context("could not create accounts client")
    }

    /// Creates a [DeveloperRegistrationService] client.
    pub async fn developer_registration_service(
        &self,
    ) -> anyhow::Result<DeveloperRegistrationService> {
        let builder = self.configure(DeveloperRegistrationService::builder()).await?;
        builder
            .build()
            .await
            .context("could not create developer registration client")
    }

    /// Creates a [ProductInputsService] client.
    pub async fn product_inputs_service(&self) -> anyhow::Result<ProductInputsService> {
        let builder = self.configure(ProductInputsService::builder()).await?;
        builder
            .build()
            .await
            .context("could not create product inputs client")
    }

    async fn configure<F>(&self, builder: ClientBuilder<F>) -> anyhow::Result<ClientBuilder<F>> {
        let builder = builder
            .with_credentials(self.credentials().await?)
            .with_user_agent(USER_AGENT);
        Ok(match &self.endpoint {
            Some(e) => builder.with_endpoint(e),
            None => builder,
        })
    }
}
