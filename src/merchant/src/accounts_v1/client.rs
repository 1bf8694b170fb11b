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

use super::builder;
use crate::client_builder::internal::{ClientConfig, ClientFactory};
use crate::http::ReqwestClient;

/// Implements a client for the Merchant Accounts API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// use merchant_api::accounts_v1::client::AccountsService;
/// let client = AccountsService::builder().build().await?;
/// let account = client.get_account("accounts/1234567890").send().await?;
/// println!("{account:?}");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// # });
/// ```
///
/// # Pooling and Cloning
///
/// `AccountsService` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `AccountsService` in an
/// [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct AccountsService {
    inner: ReqwestClient,
}

impl AccountsService {
    /// Returns a builder for [AccountsService].
    pub fn builder() -> AccountsServiceBuilder {
        crate::client_builder::internal::new_builder(AccountsServiceFactory)
    }

    async fn new(config: ClientConfig) -> crate::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, crate::DEFAULT_ENDPOINT).await?;
        Ok(Self { inner })
    }

    /// Retrieves an account from your Merchant Center account.
    pub fn get_account(&self, name: impl Into<String>) -> builder::GetAccount {
        builder::GetAccount::new(self.inner.clone()).set_name(name)
    }

    /// Lists accounts accessible to the calling user and matching the
    /// constraints of the request, such as page size or filters.
    pub fn list_accounts(&self) -> builder::ListAccounts {
        builder::ListAccounts::new(self.inner.clone())
    }
}

/// The builder returned by [AccountsService::builder].
pub type AccountsServiceBuilder = crate::client_builder::ClientBuilder<AccountsServiceFactory>;

#[doc(hidden)]
pub struct AccountsServiceFactory;
impl ClientFactory for AccountsServiceFactory {
    type Client = AccountsService;
    async fn build(self, config: ClientConfig) -> crate::client_builder::Result<Self::Client> {
        Self::Client::new(config).await
    }
}

/// Implements a client for the Merchant Accounts API developer registration
/// methods.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// use merchant_api::accounts_v1::client::DeveloperRegistrationService;
/// let client = DeveloperRegistrationService::builder().build().await?;
/// let registration = client
///     .register_gcp("accounts/1234567890/developerRegistration")
///     .set_developer_email("developer@example.com")
///     .send()
///     .await?;
/// println!("{registration:?}");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct DeveloperRegistrationService {
    inner: ReqwestClient,
}

impl DeveloperRegistrationService {
    /// Returns a builder for [DeveloperRegistrationService].
    pub fn builder() -> DeveloperRegistrationServiceBuilder {
        crate::client_builder::internal::new_builder(DeveloperRegistrationServiceFactory)
    }

    async fn new(config: ClientConfig) -> crate::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, crate::DEFAULT_ENDPOINT).await?;
        Ok(Self { inner })
    }

    /// Registers the GCP used for the API call to the shopping account
    /// passed in the request.
    pub fn register_gcp(&self, name: impl Into<String>) -> builder::RegisterGcp {
        builder::RegisterGcp::new(self.inner.clone()).set_name(name)
    }

    /// Retrieves a developer registration for a merchant.
    pub fn get_developer_registration(
        &self,
        name: impl Into<String>,
    ) -> builder::GetDeveloperRegistration {
        builder::GetDeveloperRegistration::new(self.inner.clone()).set_name(name)
    }

    /// Unregisters the GCP project from the shopping account.
    pub fn unregister_gcp(&self, name: impl Into<String>) -> builder::UnregisterGcp {
        builder::UnregisterGcp::new(self.inner.clone()).set_name(name)
    }
}

/// The builder returned by [DeveloperRegistrationService::builder].
pub type DeveloperRegistrationServiceBuilder =
    crate::client_builder::ClientBuilder<DeveloperRegistrationServiceFactory>;

#[doc(hidden)]
pub struct DeveloperRegistrationServiceFactory;
impl ClientFactory for DeveloperRegistrationServiceFactory {
    type Client = DeveloperRegistrationService;
    async fn build(self, config: ClientConfig) -> crate::client_builder::Result<Self::Client> {
        Self::Client::new(config).await
    }
}
