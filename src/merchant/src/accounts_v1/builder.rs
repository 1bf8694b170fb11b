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

//! Request builders for the Merchant Accounts API.
//!
//! Each builder is returned by a method of the corresponding client, sets the
//! fields of one request, and issues it with `send()`.

use super::PATH_PREFIX;
use super::model;
use crate::Result;
use crate::http::{NoBody, ReqwestClient};
use crate::path_parameter;
use crate::wkt::Empty;

/// The request builder for [AccountsService::get_account][crate::accounts_v1::client::AccountsService::get_account] calls.
#[derive(Clone, Debug)]
pub struct GetAccount {
    stub: ReqwestClient,
    request: model::GetAccountRequest,
}

impl GetAccount {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::GetAccountRequest::default(),
        }
    }

    /// Sets the value of [name][model::GetAccountRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.request.name = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::Account> {
        let name = path_parameter::required(&self.request.name, "name")?;
        let builder = self
            .stub
            .builder(reqwest::Method::GET, format!("{PATH_PREFIX}/{name}"));
        self.stub.execute(builder, None::<NoBody>).await
    }
}

/// The request builder for [AccountsService::list_accounts][crate::accounts_v1::client::AccountsService::list_accounts] calls.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// use futures::TryStreamExt;
/// use merchant_api::accounts_v1::client::AccountsService;
/// let client = AccountsService::builder().build().await?;
/// let mut pages = client.list_accounts().set_page_size(100).by_page();
/// while let Some(page) = pages.try_next().await? {
///     for account in page.accounts {
///         println!("{account:?}");
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct ListAccounts {
    stub: ReqwestClient,
    request: model::ListAccountsRequest,
}

impl ListAccounts {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::ListAccountsRequest::default(),
        }
    }

    /// Sets the value of [page_size][model::ListAccountsRequest::page_size].
    pub fn set_page_size(mut self, v: i32) -> Self {
        self.request.page_size = v;
        self
    }

    /// Sets the value of [page_token][model::ListAccountsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.request.page_token = v.into();
        self
    }

    /// Sets the value of [filter][model::ListAccountsRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.request.filter = v.into();
        self
    }

    /// Sends the request, returning a single page of results.
    pub async fn send(self) -> Result<model::ListAccountsResponse> {
        let mut builder = self
            .stub
            .builder(reqwest::Method::GET, format!("{PATH_PREFIX}/accounts"));
        if self.request.page_size > 0 {
            builder = builder.query(&[("pageSize", self.request.page_size)]);
        }
        if !self.request.page_token.is_empty() {
            builder = builder.query(&[("pageToken", &self.request.page_token)]);
        }
        if !self.request.filter.is_empty() {
            builder = builder.query(&[("filter", &self.request.filter)]);
        }
        self.stub.execute(builder, None::<NoBody>).await
    }

    /// Streams each page in the collection.
    ///
    /// The stream follows `next_page_token` until the service returns an
    /// empty token, and stops after the first error.
    pub fn by_page(
        self,
    ) -> impl futures::Stream<Item = Result<model::ListAccountsResponse>> + Unpin {
        let seed = Some(self.request.page_token.clone());
        Box::pin(futures::stream::unfold(seed, move |state| {
            let builder = self.clone();
            async move {
                let token = state?;
                match builder.set_page_token(token).send().await {
                    Ok(page) => {
                        let next = Some(page.next_page_token.clone()).filter(|t| !t.is_empty());
                        Some((Ok(page), next))
                    }
                    Err(e) => Some((Err(e), None)),
                }
            }
        }))
    }
}

/// The request builder for [DeveloperRegistrationService::register_gcp][crate::accounts_v1::client::DeveloperRegistrationService::register_gcp] calls.
#[derive(Clone, Debug)]
pub struct RegisterGcp {
    stub: ReqwestClient,
    request: model::RegisterGcpRequest,
}

impl RegisterGcp {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::RegisterGcpRequest::default(),
        }
    }

    /// Sets the value of [name][model::RegisterGcpRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.request.name = v.into();
        self
    }

    /// Sets the value of [developer_email][model::RegisterGcpRequest::developer_email].
    pub fn set_developer_email<T: Into<String>>(mut self, v: T) -> Self {
        self.request.developer_email = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::DeveloperRegistration> {
        let name = path_parameter::required(&self.request.name, "name")?;
        let builder = self.stub.builder(
            reqwest::Method::POST,
            format!("{PATH_PREFIX}/{name}:registerGcp"),
        );
        self.stub.execute(builder, Some(&self.request)).await
    }
}

/// The request builder for [DeveloperRegistrationService::get_developer_registration][crate::accounts_v1::client::DeveloperRegistrationService::get_developer_registration] calls.
#[derive(Clone, Debug)]
pub struct GetDeveloperRegistration {
    stub: ReqwestClient,
    request: model::GetDeveloperRegistrationRequest,
}

impl GetDeveloperRegistration {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::GetDeveloperRegistrationRequest::default(),
        }
    }

    /// Sets the value of [name][model::GetDeveloperRegistrationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.request.name = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::DeveloperRegistration> {
        let name = path_parameter::required(&self.request.name, "name")?;
        let builder = self
            .stub
            .builder(reqwest::Method::GET, format!("{PATH_PREFIX}/{name}"));
        self.stub.execute(builder, None::<NoBody>).await
    }
}

/// The request builder for [DeveloperRegistrationService::unregister_gcp][crate::accounts_v1::client::DeveloperRegistrationService::unregister_gcp] calls.
#[derive(Clone, Debug)]
pub struct UnregisterGcp {
    stub: ReqwestClient,
    request: model::UnregisterGcpRequest,
}

impl UnregisterGcp {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::UnregisterGcpRequest::default(),
        }
    }

    /// Sets the value of [name][model::UnregisterGcpRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.request.name = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Empty> {
        let name = path_parameter::required(&self.request.name, "name")?;
        let builder = self.stub.builder(
            reqwest::Method::POST,
            format!("{PATH_PREFIX}/{name}:unregisterGcp"),
        );
        self.stub.execute(builder, Some(&self.request)).await
    }
}
