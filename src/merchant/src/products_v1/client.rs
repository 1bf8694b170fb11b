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

/// Implements a client for the Merchant Products API product inputs.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// use merchant_api::products_v1::client::ProductInputsService;
/// use merchant_api::products_v1::model::ProductInput;
/// let client = ProductInputsService::builder().build().await?;
/// let input = client
///     .insert_product_input("accounts/1234567890")
///     .set_data_source("accounts/1234567890/dataSources/1234567890")
///     .set_product_input(
///         ProductInput::default()
///             .set_offer_id("sku123")
///             .set_content_language("en")
///             .set_feed_label("US"),
///     )
///     .send()
///     .await?;
/// println!("{}", input.name);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// # });
/// ```
///
/// # Pooling and Cloning
///
/// `ProductInputsService` holds a connection pool internally, it is advised
/// to create one and reuse it. Clones share the pool and the credentials.
#[derive(Clone, Debug)]
pub struct ProductInputsService {
    inner: ReqwestClient,
}

impl ProductInputsService {
    /// Returns a builder for [ProductInputsService].
    pub fn builder() -> ProductInputsServiceBuilder {
        crate::client_builder::internal::new_builder(ProductInputsServiceFactory)
    }

    async fn new(config: ClientConfig) -> crate::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, crate::DEFAULT_ENDPOINT).await?;
        Ok(Self { inner })
    }

    /// Uploads a product input to your Merchant Center account.
    ///
    /// If an input with the same `contentLanguage`, `offerId`, and
    /// `dataSource` already exists, this method replaces that entry.
    ///
    /// After inserting, updating, or deleting a product input, it may take
    /// several minutes before the processed product can be retrieved.
    pub fn insert_product_input(&self, parent: impl Into<String>) -> builder::InsertProductInput {
        builder::InsertProductInput::new(self.inner.clone()).set_parent(parent)
    }

    /// Updates the existing product input in your Merchant Center account.
    pub fn update_product_input(&self) -> builder::UpdateProductInput {
        builder::UpdateProductInput::new(self.inner.clone())
    }

    /// Deletes a product input from your Merchant Center account.
    pub fn delete_product_input(&self, name: impl Into<String>) -> builder::DeleteProductInput {
        builder::DeleteProductInput::new(self.inner.clone()).set_name(name)
    }
}

/// The builder returned by [ProductInputsService::builder].
pub type ProductInputsServiceBuilder =
    crate::client_builder::ClientBuilder<ProductInputsServiceFactory>;

#[doc(hidden)]
pub struct ProductInputsServiceFactory;
impl ClientFactory for ProductInputsServiceFactory {
    type Client = ProductInputsService;
    async fn build(self, config: ClientConfig) -> crate::client_builder::Result<Self::Client> {
        Self::Client::new(config).await
    }
}
