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

//! Request builders for the Merchant Products API.

use super::PATH_PREFIX;
use super::model;
use crate::Result;
use crate::http::{NoBody, ReqwestClient};
use crate::path_parameter;
use crate::wkt::{Empty, FieldMask};

/// The request builder for [ProductInputsService::insert_product_input][crate::products_v1::client::ProductInputsService::insert_product_input] calls.
#[derive(Clone, Debug)]
pub struct InsertProductInput {
    stub: ReqwestClient,
    request: model::InsertProductInputRequest,
}

impl InsertProductInput {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::InsertProductInputRequest::default(),
        }
    }

    /// Sets the value of [parent][model::InsertProductInputRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.request.parent = v.into();
        self
    }

    /// Sets the value of [product_input][model::InsertProductInputRequest::product_input].
    pub fn set_product_input(mut self, v: model::ProductInput) -> Self {
        self.request.product_input = v;
        self
    }

    /// Sets the value of [data_source][model::InsertProductInputRequest::data_source].
    pub fn set_data_source<T: Into<String>>(mut self, v: T) -> Self {
        self.request.data_source = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::ProductInput> {
        let parent = path_parameter::required(&self.request.parent, "parent")?;
        let builder = self
            .stub
            .builder(
                reqwest::Method::POST,
                format!("{PATH_PREFIX}/{parent}/productInputs:insert"),
            )
            .query(&[("dataSource", &self.request.data_source)]);
        self.stub
            .execute(builder, Some(&self.request.product_input))
            .await
    }
}

/// The request builder for [ProductInputsService::update_product_input][crate::products_v1::client::ProductInputsService::update_product_input] calls.
#[derive(Clone, Debug)]
pub struct UpdateProductInput {
    stub: ReqwestClient,
    request: model::UpdateProductInputRequest,
}

impl UpdateProductInput {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::UpdateProductInputRequest::default(),
        }
    }

    /// Sets the value of [product_input][model::UpdateProductInputRequest::product_input].
    pub fn set_product_input(mut self, v: model::ProductInput) -> Self {
        self.request.product_input = v;
        self
    }

    /// Sets the value of [update_mask][model::UpdateProductInputRequest::update_mask].
    pub fn set_update_mask(mut self, v: FieldMask) -> Self {
        self.request.update_mask = Some(v);
        self
    }

    /// Sets the value of [data_source][model::UpdateProductInputRequest::data_source].
    pub fn set_data_source<T: Into<String>>(mut self, v: T) -> Self {
        self.request.data_source = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::ProductInput> {
        let name =
            path_parameter::required(&self.request.product_input.name, "product_input.name")?;
        let mut builder = self
            .stub
            .builder(reqwest::Method::PATCH, format!("{PATH_PREFIX}/{name}"));
        if let Some(mask) = &self.request.update_mask {
            builder = builder.query(&[("updateMask", mask.to_query())]);
        }
        builder = builder.query(&[("dataSource", &self.request.data_source)]);
        self.stub
            .execute(builder, Some(&self.request.product_input))
            .await
    }
}

/// The request builder for [ProductInputsService::delete_product_input][crate::products_v1::client::ProductInputsService::delete_product_input] calls.
#[derive(Clone, Debug)]
pub struct DeleteProductInput {
    stub: ReqwestClient,
    request: model::DeleteProductInputRequest,
}

impl DeleteProductInput {
    pub(crate) fn new(stub: ReqwestClient) -> Self {
        Self {
            stub,
            request: model::DeleteProductInputRequest::default(),
        }
    }

    /// Sets the value of [name][model::DeleteProductInputRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.request.name = v.into();
        self
    }

    /// Sets the value of [data_source][model::DeleteProductInputRequest::data_source].
    pub fn set_data_source<T: Into<String>>(mut self, v: T) -> Self {
        self.request.data_source = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Empty> {
        let name = path_parameter::required(&self.request.name, "name")?;
        let builder = self
            .stub
            .builder(reqwest::Method::DELETE, format!("{PATH_PREFIX}/{name}"))
            .query(&[("dataSource", &self.request.data_source)]);
        self.stub.execute(builder, None::<NoBody>).await
    }
}
