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

//! Clients for the Merchant Products API, version 1.
//!
//! The [ProductInputsService][client::ProductInputsService] inserts, updates
//! and deletes the product inputs of a data source.

pub mod builder;
pub mod client;
pub mod model;

pub(crate) const PATH_PREFIX: &str = "/products/v1";
