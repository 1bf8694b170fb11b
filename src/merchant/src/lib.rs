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

//! Google Merchant API samples for Rust - REST clients
//!
//! This crate contains typed clients for the subset of the [Merchant API]
//! used by the samples:
//!
//! * [accounts_v1]: the `AccountsService` and the
//!   `DeveloperRegistrationService`.
//! * [products_v1]: the `ProductInputsService`.
//!
//! The clients send JSON over HTTP/1.1 and authenticate each request with a
//! [Credentials][merchant_auth::credentials::Credentials] value.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use merchant_api::accounts_v1::client::AccountsService;
//! let client = AccountsService::builder().build().await?;
//! let account = client.get_account("accounts/1234567890").send().await?;
//! println!("{account:?}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! # });
//! ```
//!
//! [Merchant API]: https://developers.google.com/merchant/api

pub mod accounts_v1;
pub mod client_builder;
pub mod error;
pub mod gtype;
pub mod products_v1;
pub mod wkt;

pub(crate) mod http;
pub(crate) mod path_parameter;

/// The default endpoint for the Merchant API.
pub const DEFAULT_ENDPOINT: &str = "https://merchantapi.googleapis.com";

/// The result type for the Merchant API clients.
pub type Result<T> = std::result::Result<T, crate::error::Error>;
