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

//! Google Merchant API samples for Rust - Authentication Components
//!
//! This crate contains the types and functions used by the Merchant API
//! samples to authenticate. The Merchant API clients consume a
//! [credentials::Credentials] value and use it to authenticate each request.
//!
//! Most applications start with the [authenticator::Authenticator], which
//! looks for credentials in the environment and in the samples configuration
//! directory, and falls back to an interactive OAuth2 flow.
//!
//! [Authentication methods at Google] is a good introduction on the topic of
//! authentication for Google services. The guide also describes the common
//! terminology used with authentication, such as [Principals], [Tokens], and
//! [Credentials].
//!
//! [Authentication methods at Google]: https://cloud.google.com/docs/authentication
//! [Principals]: https://cloud.google.com/docs/authentication#principal
//! [Tokens]: https://cloud.google.com/docs/authentication#token
//! [Credentials]: https://cloud.google.com/docs/authentication#credentials

pub mod authenticator;

/// Errors created while building credentials.
pub mod build_errors;

/// Well-known scopes, file names, and endpoints.
pub mod constants;

pub mod credentials;

pub mod errors;

/// Types and functions to work with auth [Tokens].
///
/// [Tokens]: https://cloud.google.com/docs/authentication#token
pub mod token;

/// The token cache
pub(crate) mod token_cache;

/// Headers utility functions to work with [Credentials].
///
/// [Credentials]: https://cloud.google.com/docs/authentication#credentials
pub(crate) mod headers_util;

/// A `Result` alias where the `Err` case is
/// `merchant_auth::errors::CredentialsError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;

/// A `Result` alias where the `Err` case is
/// `merchant_auth::build_errors::Error`.
pub type BuildResult<T> = std::result::Result<T, build_errors::Error>;
