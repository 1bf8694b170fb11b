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

//! Clients for the Merchant Accounts API, version 1.
//!
//! * [AccountsService][client::AccountsService] reads and lists Merchant
//!   Center accounts.
//! * [DeveloperRegistrationService][client::DeveloperRegistrationService]
//!   registers a Google Cloud project with a Merchant Center account.

pub mod builder;
pub mod client;
pub mod model;

pub(crate) const PATH_PREFIX: &str = "/accounts/v1";
