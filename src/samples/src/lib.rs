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

//! Google Merchant API samples for Rust - sample catalog
//!
//! Each sample shows how to call one Merchant API method. The samples are
//! collected in a [Registry][registry::Registry], and the `merchant-samples`
//! binary runs one of them by key:
//!
//! ```sh
//! merchant-samples accounts.accounts.v1.get_account
//! ```

pub mod batch;
pub mod context;
pub mod dispatch;
pub mod registry;
pub mod samples;
