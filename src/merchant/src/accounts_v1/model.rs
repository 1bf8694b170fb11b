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

//! The messages used by the Merchant Accounts API.

use serde::{Deserialize, Serialize};

/// The `Account` message represents a business's account within Shopping
/// Ads. It's the primary entity for managing product data, settings, and
/// interactions with Google's services and external providers.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Account {
    /// The resource name of the account.
    /// Format: `accounts/{account}`
    pub name: String,

    /// The ID of the account.
    #[serde_as(as = "serde_with::PickFirst<(serde_with::DisplayFromStr, _)>")]
    pub account_id: i64,

    /// A human-readable name of the account.
    pub account_name: String,

    /// Whether this account contains adult content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adult_content: Option<bool>,

    /// Whether this is a test account.
    pub test_account: bool,

    /// The time zone of the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,

    /// The account's BCP-47 language code, such as `en-US` or `sr-Latn`.
    pub language_code: String,
}

impl Account {
    /// Sets the value of [name][Account::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [account_id][Account::account_id].
    pub fn set_account_id(mut self, v: i64) -> Self {
        self.account_id = v;
        self
    }

    /// Sets the value of [account_name][Account::account_name].
    pub fn set_account_name<T: Into<String>>(mut self, v: T) -> Self {
        self.account_name = v.into();
        self
    }

    /// Sets the value of [time_zone][Account::time_zone].
    pub fn set_time_zone(mut self, v: TimeZone) -> Self {
        self.time_zone = Some(v);
        self
    }

    /// Sets the value of [language_code][Account::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }
}

/// Represents a time zone from the IANA Time Zone Database.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TimeZone {
    /// IANA Time Zone Database time zone, e.g. "America/New_York".
    pub id: String,

    /// IANA Time Zone Database version number, e.g. "2019a".
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl TimeZone {
    /// Sets the value of [id][TimeZone::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// Request message for the `GetAccount` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetAccountRequest {
    /// The name of the account to retrieve.
    /// Format: `accounts/{account}`
    pub name: String,
}

/// Request message for the `ListAccounts` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAccountsRequest {
    /// The maximum number of accounts to return. The service uses its own
    /// default when this is zero.
    pub page_size: i32,

    /// A page token, received from a previous `ListAccounts` call.
    pub page_token: String,

    /// Returns only accounts that match the [filter].
    ///
    /// [filter]: https://developers.google.com/merchant/api/guides/accounts/filter
    pub filter: String,
}

/// Response message for the `ListAccounts` method.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListAccountsResponse {
    /// The accounts matching the `ListAccountsRequest`.
    pub accounts: Vec<Account>,

    /// A token, which can be sent as `page_token` to retrieve the next page.
    /// If this field is omitted, there are no subsequent pages.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

impl ListAccountsResponse {
    /// Sets the value of [accounts][ListAccountsResponse::accounts].
    pub fn set_accounts<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = Account>,
    {
        self.accounts = v.into_iter().collect();
        self
    }

    /// Sets the value of [next_page_token][ListAccountsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

/// Represents a developer registration owned by a Merchant account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeveloperRegistration {
    /// The `name` (ID) of the developer registration.
    /// Format: `accounts/{account}/developerRegistration`
    pub name: String,

    /// The GCP ids attached to this developer registration.
    pub gcp_ids: Vec<String>,
}

impl DeveloperRegistration {
    /// Sets the value of [name][DeveloperRegistration::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [gcp_ids][DeveloperRegistration::gcp_ids].
    pub fn set_gcp_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.gcp_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Request message for the `RegisterGcp` method.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct RegisterGcpRequest {
    /// The name of the developer registration to be created for the merchant
    /// account that the GCP will be registered with.
    /// Format: `accounts/{account}/developerRegistration`
    #[serde(skip)]
    pub name: String,

    /// Immutable. If the developer email provided is associated with a user
    /// in the merchant account provided, the user will be updated to have
    /// "API developer" access type and the email preference corresponding to
    /// that user will be updated to have the new "API notifications"
    /// preference. Otherwise, the email is added as an API contact.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub developer_email: String,
}

/// Request message for the `GetDeveloperRegistration` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetDeveloperRegistrationRequest {
    /// The `name` (ID) of the developer registration.
    pub name: String,
}

/// Request message for the `UnregisterGcp` method.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[non_exhaustive]
pub struct UnregisterGcpRequest {
    /// The name of the developer registration to be deleted.
    /// Format: `accounts/{account}/developerRegistration`
    #[serde(skip)]
    pub name: String,
}
