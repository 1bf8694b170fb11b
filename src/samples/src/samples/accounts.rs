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

//! Samples for the `AccountsService`.

use super::account_name;
use crate::context::Context;
use crate::registry::Sample;
use anyhow::Context as _;
use futures::TryStreamExt;
use merchant_api::accounts_v1::builder::ListAccounts as ListAccountsBuilder;

pub const GET_ACCOUNT: &str = "accounts.accounts.v1.get_account";
pub const LIST_ACCOUNTS: &str = "accounts.accounts.v1.list_accounts";
pub const FILTER_ACCOUNTS: &str = "accounts.accounts.v1.filter_accounts";
pub const GET_ACCOUNT_BY_ALIAS: &str = "accounts.accounts.v1.get_account_by_alias";

/// The provider and alias used by [GetAccountByAlias].
pub const PROVIDER_ID: i64 = 123;
pub const ALIAS: &str = "alias";

/// The filter used by [FilterAccounts].
///
/// Matches the accounts with "store" in their name, that have a relationship
/// with the provider.
pub const ACCOUNTS_FILTER: &str = r#"accountName = "*store*" AND relationship(providerId = 123)"#;

/// Retrieves a specific account by its Merchant Center ID.
#[derive(Debug)]
pub struct GetAccount;

#[async_trait::async_trait]
impl Sample for GetAccount {
    fn description(&self) -> &str {
        "Sample retrieves specific account by Merchant ID."
    }

    async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let client = ctx.accounts_service().await?;
        let account = client
            .get_account(account_name())
            .send()
            .await
            .context("could not get account")?;
        println!("Successfully retrieved account: {account:#?}");
        Ok(())
    }
}

/// Lists every account accessible to the caller.
#[derive(Debug)]
pub struct ListAccounts;

#[async_trait::async_trait]
impl Sample for ListAccounts {
    fn description(&self) -> &str {
        "Lists all the accounts accessible to the authenticated user."
    }

    async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let client = ctx.accounts_service().await?;
        println!("Sending list accounts request:");
        print_accounts(client.list_accounts()).await
    }
}

/// Lists the accounts matching [ACCOUNTS_FILTER].
#[derive(Debug)]
pub struct FilterAccounts;

#[async_trait::async_trait]
impl Sample for FilterAccounts {
    fn description(&self) -> &str {
        "Lists the accounts that match a filter."
    }

    async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let client = ctx.accounts_service().await?;
        println!("Sending list accounts request with filter:");
        println!("{ACCOUNTS_FILTER}");
        print_accounts(client.list_accounts().set_filter(ACCOUNTS_FILTER)).await
    }
}

/// Retrieves an account using the alias assigned by a provider.
#[derive(Debug)]
pub struct GetAccountByAlias;

#[async_trait::async_trait]
impl Sample for GetAccountByAlias {
    fn description(&self) -> &str {
        "Retrieves an account using the alias assigned by a provider."
    }

    async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let client = ctx.accounts_service().await?;
        let name = alias_name(PROVIDER_ID, ALIAS);
        println!("Sending Get Account request:");
        let account = client
            .get_account(name)
            .send()
            .await
            .context("could not get account by alias")?;
        println!("Retrieved Account below");
        println!("{account:#?}");
        Ok(())
    }
}

// Accounts can be retrieved by `accounts/{provider}~{alias}`.
fn alias_name(provider_id: i64, alias: &str) -> String {
    format!("accounts/{provider_id}~{alias}")
}

async fn print_accounts(request: ListAccountsBuilder) -> anyhow::Result<()> {
    let mut pages = request.by_page();
    let mut count = 0_usize;
    while let Some(page) = pages.try_next().await.context("could not list accounts")? {
        for account in page.accounts {
            println!("{account:#?}");
            count += 1;
        }
    }
    println!("The following count of elements were returned: {count}");
    Ok(())
}
