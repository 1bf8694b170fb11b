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

//! The sample catalog.
//!
//! The samples use placeholder values for account, data source and product
//! identifiers. Replace them with your own values before running a sample.

pub mod accounts;
pub mod developer_registration;
pub mod product_inputs;

use crate::registry::{Registry, RegistryError};

/// The Merchant Center account used by the samples.
pub const ACCOUNT_ID: &str = "1234567890";

/// The data source used by the product input samples.
pub const DATA_SOURCE_ID: &str = "1234567890";

/// Registers every sample in the catalog.
///
/// Fails if two samples use the same key.
pub fn register_all(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.add(accounts::GET_ACCOUNT, accounts::GetAccount)?;
    registry.add(accounts::LIST_ACCOUNTS, accounts::ListAccounts)?;
    registry.add(accounts::FILTER_ACCOUNTS, accounts::FilterAccounts)?;
    registry.add(accounts::GET_ACCOUNT_BY_ALIAS, accounts::GetAccountByAlias)?;
    registry.add(
        developer_registration::REGISTER_GCP,
        developer_registration::RegisterGcp,
    )?;
    registry.add(
        developer_registration::GET_DEVELOPER_REGISTRATION,
        developer_registration::GetDeveloperRegistration,
    )?;
    registry.add(
        developer_registration::UNREGISTER_GCP,
        developer_registration::UnregisterGcp,
    )?;
    registry.add(
        product_inputs::INSERT_PRODUCT_INPUT,
        product_inputs::InsertProductInput,
    )?;
    registry.add(
        product_inputs::INSERT_PRODUCT_INPUT_ASYNC,
        product_inputs::InsertProductInputAsync,
    )?;
    registry.add(
        product_inputs::UPDATE_PRODUCT_INPUT,
        product_inputs::UpdateProductInput,
    )?;
    registry.add(
        product_inputs::DELETE_PRODUCT_INPUT,
        product_inputs::DeleteProductInput,
    )?;
    Ok(())
}

pub(crate) fn account_name() -> String {
    format!("accounts/{ACCOUNT_ID}")
}

pub(crate) fn data_source_name() -> String {
    format!("accounts/{ACCOUNT_ID}/dataSources/{DATA_SOURCE_ID}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn register_all_keys() -> anyhow::Result<()> {
        let mut registry = Registry::new();
        register_all(&mut registry)?;
        let got = registry.list().into_iter().collect::<BTreeSet<_>>();
        let want = BTreeSet::from([
            "accounts.accounts.v1.filter_accounts",
            "accounts.accounts.v1.get_account",
            "accounts.accounts.v1.get_account_by_alias",
            "accounts.accounts.v1.list_accounts",
            "accounts.developerregistration.v1.get_developer_registration",
            "accounts.developerregistration.v1.register_gcp",
            "accounts.developerregistration.v1.unregister_gcp",
            "products.productinputs.v1.delete_product_input",
            "products.productinputs.v1.insert_product_input",
            "products.productinputs.v1.insert_product_input_async",
            "products.productinputs.v1.update_product_input",
        ]);
        assert_eq!(got, want);
        assert_eq!(registry.len(), want.len());
        Ok(())
    }

    #[test]
    fn register_all_twice() -> anyhow::Result<()> {
        let mut registry = Registry::new();
        register_all(&mut registry)?;
        let err = register_all(&mut registry).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateKey(_)), "{err:?}");
        Ok(())
    }

    #[test]
    fn descriptions() -> anyhow::Result<()> {
        let registry = Registry::with_all_samples()?;
        for (key, description) in registry.entries() {
            assert!(!description.is_empty(), "{key}");
        }
        Ok(())
    }

    #[test]
    fn names() {
        assert_eq!(account_name(), "accounts/1234567890");
        assert_eq!(
            data_source_name(),
            "accounts/1234567890/dataSources/1234567890"
        );
    }
}
