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

//! Samples for the `DeveloperRegistrationService`.

use super::account_name;
use crate::context::Context;
use crate::registry::Sample;
use anyhow::Context as _;

pub const REGISTER_GCP: &str = "accounts.developerregistration.v1.register_gcp";
pub const GET_DEVELOPER_REGISTRATION: &str =
    "accounts.developerregistration.v1.get_developer_registration";
pub const UNREGISTER_GCP: &str = "accounts.developerregistration.v1.unregister_gcp";

/// The developer email registered by [RegisterGcp].
pub const DEVELOPER_EMAIL: &str = "YOUR_EMAIL_HERE";

/// Registers the calling GCP project with a developer email.
#[derive(Debug)]
pub struct RegisterGcp;

#[async_trait::async_trait]
impl Sample for RegisterGcp {
    fn description(&self) -> &str {
        "Registers the GCP project with a developer email."
    }

    async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let client = ctx.developer_registration_service().await?;
        println!("Sending RegisterGcp request:");
        let response = client
            .register_gcp(registration_name())
            .set_developer_email(DEVELOPER_EMAIL)
            .send()
            .await
            .context("could not register the GCP project")?;
        println!("Received response: {response:#?}");
        Ok(())
    }
}

/// Retrieves the developer registration of the account.
#[derive(Debug)]
pub struct GetDeveloperRegistration;

#[async_trait::async_trait]
impl Sample for GetDeveloperRegistration {
    fn description(&self) -> &str {
        "Retrieves the developer registration of the Merchant Center account."
    }

    async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let client = ctx.developer_registration_service().await?;
        println!("Sending GetDeveloperRegistration request:");
        let response = client
            .get_developer_registration(registration_name())
            .send()
            .await
            .context("could not get the developer registration")?;
        println!("Received response: {response:#?}");
        Ok(())
    }
}

/// Unregisters the calling GCP project.
#[derive(Debug)]
pub struct UnregisterGcp;

#[async_trait::async_trait]
impl Sample for UnregisterGcp {
    fn description(&self) -> &str {
        "Unregisters the GCP project from the Merchant Center account."
    }

    async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let client = ctx.developer_registration_service().await?;
        println!("Sending UnregisterGcp request:");
        client
            .unregister_gcp(registration_name())
            .send()
            .await
            .context("could not unregister the GCP project")?;
        println!("Successfully unregistered the GCP project");
        Ok(())
    }
}

fn registration_name() -> String {
    format!("{}/developerRegistration", account_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name() {
        assert_eq!(
            registration_name(),
            "accounts/1234567890/developerRegistration"
        );
    }
}
