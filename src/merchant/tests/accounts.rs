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

mod fake_service;

#[cfg(test)]
mod tests {
    use super::fake_service;
    use axum::http::{Method, StatusCode};
    use futures::TryStreamExt;
    use merchant_api::accounts_v1::client::{AccountsService, DeveloperRegistrationService};
    use merchant_api::accounts_v1::model::{Account, DeveloperRegistration};
    use merchant_api::error::rpc::Code;
    use merchant_auth::credentials::testing::{error_credentials, test_credentials};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    async fn accounts_client(endpoint: &str) -> anyhow::Result<AccountsService> {
        let client = AccountsService::builder()
            .with_endpoint(endpoint)
            .with_credentials(test_credentials())
            .build()
            .await?;
        Ok(client)
    }

    async fn registration_client(endpoint: &str) -> anyhow::Result<DeveloperRegistrationService> {
        let client = DeveloperRegistrationService::builder()
            .with_endpoint(endpoint)
            .with_credentials(test_credentials())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn get_account() -> TestResult {
        let server = fake_service::start([(
            StatusCode::OK,
            json!({
                "name": "accounts/1234567890",
                "accountId": "1234567890",
                "accountName": "Test Store",
                "languageCode": "en-US",
            }),
        )])
        .await?;
        let client = accounts_client(&server.endpoint).await?;
        let account = client.get_account("accounts/1234567890").send().await?;
        assert_eq!(
            account,
            Account::default()
                .set_name("accounts/1234567890")
                .set_account_id(1234567890)
                .set_account_name("Test Store")
                .set_language_code("en-US")
        );

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/accounts/v1/accounts/1234567890");
        assert_eq!(
            request.authorization.as_deref(),
            Some("Bearer test-only-token")
        );
        assert_eq!(request.user_agent, None);
        assert!(request.body.is_none(), "{request:?}");
        Ok(())
    }

    #[tokio::test]
    async fn get_account_by_alias() -> TestResult {
        let server =
            fake_service::start([(StatusCode::OK, json!({"name": "accounts/555"}))]).await?;
        let client = accounts_client(&server.endpoint).await?;
        let account = client.get_account("accounts/123~alias").send().await?;
        assert_eq!(account.name, "accounts/555");
        assert_eq!(server.requests()[0].path, "/accounts/v1/accounts/123~alias");
        Ok(())
    }

    #[tokio::test]
    async fn get_account_not_found() -> TestResult {
        let server = fake_service::start([(
            StatusCode::NOT_FOUND,
            json!({"error": {
                "code": 404,
                "message": "Account not found.",
                "status": "NOT_FOUND",
            }}),
        )])
        .await?;
        let client = accounts_client(&server.endpoint).await?;
        let err = client
            .get_account("accounts/1234567890")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        let status = err.status().expect("service errors have a status");
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(status.message, "Account not found.");
        Ok(())
    }

    #[tokio::test]
    async fn get_account_missing_name() -> TestResult {
        let server = fake_service::start([]).await?;
        let client = accounts_client(&server.endpoint).await?;
        let err = client.get_account("").send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(server.requests().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn authentication_error() -> TestResult {
        let server = fake_service::start([]).await?;
        let client = AccountsService::builder()
            .with_endpoint(&server.endpoint)
            .with_credentials(error_credentials(false))
            .build()
            .await?;
        let err = client
            .get_account("accounts/1234567890")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        assert!(server.requests().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn list_accounts_with_filter() -> TestResult {
        let filter = r#"accountName = "*store*" AND relationship(providerId = 123)"#;
        let server = fake_service::start([(
            StatusCode::OK,
            json!({"accounts": [{"name": "accounts/1"}, {"name": "accounts/2"}]}),
        )])
        .await?;
        let client = accounts_client(&server.endpoint).await?;
        let response = client
            .list_accounts()
            .set_filter(filter)
            .set_page_size(10)
            .send()
            .await?;
        assert_eq!(response.accounts.len(), 2);
        assert!(response.next_page_token.is_empty());

        let request = &server.requests()[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/accounts/v1/accounts");
        assert_eq!(request.query.get("filter").map(String::as_str), Some(filter));
        assert_eq!(request.query.get("pageSize").map(String::as_str), Some("10"));
        assert!(!request.query.contains_key("pageToken"), "{request:?}");
        Ok(())
    }

    #[tokio::test]
    async fn list_accounts_by_page() -> TestResult {
        let server = fake_service::start([
            (
                StatusCode::OK,
                json!({"accounts": [{"name": "accounts/1"}], "nextPageToken": "page-2"}),
            ),
            (
                StatusCode::OK,
                json!({"accounts": [{"name": "accounts/2"}, {"name": "accounts/3"}]}),
            ),
        ])
        .await?;
        let client = accounts_client(&server.endpoint).await?;
        let pages = client
            .list_accounts()
            .by_page()
            .try_collect::<Vec<_>>()
            .await?;
        let names = pages
            .iter()
            .flat_map(|p| p.accounts.iter().map(|a| a.name.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["accounts/1", "accounts/2", "accounts/3"]);

        let requests = server.requests();
        assert_eq!(requests.len(), 2);
        assert!(!requests[0].query.contains_key("pageToken"), "{requests:?}");
        assert_eq!(
            requests[1].query.get("pageToken").map(String::as_str),
            Some("page-2")
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_accounts_by_page_stops_on_error() -> TestResult {
        let server = fake_service::start([
            (
                StatusCode::OK,
                json!({"accounts": [{"name": "accounts/1"}], "nextPageToken": "page-2"}),
            ),
            (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({"error": {"code": 503, "message": "try again", "status": "UNAVAILABLE"}}),
            ),
        ])
        .await?;
        let client = accounts_client(&server.endpoint).await?;
        let mut pages = client.list_accounts().by_page();
        let first = pages.try_next().await?;
        assert!(first.is_some());
        let err = pages.try_next().await.unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable));
        assert!(pages.try_next().await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn register_gcp() -> TestResult {
        let server = fake_service::start([(
            StatusCode::OK,
            json!({"name": "accounts/1234567890/developerRegistration", "gcpIds": ["987"]}),
        )])
        .await?;
        let client = registration_client(&server.endpoint).await?;
        let registration = client
            .register_gcp("accounts/1234567890/developerRegistration")
            .set_developer_email("developer@example.com")
            .send()
            .await?;
        assert_eq!(
            registration,
            DeveloperRegistration::default()
                .set_name("accounts/1234567890/developerRegistration")
                .set_gcp_ids(["987"])
        );

        let request = &server.requests()[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.path,
            "/accounts/v1/accounts/1234567890/developerRegistration:registerGcp"
        );
        assert_eq!(
            request.body,
            Some(json!({"developerEmail": "developer@example.com"}))
        );
        Ok(())
    }

    #[tokio::test]
    async fn get_developer_registration() -> TestResult {
        let server = fake_service::start([(
            StatusCode::OK,
            json!({"name": "accounts/1234567890/developerRegistration"}),
        )])
        .await?;
        let client = registration_client(&server.endpoint).await?;
        let registration = client
            .get_developer_registration("accounts/1234567890/developerRegistration")
            .send()
            .await?;
        assert_eq!(registration.name, "accounts/1234567890/developerRegistration");
        assert!(registration.gcp_ids.is_empty());

        let request = &server.requests()[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.path,
            "/accounts/v1/accounts/1234567890/developerRegistration"
        );
        Ok(())
    }

    #[tokio::test]
    async fn unregister_gcp() -> TestResult {
        let server = fake_service::start([(StatusCode::OK, json!({}))]).await?;
        let client = registration_client(&server.endpoint).await?;
        client
            .unregister_gcp("accounts/1234567890/developerRegistration")
            .send()
            .await?;

        let request = &server.requests()[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.path,
            "/accounts/v1/accounts/1234567890/developerRegistration:unregisterGcp"
        );
        assert_eq!(request.body, Some(json!({})));
        Ok(())
    }

    #[tokio::test]
    async fn register_gcp_missing_name() -> TestResult {
        let server = fake_service::start([]).await?;
        let client = registration_client(&server.endpoint).await?;
        let err = client
            .register_gcp("")
            .set_developer_email("developer@example.com")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }
}
