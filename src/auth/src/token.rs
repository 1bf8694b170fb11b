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

use crate::Result;
use tokio::time::Instant;

/// An OAuth2 access token, as attached to Merchant API requests.
///
/// Every credential source produces these: service account assertions,
/// refresh-token grants (ADC user credentials and the token saved in
/// `token.json`), and the metadata server. The refresh token itself never
/// appears here, it stays with the provider that mints new access tokens.
#[derive(Clone, PartialEq)]
pub struct Token {
    /// The access token, sent in the `authorization` header.
    pub token: String,

    /// The scheme for the `authorization` header, `Bearer` for all the
    /// sources in this crate.
    pub token_type: String,

    /// When the access token stops working, or `None` if the source did not
    /// say.
    ///
    /// A monotonic instant, only meaningful in this process. The token saved
    /// to `token.json` uses a wall-clock expiry instead.
    pub expires_at: Option<Instant>,
}

impl Token {
    /// Returns true if the token is no longer usable at `now`.
    ///
    /// Tokens without an expiration never expire.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|e| e <= now)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("token", &"[censored]")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Mints access tokens for one credential source.
#[async_trait::async_trait]
pub(crate) trait TokenProvider: std::fmt::Debug + Send + Sync {
    async fn token(&self) -> Result<Token>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::time::Duration;
    use test_case::test_case;

    // Shared with the token cache and credential tests.
    mockall::mock! {
        #[derive(Debug)]
        pub TokenProvider { }

        #[async_trait::async_trait]
        impl TokenProvider for TokenProvider {
            async fn token(&self) -> Result<Token>;
        }
    }

    fn access_token(expires_at: Option<Instant>) -> Token {
        Token {
            token: "ya29.test-only".into(),
            token_type: "Bearer".into(),
            expires_at,
        }
    }

    #[test]
    fn debug_hides_access_token() {
        let expires_at = Instant::now() + Duration::from_secs(3600);
        let got = format!("{:?}", access_token(Some(expires_at)));
        assert!(!got.contains("ya29.test-only"), "{got}");
        assert!(got.contains("token: \"[censored]\""), "{got}");
        assert!(got.contains("token_type: \"Bearer\""), "{got}");
        assert!(
            got.contains(&format!("expires_at: Some({expires_at:?})")),
            "{got}"
        );
    }

    #[test_case(None, false; "no expiration")]
    #[test_case(Some(60), false; "expires later")]
    #[test_case(Some(0), true; "expires now")]
    fn expiration(offset_secs: Option<u64>, want: bool) {
        let now = Instant::now();
        let token = access_token(offset_secs.map(|s| now + Duration::from_secs(s)));
        assert_eq!(token.is_expired_at(now), want);
    }

    #[test]
    fn expired_in_the_past() {
        let now = Instant::now() + Duration::from_secs(10);
        let token = access_token(Some(now - Duration::from_secs(5)));
        assert!(token.is_expired_at(now), "{token:?}");
    }
}
