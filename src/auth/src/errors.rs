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

//! Errors created while minting access tokens.

use http::StatusCode;
use std::error::Error;
use std::sync::Arc;

/// Represents an error creating or refreshing an access token.
///
/// The Merchant API samples never retry, but the flag is kept so callers can
/// tell a temporary outage (the token endpoint returned 503) apart from a
/// permanent problem (the refresh token was revoked).
#[derive(Clone, Debug)]
pub struct CredentialsError {
    is_transient: bool,
    message: Option<String>,
    source: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

impl CredentialsError {
    /// Creates a new `CredentialsError` wrapping `source`.
    pub fn new<T>(is_transient: bool, source: T) -> Self
    where
        T: Error + Send + Sync + 'static,
    {
        Self {
            is_transient,
            message: None,
            source: Some(Arc::new(source)),
        }
    }

    /// Creates a new `CredentialsError` with only a message.
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        Self {
            is_transient,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Returns true if a later attempt may succeed.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

impl std::error::Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|arc| arc.as_ref() as &(dyn Error + 'static))
    }
}

const TRANSIENT_MSG: &str = "but future attempts may succeed";
const PERMANENT_MSG: &str = "and future attempts will not succeed";

impl std::fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = if self.is_transient {
            TRANSIENT_MSG
        } else {
            PERMANENT_MSG
        };
        match (&self.message, &self.source) {
            (Some(m), _) => write!(f, "cannot create access token, {msg}: {m}"),
            (None, Some(s)) => write!(f, "cannot create access token, {msg}, source: {s}"),
            (None, None) => write!(f, "cannot create access token, {msg}"),
        }
    }
}

pub(crate) fn from_http_error(status: StatusCode, body: String) -> CredentialsError {
    CredentialsError::from_msg(
        is_retryable(status),
        format!("failed to fetch token [{status}]: {body}"),
    )
}

pub(crate) fn is_retryable(c: StatusCode) -> bool {
    matches!(
        c,
        StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::REQUEST_TIMEOUT
            | StatusCode::TOO_MANY_REQUESTS
    )
}

pub(crate) fn transient<T>(source: T) -> CredentialsError
where
    T: Error + Send + Sync + 'static,
{
    CredentialsError::new(true, source)
}

pub(crate) fn permanent<T>(source: T) -> CredentialsError
where
    T: Error + Send + Sync + 'static,
{
    CredentialsError::new(false, source)
}

pub(crate) fn permanent_from_str<T: Into<String>>(message: T) -> CredentialsError {
    CredentialsError::from_msg(false, message)
}
