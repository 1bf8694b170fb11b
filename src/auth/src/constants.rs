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

/// The OAuth2 scope required by the Merchant API.
pub const CONTENT_SCOPE: &str = "https://www.googleapis.com/auth/content";

/// The directory, relative to the user's home, holding the sample configuration.
pub const CONFIG_DIR: &str = "shopping-samples/content";
/// The service account key file name.
pub const SERVICE_ACCOUNT_FILE: &str = "service-account.json";
/// The OAuth2 client secrets file name.
pub const CLIENT_SECRETS_FILE: &str = "client-secrets.json";
/// The file caching the token obtained by the OAuth2 web flow.
pub const TOKEN_FILE: &str = "token.json";

pub(crate) const OAUTH2_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
pub(crate) const OAUTH2_AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/auth";

pub(crate) const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
pub(crate) const AUTHORIZATION_CODE_GRANT_TYPE: &str = "authorization_code";

pub(crate) const SETUP_INSTRUCTIONS_URL: &str = "https://github.com/google/merchant-api-samples/blob/main/README.md#setting-up-authentication-and-sample-configuration";

pub(crate) const GOOGLE_APPLICATION_CREDENTIALS_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";
pub(crate) const GCE_METADATA_HOST_VAR: &str = "GCE_METADATA_HOST";
