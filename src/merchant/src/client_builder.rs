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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or the authentication
//! credentials. The types in this module implement the client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with a different endpoint
//!
//! ```no_run
//! # use merchant_api::client_builder::Result;
//! # tokio_test::block_on(async {
//! use merchant_api::accounts_v1::client::AccountsService;
//! let client = AccountsService::builder()
//!     .with_endpoint("https://private.googleapis.com")
//!     .build()
//!     .await?;
//! # Result::<()>::Ok(()) });
//! ```

use merchant_auth::credentials::Credentials;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use merchant_api::client_builder::Result;
/// # tokio_test::block_on(async {
/// use merchant_api::accounts_v1::client::AccountsService;
/// match AccountsService::builder().build().await {
///     Ok(_) => println!("the client is ready"),
///     Err(e) if e.is_default_credentials() => println!("no credentials found: {e}"),
///     Err(e) => println!("cannot create the client: {e}"),
/// }
/// # Result::<()>::Ok(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the default credentials.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    pub(crate) fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    pub(crate) fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create default credentials: {0}")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client: {0}")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// Without an explicit call to [with_credentials][ClientBuilder::with_credentials]
/// the client uses the credentials found by
/// [Authenticator][merchant_auth::authenticator::Authenticator].
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: internal::ClientConfig,
    factory: F,
}

impl<F> ClientBuilder<F> {
    /// Creates a new client.
    ///
    /// ```no_run
    /// # use merchant_api::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use merchant_api::products_v1::client::ProductInputsService;
    /// let client = ProductInputsService::builder().build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// The clients append the REST path of each method to this value. Tests
    /// use it to target a local server.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Configures the authentication credentials.
    ///
    /// ```no_run
    /// # use merchant_api::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use merchant_api::accounts_v1::client::AccountsService;
    /// use merchant_auth::authenticator::Authenticator;
    /// let credentials = Authenticator::builder()
    ///     .with_config_dir("/etc/merchant-samples")
    ///     .build()
    ///     .await?;
    /// let client = AccountsService::builder()
    ///     .with_credentials(credentials)
    ///     .build()
    ///     .await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Sets the timeout for each request.
    ///
    /// The timeout covers the whole request, from connecting until the
    /// response body is read. Requests that exceed it fail with an error
    /// where [is_timeout][crate::error::Error::is_timeout] is true. By default
    /// requests have no timeout.
    pub fn with_timeout(mut self, v: std::time::Duration) -> Self {
        self.config.timeout = Some(v);
        self
    }

    /// Sets the `user-agent` header sent with each request.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.user_agent = Some(v.into());
        self
    }
}

impl From<merchant_auth::build_errors::Error> for Error {
    fn from(value: merchant_auth::build_errors::Error) -> Self {
        Self::cred(value)
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    /// Creates the client for a [ClientBuilder].
    pub trait ClientFactory {
        type Client;
        fn build(self, config: ClientConfig) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, C>(factory: F) -> super::ClientBuilder<F>
    where
        F: ClientFactory<Client = C>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    #[derive(Clone, Debug, Default)]
    pub struct ClientConfig {
        pub endpoint: Option<String>,
        pub cred: Option<Credentials>,
        pub user_agent: Option<String>,
        pub timeout: Option<std::time::Duration>,
    }
}
