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

//! Errors created during credentials construction.

use crate::constants::SETUP_INSTRUCTIONS_URL;
use std::path::PathBuf;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for [Credentials] builders and the [Authenticator].
///
/// [Credentials]: crate::credentials::Credentials
/// [Authenticator]: crate::authenticator::Authenticator
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// A problem finding or opening a credentials file.
    pub fn is_loading(&self) -> bool {
        matches!(self.0, ErrorKind::Loading(_))
    }

    /// A problem parsing a credentials JSON specification.
    pub fn is_parsing(&self) -> bool {
        matches!(self.0, ErrorKind::Parsing(_))
    }

    /// The credentials type is invalid or unknown.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self.0, ErrorKind::UnknownType(_))
    }

    /// A required field was missing.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.0, ErrorKind::MissingField(_))
    }

    /// None of the credential sources was available.
    pub fn is_no_credentials(&self) -> bool {
        matches!(self.0, ErrorKind::NoCredentials(_))
    }

    /// The interactive OAuth2 flow failed or timed out.
    pub fn is_flow(&self) -> bool {
        matches!(self.0, ErrorKind::Flow(_))
    }

    /// The paths checked before giving up, if this is a "no credentials" error.
    pub fn checked_paths(&self) -> Option<&[PathBuf]> {
        match &self.0 {
            ErrorKind::NoCredentials(paths) => Some(paths.as_slice()),
            _ => None,
        }
    }

    pub(crate) fn loading<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Loading(source.into()))
    }

    pub(crate) fn parsing<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Parsing(source.into()))
    }

    pub(crate) fn unknown_type<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::UnknownType(source.into()))
    }

    pub(crate) fn missing_field(field: &'static str) -> Error {
        Error(ErrorKind::MissingField(field))
    }

    pub(crate) fn no_credentials(checked: Vec<PathBuf>) -> Error {
        Error(ErrorKind::NoCredentials(checked))
    }

    pub(crate) fn flow<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Flow(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not find or open the credentials file {0}")]
    Loading(#[source] BoxError),
    #[error("cannot parse the credentials file {0}")]
    Parsing(#[source] BoxError),
    #[error("unknown or invalid credentials type {0}")]
    UnknownType(#[source] BoxError),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("{}", no_credentials_message(.0))]
    NoCredentials(Vec<PathBuf>),
    #[error("the OAuth2 authorization flow failed: {0}")]
    Flow(#[source] BoxError),
}

fn no_credentials_message(checked: &[PathBuf]) -> String {
    let paths = checked
        .iter()
        .map(|p| format!("- {}\n", p.display()))
        .collect::<String>();
    format!(
        "authentication failed: no OAuth2 authentication files found. Checked:\n{paths}Please check {SETUP_INSTRUCTIONS_URL}"
    )
}
