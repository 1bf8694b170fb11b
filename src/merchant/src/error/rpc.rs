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

//! The error model returned by Google APIs.

use super::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `Status` type defines a logical error model that is suitable for
/// different programming environments, including REST APIs and RPC APIs.
///
/// Each `Status` message contains three pieces of data: error code, error
/// message, and error details. You can find out more about this error model
/// and how to work with it in the [API Design Guide].
///
/// [API Design Guide]: https://cloud.google.com/apis/design/errors
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Status {
    /// The status code.
    pub code: Code,

    /// A developer-facing error message, in English.
    pub message: String,

    /// A list of messages that carry the error details, as received.
    pub details: Vec<Value>,
}

impl Status {
    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [details][Status::details].
    pub fn set_details<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<Value>,
    {
        self.details = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

/// The canonical error codes for APIs.
///
/// In REST responses the code is carried by the `status` field of the error,
/// using the names below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Code {
    Ok,
    Cancelled,
    #[default]
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
}

impl Code {
    /// The name of the code, as it appears in REST error payloads.
    pub fn name(&self) -> &'static str {
        match self {
            Code::Ok => "OK",
            Code::Cancelled => "CANCELLED",
            Code::Unknown => "UNKNOWN",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::OutOfRange => "OUT_OF_RANGE",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::DataLoss => "DATA_LOSS",
            Code::Unauthenticated => "UNAUTHENTICATED",
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for Code {
    type Error = String;
    fn try_from(value: &str) -> std::result::Result<Code, Self::Error> {
        serde_json::from_value(Value::String(value.to_string()))
            .map_err(|_| format!("unknown status code value {value}"))
    }
}

// REST errors wrap the status in an `error` object. The numeric `code` is the
// HTTP status code, the `status` field has the canonical code name.
#[derive(Deserialize)]
struct ErrorWrapper {
    error: WrapperStatus,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct WrapperStatus {
    message: String,
    status: Option<String>,
    details: Vec<Value>,
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let wrapper = serde_json::from_slice::<ErrorWrapper>(value)
            .map(|w| w.error)
            .map_err(Error::deser)?;
        let code = wrapper
            .status
            .as_deref()
            .and_then(|s| Code::try_from(s).ok())
            .unwrap_or_default();
        Ok(Status {
            code,
            message: wrapper.message,
            details: wrapper.details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn setters() {
        let got = Status::default()
            .set_code(Code::Unimplemented)
            .set_message("test-message")
            .set_details([json!({"reason": "test-only"})]);
        let want = Status {
            code: Code::Unimplemented,
            message: "test-message".into(),
            details: vec![json!({"reason": "test-only"})],
        };
        assert_eq!(got, want);
    }

    #[test_case(Code::Ok, "OK")]
    #[test_case(Code::NotFound, "NOT_FOUND")]
    #[test_case(Code::InvalidArgument, "INVALID_ARGUMENT")]
    #[test_case(Code::Unauthenticated, "UNAUTHENTICATED")]
    fn code_names(code: Code, name: &str) {
        assert_eq!(code.name(), name);
        assert_eq!(code.to_string(), name);
        assert_eq!(Code::try_from(name), Ok(code));
    }

    #[test]
    fn code_unknown_name() {
        let got = Code::try_from("NOT_A_CODE");
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn from_rest_error() {
        let body = json!({
            "error": {
                "code": 404,
                "message": "Requested entity was not found.",
                "status": "NOT_FOUND",
                "details": [{
                    "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                    "reason": "test-only-reason",
                }],
            }
        });
        let bytes = bytes::Bytes::from(body.to_string());
        let status = Status::try_from(&bytes).unwrap();
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(status.message, "Requested entity was not found.");
        assert_eq!(status.details.len(), 1);
        assert_eq!(status.details[0]["reason"], "test-only-reason");
    }

    #[test]
    fn from_rest_error_without_status() {
        let body = json!({"error": {"code": 500, "message": "oops"}});
        let bytes = bytes::Bytes::from(body.to_string());
        let status = Status::try_from(&bytes).unwrap();
        assert_eq!(status.code, Code::Unknown);
        assert_eq!(status.message, "oops");
    }

    #[test]
    fn from_rest_error_not_a_status() {
        let bytes = bytes::Bytes::from_static(b"<html>bad gateway</html>");
        let e = Status::try_from(&bytes).unwrap_err();
        assert!(e.is_deserialization(), "{e:?}");
    }
}
