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

//! Well-known types shared by the Merchant API messages.

use serde::{Deserialize, Serialize};

/// A generic empty message, returned by methods without a meaningful
/// response, such as deletes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {}

/// `FieldMask` represents a set of symbolic field paths.
///
/// Update methods apply only the fields named in the mask. In the JSON
/// representation the paths are joined with commas, and appear in the
/// `updateMask` query parameter.
///
/// # Example
/// ```
/// use merchant_api::wkt::FieldMask;
/// let mask = FieldMask::default()
///     .set_paths(["product_attributes.title", "product_attributes.link"]);
/// assert_eq!(mask.to_query(), "product_attributes.title,product_attributes.link");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct FieldMask {
    /// The set of field mask paths.
    pub paths: Vec<String>,
}

impl FieldMask {
    /// Sets the value of [paths][FieldMask::paths].
    pub fn set_paths<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.paths = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// The value used in query parameters.
    pub fn to_query(&self) -> String {
        self.paths.join(",")
    }
}

impl Serialize for FieldMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_query())
    }
}

impl<'de> Deserialize<'de> for FieldMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let paths = String::deserialize(deserializer)?;
        if paths.is_empty() {
            return Ok(FieldMask::default());
        }
        Ok(FieldMask::default().set_paths(paths.split(',')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test]
    fn empty() -> Result {
        assert_eq!(serde_json::to_value(Empty::default())?, json!({}));
        let got = serde_json::from_value::<Empty>(json!({}))?;
        assert_eq!(got, Empty::default());
        Ok(())
    }

    #[test_case(vec![], ""; "Serialize empty")]
    #[test_case(vec!["field1"], "field1"; "Serialize single")]
    #[test_case(vec!["field1", "field2", "field3"], "field1,field2,field3"; "Serialize multiple")]
    fn serialize(paths: Vec<&str>, want: &str) -> Result {
        let value = FieldMask::default().set_paths(paths);
        assert_eq!(value.to_query(), want);
        assert_eq!(serde_json::to_value(&value)?, json!(want));
        Ok(())
    }

    #[test_case("", vec![]; "Deserialize empty")]
    #[test_case("field1,field2", vec!["field1", "field2"]; "Deserialize multiple")]
    fn deserialize(paths: &str, want: Vec<&str>) -> Result {
        let got = serde_json::from_value::<FieldMask>(json!(paths))?;
        assert_eq!(got, FieldMask::default().set_paths(want));
        Ok(())
    }
}
