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

//! Common types shared by the Merchant API sub-APIs.

use serde::{Deserialize, Serialize};

/// The price represented as a number and currency.
///
/// # Example
/// ```
/// use merchant_api::gtype::Price;
/// let price = Price::default()
///     .set_amount_micros(33_450_000)
///     .set_currency_code("USD");
/// assert_eq!(price.amount_micros, Some(33_450_000));
/// ```
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Price {
    /// The price represented as a number in micros (1 million micros is an
    /// equivalent of one's currency standard unit, for example, 1 USD =
    /// 1000000 micros).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::PickFirst<(serde_with::DisplayFromStr, _)>>")]
    pub amount_micros: Option<i64>,

    /// The currency of the price using three-letter acronyms according to
    /// ISO 4217.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub currency_code: String,
}

impl Price {
    /// Sets the value of [amount_micros][Price::amount_micros].
    pub fn set_amount_micros(mut self, v: i64) -> Self {
        self.amount_micros = Some(v);
        self
    }

    /// Sets the value of [currency_code][Price::currency_code].
    pub fn set_currency_code<T: Into<String>>(mut self, v: T) -> Self {
        self.currency_code = v.into();
        self
    }
}

/// A message that represents custom attributes.
///
/// Exactly one of `value` or `group_values` is set for a non-empty attribute.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CustomAttribute {
    /// The name of the attribute.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The value of the attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Subattributes within this attribute group.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_values: Vec<CustomAttribute>,
}

impl CustomAttribute {
    /// Sets the value of [name][CustomAttribute::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [value][CustomAttribute::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets the value of [group_values][CustomAttribute::group_values].
    pub fn set_group_values<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = CustomAttribute>,
    {
        self.group_values = v.into_iter().collect();
        self
    }
}
