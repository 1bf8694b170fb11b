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

//! The messages used by the Merchant Products API.

use crate::gtype::{CustomAttribute, Price};
use crate::wkt::FieldMask;
use serde::{Deserialize, Serialize};

/// This resource represents input data you submit for a product, not the
/// processed product that you see in Merchant Center, in Shopping ads, or
/// across Google surfaces.
///
/// Product inputs, rules and supplemental data source data are combined to
/// create the processed product.
///
/// # Example
/// ```
/// use merchant_api::products_v1::model::{Availability, ProductAttributes, ProductInput};
/// let input = ProductInput::default()
///     .set_offer_id("sku123")
///     .set_content_language("en")
///     .set_feed_label("US")
///     .set_product_attributes(
///         ProductAttributes::default()
///             .set_title("A Tale of Two Cities")
///             .set_availability(Availability::InStock),
///     );
/// assert_eq!(input.offer_id, "sku123");
/// ```
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductInput {
    /// Identifier. The name of the product input.
    /// Format: `accounts/{account}/productInputs/{productinput}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Output only. The name of the processed product.
    /// Format: `accounts/{account}/products/{product}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub product: String,

    /// Immutable. Determines whether the product is **only** targeting local
    /// destinations.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub legacy_local: bool,

    /// Required. Immutable. Your unique identifier for the product.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub offer_id: String,

    /// Required. Immutable. The two-letter ISO 639-1 language code for the
    /// product.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content_language: String,

    /// Required. Immutable. The feed label that lets you categorize and
    /// identify your products.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub feed_label: String,

    /// Optional. Immutable. Represents the existing version (freshness) of
    /// the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::PickFirst<(serde_with::DisplayFromStr, _)>>")]
    pub version_number: Option<i64>,

    /// Optional. A list of strongly-typed product attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_attributes: Option<ProductAttributes>,

    /// Optional. A list of custom (merchant-provided) attributes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_attributes: Vec<CustomAttribute>,
}

impl ProductInput {
    /// Sets the value of [name][ProductInput::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [offer_id][ProductInput::offer_id].
    pub fn set_offer_id<T: Into<String>>(mut self, v: T) -> Self {
        self.offer_id = v.into();
        self
    }

    /// Sets the value of [content_language][ProductInput::content_language].
    pub fn set_content_language<T: Into<String>>(mut self, v: T) -> Self {
        self.content_language = v.into();
        self
    }

    /// Sets the value of [feed_label][ProductInput::feed_label].
    pub fn set_feed_label<T: Into<String>>(mut self, v: T) -> Self {
        self.feed_label = v.into();
        self
    }

    /// Sets the value of [version_number][ProductInput::version_number].
    pub fn set_version_number(mut self, v: i64) -> Self {
        self.version_number = Some(v);
        self
    }

    /// Sets the value of [product_attributes][ProductInput::product_attributes].
    pub fn set_product_attributes(mut self, v: ProductAttributes) -> Self {
        self.product_attributes = Some(v);
        self
    }

    /// Sets the value of [custom_attributes][ProductInput::custom_attributes].
    pub fn set_custom_attributes<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = CustomAttribute>,
    {
        self.custom_attributes = v.into_iter().collect();
        self
    }
}

/// Product attributes.
///
/// Only the attributes used by the samples are modeled, the service ignores
/// missing attributes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductAttributes {
    /// Title of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// URL directly linking to your item's page on your online store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// URL of an image of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_link: Option<String>,

    /// Availability status of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,

    /// Condition or state of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,

    /// Google's category of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_product_category: Option<String>,

    /// Global Trade Item Numbers ([GTIN](https://support.google.com/merchants/answer/188494#gtin))
    /// of the item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gtins: Vec<String>,

    /// Price of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    /// Shipping rules.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shipping: Vec<Shipping>,
}

impl ProductAttributes {
    /// Sets the value of [title][ProductAttributes::title].
    pub fn set_title<T: Into<String>>(mut self, v: T) -> Self {
        self.title = Some(v.into());
        self
    }

    /// Sets the value of [description][ProductAttributes::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [link][ProductAttributes::link].
    pub fn set_link<T: Into<String>>(mut self, v: T) -> Self {
        self.link = Some(v.into());
        self
    }

    /// Sets the value of [image_link][ProductAttributes::image_link].
    pub fn set_image_link<T: Into<String>>(mut self, v: T) -> Self {
        self.image_link = Some(v.into());
        self
    }

    /// Sets the value of [availability][ProductAttributes::availability].
    pub fn set_availability(mut self, v: Availability) -> Self {
        self.availability = Some(v);
        self
    }

    /// Sets the value of [condition][ProductAttributes::condition].
    pub fn set_condition(mut self, v: Condition) -> Self {
        self.condition = Some(v);
        self
    }

    /// Sets the value of [google_product_category][ProductAttributes::google_product_category].
    pub fn set_google_product_category<T: Into<String>>(mut self, v: T) -> Self {
        self.google_product_category = Some(v.into());
        self
    }

    /// Sets the value of [gtins][ProductAttributes::gtins].
    pub fn set_gtins<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.gtins = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [price][ProductAttributes::price].
    pub fn set_price(mut self, v: Price) -> Self {
        self.price = Some(v);
        self
    }

    /// Sets the value of [shipping][ProductAttributes::shipping].
    pub fn set_shipping<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = Shipping>,
    {
        self.shipping = v.into_iter().collect();
        self
    }
}

/// The shipping of the product.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Shipping {
    /// Fixed shipping price, represented as a number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    /// The CLDR territory code of the country to which an item will ship.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,

    /// The geographic region to which a shipping rate applies.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub region: String,

    /// A free-form description of the service class or delivery speed.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service: String,
}

impl Shipping {
    /// Sets the value of [price][Shipping::price].
    pub fn set_price(mut self, v: Price) -> Self {
        self.price = Some(v);
        self
    }

    /// Sets the value of [country][Shipping::country].
    pub fn set_country<T: Into<String>>(mut self, v: T) -> Self {
        self.country = v.into();
        self
    }

    /// Sets the value of [region][Shipping::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the value of [service][Shipping::service].
    pub fn set_service<T: Into<String>>(mut self, v: T) -> Self {
        self.service = v.into();
        self
    }
}

/// The availability status of the item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Availability {
    /// Default value. This value is unused.
    #[default]
    AvailabilityUnspecified,
    /// Indicates that the product is in stock.
    InStock,
    /// Indicates that the product is out of stock.
    OutOfStock,
    /// Indicates that the product is available for preorder.
    Preorder,
    /// Indicates that the product is available in limited quantities.
    LimitedAvailability,
    /// Indicates that the product is available for backorder.
    Backorder,
}

/// Condition or state of the item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Condition {
    /// Default value. This value is unused.
    #[default]
    ConditionUnspecified,
    /// Brand new, original, unopened packaging.
    New,
    /// Previously used, original packaging opened or missing.
    Used,
    /// Professionally restored to working order.
    Refurbished,
}

/// Request message for the `InsertProductInput` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InsertProductInputRequest {
    /// The account where this product will be inserted.
    /// Format: `accounts/{account}`
    pub parent: String,

    /// The product input to insert.
    pub product_input: ProductInput,

    /// The primary or supplemental product data source name.
    /// Format: `accounts/{account}/dataSources/{datasource}`.
    pub data_source: String,
}

/// Request message for the `UpdateProductInput` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateProductInputRequest {
    /// The product input resource to update. Information you submit will be
    /// applied to the processed product as well.
    pub product_input: ProductInput,

    /// The list of product attributes to be updated.
    ///
    /// Attributes specified in the update mask without a value specified in
    /// the body will be deleted from the product. Attributes outside the
    /// mask are left unchanged.
    pub update_mask: Option<FieldMask>,

    /// The primary or supplemental product data source where `data_source`
    /// name identifies the product input to be updated.
    pub data_source: String,
}

/// Request message for the `DeleteProductInput` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteProductInputRequest {
    /// The name of the product input resource to delete.
    /// Format: `accounts/{account}/productInputs/{product}`
    pub name: String,

    /// The primary or supplemental data source from which the product input
    /// should be deleted.
    pub data_source: String,
}
