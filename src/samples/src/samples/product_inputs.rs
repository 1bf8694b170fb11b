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

//! Samples for the `ProductInputsService`.
//!
//! All the samples write to the data source named by
//! [DATA_SOURCE_ID][super::DATA_SOURCE_ID]. It must be a primary API data
//! source, or a supplemental data source for the update sample.

use super::{account_name, data_source_name};
use crate::batch::run_batch;
use crate::context::Context;
use crate::registry::Sample;
use anyhow::Context as _;
use merchant_api::gtype::{CustomAttribute, Price};
use merchant_api::products_v1::model::{
    Availability, Condition, ProductAttributes, ProductInput, Shipping,
};
use merchant_api::wkt::FieldMask;
use rand::Rng;

pub const INSERT_PRODUCT_INPUT: &str = "products.productinputs.v1.insert_product_input";
pub const INSERT_PRODUCT_INPUT_ASYNC: &str =
    "products.productinputs.v1.insert_product_input_async";
pub const UPDATE_PRODUCT_INPUT: &str = "products.productinputs.v1.update_product_input";
pub const DELETE_PRODUCT_INPUT: &str = "products.productinputs.v1.delete_product_input";

/// The offer id used by the insert, update and delete samples.
pub const OFFER_ID: &str = "sku123";

/// The number of concurrent requests sent by [InsertProductInputAsync].
pub const BATCH_SIZE: usize = 5;

const OFFER_ID_LENGTH: usize = 8;

/// Inserts a single product input.
#[derive(Debug)]
pub struct InsertProductInput;

#[async_trait::async_trait]
impl Sample for InsertProductInput {
    fn description(&self) -> &str {
        "This sample demonstrates how to insert a product input"
    }

    async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let client = ctx.product_inputs_service().await?;
        let input = ProductInput::default()
            .set_offer_id(OFFER_ID)
            .set_feed_label("US")
            .set_content_language("en")
            .set_product_attributes(book_attributes());
        println!("Sending insert ProductInput request");
        let response = client
            .insert_product_input(account_name())
            .set_product_input(input)
            .set_data_source(data_source_name())
            .send()
            .await
            .context("could not insert product input")?;
        println!("Inserted ProductInput Name below");
        println!("{}", response.name);
        Ok(())
    }
}

/// Inserts several product inputs concurrently.
#[derive(Debug)]
pub struct InsertProductInputAsync;

#[async_trait::async_trait]
impl Sample for InsertProductInputAsync {
    fn description(&self) -> &str {
        "This sample demonstrates how to insert a product input asynchronously"
    }

    async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let client = ctx.product_inputs_service().await?;
        let requests = (0..BATCH_SIZE).map(|_| {
            let input = ProductInput::default()
                .set_offer_id(random_offer_id())
                .set_feed_label("CH")
                .set_content_language("en")
                .set_product_attributes(book_attributes());
            let builder = client
                .insert_product_input(account_name())
                .set_product_input(input)
                .set_data_source(data_source_name());
            async move {
                builder
                    .send()
                    .await
                    .context("could not insert product input")
            }
        });
        println!("Sending insert product input requests");
        match run_batch("async insert", requests).await {
            Ok(inserted) => {
                println!("Inserted products below");
                for input in inserted {
                    println!("{input:#?}");
                }
                Ok(())
            }
            Err(e) => {
                for error in e.errors() {
                    println!("{error:#}");
                }
                Err(e.into())
            }
        }
    }
}

/// Updates the attributes of an existing product input.
#[derive(Debug)]
pub struct UpdateProductInput;

#[async_trait::async_trait]
impl Sample for UpdateProductInput {
    fn description(&self) -> &str {
        "This sample demonstrates how to update a product input"
    }

    async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let client = ctx.product_inputs_service().await?;
        let attributes = ProductAttributes::default()
            .set_title("A Tale of Two Cities")
            .set_description("A classic novel about the French Revolution")
            .set_link("https://exampleWebsite.com/tale-of-two-cities.html")
            .set_image_link("https://exampleWebsite.com/tale-of-two-cities.jpg")
            .set_availability(Availability::InStock)
            .set_condition(Condition::New)
            .set_gtins(["9780007350896"]);
        let input = ProductInput::default()
            .set_name(product_input_name())
            .set_product_attributes(attributes)
            .set_custom_attributes([CustomAttribute::default()
                .set_name("mycustomattribute")
                .set_value("Example value")]);
        println!("Sending update ProductInput request");
        let response = client
            .update_product_input()
            .set_product_input(input)
            .set_update_mask(update_mask())
            .set_data_source(data_source_name())
            .send()
            .await
            .context("could not update product input")?;
        println!("Updated ProductInput Name below");
        println!("{}", response.name);
        println!("Updated Product below");
        println!("{response:#?}");
        Ok(())
    }
}

/// Deletes a product input.
#[derive(Debug)]
pub struct DeleteProductInput;

#[async_trait::async_trait]
impl Sample for DeleteProductInput {
    fn description(&self) -> &str {
        "This sample demonstrates how to delete a product input"
    }

    async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let client = ctx.product_inputs_service().await?;
        println!("Sending deleteProductInput request");
        client
            .delete_product_input(product_input_name())
            .set_data_source(data_source_name())
            .send()
            .await
            .context("could not delete product input")?;
        println!(
            "Delete successful, note that it may take a few minutes for the delete to update in \
             the system. If you make a products.get or products.list request before a few \
             minutes have passed, the old product data may be returned."
        );
        Ok(())
    }
}

// The product input name is `accounts/{account}/productInputs/{language}~{feed label}~{offer id}`.
fn product_input_name() -> String {
    format!("{}/productInputs/en~label~{OFFER_ID}", account_name())
}

fn update_mask() -> FieldMask {
    FieldMask::default().set_paths([
        "product_attributes.title",
        "product_attributes.description",
        "product_attributes.link",
        "product_attributes.image_link",
        "product_attributes.availability",
        "product_attributes.condition",
        "product_attributes.gtins",
        "custom_attributes.mycustomattribute",
    ])
}

fn book_attributes() -> ProductAttributes {
    let price = Price::default()
        .set_amount_micros(33_450_000)
        .set_currency_code("USD");
    let shipping = ["GB", "FR"].map(|country| {
        Shipping::default()
            .set_price(price.clone())
            .set_country(country)
            .set_service("1st class post")
    });
    ProductAttributes::default()
        .set_title("A Tale of Two Cities")
        .set_description("A classic novel about the French Revolution")
        .set_link("https://exampleWebsite.com/tale-of-two-cities.html")
        .set_image_link("https://exampleWebsite.com/tale-of-two-cities.jpg")
        .set_availability(Availability::InStock)
        .set_condition(Condition::New)
        .set_google_product_category("Media > Books")
        .set_gtins(["9780007350896"])
        .set_shipping(shipping)
}

fn random_offer_id() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(OFFER_ID_LENGTH)
        .map(char::from)
        .collect()
}
