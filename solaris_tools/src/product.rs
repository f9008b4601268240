use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    helpers::{null_as_default, parse_shopify_price},
    SolarisApiError,
};

/// A JSON value the product feed is inconsistent about: sometimes a string, sometimes a number, often `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonScalar {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl JsonScalar {
    pub fn is_null(&self) -> bool {
        matches!(self, JsonScalar::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonScalar::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonScalar::Number(n) => n.as_i64(),
            JsonScalar::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub body_html: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vendor: String,
    #[serde(deserialize_with = "null_as_default")]
    pub product_type: String,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub handle: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub template_suffix: JsonScalar,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub published_scope: String,
    /// Comma separated. See [`Product::tag_list`].
    #[serde(deserialize_with = "null_as_default")]
    pub tags: String,
    #[serde(deserialize_with = "null_as_default")]
    pub admin_graphql_api_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub variants: Vec<Variant>,
    #[serde(deserialize_with = "null_as_default")]
    pub options: Vec<ProductOption>,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<ProductImage>,
    pub image: Option<ProductImage>,
    /// Label/value pairs scraped from the rendered product page. `None` when the page had none.
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub info: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variant {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
    pub compare_at_price: JsonScalar,
    #[serde(deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub inventory_policy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fulfillment_service: String,
    #[serde(deserialize_with = "null_as_default")]
    pub inventory_management: String,
    #[serde(deserialize_with = "null_as_default")]
    pub option1: String,
    pub option2: JsonScalar,
    pub option3: JsonScalar,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub taxable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub barcode: String,
    #[serde(deserialize_with = "null_as_default")]
    pub grams: i64,
    pub image_id: JsonScalar,
    #[serde(deserialize_with = "null_as_default")]
    pub weight: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub weight_unit: String,
    #[serde(deserialize_with = "null_as_default")]
    pub inventory_item_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub inventory_quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub old_inventory_quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub requires_shipping: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub admin_graphql_api_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductOption {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductImage {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub position: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub alt: JsonScalar,
    #[serde(deserialize_with = "null_as_default")]
    pub width: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub height: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub src: String,
    #[serde(deserialize_with = "null_as_default")]
    pub variant_ids: Vec<JsonScalar>,
    #[serde(deserialize_with = "null_as_default")]
    pub admin_graphql_api_id: String,
}

impl Product {
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags.split(',').map(str::trim).filter(|t| !t.is_empty()).collect()
    }

    pub fn variant(&self, id: i64) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }

    /// The designated primary image, falling back to the first image in the gallery.
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.image.as_ref().or_else(|| self.images.first())
    }
}

impl Variant {
    pub fn price_in_cents(&self) -> Result<i64, SolarisApiError> {
        parse_shopify_price(&self.price)
    }

    /// The option values this variant selects, in option order. Unset (`null`) selections are skipped.
    pub fn options(&self) -> Vec<String> {
        let mut result = vec![];
        if !self.option1.is_empty() {
            result.push(self.option1.clone());
        }
        for opt in [&self.option2, &self.option3] {
            match opt {
                JsonScalar::Null => {},
                JsonScalar::String(s) => result.push(s.clone()),
                JsonScalar::Number(n) => result.push(n.to_string()),
                JsonScalar::Bool(b) => result.push(b.to_string()),
            }
        }
        result
    }
}

/// Decodes a `products/<handle>.json` payload, i.e. `{"product": { ... }}`.
pub fn decode_product(json: &[u8]) -> Result<Product, SolarisApiError> {
    #[derive(Deserialize)]
    struct ProductResponse {
        product: Product,
    }
    let result =
        serde_json::from_slice::<ProductResponse>(json).map_err(|e| SolarisApiError::DecodeError(e.to_string()))?;
    Ok(result.product)
}
