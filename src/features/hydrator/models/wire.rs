//! Deserialization-side view of the catalog JSON contract.
//!
//! The hydrator only knows the wire shape, not the service's internal
//! models; missing optional fields are tolerated with defaults.

use chrono::{DateTime, Utc};
use serde::Deserialize;

fn default_currency_symbol() -> String {
    "$".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageData {
    pub src: String,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewData {
    pub author: String,
    pub rating: i32,
    pub comment: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub id: String,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub original_price: Option<String>,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub features: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub materials: Option<String>,
    #[serde(default)]
    pub finish: Option<String>,
    #[serde(default)]
    pub designer: Option<String>,
    #[serde(default)]
    pub country_of_origin: Option<String>,
    #[serde(default)]
    pub importer_packer_marketer: Option<String>,
    #[serde(default)]
    pub article_number: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageData>,
    #[serde(default)]
    pub reviews: Vec<ReviewData>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryData {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}
