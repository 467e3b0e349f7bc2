//! Menu (product catalog) Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::serde_helpers::bool_false;

/// Menu category (Pastries, Coffee, Brunch, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default, deserialize_with = "bool_false")]
    pub is_featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_available() -> bool {
    true
}
