//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::util::{id_from_string_or_number, string_or_number};

fn default_available() -> bool {
    true
}

/// Dietary flags, either classified by the backend or set by the owner.
///
/// Serialized in camelCase; the snake_case names used by the
/// classification echo on create are accepted as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryInfo {
    #[serde(default, alias = "is_vegetarian")]
    pub is_vegetarian: bool,
    #[serde(default, alias = "is_vegan")]
    pub is_vegan: bool,
    #[serde(default, alias = "is_gluten_free")]
    pub is_gluten_free: bool,
    #[serde(default, alias = "is_nut_free")]
    pub is_nut_free: bool,
}

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in the restaurant's currency
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "image_url")]
    pub image: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default, rename = "dietaryInfo")]
    pub dietary_info: DietaryInfo,
}

/// Create menu item payload
///
/// `description` and `category` are always sent; the backend reads them
/// unconditionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, alias = "image_url", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// Manual override of the dietary classification
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryInfoUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vegetarian: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vegan: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_gluten_free: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_nut_free: Option<bool>,
}

/// Response to a menu item creation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemCreated {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub dietary_classification: Option<DietaryInfo>,
}

/// The customer menu route answers `{"message": ...}` instead of an empty
/// list when a restaurant has no available items.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MenuListing {
    Items(Vec<MenuItem>),
    Empty(crate::response::MessageResponse),
}

impl MenuListing {
    pub fn into_items(self) -> Vec<MenuItem> {
        match self {
            MenuListing::Items(items) => items,
            MenuListing::Empty(_) => Vec::new(),
        }
    }
}

/// Menu as served to a specific table (`/menu/{restaurant}/table_{n}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableMenu {
    pub restaurant_id: i64,
    #[serde(deserialize_with = "string_or_number")]
    pub table_number: String,
    #[serde(default)]
    pub seats: Option<i32>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}
