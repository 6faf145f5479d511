//! Dining Table Model

use serde::{Deserialize, Serialize};

use crate::util::string_or_number;

/// Dining table entity
///
/// `number` is the human-readable label printed on the table and encoded
/// in its QR code; `id` is the backend's internal key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    #[serde(deserialize_with = "string_or_number")]
    pub number: String,
    #[serde(default)]
    pub seats: Option<i32>,
    #[serde(default, alias = "qrCode")]
    pub qr_code: Option<String>,
}

impl DiningTable {
    /// Whether this table carries the given human-readable number.
    /// Surrounding whitespace is ignored on both sides.
    pub fn matches_number(&self, number: &str) -> bool {
        self.number.trim() == number.trim()
    }

    /// Path of the customer-facing menu for this table, as encoded in its QR code.
    pub fn menu_path(&self, restaurant_id: i64) -> String {
        format!("/menu/{}/table_{}", restaurant_id, self.number.trim())
    }
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub number: String,
    pub seats: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<i64>,
}

/// `{"message": ..., "table": {...}}` wrapper returned by add/regenerate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub table: DiningTable,
}
