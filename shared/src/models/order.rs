//! Order Model

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::InvalidVariant;
use crate::util::string_or_number;

/// Kitchen workflow status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = InvalidVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "completed" => Ok(OrderStatus::Completed),
            _ => Err(InvalidVariant::new("order status", s)),
        }
    }
}

/// How the customer pays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Upi,
    Razorpay,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Razorpay => "razorpay",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = InvalidVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "upi" => Ok(PaymentMethod::Upi),
            "razorpay" => Ok(PaymentMethod::Razorpay),
            _ => Err(InvalidVariant::new("payment method", s)),
        }
    }
}

fn default_quantity() -> u32 {
    1
}

/// Line item inside an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    #[serde(default = "default_quantity", alias = "qty")]
    pub quantity: u32,
}

/// Order as listed on the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(alias = "table_number", deserialize_with = "string_or_number")]
    pub table_number: String,
    #[serde(default, alias = "customer_name")]
    pub customer_name: Option<String>,
    #[serde(default, alias = "customer_phone")]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub status: OrderStatus,
    #[serde(default, alias = "payment_method")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, alias = "created_at")]
    pub timestamp: Option<NaiveDateTime>,
}

/// A customer's order as handed to the client.
///
/// `table_number` is the human-readable number from the QR code; the
/// client resolves it against the restaurant's tables before sending.
#[derive(Debug, Clone)]
pub struct CreateOrderRequest {
    pub restaurant_id: i64,
    pub table_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<OrderItem>,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
}

impl CreateOrderRequest {
    /// Wire payload for the order-creation route, carrying the matched
    /// table's number.
    pub fn to_payload(&self, table_number: &str) -> OrderPayload {
        OrderPayload {
            amount: self.amount,
            restaurant_id: self.restaurant_id,
            table_number: table_number.to_string(),
            payment_method: self.payment_method,
            customer_name: self.customer_name.clone(),
            customer_phone: self.customer_phone.clone(),
            items: self.items.clone(),
        }
    }
}

/// Body of `POST /api/create-order`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayload {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub restaurant_id: i64,
    pub table_number: String,
    pub payment_method: PaymentMethod,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "customerPhone")]
    pub customer_phone: String,
    pub items: Vec<OrderItem>,
}

/// Response to an order creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub local_order_id: i64,
    pub payment_mode: PaymentMethod,
    #[serde(default)]
    pub upi_id: Option<String>,
    /// QR image URL for UPI payments
    #[serde(default)]
    pub upi_qr: Option<String>,
    /// Payment gateway order id for Razorpay payments
    #[serde(default)]
    pub order_id: Option<String>,
}

/// Body of `PUT /api/orders/{id}/status`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}
