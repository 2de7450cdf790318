//! Order Model
//!
//! A print order bundles the customer's print file, a payment slip and the
//! computed pricing. Pricing is fixed at creation: `total_price` is always
//! `copies * price` and there is no update path for `copies`.

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::utils::time::now_millis;

pub type OrderId = Thing;

/// Pickup time slot (fixed set, matches the shop's two print runs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "11:15")]
    EarlySlot,
    #[serde(rename = "12:15")]
    LateSlot,
}

/// Color mode determines the per-copy tariff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Color,
    Bw,
}

impl ColorMode {
    /// Fixed tariff: 10 per copy for color, 1 for black-and-white
    pub fn price_per_copy(&self) -> u32 {
        match self {
            ColorMode::Color => 10,
            ColorMode::Bw => 1,
        }
    }
}

/// Order lifecycle status — the only field mutable after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

/// Order entity matching the `print_order` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Serialized as "print_order:id"; omitted on insert so the store
    /// generates it
    #[serde(
        with = "super::serde_thing::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<OrderId>,
    pub name: String,
    pub major: String,
    pub time: TimeSlot,
    pub color: ColorMode,
    pub copies: u32,
    /// Per-copy price derived from `color` at creation
    pub price: u32,
    /// `copies * price`, never recomputed
    pub total_price: u32,
    pub file_name: String,
    pub file_type: String,
    pub file_url: String,
    pub slip_name: String,
    pub slip_type: String,
    pub slip_url: String,
    #[serde(default)]
    pub status: OrderStatus,
    /// Unix millis, set at insert, immutable
    pub created_at: i64,
}

/// Validated order payload, ready for insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub name: String,
    pub major: String,
    pub time: TimeSlot,
    pub color: ColorMode,
    pub copies: u32,
    pub file_name: String,
    pub file_type: String,
    pub file_url: String,
    pub slip_name: String,
    pub slip_type: String,
    pub slip_url: String,
}

impl OrderCreate {
    /// Build the full entity: derive pricing, default status, stamp creation time
    pub fn into_order(self) -> Order {
        let price = self.color.price_per_copy();
        Order {
            id: None,
            total_price: self.copies * price,
            price,
            name: self.name,
            major: self.major,
            time: self.time,
            color: self.color,
            copies: self.copies,
            file_name: self.file_name,
            file_type: self.file_type,
            file_url: self.file_url,
            slip_name: self.slip_name,
            slip_type: self.slip_type,
            slip_url: self.slip_url,
            status: OrderStatus::Pending,
            created_at: now_millis(),
        }
    }
}

/// Status update payload (PATCH /api/orders/{id})
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}
