//! Simulated ordering.
//!
//! Nothing here reaches a delivery platform. Confirmations look real enough
//! to finish a demo flow and always say that they are simulated.

use std::time::{SystemTime, UNIX_EPOCH};

use menu_synth::round_cents;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Sales tax applied to the item subtotal.
pub const TAX_RATE: f64 = 0.0875;

/// Delivery estimate quoted on every confirmation, in minutes.
pub const ESTIMATED_DELIVERY_MINUTES: u32 = 30;

pub const ORDER_NOTE: &str = "This is a simulated order. No real order has been placed.";
pub const STATUS_NOTE: &str = "This is a simulated order status.";

/// Current time in whole minutes since the Unix epoch.
pub fn current_unix_minute() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() / 60)
        .unwrap_or(0)
}

/// Order id for an item, stable within one wall-clock minute.
///
/// `SS-` followed by the first eight hex digits, upper-cased, of the SHA-256
/// of `"{restaurant_id}:{item_name}:{unix_minute}"`.
pub fn generate_order_id(restaurant_id: &str, item_name: &str, unix_minute: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}:{}:{}", restaurant_id, item_name, unix_minute).as_bytes());
    let digest = hasher.finalize();
    format!("SS-{}", hex::encode_upper(&digest[..4]))
}

/// What the caller wants ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub item_name: String,
    pub item_price: f64,
    pub delivery_address: String,
    pub delivery_fee: f64,
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedItem {
    pub name: String,
    pub price: f64,
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryDetails {
    pub address: String,
    pub estimated_time_minutes: u32,
    pub fee: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub tax: f64,
    pub total: f64,
}

impl CostBreakdown {
    /// Tax on the subtotal only; the delivery fee is untaxed.
    pub fn new(subtotal: f64, delivery_fee: f64) -> Self {
        let tax = round_cents(subtotal * TAX_RATE);
        Self {
            subtotal,
            delivery_fee,
            tax,
            total: round_cents(subtotal + delivery_fee + tax),
        }
    }
}

/// Confirmation returned for a simulated order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub status: String,
    pub order_id: String,
    pub restaurant: RestaurantRef,
    pub item: OrderedItem,
    pub delivery: DeliveryDetails,
    pub cost_breakdown: CostBreakdown,
    pub note: String,
}

/// Confirm `request` as if it had been placed at `unix_minute`.
pub fn place_order(request: OrderRequest, unix_minute: u64) -> OrderConfirmation {
    let order_id = generate_order_id(&request.restaurant_id, &request.item_name, unix_minute);
    let special_instructions = request
        .special_instructions
        .filter(|s| !s.trim().is_empty());

    OrderConfirmation {
        status: "confirmed".to_string(),
        order_id,
        restaurant: RestaurantRef {
            id: request.restaurant_id,
            name: request.restaurant_name,
        },
        item: OrderedItem {
            name: request.item_name,
            price: request.item_price,
            special_instructions,
        },
        delivery: DeliveryDetails {
            address: request.delivery_address,
            estimated_time_minutes: ESTIMATED_DELIVERY_MINUTES,
            fee: request.delivery_fee,
        },
        cost_breakdown: CostBreakdown::new(request.item_price, request.delivery_fee),
        note: ORDER_NOTE.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub status: String,
    pub time: String,
    pub complete: bool,
}

/// Status report for a simulated order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatus {
    pub order_id: String,
    pub status: String,
    pub timeline: Vec<TimelineEntry>,
    pub estimated_delivery: String,
    pub note: String,
}

/// Every order is reported as being prepared.
pub fn order_status(order_id: &str) -> OrderStatus {
    let step = |status: &str, time: &str, complete: bool| TimelineEntry {
        status: status.to_string(),
        time: time.to_string(),
        complete,
    };

    OrderStatus {
        order_id: order_id.to_string(),
        status: "preparing".to_string(),
        timeline: vec![
            step("confirmed", "0 min ago", true),
            step("preparing", "now", true),
            step("picked_up", "~10 min", false),
            step("delivered", "~25 min", false),
        ],
        estimated_delivery: "25-35 minutes".to_string(),
        note: STATUS_NOTE.to_string(),
    }
}
