use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN", alias = "admin")]
    Admin,
    #[serde(rename = "USER", alias = "user")]
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Same account, by id when both sides carry one, otherwise by login name.
    pub fn is_same_account(&self, other: &User) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => self.name == other.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default = "active_by_default")]
    pub active: bool,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl DeliveryInfo {
    pub fn is_complete(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        filled(&self.phone) && filled(&self.address)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i64,
    pub dish_id: i64,
    pub quantity: u32,
    pub price: Decimal,
    pub item_total: Decimal,
}

impl CartItem {
    pub fn expected_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub cart_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub cart_items: Vec<CartItem>,
    pub total: Decimal,
}

impl Cart {
    pub fn item_count(&self) -> u32 {
        self.cart_items.iter().map(|item| item.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cart_items.is_empty()
    }

    pub fn find_by_dish(&self, dish_id: i64) -> Option<&CartItem> {
        self.cart_items.iter().find(|item| item.dish_id == dish_id)
    }

    pub fn find_item(&self, cart_item_id: i64) -> Option<&CartItem> {
        self.cart_items.iter().find(|item| item.id == cart_item_id)
    }

    /// `total == Σ itemTotal` and every line has `itemTotal == quantity * price`
    /// with a positive quantity.
    pub fn is_consistent(&self) -> bool {
        let lines_ok = self
            .cart_items
            .iter()
            .all(|item| item.quantity > 0 && item.item_total == item.expected_total());
        let sum: Decimal = self.cart_items.iter().map(|item| item.item_total).sum();
        lines_ok && sum == self.total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown order status: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub dish_id: i64,
    pub quantity: u32,
    pub price_at_order: Decimal,
    pub item_total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    pub order_time: NaiveDateTime,
    pub status: OrderStatus,
    pub total: Decimal,
}

impl Order {
    pub fn item_count(&self) -> u32 {
        self.order_items.iter().map(|item| item.quantity).sum()
    }

    pub fn is_cancellable(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub price: Decimal,
    pub weight: u32,
    #[serde(default)]
    pub restaurant_id: Option<i64>,
    #[serde(default)]
    pub restaurant_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
