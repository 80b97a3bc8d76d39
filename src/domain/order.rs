use serde::{Deserialize, Serialize};

pub const VIP_PRICE: i64 = 199;
pub const GENERAL_PRICE: i64 = 99;

/// Only the literal "vip" upgrades the amount; any other ticket string sells
/// at the general rate.
pub fn ticket_price(ticket: &str) -> i64 {
    if ticket == "vip" {
        VIP_PRICE
    } else {
        GENERAL_PRICE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub email: Option<String>,
    pub ticket: String,
    pub method: String,
    pub phone: Option<String>,
    pub amount: i64,
    pub status: OrderStatus,
    pub provider: Option<String>,
    pub provider_reference: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateOrderRequest {
    pub email: Option<String>,
    pub ticket: Option<String>,
    pub method: Option<String>,
    pub phone: Option<String>,
}

/// A freshly placed order. The provider instruction rides along on the
/// creation response only; it is not a stored column.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedOrder {
    #[serde(flatten)]
    pub order: Order,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}
