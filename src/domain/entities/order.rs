use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// A record the engine can key by a stable identifier.
pub trait TableRow {
    fn row_id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        OrderId(value.to_string())
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        OrderId(value)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order lifecycle. Variant order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Failed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Failed,
    ];

    pub const TOKENS: [&'static str; 5] =
        ["pending", "processing", "shipped", "delivered", "failed"];

    pub fn as_str(self) -> &'static str {
        Self::TOKENS[self.rank() as usize]
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Failed => "Failed",
        }
    }

    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown order status: {:?}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let token = value.trim();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| UnknownStatus(token.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub quantity: u32,
    pub product: String,
    pub company: String,
    pub category: String,
    pub image_url: String,
    pub customer: String,
    pub status: OrderStatus,
    pub price: f64,
    pub order_date: NaiveDate,
}

impl TableRow for Order {
    fn row_id(&self) -> &str {
        &self.id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_order_follows_declared_lifecycle() {
        let mut shuffled = vec![
            OrderStatus::Failed,
            OrderStatus::Delivered,
            OrderStatus::Pending,
            OrderStatus::Shipped,
            OrderStatus::Processing,
        ];
        shuffled.sort();
        assert_eq!(shuffled, OrderStatus::ALL.to_vec());
    }

    #[test]
    fn status_parses_tokens_case_insensitively() {
        assert_eq!("Shipped".parse::<OrderStatus>(), Ok(OrderStatus::Shipped));
        assert_eq!(" failed ".parse::<OrderStatus>(), Ok(OrderStatus::Failed));
        assert!("pend".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn status_token_matches_rank() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str(), OrderStatus::TOKENS[status.rank() as usize]);
        }
    }
}
