use std::fmt;
use std::str::FromStr;

/// Amount above which an order is processed with high priority.
pub const HIGH_PRIORITY_AMOUNT: f64 = 200.0;

/// Category of an order. Only `A`, `B` and `C` carry rules; anything else is
/// kept verbatim so it can be reported and exported unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderType {
    A,
    B,
    C,
    Other(String),
}

impl OrderType {
    pub fn as_str(&self) -> &str {
        match self {
            OrderType::A => "A",
            OrderType::B => "B",
            OrderType::C => "C",
            OrderType::Other(tag) => tag,
        }
    }
}

impl From<&str> for OrderType {
    fn from(tag: &str) -> Self {
        match tag {
            "A" => OrderType::A,
            "B" => OrderType::B,
            "C" => OrderType::C,
            other => OrderType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processing status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    New,
    Exported,
    ExportFailed,
    Processed,
    Pending,
    Error,
    ApiError,
    ApiFailure,
    Completed,
    InProgress,
    UnknownType,
    DbError,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Exported => "exported",
            OrderStatus::ExportFailed => "export_failed",
            OrderStatus::Processed => "processed",
            OrderStatus::Pending => "pending",
            OrderStatus::Error => "error",
            OrderStatus::ApiError => "api_error",
            OrderStatus::ApiFailure => "api_failure",
            OrderStatus::Completed => "completed",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::UnknownType => "unknown_type",
            OrderStatus::DbError => "db_error",
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
        let status = match s {
            "new" => OrderStatus::New,
            "exported" => OrderStatus::Exported,
            "export_failed" => OrderStatus::ExportFailed,
            "processed" => OrderStatus::Processed,
            "pending" => OrderStatus::Pending,
            "error" => OrderStatus::Error,
            "api_error" => OrderStatus::ApiError,
            "api_failure" => OrderStatus::ApiFailure,
            "completed" => OrderStatus::Completed,
            "in_progress" => OrderStatus::InProgress,
            "unknown_type" => OrderStatus::UnknownType,
            "db_error" => OrderStatus::DbError,
            other => return Err(format!("Unknown order status: {}", other)),
        };
        Ok(status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    High,
}

impl Priority {
    /// Priority is derived from the amount alone.
    pub fn for_amount(amount: f64) -> Self {
        if amount > HIGH_PRIORITY_AMOUNT {
            Priority::High
        } else {
            Priority::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub order_type: OrderType,
    pub amount: f64,
    pub flag: bool,
    pub status: OrderStatus,
    pub priority: Priority,
}

impl Order {
    /// Creates a new order.
    ///
    /// # Notes
    /// Every order starts out as `new` with `low` priority; the processor is
    /// the only thing that moves it on from there.
    pub fn new(
        id: impl Into<String>,
        order_type: impl Into<OrderType>,
        amount: f64,
        flag: bool,
    ) -> Self {
        Self {
            id: id.into(),
            order_type: order_type.into(),
            amount,
            flag,
            status: OrderStatus::New,
            priority: Priority::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_defaults() {
        let order = Order::new("1", "A", 100.0, false);
        assert_eq!(order.order_type, OrderType::A);
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.priority, Priority::Low);
    }

    #[test]
    fn test_unrecognised_type_is_kept_verbatim() {
        let order = Order::new("2", "x", 10.0, true);
        assert_eq!(order.order_type, OrderType::Other("x".to_string()));
        assert_eq!(order.order_type.to_string(), "x");
        // tags are case-sensitive
        assert_eq!(OrderType::from("a"), OrderType::Other("a".to_string()));
    }

    #[test]
    fn test_priority_boundary() {
        assert_eq!(Priority::for_amount(200.0), Priority::Low);
        assert_eq!(Priority::for_amount(200.01), Priority::High);
        assert_eq!(Priority::for_amount(0.0), Priority::Low);
    }

    #[test]
    fn test_status_strings_parse_back() {
        for status in [
            OrderStatus::New,
            OrderStatus::ExportFailed,
            OrderStatus::ApiFailure,
            OrderStatus::InProgress,
            OrderStatus::UnknownType,
            OrderStatus::DbError,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert!("shipped".parse::<OrderStatus>().is_err());
    }
}
