use serde::{Deserialize, Serialize};

use orderflow_core::{Entity, OrderId};

/// Amount above which an order is `HIGH` priority (strict).
pub const HIGH_PRIORITY_THRESHOLD: f64 = 200.0;

/// Order type discriminator.
///
/// Only the exact, case-sensitive tags `"A"`, `"B"` and `"C"` are recognized.
/// Anything else (including the empty string) is kept verbatim so it can be
/// persisted and exported unchanged. A missing tag defaults to the empty one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderType {
    A,
    B,
    C,
    Unrecognized(String),
}

impl OrderType {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "A" => OrderType::A,
            "B" => OrderType::B,
            "C" => OrderType::C,
            other => OrderType::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OrderType::A => "A",
            OrderType::B => "B",
            OrderType::C => "C",
            OrderType::Unrecognized(tag) => tag,
        }
    }

}

impl Default for OrderType {
    fn default() -> Self {
        OrderType::Unrecognized(String::new())
    }
}

impl From<String> for OrderType {
    fn from(value: String) -> Self {
        OrderType::parse(&value)
    }
}

impl From<&str> for OrderType {
    fn from(value: &str) -> Self {
        OrderType::parse(value)
    }
}

impl From<OrderType> for String {
    fn from(value: OrderType) -> Self {
        match value {
            OrderType::Unrecognized(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl core::fmt::Display for OrderType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order status vocabulary.
///
/// Every order starts at `New` and leaves a processing pass with exactly one
/// of the other values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
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
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::New => "NEW",
            OrderStatus::Exported => "EXPORTED",
            OrderStatus::ExportFailed => "EXPORT_FAILED",
            OrderStatus::Processed => "PROCESSED",
            OrderStatus::Pending => "PENDING",
            OrderStatus::Error => "ERROR",
            OrderStatus::ApiError => "API_ERROR",
            OrderStatus::ApiFailure => "API_FAILURE",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::UnknownType => "UNKNOWN_TYPE",
            OrderStatus::DbError => "DB_ERROR",
        }
    }

    /// Statuses that record a failed rule or collaborator call.
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            OrderStatus::ExportFailed
                | OrderStatus::Error
                | OrderStatus::ApiError
                | OrderStatus::ApiFailure
                | OrderStatus::UnknownType
                | OrderStatus::DbError
        )
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    #[default]
    Low,
    High,
}

impl Priority {
    /// `High` iff `amount > 200`; exactly 200 stays `Low`.
    pub fn for_amount(amount: f64) -> Self {
        if amount > HIGH_PRIORITY_THRESHOLD {
            Priority::High
        } else {
            Priority::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::High => "HIGH",
        }
    }
}

impl core::fmt::Display for Priority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_status() -> OrderStatus {
    OrderStatus::New
}

/// A unit of work to classify.
///
/// `status` and `priority` are result fields: the processor overwrites them in
/// place during a pass. Amounts are not validated; zero and negative values
/// flow through the rules like any other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "type", default)]
    pub order_type: OrderType,
    pub amount: f64,
    #[serde(default)]
    pub flag: Option<bool>,
    #[serde(default = "default_status")]
    pub status: OrderStatus,
    #[serde(default)]
    pub priority: Priority,
}

impl Order {
    pub fn new(
        id: OrderId,
        order_type: impl Into<OrderType>,
        amount: f64,
        flag: Option<bool>,
    ) -> Self {
        Self {
            id,
            order_type: order_type.into(),
            amount,
            flag,
            status: OrderStatus::New,
            priority: Priority::Low,
        }
    }

    /// Tri-state flag collapsed for rule evaluation: absent reads as `false`.
    pub fn flag_set(&self) -> bool {
        self.flag.unwrap_or(false)
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
