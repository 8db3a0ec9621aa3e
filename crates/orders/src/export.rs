//! Export artifact layout for type-A orders.
//!
//! The layout is fixed: a header row, one data row, and an annotation row
//! only for high-value orders. Rows are built here without IO so the
//! processor only has to hand them to the file system.

use chrono::{DateTime, Utc};

use orderflow_core::UserId;

use crate::order::Order;

/// Amount above which the artifact carries the high-value annotation (strict).
pub const HIGH_VALUE_THRESHOLD: f64 = 150.0;

pub const EXPORT_HEADER: [&str; 6] = ["ID", "Type", "Amount", "Flag", "Status", "Priority"];

pub const HIGH_VALUE_NOTE: [&str; 6] = ["", "", "", "", "Note", "High value order"];

/// Deterministic artifact name for a user at a point in time (second resolution).
pub fn export_file_name(user_id: UserId, at: DateTime<Utc>) -> String {
    format!("orders_type_A_{}_{}.csv", user_id, at.timestamp())
}

/// Rows written for `order`, in order.
///
/// The data row reflects the order as it is when exported, before the pass
/// has assigned its final status and priority.
pub fn export_rows(order: &Order) -> Vec<Vec<String>> {
    let mut rows = vec![
        to_row(&EXPORT_HEADER),
        vec![
            order.id.to_string(),
            order.order_type.to_string(),
            order.amount.to_string(),
            order.flag_set().to_string(),
            order.status.to_string(),
            order.priority.to_string(),
        ],
    ];

    if order.amount > HIGH_VALUE_THRESHOLD {
        rows.push(to_row(&HIGH_VALUE_NOTE));
    }

    rows
}

fn to_row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}
