use std::collections::BTreeMap;

use serde::Serialize;

use crate::order::{Order, OrderStatus, Priority};

/// Outcome counts for one processing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingSummary {
    pub total: usize,
    pub by_status: BTreeMap<OrderStatus, usize>,
    pub high_priority: usize,
    pub failures: usize,
}

impl ProcessingSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut summary = Self {
            total: orders.len(),
            ..Self::default()
        };

        for order in orders {
            *summary.by_status.entry(order.status).or_insert(0) += 1;
            if order.priority == Priority::High {
                summary.high_priority += 1;
            }
            if order.status.is_failure() {
                summary.failures += 1;
            }
        }

        summary
    }

    pub fn count(&self, status: OrderStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}
