//! In-memory database gateway.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use tracing::debug;

use orderflow_core::{Entity, OrderId, UserId};
use orderflow_orders::{DatabaseError, Order, OrderDatabase, OrderStatus, Priority};

/// In-memory system of record for orders, keyed by owning user.
///
/// Intended for tests/dev and for fixture-driven runs. Fetch order is the
/// insertion order. Order ids are unique across all users; persisted outcomes
/// are written back onto the stored order.
#[derive(Debug, Default)]
pub struct InMemoryOrderDatabase {
    orders: RwLock<HashMap<UserId, Vec<Order>>>,
}

impl InMemoryOrderDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `orders` to `user_id`'s list.
    ///
    /// Rejects the whole batch if any id is already stored or repeats within it.
    pub fn insert_orders(
        &self,
        user_id: UserId,
        orders: impl IntoIterator<Item = Order>,
    ) -> Result<(), DatabaseError> {
        let orders: Vec<Order> = orders.into_iter().collect();
        let mut map = self.orders.write().map_err(|_| poisoned())?;

        let mut seen: HashSet<OrderId> = map.values().flatten().map(|o| *o.id()).collect();
        if let Some(dup) = orders.iter().find(|o| !seen.insert(*o.id())) {
            return Err(DatabaseError::Backend(format!("duplicate order id {}", dup.id)));
        }

        map.entry(user_id).or_default().extend(orders);
        Ok(())
    }

    /// Current stored state of one order.
    pub fn order(&self, order_id: OrderId) -> Option<Order> {
        let map = self.orders.read().ok()?;
        map.values()
            .flatten()
            .find(|o| *o.id() == order_id)
            .cloned()
    }
}

fn poisoned() -> DatabaseError {
    DatabaseError::Backend("lock poisoned".to_string())
}

impl OrderDatabase for InMemoryOrderDatabase {
    fn fetch_orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, DatabaseError> {
        let map = self.orders.read().map_err(|_| poisoned())?;
        Ok(map.get(&user_id).cloned().unwrap_or_default())
    }

    fn update_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
        priority: Priority,
    ) -> Result<bool, DatabaseError> {
        let mut map = self.orders.write().map_err(|_| poisoned())?;

        let Some(stored) = map.values_mut().flatten().find(|o| *o.id() == order_id) else {
            debug!(%order_id, "no stored order to update");
            return Ok(false);
        };

        stored.status = status;
        stored.priority = priority;
        Ok(true)
    }
}
