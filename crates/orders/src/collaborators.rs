//! Collaborator boundaries used by the processor.
//!
//! The database, the remote classification API and the export file system are
//! external systems. This module only defines their contracts; implementations
//! live in infrastructure (or in tests as doubles).
//!
//! ## Failure signalling
//!
//! - Database and API failures are `Err` values. The processor maps each error
//!   kind to an order status, except a failed order-list fetch, which aborts
//!   the pass.
//! - `ExportFileSystem::open` signals failure with `None` rather than an error
//!   value; the caller only needs to know whether a writable handle exists.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use orderflow_core::{OrderId, UserId};

use crate::order::{Order, OrderStatus, Priority};

/// Database gateway failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatabaseError {
    #[error("database unavailable: {0}")]
    Unavailable(String),

    #[error("database backend error: {0}")]
    Backend(String),
}

/// Call-level failure of the classification API (transport, timeout, remote crash).
///
/// A response that arrives with a non-success status is *not* an `ApiError`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("classification API unavailable: {0}")]
    Unavailable(String),

    #[error("classification API call timed out")]
    Timeout,
}

/// Failure while writing an already-opened export artifact.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("export write failed: {0}")]
    Write(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result of a remote classification lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// `"success"` or any other tag, which is treated as non-success.
    pub status: String,
    /// Referenced amount compared against the order in the type-B rule.
    pub amount: f64,
}

impl ApiResponse {
    pub const SUCCESS: &'static str = "success";

    pub fn success(amount: f64) -> Self {
        Self {
            status: Self::SUCCESS.to_string(),
            amount,
        }
    }

    pub fn with_status(status: impl Into<String>, amount: f64) -> Self {
        Self {
            status: status.into(),
            amount,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Self::SUCCESS
    }
}

/// Mode an export artifact is opened with. Exports always replace the file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenMode {
    /// Create or truncate.
    Write,
}

/// System of record for orders.
pub trait OrderDatabase {
    /// Fetch the ordered list of orders belonging to `user_id`.
    fn fetch_orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, DatabaseError>;

    /// Persist the outcome of one order.
    ///
    /// `Ok(false)` means the backend accepted the call but changed nothing
    /// (e.g. the row no longer exists). It is not a failure.
    fn update_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
        priority: Priority,
    ) -> Result<bool, DatabaseError>;
}

/// Remote classification lookup used by type-B orders.
pub trait ClassificationApi {
    fn classify(&self, order_id: OrderId) -> Result<ApiResponse, ApiError>;
}

/// Row-oriented export sink used by type-A orders.
pub trait ExportFileSystem {
    type Handle;

    /// Open `name` for writing. `None` when no writable handle can be produced.
    fn open(&self, name: &str, mode: OpenMode) -> Option<Self::Handle>;

    fn write_row(&self, handle: &mut Self::Handle, fields: &[String]) -> Result<(), FileError>;

    fn close(&self, handle: Self::Handle) -> Result<(), FileError>;
}

impl<D> OrderDatabase for Arc<D>
where
    D: OrderDatabase + ?Sized,
{
    fn fetch_orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, DatabaseError> {
        (**self).fetch_orders_for_user(user_id)
    }

    fn update_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
        priority: Priority,
    ) -> Result<bool, DatabaseError> {
        (**self).update_status(order_id, status, priority)
    }
}

impl<D> OrderDatabase for &D
where
    D: OrderDatabase + ?Sized,
{
    fn fetch_orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, DatabaseError> {
        (**self).fetch_orders_for_user(user_id)
    }

    fn update_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
        priority: Priority,
    ) -> Result<bool, DatabaseError> {
        (**self).update_status(order_id, status, priority)
    }
}

impl<A> ClassificationApi for Arc<A>
where
    A: ClassificationApi + ?Sized,
{
    fn classify(&self, order_id: OrderId) -> Result<ApiResponse, ApiError> {
        (**self).classify(order_id)
    }
}

impl<A> ClassificationApi for &A
where
    A: ClassificationApi + ?Sized,
{
    fn classify(&self, order_id: OrderId) -> Result<ApiResponse, ApiError> {
        (**self).classify(order_id)
    }
}

impl<F> ExportFileSystem for Arc<F>
where
    F: ExportFileSystem + ?Sized,
{
    type Handle = F::Handle;

    fn open(&self, name: &str, mode: OpenMode) -> Option<Self::Handle> {
        (**self).open(name, mode)
    }

    fn write_row(&self, handle: &mut Self::Handle, fields: &[String]) -> Result<(), FileError> {
        (**self).write_row(handle, fields)
    }

    fn close(&self, handle: Self::Handle) -> Result<(), FileError> {
        (**self).close(handle)
    }
}

impl<F> ExportFileSystem for &F
where
    F: ExportFileSystem + ?Sized,
{
    type Handle = F::Handle;

    fn open(&self, name: &str, mode: OpenMode) -> Option<Self::Handle> {
        (**self).open(name, mode)
    }

    fn write_row(&self, handle: &mut Self::Handle, fields: &[String]) -> Result<(), FileError> {
        (**self).write_row(handle, fields)
    }

    fn close(&self, handle: Self::Handle) -> Result<(), FileError> {
        (**self).close(handle)
    }
}
