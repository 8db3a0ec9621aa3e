//! Order processing domain module.
//!
//! This crate contains the per-order decision rules (type dispatch, status,
//! priority) and the processor that drives them over a user's order list.
//! All IO is delegated to the collaborator traits in [`collaborators`]; the
//! crate itself never touches a database, network, or file system.

pub mod collaborators;
pub mod export;
pub mod order;
pub mod processor;
pub mod summary;

pub use collaborators::{
    ApiError, ApiResponse, ClassificationApi, DatabaseError, ExportFileSystem, FileError,
    OpenMode, OrderDatabase,
};
pub use export::{export_file_name, export_rows, EXPORT_HEADER};
pub use order::{Order, OrderStatus, OrderType, Priority};
pub use processor::{OrderProcessor, ProcessError};
pub use summary::ProcessingSummary;
