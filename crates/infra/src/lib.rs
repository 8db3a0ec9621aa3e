//! Infrastructure layer: collaborator implementations, config, fixtures.

pub mod classification;
pub mod config;
pub mod database;
pub mod export_fs;
pub mod fixtures;


pub use classification::{FixtureClassificationApi, ScriptedClassification};
pub use crate::config::OrderflowConfig;
pub use database::InMemoryOrderDatabase;
pub use export_fs::{CsvExportFileSystem, CsvExportHandle};
pub use fixtures::{Fixture, FixtureError};
