//! Fixture documents that seed the in-memory collaborators.
//!
//! ```json
//! {
//!   "orders": { "42": [ { "id": 1, "type": "A", "amount": 201, "flag": true } ] },
//!   "classifications": {
//!     "1": { "status": "success", "amount": 60 },
//!     "2": { "failure": "connection reset" }
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use orderflow_core::{DomainError, DomainResult, OrderId, UserId};
use orderflow_orders::{DatabaseError, Order};

use crate::classification::{FixtureClassificationApi, ScriptedClassification};
use crate::database::InMemoryOrderDatabase;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixture document")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidKey(#[from] DomainError),

    #[error("failed to seed database")]
    Seed(#[from] DatabaseError),
}

#[derive(Debug, Default, Deserialize)]
pub struct Fixture {
    /// Orders per user id, in fetch order.
    #[serde(default)]
    pub orders: HashMap<String, Vec<Order>>,
    /// Classification outcomes per order id.
    #[serde(default)]
    pub classifications: HashMap<String, ScriptedClassification>,
}

impl Fixture {
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let raw = std::fs::read_to_string(path).map_err(|source| FixtureError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Build the database and API client described by this fixture.
    pub fn into_collaborators(
        self,
    ) -> Result<(InMemoryOrderDatabase, FixtureClassificationApi), FixtureError> {
        let db = InMemoryOrderDatabase::new();
        for (user, orders) in self.orders {
            db.insert_orders(parse_key::<UserId>(&user)?, orders)?;
        }

        let entries = self
            .classifications
            .into_iter()
            .map(|(order, outcome)| -> DomainResult<_> {
                Ok((parse_key::<OrderId>(&order)?, outcome))
            })
            .collect::<DomainResult<HashMap<_, _>>>()?;

        Ok((db, FixtureClassificationApi::from_entries(entries)))
    }
}

fn parse_key<T>(key: &str) -> DomainResult<T>
where
    T: core::str::FromStr<Err = DomainError>,
{
    key.parse()
}
