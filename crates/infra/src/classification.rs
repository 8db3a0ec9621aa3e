//! Fixture-backed classification API client.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use orderflow_core::OrderId;
use orderflow_orders::{ApiError, ApiResponse, ClassificationApi};

/// Scripted outcome for one order: a response, or a call-level failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptedClassification {
    Failure { failure: String },
    Response(ApiResponse),
}

/// Answers classification lookups from a fixed table.
///
/// Orders without an entry behave like an unreachable remote.
#[derive(Debug, Clone, Default)]
pub struct FixtureClassificationApi {
    entries: HashMap<OrderId, ScriptedClassification>,
}

impl FixtureClassificationApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: HashMap<OrderId, ScriptedClassification>) -> Self {
        Self { entries }
    }

    pub fn with_response(mut self, order_id: OrderId, response: ApiResponse) -> Self {
        self.entries
            .insert(order_id, ScriptedClassification::Response(response));
        self
    }

    pub fn with_failure(mut self, order_id: OrderId, reason: impl Into<String>) -> Self {
        self.entries.insert(
            order_id,
            ScriptedClassification::Failure {
                failure: reason.into(),
            },
        );
        self
    }
}

impl ClassificationApi for FixtureClassificationApi {
    fn classify(&self, order_id: OrderId) -> Result<ApiResponse, ApiError> {
        match self.entries.get(&order_id) {
            Some(ScriptedClassification::Response(response)) => Ok(response.clone()),
            Some(ScriptedClassification::Failure { failure }) => {
                Err(ApiError::Unavailable(failure.clone()))
            }
            None => Err(ApiError::Unavailable(format!(
                "no classification for order {order_id}"
            ))),
        }
    }
}
