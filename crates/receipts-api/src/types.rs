//! Request and response payloads for the HTTP API

use serde::{Deserialize, Serialize};

/// Response to `POST /receipts/process`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    /// Identifier to use with the points endpoint
    pub id: String,
}

/// Response to `GET /receipts/{id}/points`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}
