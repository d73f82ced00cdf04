use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::{Method, Uri},
};
use receipts_types::Receipt;
use tracing::{debug, info, instrument, warn};

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::store::StoredReceipt;
use crate::types::{PointsResponse, ProcessReceiptResponse};

/// `POST /receipts/process`
///
/// The body is decoded by hand rather than through the `Json` extractor so a
/// missing or unexpected `Content-Type` is not a reason to reject a receipt,
/// and every decode failure maps to a 400.
#[instrument(skip_all)]
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    let receipt: Receipt = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body_bytes = body.len(), "Rejected malformed receipt");
        ApiError::from(e)
    })?;

    let id = state.ids.next_id();
    let item_count = receipt.items.len();
    state.store.put(StoredReceipt::new(id.clone(), receipt));

    info!(receipt_id = %id, item_count, stored = state.store.len(), "Stored receipt");
    Ok(Json(ProcessReceiptResponse { id }))
}

/// `GET /receipts/{id}/points`
///
/// An id that does not decode to UTF-8 can never have been issued, so it is
/// reported as an unknown receipt.
#[instrument(skip_all)]
pub async fn get_points(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<PointsResponse>> {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            info!(error = %rejection, "Undecodable receipt id");
            return Err(ApiError::not_found("Receipt"));
        }
    };

    let Some(stored) = state.store.get(&id) else {
        info!(receipt_id = %id, "Receipt not found");
        return Err(ApiError::not_found("Receipt"));
    };

    let breakdown = state.calculator.breakdown(&stored.receipt);
    debug!(receipt_id = %id, contributions = ?breakdown.contributions, "Points breakdown");
    info!(receipt_id = %id, points = breakdown.total, "Computed receipt points");

    Ok(Json(PointsResponse { points: breakdown.total }))
}

/// Fallback for unknown paths and for known paths with an unsupported method.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    debug!(%method, %uri, "No route matched");
    ApiError::not_found(format!("Route {} {}", method, uri.path()))
}
