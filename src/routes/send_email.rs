use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    response::IntoResponse,
};
use valaidhalam_contact::SubmissionPayload;

use crate::error::RelayError;
use crate::routes::AppState;

/// POST /api/send-email
///
/// Body and JSON failures are both reported through [`RelayError`], never by
/// axum's own rejections.
pub async fn action(
    State(app): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, RelayError> {
    let payload: SubmissionPayload = serde_json::from_slice(&body?)?;
    let receipt = app.relay.relay(&payload).await?;

    Ok(Json(receipt))
}
