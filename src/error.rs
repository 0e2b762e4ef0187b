use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use valaidhalam_contact::{Field, SendFailure};

/// Failure reported by a mail transport.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct TransportError(pub String);

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Name, email, and message are required (missing: {})", join_fields(.0))]
    ValidationError(Vec<Field>),

    #[error("Failed to read request body: {0}")]
    BodyError(#[from] axum::extract::rejection::BytesRejection),

    #[error("Invalid request body: {0}")]
    PayloadError(#[from] serde_json::Error),

    #[error("Failed to render email: {0}")]
    RenderError(#[from] valaidhalam_contact::Error),

    #[error("Invalid address: {0}")]
    AddressError(#[from] lettre::address::AddressError),

    #[error("Failed to build email: {0}")]
    MessageError(#[from] lettre::error::Error),

    #[error("{0}")]
    TransportError(#[from] TransportError),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            RelayError::ValidationError(_) => (
                StatusCode::BAD_REQUEST,
                SendFailure {
                    error: self.to_string(),
                    details: None,
                },
            ),
            err => {
                tracing::error!(error = %err, "Error sending email");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SendFailure {
                        error: "Failed to send email".to_string(),
                        details: Some(err.to_string()),
                    },
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}
