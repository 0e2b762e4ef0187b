use async_trait::async_trait;

use crate::{Delivery, SendFailure, SendReceipt, SubmissionPayload, SubmitClient, SubmitError};

/// Posts submissions as JSON to a running relay.
#[derive(Clone)]
pub struct HttpSubmitClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitClient for HttpSubmitClient {
    async fn send(&self, payload: &SubmissionPayload) -> Result<Delivery, SubmitError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();

        if status.is_success() {
            let message_id = response
                .json::<SendReceipt>()
                .await
                .ok()
                .map(|receipt| receipt.message_id);

            return Ok(Delivery { message_id });
        }

        let error = match response.json::<SendFailure>().await {
            Ok(SendFailure {
                error,
                details: Some(details),
            }) => format!("{error}: {details}"),
            Ok(SendFailure { error, .. }) => error,
            Err(_) => status.canonical_reason().unwrap_or("unknown").to_owned(),
        };

        Err(SubmitError::Rejected {
            status: status.as_u16(),
            error,
        })
    }
}
