//! Contact form controller.
//!
//! Owns the form values, the per-field errors and the submission status.
//! Status changes are published on a watch channel so a view can follow them.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{error, info};

use crate::{
    Field, FieldErrors, SubmissionPayload, SubmissionStatus, SubmitError, validate::validate_form,
};

/// Time spent in `Error` before the form becomes submittable again.
pub const ERROR_RESET_DELAY: Duration = Duration::from_secs(3);

/// Shown instead of the failure detail, which only goes to the logs.
pub const RETRY_MESSAGE: &str = "Something went wrong. Please check your connection and try again.";

/// Result of a delivered submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delivery {
    pub message_id: Option<String>,
}

/// Sends one payload to the mail relay.
#[async_trait]
pub trait SubmitClient: Send + Sync {
    /// `Ok` only for a 2xx answer.
    async fn send(&self, payload: &SubmissionPayload) -> Result<Delivery, SubmitError>;
}

pub struct FormController<C> {
    client: C,
    payload: SubmissionPayload,
    errors: FieldErrors,
    status: Arc<watch::Sender<SubmissionStatus>>,
    reset: Option<JoinHandle<()>>,
}

impl<C: SubmitClient> FormController<C> {
    pub fn new(client: C) -> Self {
        let (status, _) = watch::channel(SubmissionStatus::Idle);

        Self {
            client,
            payload: SubmissionPayload::default(),
            errors: FieldErrors::new(),
            status: Arc::new(status),
            reset: None,
        }
    }

    pub fn payload(&self) -> &SubmissionPayload {
        &self.payload
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        *self.status.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    /// Message for the user while the form is in `Error`.
    pub fn notice(&self) -> Option<&'static str> {
        (self.status() == SubmissionStatus::Error).then_some(RETRY_MESSAGE)
    }

    /// Updates one field and clears its pending error.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.payload.set(field, value);
        self.errors.remove(&field);
    }

    pub fn validate(&mut self) -> &FieldErrors {
        self.errors = validate_form(&self.payload);
        &self.errors
    }

    /// Validates, then sends the form once.
    ///
    /// Nothing reaches the network when validation fails, while a previous
    /// submission is still in flight, or after the form was delivered.
    pub async fn submit(&mut self) -> Result<Delivery, SubmitError> {
        match self.status() {
            SubmissionStatus::Submitting => return Err(SubmitError::InFlight),
            SubmissionStatus::Success => return Err(SubmitError::AlreadySent),
            SubmissionStatus::Idle | SubmissionStatus::Error => {}
        }

        if !self.validate().is_empty() {
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        if let Some(reset) = self.reset.take() {
            reset.abort();
        }

        self.status.send_replace(SubmissionStatus::Submitting);

        match self.client.send(&self.payload).await {
            Ok(delivery) => {
                info!(message_id = ?delivery.message_id, "Contact form delivered");
                self.status.send_replace(SubmissionStatus::Success);

                Ok(delivery)
            }
            Err(err) => {
                error!(error = %err, "Contact form submission failed");
                self.status.send_replace(SubmissionStatus::Error);
                self.schedule_reset();

                Err(err)
            }
        }
    }

    fn schedule_reset(&mut self) {
        let status = self.status.clone();

        self.reset = Some(tokio::spawn(async move {
            tokio::time::sleep(ERROR_RESET_DELAY).await;
            status.send_if_modified(|current| {
                if *current != SubmissionStatus::Error {
                    return false;
                }

                *current = SubmissionStatus::Idle;
                true
            });
        }));
    }
}

impl<C> Drop for FormController<C> {
    fn drop(&mut self) {
        if let Some(reset) = self.reset.take() {
            reset.abort();
        }
    }
}
