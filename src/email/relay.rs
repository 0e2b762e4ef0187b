use std::sync::Arc;

use lettre::{
    Message,
    message::{Mailbox, MultiPart},
};
use tracing::{info, warn};
use uuid::Uuid;
use valaidhalam_contact::{SendReceipt, SubmissionPayload, render_html, render_text, subject_line};

use super::MailTransport;
use crate::config::EmailConfig;
use crate::error::RelayError;

pub const SUCCESS_MESSAGE: &str = "Email sent successfully";

/// Turns contact submissions into notification emails for the studio inbox.
///
/// Holds no per-request state, concurrent requests share one relay.
pub struct MailRelay {
    transport: Arc<dyn MailTransport>,
    from: String,
    to: String,
}

impl MailRelay {
    pub fn new(config: &EmailConfig, transport: Arc<dyn MailTransport>) -> Self {
        let from = config.sender().to_owned();
        let to = config.recipient().to_owned();

        if from.is_empty() || to.is_empty() {
            warn!("SMTP user and sender address are not configured, relayed emails will fail");
        }

        Self {
            transport,
            from,
            to,
        }
    }

    /// Builds the notification for a submission that passed the presence check.
    pub fn build_message(
        &self,
        payload: &SubmissionPayload,
        message_id: &str,
    ) -> Result<Message, RelayError> {
        let from: Mailbox = self.from.parse()?;
        let to: Mailbox = self.to.parse()?;
        let reply_to: Mailbox = payload.email.as_deref().unwrap_or_default().parse()?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .reply_to(reply_to)
            .subject(subject_line(payload))
            .message_id(Some(message_id.to_owned()))
            .multipart(MultiPart::alternative_plain_html(
                render_text(payload)?,
                render_html(payload)?,
            ))?;

        Ok(message)
    }

    /// Validates, renders and dispatches one submission.
    ///
    /// Nothing is sent when a required field is missing.
    pub async fn relay(&self, payload: &SubmissionPayload) -> Result<SendReceipt, RelayError> {
        let missing = payload.missing_required();
        if !missing.is_empty() {
            return Err(RelayError::ValidationError(missing));
        }

        let message_id = self.next_message_id();
        let message = self.build_message(payload, &message_id)?;

        self.transport.send(message).await?;

        info!(message_id = %message_id, "Email sent");

        Ok(SendReceipt {
            success: true,
            message: SUCCESS_MESSAGE.to_owned(),
            message_id,
        })
    }

    fn next_message_id(&self) -> String {
        let domain = self
            .from
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .filter(|domain| !domain.is_empty())
            .unwrap_or("localhost");

        format!("<{}@{domain}>", Uuid::new_v4())
    }
}
