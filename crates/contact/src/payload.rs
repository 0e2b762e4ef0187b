use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{Budget, Field, Service};

/// Contact form data as it travels from the browser to the relay.
///
/// Every field is optional on the wire: the relay decides what is missing
/// instead of failing deserialization, and empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SubmissionPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

impl SubmissionPayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.service = Some(service.to_string());
        self
    }

    pub fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = Some(budget.to_string());
        self
    }

    /// Value of a field, `None` when absent or empty.
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Phone => &self.phone,
            Field::Service => &self.service,
            Field::Budget => &self.budget,
            Field::Message => &self.message,
        };

        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Stores a field value; an empty value clears the field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = Some(value.into()).filter(|v| !v.is_empty());
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Phone => self.phone = value,
            Field::Service => self.service = value,
            Field::Budget => self.budget = value,
            Field::Message => self.message = value,
        }
    }

    /// Required fields that are absent, in form order.
    ///
    /// This is the relay-side check: presence only, no trimming and no email
    /// shape check.
    pub fn missing_required(&self) -> Vec<Field> {
        let Err(errors) = self.validate() else {
            return vec![];
        };

        let field_errors = errors.field_errors();

        Field::REQUIRED
            .into_iter()
            .filter(|field| {
                let key: &str = field.as_ref();
                field_errors.contains_key(key)
            })
            .collect()
    }
}

/// Body of a successful relay response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendReceipt {
    pub success: bool,
    pub message: String,
    pub message_id: String,
}

/// Body of a rejected or failed relay response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendFailure {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
