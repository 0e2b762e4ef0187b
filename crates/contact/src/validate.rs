use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use validator::{Validate, ValidationError};

use crate::{Field, SubmissionPayload};

static RE_EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape pattern is valid")
});

const NAME_REQUIRED: &str = "Name is required";
const EMAIL_INVALID: &str = "Valid email required";
const MESSAGE_REQUIRED: &str = "Message is required";

/// Per-field error messages, ordered like the form.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Browser-side rules: name and message must have visible content and the
/// email must look like `local@domain.tld`. Optional fields never fail.
#[derive(Validate)]
struct ContactFormInput {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    name: String,
    #[validate(regex(path = *RE_EMAIL_SHAPE, message = "Valid email required"))]
    email: String,
    #[validate(custom(function = "not_blank", message = "Message is required"))]
    message: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    RE_EMAIL_SHAPE.is_match(email)
}

pub fn validate_form(payload: &SubmissionPayload) -> FieldErrors {
    let input = ContactFormInput {
        name: payload.get(Field::Name).unwrap_or_default().to_owned(),
        email: payload.get(Field::Email).unwrap_or_default().to_owned(),
        message: payload.get(Field::Message).unwrap_or_default().to_owned(),
    };

    let Err(errors) = input.validate() else {
        return FieldErrors::new();
    };

    let field_errors = errors.field_errors();

    [
        (Field::Name, NAME_REQUIRED),
        (Field::Email, EMAIL_INVALID),
        (Field::Message, MESSAGE_REQUIRED),
    ]
    .into_iter()
    .filter(|(field, _)| {
        let key: &str = field.as_ref();
        field_errors.contains_key(key)
    })
    .collect()
}
