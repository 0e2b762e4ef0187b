use askama::Template;

use crate::{Field, SubmissionPayload};

/// One labelled line of the notification, present only when the field is.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLine<'a> {
    pub label: &'static str,
    pub value: &'a str,
    pub href: Option<String>,
}

fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::Company => "Company",
        Field::Phone => "Phone",
        Field::Service => "Service Needed",
        Field::Budget => "Budget Range",
        Field::Message => "Message",
    }
}

/// Every single-line field of the payload that carries a value, in form order.
pub fn field_lines(payload: &SubmissionPayload) -> Vec<FieldLine<'_>> {
    [
        Field::Name,
        Field::Email,
        Field::Company,
        Field::Phone,
        Field::Service,
        Field::Budget,
    ]
    .into_iter()
    .filter_map(|field| {
        let value = payload.get(field)?;
        let href = match field {
            Field::Email => Some(format!("mailto:{value}")),
            Field::Phone => Some(format!("tel:{value}")),
            _ => None,
        };

        Some(FieldLine {
            label: label(field),
            value,
            href,
        })
    })
    .collect()
}

#[derive(Template)]
#[template(path = "emails/submission.html")]
struct SubmissionHtmlTemplate<'a> {
    fields: Vec<FieldLine<'a>>,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "emails/submission.txt")]
struct SubmissionTextTemplate<'a> {
    fields: Vec<FieldLine<'a>>,
    message: &'a str,
}

/// HTML body of the notification email.
pub fn render_html(payload: &SubmissionPayload) -> crate::Result<String> {
    Ok(SubmissionHtmlTemplate {
        fields: field_lines(payload),
        message: payload.get(Field::Message).unwrap_or_default(),
    }
    .render()?)
}

/// Plain-text fallback body of the notification email.
pub fn render_text(payload: &SubmissionPayload) -> crate::Result<String> {
    Ok(SubmissionTextTemplate {
        fields: field_lines(payload),
        message: payload.get(Field::Message).unwrap_or_default(),
    }
    .render()?)
}

pub fn subject_line(payload: &SubmissionPayload) -> String {
    format!(
        "New Contact Form Submission from {}",
        payload.get(Field::Name).unwrap_or_default()
    )
}
