use anyhow::{Result, bail};
use valaidhalam_contact::{
    Budget, Field, FormController, HttpSubmitClient, RETRY_MESSAGE, Service, SubmitError,
};

/// Values collected from the command line, in form order.
#[derive(Debug, Default)]
pub struct SubmitInput {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub service: Option<Service>,
    pub budget: Option<Budget>,
    pub message: String,
}

/// Fills the contact form and submits it once against a running relay.
pub async fn submit(endpoint: String, input: SubmitInput) -> Result<()> {
    let client = HttpSubmitClient::new(endpoint);
    tracing::info!(endpoint = client.endpoint(), "Submitting contact form...");

    let mut form = FormController::new(client);
    form.set_field(Field::Name, input.name);
    form.set_field(Field::Email, input.email);
    form.set_field(Field::Message, input.message);

    if let Some(company) = input.company {
        form.set_field(Field::Company, company);
    }
    if let Some(phone) = input.phone {
        form.set_field(Field::Phone, phone);
    }
    if let Some(service) = input.service {
        form.set_field(Field::Service, service.to_string());
    }
    if let Some(budget) = input.budget {
        form.set_field(Field::Budget, budget.to_string());
    }

    match form.submit().await {
        Ok(delivery) => {
            match delivery.message_id {
                Some(message_id) => println!("Message Sent! ({message_id})"),
                None => println!("Message Sent!"),
            }
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => {
            for (field, message) in &errors {
                eprintln!("{field}: {message}");
            }
            bail!("contact form has {} invalid field(s)", errors.len())
        }
        Err(err) => {
            eprintln!("{RETRY_MESSAGE}");
            Err(err.into())
        }
    }
}
