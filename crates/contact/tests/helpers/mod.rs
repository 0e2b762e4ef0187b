use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use valaidhalam_contact::{Delivery, Field, FormController, SubmissionPayload, SubmitClient, SubmitError};

/// Answers every call with the configured outcome and records what it got.
pub struct FakeClient {
    fail: bool,
    calls: AtomicUsize,
    sent: Mutex<Vec<SubmissionPayload>>,
}

#[allow(dead_code)]
impl FakeClient {
    pub fn accepting() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
            sent: Mutex::new(vec![]),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::accepting()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<SubmissionPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl<'a> SubmitClient for &'a FakeClient {
    async fn send(&self, payload: &SubmissionPayload) -> Result<Delivery, SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(payload.clone());

        if self.fail {
            return Err(SubmitError::Network("connection refused".to_owned()));
        }

        Ok(Delivery {
            message_id: Some("<fake@valaidhalam.localhost>".to_owned()),
        })
    }
}

#[allow(dead_code)]
pub fn fill_valid<C: SubmitClient>(form: &mut FormController<C>) {
    form.set_field(Field::Name, "Arjun");
    form.set_field(Field::Email, "a@b.com");
    form.set_field(Field::Message, "Hi");
}
