#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use lettre::Message;
use tower::ServiceExt;
use valaidhalam::{
    AppState,
    config::{Config, EmailConfig, ObservabilityConfig, ServerConfig, SiteConfig},
    email::{MailRelay, MailTransport},
    error::TransportError,
};

/// Transport that keeps formatted messages and can fail its first sends.
#[derive(Default)]
pub struct Outbox {
    sent: Mutex<Vec<String>>,
    failures_left: AtomicUsize,
    attempts: AtomicUsize,
}

impl Outbox {
    pub fn failing(times: usize) -> Self {
        Self {
            failures_left: AtomicUsize::new(times),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MailTransport for Outbox {
    async fn send(&self, message: Message) -> Result<(), TransportError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        let failed = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if failed {
            return Err(TransportError("Connection refused".to_string()));
        }

        let raw = String::from_utf8_lossy(&message.formatted()).to_string();
        self.sent.lock().unwrap().push(raw);

        Ok(())
    }
}

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        email: EmailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: "studio@valaidhalam.test".to_string(),
            smtp_password: "secret".to_string(),
            ..Default::default()
        },
        site: SiteConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn app(outbox: Arc<Outbox>) -> Router {
    let config = config();
    let relay = MailRelay::new(&config.email, outbox);

    valaidhalam::routes::router(AppState {
        config,
        relay: Arc::new(relay),
    })
}

pub async fn post_json(app: &Router, body: impl Into<String>) -> Response<Body> {
    let req = Request::post("/api/send-email")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();

    app.clone().oneshot(req).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let req = Request::get(uri).body(Body::empty()).unwrap();

    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
