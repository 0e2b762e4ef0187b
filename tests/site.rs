//! Page, health and asset routes

mod helpers;

use std::sync::Arc;

use axum::http::{StatusCode, header};
use helpers::{Outbox, app, body_json, body_text, get};

#[tokio::test]
async fn test_health() {
    let app = app(Arc::new(Outbox::default()));

    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn test_index_renders_every_section() {
    let app = app(Arc::new(Outbox::default()));

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    for id in ["home", "about", "services", "process", "testimonials", "contact"] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
    }
    assert!(html.contains(r#"id="contact-form""#));
    assert!(html.contains("Full-Stack Development"));
    assert!(html.contains("Social Media Management"));
    assert!(html.contains("valaidhalam03@gmail.com"));
    assert!(html.contains("/static/js/contact.js"));
}

#[tokio::test]
async fn test_success_panel_starts_hidden_beside_the_form() {
    let app = app(Arc::new(Outbox::default()));

    let html = body_text(get(&app, "/").await).await;

    assert!(html.contains(r#"<div id="contact-success" class="contact-success" role="status" hidden>"#));
    assert!(html.contains("Message sent successfully!"));
    assert!(!html.contains(r#"id="contact-form" class="contact-form" action="/api/send-email" method="post" novalidate hidden"#));

    let script = body_text(get(&app, "/static/js/contact.js").await).await;
    assert!(script.contains(r#"form.hidden = next === "success""#));
    assert!(script.contains(r#"successPanel.hidden = next !== "success""#));
}

#[tokio::test]
async fn test_index_lists_every_budget_option() {
    let app = app(Arc::new(Outbox::default()));

    let html = body_text(get(&app, "/").await).await;

    assert!(html.contains("₹10L+"));
    assert!(html.contains("₹50K – ₹2L"));
    assert!(html.contains("Let&#x27;s discuss") || html.contains("Let&#39;s discuss"));
}

#[tokio::test]
async fn test_unknown_route_renders_not_found() {
    let app = app(Arc::new(Outbox::default()));

    let response = get(&app, "/nope").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("404"));
}

#[tokio::test]
async fn test_embedded_assets_are_served() {
    let app = app(Arc::new(Outbox::default()));

    let response = get(&app, "/static/js/contact.js").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .contains("javascript")
    );
    assert!(body_text(response).await.contains("ERROR_RESET_DELAY"));

    let response = get(&app, "/static/missing.css").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
