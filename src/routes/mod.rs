use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use std::sync::Arc;

use crate::email::MailRelay;
use crate::template::{NotFoundTemplate, Template};

mod health;
mod index;
mod send_email;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub relay: Arc<MailRelay>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    let page = template.render(NotFoundTemplate {
        site: template.site(),
    });

    (StatusCode::NOT_FOUND, page)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/api/send-email", post(send_email::action))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
