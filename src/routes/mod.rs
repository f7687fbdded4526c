use axum::{Router, response::IntoResponse, routing::get};
use exon_contact::SubmissionHandler;

use crate::template::{NotFoundTemplate, Template};

mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub contact: SubmissionHandler,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        axum::http::StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate {
            year: template.year,
        }),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", axum::routing::post(contact::action))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
