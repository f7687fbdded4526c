use axum::{Form, Json, extract::State};
use exon_contact::{RawContactForm, SubmissionResult};

use crate::routes::AppState;

/// POST /contact
///
/// Always answers 200, success or failure is carried by the result body.
/// The body is read as raw pairs so a repeated key never rejects the request.
pub async fn action(
    State(app_state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Json<SubmissionResult> {
    let input = RawContactForm::from_pairs(pairs);
    Json(app_state.contact.handle(input).await)
}
