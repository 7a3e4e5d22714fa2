use axum::{extract::State, Json};
use tracing::instrument;

use super::{
    schema::{WaitlistRequest, WaitlistResponse},
    service, CONFIRMATION_MESSAGE,
};
use crate::app::{error::AppResult, AppState};

#[instrument(name = "adding an email to the waitlist", skip(state, body), fields(email = %body.email, source = ?body.source))]
pub async fn join_waitlist(
    State(state): State<AppState>,
    Json(body): Json<WaitlistRequest>,
) -> AppResult<Json<WaitlistResponse>> {
    service::submit(&state.store, body.email, body.source).await?;

    Ok(Json(WaitlistResponse {
        success: true,
        message: CONFIRMATION_MESSAGE.to_owned(),
    }))
}
