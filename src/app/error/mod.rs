use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::waitlist::WaitlistError;
use crate::store::StoreUnavailable;

mod schema;

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// Error returned by API handlers.
///
/// Each variant maps to a status code and a fixed message in a JSON `detail` field.
/// Internal causes are logged but never sent to the client.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),
    #[error("This email is already on the waitlist")]
    Conflict,
    #[error("Waitlist storage is not configured")]
    StoreUnavailable(#[source] StoreUnavailable),
    #[error("Failed to add email to waitlist")]
    InsertFailed,
    #[error("Internal server error")]
    UnexpectedError(#[from] anyhow::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict => StatusCode::CONFLICT,
            Self::StoreUnavailable(_) | Self::InsertFailed | Self::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<WaitlistError> for AppError {
    fn from(e: WaitlistError) -> Self {
        match e {
            WaitlistError::Validation(detail) => Self::ValidationError(detail),
            WaitlistError::Conflict => Self::Conflict,
            WaitlistError::NothingInserted => Self::InsertFailed,
            WaitlistError::Unavailable(e) => Self::StoreUnavailable(e),
            WaitlistError::Store(e) => Self::UnexpectedError(e.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationError(ref s) => tracing::info!(detail = %s, "rejected invalid input"),
            Self::Conflict => tracing::info!("rejected duplicate signup"),
            Self::StoreUnavailable(ref e) => tracing::error!("waitlist store is unavailable: {:?}", e),
            Self::UnexpectedError(ref e) => tracing::error!("{:?}", e),
            Self::InsertFailed => tracing::error!("store returned no inserted rows"),
        }

        (
            self.status_code(),
            Json(schema::Error {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
