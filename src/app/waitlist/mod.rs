use axum::{routing::post, Router};

use super::AppState;

mod route;
pub mod schema;
mod service;

pub use service::{WaitlistError, CONFIRMATION_MESSAGE};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/waitlist", post(route::join_waitlist))
}
