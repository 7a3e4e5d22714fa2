/// Body of every error response: `{"detail": "..."}`.
#[derive(serde::Serialize)]
pub struct Error {
    pub detail: String,
}
