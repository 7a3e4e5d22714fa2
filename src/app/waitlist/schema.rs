use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct WaitlistRequest {
    pub email: String,
    pub source: Option<String>,
}

#[derive(Serialize)]
pub struct WaitlistResponse {
    pub success: bool,
    pub message: String,
}
