use derive_more::Display;
use validator::validate_email;

/// A lower-cased, trimmed and syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Display, serde::Serialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    pub fn parse(value: String) -> Result<Self, String> {
        let normalized = value.trim().to_lowercase();
        if validate_email(&normalized) && has_public_domain(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(format!("{} is not a valid email address", value.trim()))
        }
    }
}

/// Rejects single-label hosts (`user@localhost`) and address literals (`user@[127.0.0.1]`).
fn has_public_domain(email: &str) -> bool {
    email
        .rsplit_once('@')
        .map(|(_, domain)| !domain.starts_with('[') && domain.contains('.'))
        .unwrap_or(false)
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
