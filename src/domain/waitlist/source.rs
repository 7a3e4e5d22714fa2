use derive_more::Display;

/// Origin tag used when a signup does not say where it came from.
pub const DEFAULT_SOURCE: &str = "landing-page";

/// Free-form tag recording where a signup came from.
#[derive(Debug, Clone, PartialEq, Eq, Display, serde::Serialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct Source(String);

impl Source {
    pub fn parse(value: Option<String>) -> Self {
        Self(value.unwrap_or_else(|| DEFAULT_SOURCE.to_owned()))
    }
}

impl AsRef<str> for Source {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
