use std::time::Duration;

use config::{Config, ConfigError, Environment};
use secrecy::Secret;
use serde::Deserialize;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:3001";

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Comma-separated list of origins allowed to call the API from a browser.
    allowed_origins: String,
    pub store: StoreSettings,
}

/// Connection details for the hosted waitlist store.
///
/// Both values are optional here: a missing URL or key only becomes an error
/// when the store is first used.
#[derive(Deserialize, Clone)]
pub struct StoreSettings {
    pub url: Option<String>,
    pub key: Option<Secret<String>>,
    pub timeout_milliseconds: u64,
}

impl StoreSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

impl Settings {
    pub fn allowed_origins(&self) -> Vec<String> {
        parse_origins(&self.allowed_origins)
    }

    pub fn set_allowed_origins(&mut self, origins: &[&str]) {
        self.allowed_origins = origins.join(",");
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Reads settings from the process environment on top of built-in defaults.
///
/// Recognised variables: `HOST`, `PORT`, `LOG_LEVEL`, `ALLOWED_ORIGINS`,
/// `SUPABASE_URL`, `SUPABASE_KEY` and `STORE_TIMEOUT_MILLISECONDS`.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", 8000)?
        .set_default("log_level", "info")?
        .set_default("allowed_origins", DEFAULT_ALLOWED_ORIGINS)?
        .set_default("store.timeout_milliseconds", 10_000)?
        .add_source(Environment::default().try_parsing(true))
        .set_override_option("store.url", std::env::var("SUPABASE_URL").ok())?
        .set_override_option("store.key", std::env::var("SUPABASE_KEY").ok())?
        .set_override_option(
            "store.timeout_milliseconds",
            std::env::var("STORE_TIMEOUT_MILLISECONDS").ok(),
        )?
        .build()?
        .try_deserialize()
}
