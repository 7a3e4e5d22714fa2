use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use tracing::instrument;

use super::{RemoteDataStore, StoreError};

/// PostgREST error code for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Talks to a Supabase project through its PostgREST endpoint.
#[derive(Clone)]
pub struct SupabaseClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl SupabaseClient {
    pub fn new(
        base_url: String,
        api_key: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let key = self.api_key.expose_secret();
        request
            .header("apikey", key)
            .header("Authorization", format!("Bearer {}", key))
            .header("Accept", "application/json")
    }
}

async fn rows(response: Response) -> Result<Vec<Value>, StoreError> {
    let status = response.status();
    if status.is_success() {
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        return Ok(serde_json::from_str(&body)?);
    }

    let body = response.text().await.unwrap_or_default();
    if status == StatusCode::CONFLICT || is_unique_violation(&body) {
        return Err(StoreError::UniqueViolation);
    }
    Err(StoreError::Rejected { status, body })
}

fn is_unique_violation(body: &str) -> bool {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|error| error.get("code").and_then(Value::as_str).map(str::to_owned))
        .is_some_and(|code| code == UNIQUE_VIOLATION)
}

#[async_trait]
impl RemoteDataStore for SupabaseClient {
    #[instrument(name = "querying the store", skip(self, filter))]
    async fn find(&self, table: &str, filter: &[(&str, &str)]) -> Result<Vec<Value>, StoreError> {
        let mut query = vec![("select".to_owned(), "email".to_owned())];
        query.extend(
            filter
                .iter()
                .map(|(column, value)| ((*column).to_owned(), format!("eq.{}", value))),
        );

        let response = self
            .authorize(self.http_client.get(self.table_url(table)))
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(detail = e.to_string(), "failed to query the store");
                e
            })?;

        rows(response).await
    }

    #[instrument(name = "inserting into the store", skip(self, record))]
    async fn insert(&self, table: &str, record: Value) -> Result<Vec<Value>, StoreError> {
        let response = self
            .authorize(self.http_client.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(&record)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(detail = e.to_string(), "failed to insert into the store");
                e
            })?;

        rows(response).await
    }
}
