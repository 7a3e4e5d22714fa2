use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

mod lazy;
mod supabase;

pub use lazy::{LazyStore, StoreUnavailable};
pub use supabase::SupabaseClient;

/// Table holding waitlist signups.
pub const WAITLIST_TABLE: &str = "waitlist";

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("failed to reach the store")]
    Request(#[from] reqwest::Error),
    #[error("the store rejected the request with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
    #[error("failed to encode or decode store rows")]
    Serialization(#[from] serde_json::Error),
    #[error("the record violates a unique constraint")]
    UniqueViolation,
}

/// Remote table store reached over the network.
///
/// Rows are returned as raw JSON objects; callers only ever look at whether
/// rows came back and at a handful of named columns.
#[async_trait]
pub trait RemoteDataStore: Send + Sync {
    /// Returns every row of `table` whose columns equal the given values.
    async fn find(&self, table: &str, filter: &[(&str, &str)]) -> Result<Vec<Value>, StoreError>;

    /// Inserts `record` into `table` and returns the rows the store created.
    async fn insert(&self, table: &str, record: Value) -> Result<Vec<Value>, StoreError>;
}
