use tracing::instrument;

use crate::{
    domain::waitlist::{email::WaitlistEmail, source::Source, NewWaitlistEntry},
    store::{LazyStore, RemoteDataStore, StoreError, StoreUnavailable, WAITLIST_TABLE},
};

pub const CONFIRMATION_MESSAGE: &str = "You're on the list! We'll notify you when we launch.";

#[derive(thiserror::Error, Debug)]
pub enum WaitlistError {
    #[error("{0}")]
    Validation(String),
    #[error("the email is already on the waitlist")]
    Conflict,
    #[error("the store did not return the inserted entry")]
    NothingInserted,
    #[error(transparent)]
    Unavailable(#[from] StoreUnavailable),
    #[error("waitlist store failure")]
    Store(#[source] StoreError),
}

/// Validates a signup and stores it unless the email is already registered.
///
/// The duplicate check and the insert are two separate store calls, so two
/// concurrent signups for the same email can both get through unless the
/// store itself enforces uniqueness.
pub async fn submit(
    store: &LazyStore,
    email: String,
    source: Option<String>,
) -> Result<(), WaitlistError> {
    let email = WaitlistEmail::parse(email).map_err(WaitlistError::Validation)?;
    let entry = NewWaitlistEntry::new(email, Source::parse(source));

    let store = store.get().await?;
    add_entry(store.as_ref(), &entry).await
}

#[instrument(name = "storing a waitlist entry", skip(store, entry), fields(email = %entry.email, source = %entry.source))]
async fn add_entry(
    store: &dyn RemoteDataStore,
    entry: &NewWaitlistEntry,
) -> Result<(), WaitlistError> {
    let existing = store
        .find(WAITLIST_TABLE, &[("email", entry.email.as_ref())])
        .await
        .map_err(WaitlistError::Store)?;
    if !existing.is_empty() {
        return Err(WaitlistError::Conflict);
    }

    let record = serde_json::to_value(entry)
        .map_err(|e| WaitlistError::Store(StoreError::Serialization(e)))?;
    let inserted = store
        .insert(WAITLIST_TABLE, record)
        .await
        .map_err(|e| match e {
            StoreError::UniqueViolation => WaitlistError::Conflict,
            e => WaitlistError::Store(e),
        })?;
    if inserted.is_empty() {
        return Err(WaitlistError::NothingInserted);
    }

    tracing::info!("new waitlist entry stored");
    Ok(())
}
