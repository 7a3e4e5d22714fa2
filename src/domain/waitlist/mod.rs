pub mod email;
pub mod source;

use self::email::WaitlistEmail;
use self::source::Source;

/// A signup that has passed validation and is ready to be stored.
#[derive(Debug, serde::Serialize)]
pub struct NewWaitlistEntry {
    pub email: WaitlistEmail,
    pub source: Source,
    subscribed: bool,
}

impl NewWaitlistEntry {
    pub fn new(email: WaitlistEmail, source: Source) -> Self {
        Self {
            email,
            source,
            subscribed: true,
        }
    }

    pub fn subscribed(&self) -> bool {
        self.subscribed
    }
}
