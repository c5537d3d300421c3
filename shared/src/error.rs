use thiserror::Error;

/// Failure taxonomy for the calendar app. Every variant is recovered
/// locally: the worst outcome is "admin features unavailable" or "this
/// one action did not apply".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The one-time credential fetch failed. Credentials stay unset for
    /// the rest of the session.
    #[error("failed to fetch admin credentials: {0}")]
    Transport(String),

    /// A stored or dropped event list was not valid JSON.
    #[error("invalid event data: {0}")]
    Parse(String),

    /// Submitted credentials did not match the fetched ones.
    #[error("invalid admin credentials")]
    Auth,
}

pub type CalendarResult<T> = Result<T, CalendarError>;
