//! Local-storage mirror of the event list.
//!
//! The in-memory list is the source of truth; it is written here after
//! every accepted mutation and read back once at startup. Writes are not
//! batched or transactional.

use gloo::storage::{LocalStorage, Storage};
use shared::error::{CalendarError, CalendarResult};
use shared::models::CalendarEvent;

pub const EVENTS_KEY: &str = "events";

pub fn encode_events(events: &[CalendarEvent]) -> CalendarResult<String> {
    serde_json::to_string(events).map_err(|err| CalendarError::Parse(err.to_string()))
}

pub fn decode_events(raw: &str) -> CalendarResult<Vec<CalendarEvent>> {
    serde_json::from_str(raw).map_err(|err| CalendarError::Parse(err.to_string()))
}

/// Seed the event list from local storage. Absent or corrupt data starts
/// the session empty; corruption is logged and never fatal.
pub fn load_events() -> Vec<CalendarEvent> {
    match LocalStorage::raw().get_item(EVENTS_KEY) {
        Ok(Some(raw)) => match decode_events(&raw) {
            Ok(events) => {
                tracing::debug!(count = events.len(), "restored event list from storage");
                events
            }
            Err(err) => {
                tracing::error!(error = %err, "stored event list is corrupt, starting empty");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(err) => {
            tracing::error!(error = ?err, "failed to read local storage");
            Vec::new()
        }
    }
}

pub fn save_events(events: &[CalendarEvent]) {
    match encode_events(events) {
        Ok(raw) => {
            if let Err(err) = LocalStorage::raw().set_item(EVENTS_KEY, &raw) {
                tracing::error!(error = ?err, "failed to write event list to storage");
            }
        }
        Err(err) => tracing::error!(error = %err, "failed to encode event list"),
    }
}
