use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single calendar entry.
///
/// Ids are assigned as `events.len() + 1` when an event is created in the
/// UI, so they are unique within one list but not stable across deletions
/// or bulk loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: u32,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Admin credentials fetched once at startup from a static resource.
///
/// Held only in memory; a password change is never written back, so it
/// lasts for the session at most.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    /// Exact string comparison against operator-entered values. Not a
    /// security boundary.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_round_trips_through_json() {
        let event = CalendarEvent {
            id: 1,
            title: "Standup".to_string(),
            start: "2024-01-01T00:00:00Z".parse().unwrap(),
            end: "2024-01-01T01:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: CalendarEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn credentials_match_is_exact() {
        let creds = AdminCredentials {
            username: "a".to_string(),
            password: "b".to_string(),
        };

        assert!(creds.matches("a", "b"));
        assert!(!creds.matches("a", "B"));
        assert!(!creds.matches("", ""));
    }
}
