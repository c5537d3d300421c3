use std::rc::Rc;

use chrono::{DateTime, Utc};
use shared::error::CalendarError;
use shared::models::{AdminCredentials, CalendarEvent};
use yew::Reducible;

/// Handle for a fire-and-forget async operation: pending until it
/// resolves, then ready or failed for the rest of the session. No retry,
/// no timeout, no cancellation.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Pending,
    Ready(T),
    Failed,
}

/// An input request waiting on the operator, replacing the blocking
/// `window.prompt` of a plain browser app. The pending action is
/// abandoned if the operator cancels or submits an empty value.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptRequest {
    NewEvent {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    EditEvent {
        id: u32,
        title: String,
    },
    NewPassword,
}

impl PromptRequest {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewEvent { .. } => "Enter event title:",
            Self::EditEvent { .. } => "Enter updated event title:",
            Self::NewPassword => "Enter new admin password:",
        }
    }

    pub fn initial(&self) -> &str {
        match self {
            Self::EditEvent { title, .. } => title,
            _ => "",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Self::NewPassword => "password",
            _ => "text",
        }
    }
}

/// Operator-visible feedback line.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Info(String),
    Error(CalendarError),
}

impl Notice {
    pub fn text(&self) -> String {
        match self {
            Self::Info(text) => text.clone(),
            Self::Error(err) => err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    CredentialsFetched(Result<AdminCredentials, CalendarError>),
    ToggleAdmin,
    UsernameInput(String),
    PasswordInput(String),
    SlotSelected {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    EventSelected(u32),
    FileStaged(String),
    LoadEvents,
    ChangePassword,
    PromptSubmitted(String),
    PromptCancelled,
    DismissNotice,
}

/// The whole application state, driven through a single reducer so every
/// mutation happens on the UI event chain. The event list is the source
/// of truth for both the renderer and the storage mirror.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarState {
    pub events: Vec<CalendarEvent>,
    /// Text of a dropped file, held until LoadEvents consumes it.
    pub staged: Option<String>,
    pub is_admin: bool,
    pub credentials: Remote<AdminCredentials>,
    pub username_input: String,
    pub password_input: String,
    pub prompt: Option<PromptRequest>,
    pub notice: Option<Notice>,
}

impl CalendarState {
    pub fn with_events(events: Vec<CalendarEvent>) -> Self {
        Self {
            events,
            staged: None,
            is_admin: false,
            credentials: Remote::Pending,
            username_input: String::new(),
            password_input: String::new(),
            prompt: None,
            notice: None,
        }
    }

    fn credentials_valid(&self) -> bool {
        matches!(
            &self.credentials,
            Remote::Ready(creds) if creds.matches(&self.username_input, &self.password_input)
        )
    }

    fn fail_auth(&mut self) {
        tracing::warn!("admin credential validation failed");
        self.username_input.clear();
        self.password_input.clear();
        self.notice = Some(Notice::Error(CalendarError::Auth));
    }

    fn apply(&mut self, msg: Msg) {
        match msg {
            Msg::CredentialsFetched(Ok(creds)) => {
                tracing::info!("admin credentials loaded");
                self.credentials = Remote::Ready(creds);
            }
            Msg::CredentialsFetched(Err(err)) => {
                // Admin authentication stays unavailable for the session.
                tracing::error!(error = %err, "failed to fetch admin credentials");
                self.credentials = Remote::Failed;
            }
            Msg::ToggleAdmin => {
                self.is_admin = !self.is_admin;
                tracing::debug!(is_admin = self.is_admin, "admin mode toggled");
            }
            Msg::UsernameInput(value) => self.username_input = value,
            Msg::PasswordInput(value) => self.password_input = value,
            Msg::SlotSelected { start, end } => {
                if !self.is_admin {
                    tracing::debug!("ignored slot selection outside admin mode");
                    return;
                }
                self.prompt = Some(PromptRequest::NewEvent { start, end });
            }
            Msg::EventSelected(id) => {
                if !self.is_admin {
                    tracing::debug!("ignored event selection outside admin mode");
                    return;
                }
                match self.events.iter().find(|event| event.id == id) {
                    Some(event) => {
                        self.prompt = Some(PromptRequest::EditEvent {
                            id,
                            title: event.title.clone(),
                        });
                    }
                    None => tracing::warn!(id, "selected event no longer exists"),
                }
            }
            Msg::FileStaged(content) => {
                if !self.is_admin {
                    tracing::debug!("ignored file drop outside admin mode");
                    return;
                }
                tracing::info!(bytes = content.len(), "staged dropped file content");
                self.staged = Some(content);
            }
            Msg::LoadEvents => self.load_events(),
            Msg::ChangePassword => {
                if !self.is_admin {
                    tracing::debug!("ignored password change outside admin mode");
                    return;
                }
                if !self.credentials_valid() {
                    self.fail_auth();
                    return;
                }
                self.prompt = Some(PromptRequest::NewPassword);
            }
            Msg::PromptSubmitted(value) => self.resolve_prompt(value),
            Msg::PromptCancelled => {
                tracing::debug!("prompt cancelled");
                self.prompt = None;
            }
            Msg::DismissNotice => self.notice = None,
        }
    }

    fn load_events(&mut self) {
        if !self.is_admin {
            tracing::debug!("ignored load request outside admin mode");
            return;
        }
        if self.staged.is_none() {
            tracing::warn!("load requested with no staged file");
            return;
        }
        if !self.credentials_valid() {
            self.fail_auth();
            return;
        }
        let staged = self.staged.as_deref().unwrap_or_default();
        match serde_json::from_str::<Vec<CalendarEvent>>(staged) {
            Ok(events) => {
                tracing::info!(count = events.len(), "replaced event list from staged file");
                self.events = events;
                self.staged = None;
                self.notice = Some(Notice::Info(format!(
                    "Loaded {} event(s)",
                    self.events.len()
                )));
            }
            Err(err) => {
                // The staged buffer is kept so the operator can retry
                // after fixing the file; the event list never changes.
                tracing::error!(error = %err, "staged file is not a valid event list");
                self.notice = Some(Notice::Error(CalendarError::Parse(err.to_string())));
            }
        }
    }

    fn resolve_prompt(&mut self, value: String) {
        let Some(request) = self.prompt.take() else {
            tracing::warn!("prompt submission with no pending request");
            return;
        };
        if !self.is_admin {
            tracing::debug!("discarded prompt response outside admin mode");
            return;
        }
        let value = value.trim().to_string();
        if value.is_empty() {
            tracing::debug!("empty prompt response, action abandoned");
            return;
        }
        match request {
            PromptRequest::NewEvent { start, end } => {
                let event = CalendarEvent {
                    id: self.events.len() as u32 + 1,
                    title: value,
                    start,
                    end,
                };
                tracing::info!(id = event.id, title = %event.title, "created event");
                self.events.push(event);
            }
            PromptRequest::EditEvent { id, .. } => {
                match self.events.iter_mut().find(|event| event.id == id) {
                    Some(event) => {
                        tracing::info!(id, title = %value, "renamed event");
                        event.title = value;
                    }
                    None => tracing::warn!(id, "edited event no longer exists"),
                }
            }
            PromptRequest::NewPassword => {
                if let Remote::Ready(creds) = &mut self.credentials {
                    creds.password = value;
                    tracing::info!("admin password changed for this session");
                    self.notice = Some(Notice::Info(
                        "Password changed successfully (this session only)".to_string(),
                    ));
                }
            }
        }
    }
}

impl Reducible for CalendarState {
    type Action = Msg;

    fn reduce(self: Rc<Self>, action: Msg) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(value: &str) -> DateTime<Utc> {
        value.parse().unwrap()
    }

    fn creds(username: &str, password: &str) -> AdminCredentials {
        AdminCredentials {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn admin_state() -> CalendarState {
        let mut state = CalendarState::with_events(Vec::new());
        state.apply(Msg::ToggleAdmin);
        state
    }

    fn add_event(state: &mut CalendarState, title: &str) {
        state.apply(Msg::SlotSelected {
            start: ts("2024-01-01T00:00:00Z"),
            end: ts("2024-01-02T00:00:00Z"),
        });
        state.apply(Msg::PromptSubmitted(title.to_string()));
    }

    #[test]
    fn toggle_admin_is_idempotent_under_double_application() {
        let mut state = CalendarState::with_events(Vec::new());
        assert!(!state.is_admin);
        state.apply(Msg::ToggleAdmin);
        assert!(state.is_admin);
        state.apply(Msg::ToggleAdmin);
        assert!(!state.is_admin);
    }

    #[test]
    fn mutating_operations_are_gated_on_admin_mode() {
        let mut state = CalendarState::with_events(Vec::new());
        state.apply(Msg::CredentialsFetched(Ok(creds("a", "b"))));
        state.apply(Msg::UsernameInput("a".to_string()));
        state.apply(Msg::PasswordInput("b".to_string()));
        let before = state.clone();

        state.apply(Msg::SlotSelected {
            start: ts("2024-01-01T00:00:00Z"),
            end: ts("2024-01-01T01:00:00Z"),
        });
        state.apply(Msg::FileStaged("[]".to_string()));
        state.apply(Msg::LoadEvents);
        state.apply(Msg::ChangePassword);
        state.apply(Msg::EventSelected(1));

        assert_eq!(state, before);
    }

    #[test]
    fn slot_selection_appends_events_with_monotonic_ids() {
        let mut state = admin_state();

        add_event(&mut state, "one");
        add_event(&mut state, "two");
        add_event(&mut state, "three");

        let ids: Vec<u32> = state.events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(state.events[2].title, "three");
    }

    #[test]
    fn empty_or_cancelled_title_abandons_event_creation() {
        let mut state = admin_state();

        state.apply(Msg::SlotSelected {
            start: ts("2024-01-01T00:00:00Z"),
            end: ts("2024-01-01T01:00:00Z"),
        });
        state.apply(Msg::PromptSubmitted("   ".to_string()));
        assert!(state.events.is_empty());
        assert!(state.prompt.is_none());

        state.apply(Msg::SlotSelected {
            start: ts("2024-01-01T00:00:00Z"),
            end: ts("2024-01-01T01:00:00Z"),
        });
        state.apply(Msg::PromptCancelled);
        assert!(state.events.is_empty());
        assert!(state.prompt.is_none());
    }

    #[test]
    fn event_selection_edits_title_in_place() {
        let mut state = admin_state();
        add_event(&mut state, "draft");

        state.apply(Msg::EventSelected(1));
        assert_eq!(
            state.prompt,
            Some(PromptRequest::EditEvent {
                id: 1,
                title: "draft".to_string()
            })
        );

        state.apply(Msg::PromptSubmitted("final".to_string()));
        assert_eq!(state.events.len(), 1);
        assert_eq!(state.events[0].title, "final");
        assert_eq!(state.events[0].id, 1);
    }

    #[test]
    fn load_events_replaces_list_and_consumes_staged_content() {
        let mut state = admin_state();
        add_event(&mut state, "old");
        state.apply(Msg::CredentialsFetched(Ok(creds("a", "b"))));
        state.apply(Msg::UsernameInput("a".to_string()));
        state.apply(Msg::PasswordInput("b".to_string()));
        state.apply(Msg::FileStaged(
            r#"[{"id":1,"title":"X","start":"2024-01-01T00:00:00Z","end":"2024-01-01T01:00:00Z"}]"#
                .to_string(),
        ));

        state.apply(Msg::LoadEvents);

        assert_eq!(state.events.len(), 1);
        assert_eq!(state.events[0].title, "X");
        assert_eq!(state.events[0].start, ts("2024-01-01T00:00:00Z"));
        assert!(state.staged.is_none());
        assert_eq!(
            state.notice,
            Some(Notice::Info("Loaded 1 event(s)".to_string()))
        );
    }

    #[test]
    fn load_events_with_wrong_password_clears_inputs_and_keeps_list() {
        let mut state = admin_state();
        add_event(&mut state, "keep");
        state.apply(Msg::CredentialsFetched(Ok(creds("a", "b"))));
        state.apply(Msg::UsernameInput("a".to_string()));
        state.apply(Msg::PasswordInput("wrong".to_string()));
        state.apply(Msg::FileStaged("[]".to_string()));

        state.apply(Msg::LoadEvents);

        assert_eq!(state.events.len(), 1);
        assert_eq!(state.events[0].title, "keep");
        assert!(state.username_input.is_empty());
        assert!(state.password_input.is_empty());
        assert_eq!(state.notice, Some(Notice::Error(CalendarError::Auth)));
        // The staged file survives an auth failure.
        assert!(state.staged.is_some());
    }

    #[test]
    fn load_events_with_invalid_json_keeps_list_and_reports_parse_error() {
        let mut state = admin_state();
        add_event(&mut state, "keep");
        state.apply(Msg::CredentialsFetched(Ok(creds("a", "b"))));
        state.apply(Msg::UsernameInput("a".to_string()));
        state.apply(Msg::PasswordInput("b".to_string()));
        state.apply(Msg::FileStaged("{not json".to_string()));

        state.apply(Msg::LoadEvents);

        assert_eq!(state.events.len(), 1);
        assert!(matches!(
            state.notice,
            Some(Notice::Error(CalendarError::Parse(_)))
        ));
        assert!(state.staged.is_some());
    }

    #[test]
    fn load_events_fails_while_credentials_are_pending_or_failed() {
        for credentials in [Remote::Pending, Remote::Failed] {
            let mut state = admin_state();
            state.credentials = credentials;
            state.apply(Msg::FileStaged("[]".to_string()));
            state.apply(Msg::LoadEvents);
            assert_eq!(state.notice, Some(Notice::Error(CalendarError::Auth)));
            assert!(state.events.is_empty());
        }
    }

    #[test]
    fn load_events_without_staged_file_is_a_no_op() {
        let mut state = admin_state();
        state.apply(Msg::CredentialsFetched(Ok(creds("a", "b"))));
        state.apply(Msg::UsernameInput("a".to_string()));
        state.apply(Msg::PasswordInput("b".to_string()));

        state.apply(Msg::LoadEvents);

        assert!(state.events.is_empty());
        assert!(state.notice.is_none());
    }

    #[test]
    fn change_password_replaces_in_memory_credentials() {
        let mut state = admin_state();
        state.apply(Msg::CredentialsFetched(Ok(creds("a", "b"))));
        state.apply(Msg::UsernameInput("a".to_string()));
        state.apply(Msg::PasswordInput("b".to_string()));

        state.apply(Msg::ChangePassword);
        assert_eq!(state.prompt, Some(PromptRequest::NewPassword));

        state.apply(Msg::PromptSubmitted("hunter2".to_string()));
        assert_eq!(state.credentials, Remote::Ready(creds("a", "hunter2")));

        // The old password no longer validates.
        state.apply(Msg::UsernameInput("a".to_string()));
        state.apply(Msg::PasswordInput("b".to_string()));
        state.apply(Msg::ChangePassword);
        assert_eq!(state.notice, Some(Notice::Error(CalendarError::Auth)));
        assert!(state.prompt.is_none());
    }

    #[test]
    fn change_password_with_wrong_credentials_clears_inputs() {
        let mut state = admin_state();
        state.apply(Msg::CredentialsFetched(Ok(creds("a", "b"))));
        state.apply(Msg::UsernameInput("a".to_string()));
        state.apply(Msg::PasswordInput("nope".to_string()));

        state.apply(Msg::ChangePassword);

        assert!(state.prompt.is_none());
        assert!(state.username_input.is_empty());
        assert!(state.password_input.is_empty());
        assert_eq!(state.notice, Some(Notice::Error(CalendarError::Auth)));
    }
}
