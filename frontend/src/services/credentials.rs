use gloo_net::http::Request;
use shared::error::CalendarError;
use shared::models::AdminCredentials;

const CREDENTIALS_URL: &str = "/admin.json";

/// One-shot fetch of the static admin credentials resource. Any failure
/// leaves credentials unset for the session; the caller does not retry.
pub async fn fetch_admin_credentials() -> Result<AdminCredentials, CalendarError> {
    let response = Request::get(CREDENTIALS_URL)
        .send()
        .await
        .map_err(|err| CalendarError::Transport(format!("request failed: {err:?}")))?;

    if !response.ok() {
        return Err(CalendarError::Transport(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|err| CalendarError::Transport(format!("failed to parse response: {err:?}")))
}
