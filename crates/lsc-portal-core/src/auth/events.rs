/// Where the host application should send the user once the session is gone
pub const LOGIN_PATH: &str = "/login";

/// Session lifecycle notifications broadcast by `ApiClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn,
    LoggedOut,
    /// The backend rejected the access token; the session has been cleared.
    Expired { redirect_to: &'static str },
}

impl SessionEvent {
    pub fn expired() -> Self {
        SessionEvent::Expired {
            redirect_to: LOGIN_PATH,
        }
    }
}
