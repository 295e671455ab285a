//! Login, logout, password and token endpoints.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::{Session, SessionEvent};
use crate::validation::ValidationError;

use super::{ApiClient, ApiError};

const LOGIN_FAILED: &str = "Login failed";
const CHANGE_PASSWORD_FAILED: &str = "Failed to change password";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    lsc_number: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenPair {
    access: String,
    refresh: String,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access: String,
    /// Only present when the backend rotates refresh tokens
    #[serde(default)]
    refresh: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

impl ApiClient {
    /// Sign in with an LSC code and password, storing the returned tokens.
    ///
    /// On failure the error carries the backend's message, or "Login failed"
    /// when it gave none. Connection failures come back as `ApiError::Network`.
    pub async fn login(&self, lsc_number: &str, password: &str) -> Result<Session, ApiError> {
        if lsc_number.trim().is_empty() {
            return Err(ValidationError::MissingField("lscNumber").into());
        }
        if password.is_empty() {
            return Err(ValidationError::MissingField("password").into());
        }

        let body = LoginRequest {
            lsc_number: lsc_number.trim(),
            password,
        };
        // Sent without the current token: a rejected login must not end the
        // session that is already signed in
        let tokens: TokenPair = self
            .post_anonymous("/auth/login/", &body)
            .await
            .map_err(|e| e.into_auth(LOGIN_FAILED))?;

        let session = Session::new(tokens.access, tokens.refresh);
        self.store()
            .set(session.clone())
            .map_err(|e| ApiError::Store(format!("{:#}", e)))?;

        info!(lsc_number = body.lsc_number, "Logged in");
        self.emit(SessionEvent::LoggedIn);
        Ok(session)
    }

    /// End the session. The backend call is best-effort; local tokens are
    /// always removed.
    pub async fn logout(&self) {
        if let Err(e) = self.request::<()>(Method::POST, "/auth/logout/", None).await {
            warn!(error = %e, "Logout request failed, clearing local session anyway");
        }
        if let Err(e) = self.store().clear() {
            warn!(error = %e, "Failed to clear session store");
        }
        info!("Logged out");
        self.emit(SessionEvent::LoggedOut);
    }

    /// Change the signed-in centre's password. Leaves the session untouched.
    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<(), ApiError> {
        let body = ChangePasswordRequest {
            old_password,
            new_password,
        };
        self.request(Method::POST, "/auth/change-password/", Some(&body))
            .await
            .map_err(|e| e.into_auth(CHANGE_PASSWORD_FAILED))?;
        Ok(())
    }

    /// Exchange the refresh token for a new access token and store it.
    /// Never invoked automatically.
    pub async fn refresh_token(&self) -> Result<String, ApiError> {
        let session = self
            .session()
            .ok_or_else(|| ApiError::Auth("No active session".to_string()))?;

        let response: RefreshResponse = self
            .post("/auth/token/refresh/", &RefreshRequest { refresh: &session.refresh })
            .await?;

        let refreshed = Session::new(
            response.access.clone(),
            response.refresh.unwrap_or(session.refresh),
        );
        self.store()
            .set(refreshed)
            .map_err(|e| ApiError::Store(format!("{:#}", e)))?;
        Ok(response.access)
    }
}
