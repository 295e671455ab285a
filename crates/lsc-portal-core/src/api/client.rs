//! Session-aware HTTP client for the LSC portal backend.
//!
//! Every call goes through `ApiClient::request`, which attaches the current
//! access token and tears the session down when the backend answers 401.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::auth::{Session, SessionEvent, SessionStore};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Backend location used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Session events buffered per subscriber before the oldest are dropped
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Whether a request carries the session token and reacts to a 401
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Credentials {
    Session,
    Anonymous,
}

/// API client for the LSC portal.
/// Clone is cheap - the connection pool, store and event channel are shared.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    base: Url,
    store: Arc<dyn SessionStore>,
    events: broadcast::Sender<SessionEvent>,
}

impl ApiClient {
    /// Create a new API client reading and writing tokens through `store`
    pub fn new(base_url: impl Into<String>, store: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let base = Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url));
        }

        Ok(Self {
            client,
            base_url,
            base,
            store,
            events,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The current session, if signed in
    pub fn session(&self) -> Option<Session> {
        self.store.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.get().is_some()
    }

    /// Receive session lifecycle events.
    /// The host application navigates to the login entry point on `Expired`.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub(crate) fn emit(&self, event: SessionEvent) {
        // An error only means nobody is listening
        let _ = self.events.send(event);
    }

    pub(crate) fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Path for one keyed resource under `prefix`, e.g. `/auth/lsc-centers/LC2101/`.
    /// The key is percent-encoded so it stays a single path segment.
    pub(crate) fn keyed_path(&self, prefix: &str, key: &str) -> String {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .clear()
                .extend(prefix.split('/').filter(|s| !s.is_empty()))
                .push(key.trim())
                .push("");
        }
        url.path().to_string()
    }

    /// Send a request to the backend.
    ///
    /// Attaches `Authorization: Bearer <access>` when a session exists. A
    /// non-success status becomes an error; a 401 additionally clears the
    /// session and emits `SessionEvent::Expired`. Nothing is retried.
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        self.send(method, path, body, Credentials::Session).await
    }

    /// Send without the session token. A 401 here rejects this request
    /// only, so the current session is left in place.
    pub(crate) async fn request_anonymous<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        self.send(method, path, body, Credentials::Anonymous).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        credentials: Credentials,
    ) -> Result<Response, ApiError> {
        let mut builder = self.client.request(method.clone(), self.url(path));
        if credentials == Credentials::Session {
            if let Some(session) = self.store.get() {
                builder = builder.bearer_auth(&session.access);
            }
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        debug!(%method, path, "Sending request");
        let response = builder.send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(%method, path, status = status.as_u16(), "Request failed");
        if status == StatusCode::UNAUTHORIZED && credentials == Credentials::Session {
            self.expire_session(path);
        }
        Err(ApiError::from_status(status, &body))
    }

    fn expire_session(&self, path: &str) {
        warn!(path, "Backend rejected credentials, clearing session");
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear session store");
        }
        self.emit(SessionEvent::expired());
    }

    async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T, ApiError> {
        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("{}: {}", path, e)))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request::<()>(Method::GET, path, None).await?;
        Self::decode(response, path).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::POST, path, Some(body)).await?;
        Self::decode(response, path).await
    }

    /// POST outside the session, see `request_anonymous`
    pub(crate) async fn post_anonymous<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.request_anonymous(Method::POST, path, Some(body)).await?;
        Self::decode(response, path).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::PUT, path, Some(body)).await?;
        Self::decode(response, path).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemorySessionStore;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/api/", Arc::new(MemorySessionStore::new()))
            .expect("client should build");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/students/"), "http://localhost:8000/api/students/");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let store = Arc::new(MemorySessionStore::new());
        assert!(matches!(
            ApiClient::new("not a url", store.clone()),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            ApiClient::new("mailto:admin@pu.ac.in", store),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_keyed_path_encodes_key() {
        let client = ApiClient::new(DEFAULT_BASE_URL, Arc::new(MemorySessionStore::new()))
            .expect("client should build");
        assert_eq!(
            client.keyed_path("/auth/lsc-centers/", "LC2101"),
            "/auth/lsc-centers/LC2101/"
        );
        assert_eq!(
            client.keyed_path("/auth/lsc-centers/", " LC/21?x#y "),
            "/auth/lsc-centers/LC%2F21%3Fx%23y/"
        );
    }

    #[test]
    fn test_is_authenticated_reads_store() {
        let store = Arc::new(MemorySessionStore::with_session(Session::new("A1", "R1")));
        let client = ApiClient::new(DEFAULT_BASE_URL, store.clone()).expect("client should build");
        assert!(client.is_authenticated());
        assert_eq!(client.session(), Some(Session::new("A1", "R1")));

        store.clear().unwrap();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_emit_without_subscribers() {
        let client = ApiClient::new(DEFAULT_BASE_URL, Arc::new(MemorySessionStore::new()))
            .expect("client should build");
        client.emit(SessionEvent::LoggedOut);

        let mut rx = client.subscribe();
        client.emit(SessionEvent::expired());
        assert_eq!(
            rx.try_recv().unwrap(),
            SessionEvent::Expired { redirect_to: "/login" }
        );
    }
}
