//! Core library for the Learning Support Centre admin portal client.
//!
//! `ApiClient` owns the session token lifecycle: it attaches the access
//! token to every request, and clears the session and broadcasts
//! `SessionEvent::Expired` whenever the backend answers 401.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod utils;
pub mod validation;

pub use api::{ApiClient, ApiError, DEFAULT_BASE_URL};
pub use auth::{
    FileSessionStore, KeyringSessionStore, MemorySessionStore, Session, SessionEvent,
    SessionStore, LOGIN_PATH,
};
pub use config::{Config, SessionBackend};
pub use validation::ValidationError;
