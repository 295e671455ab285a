//! Authentication module for the session token lifecycle.
//!
//! This module provides:
//! - `Session`: the access/refresh token pair for the signed-in centre
//! - `SessionStore`: where the current session lives (memory, disk, or keychain)
//! - `SessionEvent`: notifications emitted when the session starts or ends
//!
//! Exactly one session exists per store. It is removed on logout or as soon
//! as the backend answers any request with 401.

pub mod credentials;
pub mod events;
pub mod session;

pub use credentials::KeyringSessionStore;
pub use events::{SessionEvent, LOGIN_PATH};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
