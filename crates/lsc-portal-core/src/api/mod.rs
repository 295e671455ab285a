//! REST API client module for the LSC portal backend.
//!
//! This module provides the `ApiClient`, the single path every backend call
//! takes. The backend issues JWT access/refresh pairs at `/auth/login/`;
//! the access token is sent as a bearer credential on every request.

pub mod auth;
pub mod centers;
pub mod client;
pub mod error;
pub mod records;
pub mod reports;
pub mod students;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
