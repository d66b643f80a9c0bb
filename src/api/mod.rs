//! HTTP client module for the remote authentication service.
//!
//! This module provides the `AuthClient` for issuing credentialed
//! (cookie-bearing) requests against the auth endpoints.
//!
//! The service uses cookie-based sessions; the client's shared cookie
//! jar carries the session across calls.

pub mod client;
pub mod error;

pub use client::AuthClient;
pub use error::ApiError;
