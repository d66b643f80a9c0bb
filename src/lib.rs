//! Authcache - client-side session state for cookie-based auth APIs.
//!
//! This crate provides the headless core of a web client's authentication
//! layer: an HTTP client for the auth endpoints, a reactive session store
//! that is the single source of truth for "is the current user logged in",
//! and a pluggable notification sink for surfacing failures to the user.
//!
//! The store is created once at application bootstrap and handed to the
//! UI layer; it lives for the process lifetime and needs no teardown.

pub mod api;
pub mod config;
pub mod models;
pub mod notify;
pub mod session;

pub use api::{ApiError, AuthClient};
pub use config::Config;
pub use models::{AuthCheck, AuthUser, Credentials, CredentialsError};
pub use notify::{Corner, LogNotifier, Notifier, NotifyOptions, Severity};
pub use session::{SessionState, SessionStore};
