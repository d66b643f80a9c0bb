//! Session state management.
//!
//! This module provides:
//! - `SessionState`: the reactive view of the current session
//! - `SessionStore`: the single source of truth for authentication,
//!   orchestrating check/login/register/logout against the remote service
//!
//! The store is the only writer of `SessionState`; UI code reads it
//! through a watch subscription and never mutates it directly.

pub mod store;

pub use store::{SessionState, SessionStore};
