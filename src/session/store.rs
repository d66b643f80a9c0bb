//! The session store: single source of truth for authentication state.
//!
//! State lives inside a `tokio::sync::watch` channel; the store is the
//! only writer, and any number of observers subscribe for change
//! notifications. Operations do not serialize overlapping invocations:
//! each completion writes the channel independently and the last write
//! wins, for the advisory `loading` flag as much as for the rest. The
//! cookie session on the server is the actual source of truth; this
//! state is a best-effort client-side cache of it.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::api::AuthClient;
use crate::models::Credentials;
use crate::notify::{Notifier, NotifyOptions, Severity};

/// Reactive view of the current session.
///
/// `loading` is advisory: true only while an operation is in flight,
/// never used to gate correctness. When `authenticated` is false,
/// `username` may hold a stale value and must not be treated as a
/// valid identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
    pub username: String,
    pub loading: bool,
}

/// Orchestrates the four session transitions against the remote service
/// and owns the reactive `SessionState`.
///
/// Constructed once at application bootstrap and handed to the UI layer;
/// clones share the same state channel, client, and notifier.
#[derive(Clone)]
pub struct SessionStore {
    client: AuthClient,
    state: watch::Sender<SessionState>,
    notifier: Arc<dyn Notifier>,
}

impl SessionStore {
    /// Create a store against the given auth service base URL
    pub fn new(base_url: &str, notifier: Arc<dyn Notifier>) -> Result<Self> {
        Ok(Self::with_client(AuthClient::new(base_url)?, notifier))
    }

    /// Create a store around an existing client
    pub fn with_client(client: AuthClient, notifier: Arc<dyn Notifier>) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            client,
            state,
            notifier,
        }
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Current state, copied out
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn authenticated(&self) -> bool {
        self.state.borrow().authenticated
    }

    pub fn username(&self) -> String {
        self.state.borrow().username.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Re-derive the auth status from the session-check endpoint.
    ///
    /// Idempotent and safe to call repeatedly; this is the canonical
    /// re-sync point after any mutating operation. Failures resolve to
    /// `authenticated=false` silently - the expected hot path for a
    /// visitor who never logged in.
    pub async fn check_auth(&self) -> bool {
        self.state.send_modify(|s| s.loading = true);
        let authenticated = self.reconcile().await;
        self.state.send_modify(|s| s.loading = false);
        authenticated
    }

    /// Log in with the given credentials.
    ///
    /// The login response body is not trusted for auth status; truth is
    /// re-derived from the server via `reconcile`, and the result of that
    /// is returned. Failures notify the user and still reconcile, so the
    /// state never diverges from what the server would report.
    pub async fn login(&self, credentials: &Credentials) -> bool {
        self.state.send_modify(|s| s.loading = true);

        if let Err(err) = self.client.login(credentials).await {
            warn!(username = %credentials.username, error = %err, "Login request failed");
            self.notifier.notify(
                Severity::Error,
                &format!("Login failed: {err:#}"),
                NotifyOptions::default(),
            );
        }

        let authenticated = self.reconcile().await;
        self.state.send_modify(|s| s.loading = false);
        authenticated
    }

    /// Register a new account with the given credentials.
    ///
    /// Same contract as `login`: registration implies login only if the
    /// service establishes a session, in which case the reconcile step
    /// reflects it.
    pub async fn register(&self, credentials: &Credentials) -> bool {
        self.state.send_modify(|s| s.loading = true);

        if let Err(err) = self.client.register(credentials).await {
            warn!(username = %credentials.username, error = %err, "Registration request failed");
            self.notifier.notify(
                Severity::Error,
                &format!("Registration failed: {err:#}"),
                NotifyOptions::default(),
            );
        }

        let authenticated = self.reconcile().await;
        self.state.send_modify(|s| s.loading = false);
        authenticated
    }

    /// Log out, optimistically.
    ///
    /// `authenticated` flips to false before the remote call is issued
    /// and stays false no matter how that call ends: a failed logout
    /// must never leave the UI claiming authentication. Failure is
    /// reported through the notifier only.
    pub async fn logout(&self) {
        self.state.send_modify(|s| {
            s.authenticated = false;
            s.loading = true;
        });

        if let Err(err) = self.client.logout().await {
            warn!(error = %err, "Logout request failed");
            self.notifier.notify(
                Severity::Error,
                &format!("Logout failed: {err:#}"),
                NotifyOptions::default(),
            );
        }

        self.state.send_modify(|s| s.loading = false);
    }

    /// The reconcile-after-mutate step: one session-check round trip,
    /// folded into state. Transport, protocol, and decode failures all
    /// collapse to `authenticated=false` with `username` left stale.
    async fn reconcile(&self) -> bool {
        match self.client.check_auth().await {
            Ok(check) => {
                self.state.send_modify(|s| {
                    s.authenticated = check.authenticated;
                    if let Some(user) = check.user {
                        s.username = user.username;
                    }
                });
            }
            Err(err) => {
                debug!(error = %err, "Session check failed, treating as unauthenticated");
                self.state.send_modify(|s| s.authenticated = false);
            }
        }
        self.state.borrow().authenticated
    }
}
