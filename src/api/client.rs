//! API client for communicating with the authentication service.
//!
//! This module provides the `AuthClient` struct for making credentialed
//! requests against the session-check, login, register, and logout
//! endpoints. The session itself lives in a cookie; the client keeps a
//! shared cookie jar so every call carries it, the same way a browser
//! does with `credentials: 'include'`.

use anyhow::{Context, Result};
use reqwest::{Client, Url};

use crate::models::{AuthCheck, Credentials};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Session-check endpoint path
const CHECK_PATH: &str = "/app/auth/check";

/// Login endpoint path
const LOGIN_PATH: &str = "/app/auth/login";

/// Registration endpoint path
const REGISTER_PATH: &str = "/app/auth/register";

/// Logout endpoint path
const LOGOUT_PATH: &str = "/app/auth/logout";

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Auth API client.
/// Clone is cheap - reqwest::Client uses Arc internally, and cloning
/// shares the cookie jar, so clones observe the same session.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: Url,
}

impl AuthClient {
    /// Create a new auth client against the given base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid base URL: {}", base_url))?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .cookie_store(true)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Query the session-check endpoint for the current auth status
    pub async fn check_auth(&self) -> Result<AuthCheck> {
        let url = self.endpoint(CHECK_PATH)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send session check request")?;

        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .context("Failed to parse session check response")
    }

    /// Post credentials to the login endpoint.
    /// The response body is implementation-defined and not trusted for
    /// auth status; callers re-derive truth from `check_auth`.
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        let url = self.endpoint(LOGIN_PATH)?;

        let response = self
            .client
            .post(url)
            .json(credentials)
            .send()
            .await
            .context("Failed to send login request")?;

        Self::check_response(response).await?;
        Ok(())
    }

    /// Post credentials to the registration endpoint.
    /// Same contract as `login`: the body is not trusted for auth status.
    pub async fn register(&self, credentials: &Credentials) -> Result<()> {
        let url = self.endpoint(REGISTER_PATH)?;

        let response = self
            .client
            .post(url)
            .json(credentials)
            .send()
            .await
            .context("Failed to send registration request")?;

        Self::check_response(response).await?;
        Ok(())
    }

    /// Ask the service to terminate the server-side session
    pub async fn logout(&self) -> Result<()> {
        let url = self.endpoint(LOGOUT_PATH)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send logout request")?;

        Self::check_response(response).await?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Invalid endpoint path: {}", path))
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }
}
