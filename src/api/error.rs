use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid credentials: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid carrying excessive data in messages.
    /// The cut is clamped back to a char boundary so multibyte bodies
    /// cannot panic the slice.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut cut = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..cut],
            body.len()
        )
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            400 => ApiError::BadRequest(truncated),
            401 => ApiError::Unauthorized(truncated),
            404 => ApiError::NotFound(truncated),
            409 => ApiError::Conflict(truncated),
            500..=599 => ApiError::ServerError(truncated),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_maps_auth_service_codes() {
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_REQUEST, r#"{"error":"Invalid JSON"}"#),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, r#"{"error":"Invalid credentials"}"#),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, r#"{"error":"User does not exist"}"#),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::CONFLICT, r#"{"error":"Username already taken"}"#),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            ApiError::ServerError(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::IM_A_TEAPOT, ""),
            ApiError::InvalidResponse(_)
        ));
    }

    #[test]
    fn test_error_message_includes_body() {
        let err = ApiError::from_status(
            StatusCode::CONFLICT,
            r#"{"error":"Username already taken"}"#,
        );
        assert!(err.to_string().contains("Username already taken"));
    }

    #[test]
    fn test_unauthorized_message_includes_body() {
        let err = ApiError::from_status(
            StatusCode::UNAUTHORIZED,
            r#"{"error":"Account temporarily locked"}"#,
        );
        assert!(err.to_string().contains("Account temporarily locked"));
    }

    #[test]
    fn test_truncate_body_limits_length() {
        let long_body = "x".repeat(2000);
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &long_body);
        let message = err.to_string();
        assert!(message.len() < 700);
        assert!(message.contains("truncated, 2000 total bytes"));
    }

    #[test]
    fn test_truncate_body_clamps_to_char_boundary() {
        // 200 three-byte chars: 600 bytes, and byte 500 falls mid-char
        let multibyte_body = "€".repeat(200);
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &multibyte_body);
        let message = err.to_string();
        assert!(message.contains("truncated, 600 total bytes"));
        assert!(message.len() < 700);
    }
}
