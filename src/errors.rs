use thiserror::Error;

/// Defines errors that can occur when talking to the Stability AI API.
///
/// # Example: Handling API Errors
///
/// ```ignore
/// match client.generate_ultra(request).await {
///     Err(StabilityError::Api { status_code: 429, .. }) => {
///         log::warn!("Rate limited, backing off");
///     }
///     Err(StabilityError::Api { status_code, message }) => {
///         log::error!("API error {}: {}", status_code, message);
///     }
///     // ...
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StabilityError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    /// The API answered with a status outside the endpoint's success set.
    ///
    /// Carries the HTTP status code (for programmatic handling) and the raw
    /// response body text, unabridged.
    #[error("unsuccessful request (HTTP {status_code}): {message}")]
    Api {
        /// HTTP status code (e.g., 400, 429, 500)
        status_code: u16,
        /// The response body, as text
        message: String,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Failed to build the HTTP client.
    ///
    /// This typically only occurs in exceptional circumstances such as
    /// TLS backend initialization failures.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl StabilityError {
    /// Returns `true` if this error is likely transient and the request may
    /// succeed on retry.
    ///
    /// The client performs no retries itself; callers that poll or resubmit
    /// can use this to decide whether another attempt is worthwhile:
    /// - **HTTP errors**: network issues, connection resets, TLS errors
    /// - **Rate limits (429)** and **server errors (5xx)**
    ///
    /// Everything else (other 4xx, decode failures, validation failures) is
    /// permanent and retrying won't help.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stability_rs::StabilityError;
    ///
    /// let rate_limited = StabilityError::Api {
    ///     status_code: 429,
    ///     message: "Too many requests".to_string(),
    /// };
    /// assert!(rate_limited.is_retryable());
    ///
    /// let bad_request = StabilityError::Api {
    ///     status_code: 400,
    ///     message: "Invalid aspect ratio".to_string(),
    /// };
    /// assert!(!bad_request.is_retryable());
    /// ```
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            StabilityError::Http(_) => true,
            StabilityError::Api { status_code, .. } => *status_code == 429 || *status_code >= 500,
            StabilityError::Json(_)
            | StabilityError::InvalidInput(_)
            | StabilityError::ClientBuild(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = StabilityError::Api {
            status_code: 404,
            message: "generation not found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("404"));
        assert!(display.contains("generation not found"));
    }

    #[test]
    fn test_api_error_display_with_empty_body() {
        let error = StabilityError::Api {
            status_code: 500,
            message: String::new(),
        };
        let display = format!("{}", error);
        assert!(display.contains("500"));
        assert!(display.contains("unsuccessful request"));
    }

    #[test]
    fn test_invalid_input_display() {
        let error = StabilityError::InvalidInput("image must not be empty".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Invalid input"));
        assert!(display.contains("image must not be empty"));
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: StabilityError = json_err.into();
        assert!(format!("{}", error).contains("JSON deserialization error"));
    }

    #[test]
    fn test_is_retryable_rate_limit_and_server_errors() {
        for status_code in [429, 500, 502, 503, 504] {
            let error = StabilityError::Api {
                status_code,
                message: "try later".to_string(),
            };
            assert!(error.is_retryable(), "{} should be retryable", status_code);
        }
    }

    #[test]
    fn test_is_retryable_client_errors_not_retryable() {
        for status_code in [400, 401, 403, 404, 422] {
            let error = StabilityError::Api {
                status_code,
                message: "client error".to_string(),
            };
            assert!(
                !error.is_retryable(),
                "{} should NOT be retryable",
                status_code
            );
        }
    }

    #[test]
    fn test_is_retryable_invalid_input_not_retryable() {
        let error = StabilityError::InvalidInput("seed out of range".to_string());
        assert!(!error.is_retryable());
    }
}
