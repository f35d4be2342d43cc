//! Error handling utilities for HTTP responses.

use crate::errors::StabilityError;
use reqwest::Response;

/// Checks if an HTTP response is successful, returning it if so or an error
/// otherwise.
///
/// # Errors
///
/// Returns [`StabilityError::Api`] with the status code and body text on any
/// non-success status.
pub(crate) async fn check_response(response: Response) -> Result<Response, StabilityError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(unsuccessful_request(response).await)
    }
}

/// Consumes a response into an `Api` error.
///
/// The body is carried in full, not truncated: callers are promised the
/// exact text the server returned alongside the status code.
pub(crate) async fn unsuccessful_request(response: Response) -> StabilityError {
    let status_code = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|e| format!("Failed to read error body: {e}"));
    StabilityError::Api {
        status_code,
        message,
    }
}

/// Deserializes a JSON payload, logging the type name on failure so decode
/// errors can be traced to the endpoint that produced them.
pub(crate) fn deserialize_with_context<T: serde::de::DeserializeOwned>(
    json_str: &str,
    type_name: &str,
) -> Result<T, StabilityError> {
    serde_json::from_str(json_str).map_err(|e| {
        log::warn!("Failed to deserialize {type_name}: {e}");
        StabilityError::Json(e)
    })
}
