//! Error handling for the api module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to decode a JSON response from the server
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// An error occurred while processing the request.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    /// Best-effort human-readable message for a blocking alert.
    ///
    /// HTTP error bodies are often JSON with a `message` or `error` field;
    /// when present that field is extracted, otherwise the raw body (or the
    /// error's Display form) is used.
    pub fn friendly_message(&self) -> String {
        match self {
            ApiError::Http { status, message } => {
                if let Ok(body) = serde_json::from_str::<serde_json::Value>(message) {
                    for key in ["message", "error"] {
                        if let Some(text) = body.get(key).and_then(|v| v.as_str()) {
                            return text.to_string();
                        }
                    }
                }
                if message.trim().is_empty() {
                    format!("Request failed with status {}", status)
                } else {
                    message.clone()
                }
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendly_message_extracts_json_field() {
        let err = ApiError::Http {
            status: 422,
            message: r#"{"message":"Answer set is incomplete"}"#.to_string(),
        };
        assert_eq!(err.friendly_message(), "Answer set is incomplete");

        let err = ApiError::Http {
            status: 400,
            message: r#"{"error":"Unknown module"}"#.to_string(),
        };
        assert_eq!(err.friendly_message(), "Unknown module");
    }

    #[test]
    fn test_friendly_message_falls_back_to_body() {
        let err = ApiError::Http {
            status: 500,
            message: "internal failure".to_string(),
        };
        assert_eq!(err.friendly_message(), "internal failure");
    }

    #[test]
    fn test_friendly_message_for_empty_body() {
        let err = ApiError::Http {
            status: 503,
            message: "  ".to_string(),
        };
        assert_eq!(err.friendly_message(), "Request failed with status 503");
    }
}
