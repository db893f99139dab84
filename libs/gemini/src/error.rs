use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("api key is not configured")]
    MissingApiKey,
    /// The provider refused the credential.
    #[error("request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
    #[error("upstream error ({status}): {message}")]
    Upstream { status: StatusCode, message: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response contained no text")]
    EmptyResponse,
}

impl GeminiError {
    pub fn is_rejected(&self) -> bool {
        matches!(self, GeminiError::Rejected { .. })
    }

    /// Classifies a non-success response using its status and error envelope.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();
        let message = envelope
            .as_ref()
            .map(|e| e.error.message.clone())
            .unwrap_or_else(|| body.trim().to_string());
        let key_invalid = envelope
            .as_ref()
            .map(|e| {
                e.error
                    .details
                    .iter()
                    .any(|d| d.reason.as_deref() == Some("API_KEY_INVALID"))
            })
            .unwrap_or(false)
            || message.contains("API key not valid");

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                GeminiError::Rejected { status, message }
            }
            StatusCode::BAD_REQUEST if key_invalid => {
                GeminiError::Rejected { status, message }
            }
            _ => GeminiError::Upstream { status, message },
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    details: Vec<ErrorDetail>,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorDetail {
    reason: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_invalid_key_is_rejected() {
        // Arrange
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT","details":[{"@type":"type.googleapis.com/google.rpc.ErrorInfo","reason":"API_KEY_INVALID"}]}}"#;

        // Act
        let error = GeminiError::from_status(StatusCode::BAD_REQUEST, body);

        // Assert
        assert!(error.is_rejected());
        assert!(error.to_string().contains("API key not valid"));
    }

    #[test]
    fn test_other_bad_request_is_upstream() {
        let body = r#"{"error":{"code":400,"message":"Invalid JSON payload received.","status":"INVALID_ARGUMENT"}}"#;

        let error = GeminiError::from_status(StatusCode::BAD_REQUEST, body);

        assert!(matches!(error, GeminiError::Upstream { .. }));
    }

    #[test]
    fn test_forbidden_without_envelope() {
        let error = GeminiError::from_status(StatusCode::FORBIDDEN, "denied\n");

        match error {
            GeminiError::Rejected { status, message } => {
                assert_eq!(status, StatusCode::FORBIDDEN);
                assert_eq!(message, "denied");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
