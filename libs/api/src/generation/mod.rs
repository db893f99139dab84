use async_trait::async_trait;

use crate::prompt::PromptBundle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No credential was configured for the generative API.
    MissingCredentials,
    /// The provider refused the credential.
    UpstreamRejected,
    UpstreamFailure,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GenerationError {
    pub kind: ErrorKind,
    pub message: String,
}

impl GenerationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub type GenerationResult = Result<String, GenerationError>;

/// Turns a composed prompt into generated text.
///
/// Implementations are shared across requests and must not hold
/// per-request state. A failure is reported once; callers do not retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, bundle: &PromptBundle) -> GenerationResult;
}
