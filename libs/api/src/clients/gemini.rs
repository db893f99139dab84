use anyhow::Context;
use async_trait::async_trait;
use gemini::{
    models::text_generation::{
        Content, GenerateContentRequest, GenerationConfig,
    },
    GeminiError, Models,
};

use crate::{
    generation::{ErrorKind, GenerationError, GenerationResult, TextGenerator},
    prompt::PromptBundle,
    Gemini,
};

/// [`TextGenerator`] backed by the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    models: Models,
    model: String,
}

impl GeminiGenerator {
    pub fn new(
        config: &Gemini,
        api_key: Option<String>,
    ) -> anyhow::Result<Self> {
        let models = Models::new(&config.base_url, api_key)
            .context("failed to build gemini client")?;

        Ok(Self {
            models,
            model: config.model.clone(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.models.has_api_key()
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, bundle: &PromptBundle) -> GenerationResult {
        Ok(self
            .models
            .generate_text(&self.model, content_request(bundle))
            .await?)
    }
}

/// System instruction, canned acknowledgement, then the user message.
fn content_request(bundle: &PromptBundle) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![
            Content::user(bundle.system_instruction.as_str()),
            Content::model(bundle.acknowledgement.as_str()),
            Content::user(bundle.user_message.as_str()),
        ],
        generation_config: Some(GenerationConfig {
            max_output_tokens: Some(bundle.params.max_output_tokens),
            temperature: Some(bundle.params.temperature),
        }),
    }
}

impl From<GeminiError> for GenerationError {
    fn from(e: GeminiError) -> Self {
        let kind = match &e {
            GeminiError::MissingApiKey => ErrorKind::MissingCredentials,
            GeminiError::Rejected { .. } => ErrorKind::UpstreamRejected,
            _ => ErrorKind::UpstreamFailure,
        };

        GenerationError::new(kind, e.to_string())
    }
}

#[cfg(test)]
mod test {
    use gemini::models::text_generation::Role;

    use super::*;
    use crate::prompt::GenerationParams;

    #[test]
    fn test_content_request_turn_order() {
        // Arrange
        let bundle = PromptBundle {
            language: "English",
            system_instruction: "system".to_string(),
            acknowledgement: "ack".to_string(),
            user_message: "message".to_string(),
            params: GenerationParams {
                max_output_tokens: 500,
                temperature: 0.7,
            },
        };

        // Act
        let request = content_request(&bundle);

        // Assert
        let turns: Vec<(Role, &str)> = request
            .contents
            .iter()
            .map(|c| (c.role, c.parts[0].text.as_str()))
            .collect();
        assert_eq!(
            turns,
            vec![
                (Role::User, "system"),
                (Role::Model, "ack"),
                (Role::User, "message")
            ]
        );
        let config = request.generation_config.unwrap();
        assert_eq!(config.max_output_tokens, Some(500));
        assert_eq!(config.temperature, Some(0.7));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            GenerationError::from(GeminiError::MissingApiKey).kind,
            ErrorKind::MissingCredentials
        );
        assert_eq!(
            GenerationError::from(GeminiError::Rejected {
                status: axum::http::StatusCode::BAD_REQUEST,
                message: "API key not valid".to_string(),
            })
            .kind,
            ErrorKind::UpstreamRejected
        );
        assert_eq!(
            GenerationError::from(GeminiError::EmptyResponse).kind,
            ErrorKind::UpstreamFailure
        );
    }

    #[tokio::test]
    async fn test_missing_key_never_calls_upstream() {
        let generator = GeminiGenerator::new(
            &Gemini {
                base_url: "http://127.0.0.1:9".to_string(),
                model: "gemini-1.5-flash".to_string(),
            },
            None,
        )
        .unwrap();
        let bundle = PromptBundle {
            language: "English",
            system_instruction: String::new(),
            acknowledgement: String::new(),
            user_message: String::new(),
            params: GenerationParams {
                max_output_tokens: 1,
                temperature: 0.0,
            },
        };

        let error = generator.generate(&bundle).await.unwrap_err();

        assert!(!generator.has_api_key());
        assert_eq!(error.kind, ErrorKind::MissingCredentials);
    }
}
