use tracing::debug;

use crate::{models::Models, GeminiError};

use super::{GenerateContentRequest, GenerateContentResponse, TextGeneration};

impl TextGeneration for Models {
    async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let response: GenerateContentResponse = self
            .json_response(
                &request,
                &format!("v1beta/models/{}:generateContent", model),
            )
            .await?;

        debug!(
            task = "generate_content",
            candidates = response.candidates.len()
        );

        Ok(response)
    }
}

impl Models {
    /// Sends the request and returns the text of the first candidate.
    pub async fn generate_text(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<String, GeminiError> {
        self.generate_content(model, request)
            .await?
            .text()
            .ok_or(GeminiError::EmptyResponse)
    }
}
