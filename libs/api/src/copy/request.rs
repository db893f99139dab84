use serde::Deserialize;
use utoipa::ToSchema;

use crate::validation::{scalar_string, trimmed, Required, ValidationError};

pub const REQUIRED_MESSAGE: &str = "Prompt is required.";

/// Freeform body: a brief with optional keywords and language.
#[derive(Deserialize, ToSchema, Debug, Default)]
pub struct GenerateCopyParam {
    #[serde(default, deserialize_with = "scalar_string")]
    #[schema(example = "Launch post for a bamboo standing desk")]
    pub prompt: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    #[schema(example = "ergonomic, sustainable")]
    pub keywords: Option<String>,
    /// Defaults to English.
    #[serde(default, deserialize_with = "scalar_string")]
    #[schema(example = "Indonesian")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub prompt: String,
    pub keywords: Option<String>,
    pub language: Option<String>,
}

impl TryFrom<GenerateCopyParam> for CopyRequest {
    type Error = ValidationError;

    fn try_from(param: GenerateCopyParam) -> Result<Self, Self::Error> {
        let mut required = Required::default();
        let prompt = required.field("prompt", param.prompt);
        required.finish(REQUIRED_MESSAGE)?;

        Ok(Self {
            prompt,
            keywords: trimmed(param.keywords),
            language: trimmed(param.language),
        })
    }
}
