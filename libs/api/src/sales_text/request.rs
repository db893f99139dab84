use serde::Deserialize;
use utoipa::ToSchema;

use crate::validation::{scalar_string, Required, ValidationError};

pub const REQUIRED_MESSAGE: &str = "Product Name, Target Audience, Key Selling \
    Points, Tone, Length, and Language are required.";

/// Structured form body. Every field is required; tone, length and language
/// are passed through to the prompt verbatim.
#[derive(Deserialize, ToSchema, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSalesTextParam {
    #[serde(default, deserialize_with = "scalar_string")]
    #[schema(example = "EcoBottle")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    #[schema(example = "students")]
    pub audience: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    #[schema(example = "reusable, BPA-free")]
    pub selling_points: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    #[schema(example = "friendly")]
    pub tone: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    #[schema(example = "short")]
    pub length: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    #[schema(example = "English")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesTextRequest {
    pub product_name: String,
    pub audience: String,
    pub selling_points: String,
    pub tone: String,
    pub length: String,
    pub language: String,
}

impl TryFrom<GenerateSalesTextParam> for SalesTextRequest {
    type Error = ValidationError;

    fn try_from(param: GenerateSalesTextParam) -> Result<Self, Self::Error> {
        let mut required = Required::default();
        let request = Self {
            product_name: required.field("productName", param.product_name),
            audience: required.field("audience", param.audience),
            selling_points: required
                .field("sellingPoints", param.selling_points),
            tone: required.field("tone", param.tone),
            length: required.field("length", param.length),
            language: required.field("language", param.language),
        };
        required.finish(REQUIRED_MESSAGE)?;

        Ok(request)
    }
}
