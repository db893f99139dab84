//! Builds the outbound prompt from a validated request.
//!
//! Composition is pure: no I/O, and identical requests always produce
//! identical bundles.

pub mod templates;

use crate::{copy::request::CopyRequest, sales_text::request::SalesTextRequest};

use self::templates::{copy_template, sales_template};

pub const TEMPERATURE: f32 = 0.7;
pub const SALES_TEXT_MAX_OUTPUT_TOKENS: u32 = 500;
pub const COPY_MAX_OUTPUT_TOKENS: u32 = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromptBundle {
    /// Resolved template language, used for logging.
    pub language: &'static str,
    pub system_instruction: String,
    /// Canned model reply that follows the system instruction.
    pub acknowledgement: String,
    pub user_message: String,
    pub params: GenerationParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    SalesText(SalesTextRequest),
    Copy(CopyRequest),
}

pub fn compose(request: &GenerationRequest) -> PromptBundle {
    match request {
        GenerationRequest::SalesText(request) => compose_sales_text(request),
        GenerationRequest::Copy(request) => compose_copy(request),
    }
}

pub fn compose_sales_text(request: &SalesTextRequest) -> PromptBundle {
    let template = sales_template(&request.language);

    PromptBundle {
        language: template.language,
        system_instruction: template.system_instruction.to_string(),
        acknowledgement: template.acknowledgement.to_string(),
        user_message: (template.user_message)(request),
        params: GenerationParams {
            max_output_tokens: SALES_TEXT_MAX_OUTPUT_TOKENS,
            temperature: TEMPERATURE,
        },
    }
}

pub fn compose_copy(request: &CopyRequest) -> PromptBundle {
    let template = copy_template(request.language.as_deref());

    let mut user_message =
        format!("{}\n{}\n", template.brief, request.prompt);
    if let Some(keywords) = &request.keywords {
        user_message
            .push_str(&format!("{} {}.\n", template.keywords, keywords));
    }
    user_message.push_str(template.closing);

    PromptBundle {
        language: template.language,
        system_instruction: template.system_instruction.to_string(),
        acknowledgement: template.acknowledgement.to_string(),
        user_message,
        params: GenerationParams {
            max_output_tokens: COPY_MAX_OUTPUT_TOKENS,
            temperature: TEMPERATURE,
        },
    }
}
