use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{info, warn};

pub mod request;
pub mod response;

use crate::{
    prompt::{compose, GenerationRequest},
    response::{ApiResponse, IntoApiResponse},
    ApiError, ApiState,
};

use self::{
    request::{CopyRequest, GenerateCopyParam, REQUIRED_MESSAGE},
    response::GenerateCopyResponse,
};

/// Generate marketing copy from a freeform brief
#[utoipa::path(
    post,
    path = "/api/generate-copy",
    request_body = GenerateCopyParam,
    responses(
        (status = 200, description = "Generated copy", body = GenerateCopyResponse),
        (status = 400, description = "Prompt is missing", body = ErrorResponse),
        (status = 405, description = "Only POST is accepted", body = ErrorResponse),
        (status = 500, description = "Generation is not configured or failed", body = ErrorResponse)
    )
)]
pub async fn generate_copy(
    State(state): State<ApiState>,
    payload: Result<Json<GenerateCopyParam>, JsonRejection>,
) -> ApiResponse<Json<GenerateCopyResponse>> {
    let Json(param) = payload.map_err(|rejection| {
        warn!(task = "generate_copy", error = rejection.body_text());
        ApiError::ClientError(REQUIRED_MESSAGE.to_string())
    })?;

    let request = CopyRequest::try_from(param).map_err(ApiError::from)?;

    let bundle = compose(&GenerationRequest::Copy(request));
    info!(task = "generate_copy", language = bundle.language);

    let text = state
        .generator
        .generate(&bundle)
        .await
        .into_api_response("generate_copy")?;

    Ok(Json(GenerateCopyResponse { text }))
}
