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
    request::{GenerateSalesTextParam, SalesTextRequest, REQUIRED_MESSAGE},
    response::GenerateSalesTextResponse,
};

/// Generate sales text from the structured form
#[utoipa::path(
    post,
    path = "/api/generate-text",
    request_body = GenerateSalesTextParam,
    responses(
        (status = 200, description = "Generated sales text", body = GenerateSalesTextResponse),
        (status = 400, description = "Required fields are missing", body = ErrorResponse),
        (status = 405, description = "Only POST is accepted", body = ErrorResponse),
        (status = 500, description = "Generation is not configured or failed", body = ErrorResponse)
    )
)]
pub async fn generate_sales_text(
    State(state): State<ApiState>,
    payload: Result<Json<GenerateSalesTextParam>, JsonRejection>,
) -> ApiResponse<Json<GenerateSalesTextResponse>> {
    let Json(param) = payload.map_err(|rejection| {
        warn!(
            task = "generate_sales_text",
            error = rejection.body_text()
        );
        ApiError::ClientError(REQUIRED_MESSAGE.to_string())
    })?;

    let request = SalesTextRequest::try_from(param).map_err(|e| {
        warn!(task = "generate_sales_text", missing = ?e.missing);
        ApiError::from(e)
    })?;

    let bundle = compose(&GenerationRequest::SalesText(request));
    info!(task = "generate_sales_text", language = bundle.language);

    let text = state
        .generator
        .generate(&bundle)
        .await
        .into_api_response("generate_sales_text")?;

    info!(task = "generate_sales_text", status = "ok");

    Ok(Json(GenerateSalesTextResponse::new(text)))
}
