use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::clients::gemini::GeminiGenerator;

pub mod clients;
pub mod copy;
pub mod generation;
mod healthz;
mod not_found;
pub mod prompt;
pub mod response;
pub mod sales_text;
pub mod validation;

pub use generation::TextGenerator;

#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    MethodNotAllowed,
    NotFound,
    ClientError(String),
    ServerError {
        message: String,
        error: Option<String>,
    },
}

#[derive(Clone)]
pub struct ApiState {
    generator: Arc<dyn TextGenerator>,
}

impl ApiState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gemini: Gemini,
    #[serde(default)]
    pub cors: Cors,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Gemini {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for Gemini {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
        }
    }
}

fn default_base_url() -> String {
    gemini::models::DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    gemini::models::text_generation::GEMINI_1_5_FLASH.to_string()
}

/// Browser origins allowed to call the API. Empty or `"*"` allows any.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Cors {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Cors {
    pub fn layer(&self) -> anyhow::Result<CorsLayer> {
        let allow_origin = if self.allowed_origins.is_empty()
            || self.allowed_origins.iter().any(|o| o == "*")
        {
            AllowOrigin::any()
        } else {
            let origins = self
                .allowed_origins
                .iter()
                .map(|o| HeaderValue::from_str(o))
                .collect::<Result<Vec<_>, _>>()?;
            AllowOrigin::list(origins)
        };

        Ok(CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]))
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(sales_text::generate_sales_text, copy::generate_copy),
    components(schemas(
        sales_text::request::GenerateSalesTextParam,
        sales_text::response::GenerateSalesTextResponse,
        copy::request::GenerateCopyParam,
        copy::response::GenerateCopyResponse,
        response::ErrorResponse
    )),
    tags(
        (name = "generation", description = "Sales and marketing copy generation API")
    )
)]
struct ApiDoc;

/// Builds the Gemini-backed router.
///
/// A missing `api_key` is not fatal: generation requests answer with a
/// configuration error until a key is provided.
pub async fn serve(
    config: &Config,
    api_key: Option<String>,
) -> anyhow::Result<Router> {
    info!(task = "start api serving", model = %config.gemini.model);

    let generator = GeminiGenerator::new(&config.gemini, api_key)?;
    if !generator.has_api_key() {
        warn!(task = "start api serving", "GEMINI_API_KEY is not set");
    }

    router(ApiState::new(Arc::new(generator)), &config.cors)
}

pub fn router(state: ApiState, cors: &Cors) -> anyhow::Result<Router> {
    let generate_text = post(sales_text::generate_sales_text)
        .fallback(not_found::method_not_allowed);

    // generation
    let generation_router = Router::new()
        .route("/api/generate-text", generate_text.clone())
        .route("/generate-text", generate_text)
        .route(
            "/api/generate-copy",
            post(copy::generate_copy).fallback(not_found::method_not_allowed),
        )
        .with_state(state);

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route("/", get(healthz::get_index))
        .route("/healthz", get(healthz::get_health))
        .merge(generation_router)
        .fallback(not_found::get_404)
        .layer(cors.layer()?);

    Ok(router)
}
