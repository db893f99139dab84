use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::GeminiError;

pub mod text_generation;

pub static DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

static API_KEY_HEADER: &str = "x-goog-api-key";

/// Handle on the generative language API.
///
/// Built once and shared; the key is sent as a header so it never appears in
/// request URLs or transport error messages.
#[derive(Clone)]
pub struct Models {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl std::fmt::Debug for Models {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Models")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

impl Models {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
    ) -> Result<Self, GeminiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            client,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn json_response<R: Serialize, T: DeserializeOwned>(
        &self,
        request: &R,
        path: &str,
    ) -> Result<T, GeminiError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GeminiError::MissingApiKey);
        };

        let url = format!("{}/{}", self.base_url, path);
        debug!(task = "post", url = %url);

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await?;

        let status_code = response.status();
        let text = response.text().await?;

        if !status_code.is_success() {
            return Err(GeminiError::from_status(status_code, &text));
        }

        Ok(serde_json::from_str(&text)?)
    }
}
