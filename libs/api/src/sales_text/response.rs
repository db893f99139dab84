use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `salesText` mirrors `text` for the browser form.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSalesTextResponse {
    pub text: String,
    pub sales_text: String,
}

impl GenerateSalesTextResponse {
    pub fn new(text: String) -> Self {
        Self {
            sales_text: text.clone(),
            text,
        }
    }
}
