use shuttle_runtime::{Error, SecretStore, Secrets};
use tracing::warn;

static CONFIG: &str = include_str!("../Config.toml");

#[shuttle_runtime::main]
async fn main(
    #[Secrets] secret_store: SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config: api::Config = util::parse_config(CONFIG)
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    let api_key = secret_store.get("GEMINI_API_KEY");
    if api_key.is_none() {
        warn!(task = "load secrets", "GEMINI_API_KEY was not found");
    }

    let router = api::serve(&config, api_key)
        .await
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    Ok(router.into())
}
