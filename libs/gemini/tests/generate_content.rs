use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use gemini::{
    models::text_generation::{
        Content, GenerateContentRequest, GenerationConfig, GEMINI_1_5_FLASH,
    },
    GeminiError, Models,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn_upstream(router: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(format!("http://{}", address))
}

fn request() -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![
            Content::user("system"),
            Content::model("ack"),
            Content::user("message"),
        ],
        generation_config: Some(GenerationConfig {
            max_output_tokens: Some(500),
            temperature: Some(0.7),
        }),
    }
}

async fn echo_last_turn(
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok())
        != Some("good-key")
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid. Please pass a valid API key.",
                    "status": "INVALID_ARGUMENT",
                    "details": [{"reason": "API_KEY_INVALID"}]
                }
            })),
        );
    }

    let last = body["contents"][2]["parts"][0]["text"].clone();
    let max_tokens = body["generationConfig"]["maxOutputTokens"].clone();
    (
        StatusCode::OK,
        Json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": format!("{}:{}", last.as_str().unwrap_or_default(), max_tokens)}]
                },
                "finishReason": "STOP"
            }]
        })),
    )
}

#[tokio::test]
async fn test_generate_text_returns_candidate_text() -> anyhow::Result<()> {
    // Arrange
    let router = Router::new()
        .route("/v1beta/models/:action", post(echo_last_turn));
    let base_url = spawn_upstream(router).await?;
    let models = Models::new(&base_url, Some("good-key".to_string()))?;

    // Act
    let text = models.generate_text(GEMINI_1_5_FLASH, request()).await?;

    // Assert
    assert_eq!(text, "message:500");
    Ok(())
}

#[tokio::test]
async fn test_invalid_key_is_rejected() -> anyhow::Result<()> {
    let router = Router::new()
        .route("/v1beta/models/:action", post(echo_last_turn));
    let base_url = spawn_upstream(router).await?;
    let models = Models::new(&base_url, Some("bad-key".to_string()))?;

    let error = models
        .generate_text(GEMINI_1_5_FLASH, request())
        .await
        .unwrap_err();

    assert!(error.is_rejected());
    assert!(!error.to_string().contains("bad-key"));
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_upstream() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/v1beta/models/:action",
        post(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"error": {"code": 503, "message": "The model is overloaded."}})),
            )
        }),
    );
    let base_url = spawn_upstream(router).await?;
    let models = Models::new(&base_url, Some("good-key".to_string()))?;

    let error = models
        .generate_text(GEMINI_1_5_FLASH, request())
        .await
        .unwrap_err();

    match error {
        GeminiError::Upstream { status, message } => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(message, "The model is overloaded.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_empty_candidates() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/v1beta/models/:action",
        post(|| async { Json(json!({"candidates": []})) }),
    );
    let base_url = spawn_upstream(router).await?;
    let models = Models::new(&base_url, Some("good-key".to_string()))?;

    let error = models
        .generate_text(GEMINI_1_5_FLASH, request())
        .await
        .unwrap_err();

    assert!(matches!(error, GeminiError::EmptyResponse));
    Ok(())
}

#[tokio::test]
async fn test_missing_key_short_circuits() -> anyhow::Result<()> {
    // Nothing listens here; a request would fail as a transport error.
    let models = Models::new("http://127.0.0.1:9", Some("  ".to_string()))?;

    let error = models
        .generate_text(GEMINI_1_5_FLASH, request())
        .await
        .unwrap_err();

    assert!(!models.has_api_key());
    assert!(matches!(error, GeminiError::MissingApiKey));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_upstream_is_transport_error() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    drop(listener);
    let models = Models::new(
        &format!("http://{}", address),
        Some("secret-key".to_string()),
    )?;

    let error = models
        .generate_text(GEMINI_1_5_FLASH, request())
        .await
        .unwrap_err();

    assert!(matches!(error, GeminiError::Transport(_)));
    assert!(!error.to_string().contains("secret-key"));
    Ok(())
}
