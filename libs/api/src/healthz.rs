use axum::http::StatusCode;

pub(super) async fn get_health() -> StatusCode {
    StatusCode::OK
}

pub(super) async fn get_index() -> &'static str {
    "AI Sales Text Generator API is running smoothly!"
}
