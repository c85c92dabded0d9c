use axum::response::IntoResponse;
use common::json_content_type;

pub const HEALTHY_BODY: &str = r#"{"status": "OK"}"#;

/// GET /healthz - ヘルスチェック
pub async fn healthz() -> impl IntoResponse {
    (json_content_type(), HEALTHY_BODY)
}
