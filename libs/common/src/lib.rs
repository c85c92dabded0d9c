use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// エラーボディのJSON化に失敗した場合の最終フォールバック
pub const FALLBACK_ERROR_BODY: &str =
    r#"{"code": 500, "message": "Could not format JSON for original message."}"#;

/// 共有型: エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// リクエスト単位のエラー
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self);
        }
        error_response(status, self.to_string())
    }
}

/// `{"code", "message"}` 形式のエラーレスポンスを書き出す
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    match serde_json::to_vec(&ErrorResponse::new(status, message)) {
        Ok(body) => (status, json_content_type(), body).into_response(),
        Err(_) => fallback_error_response(),
    }
}

fn fallback_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json_content_type(),
        FALLBACK_ERROR_BODY,
    )
        .into_response()
}

/// JSONボディ用のContent-Typeヘッダ
pub fn json_content_type() -> [(header::HeaderName, HeaderValue); 1] {
    [(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    )]
}

/// tracing初期化
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
