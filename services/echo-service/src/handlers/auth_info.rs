use axum::{
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use common::{json_content_type, ApiError};

/// 上流プロキシ（Endpoints）が付与する認証情報ヘッダ
pub const USER_INFO_HEADER: &str = "X-Endpoint-API-UserInfo";

pub const ANONYMOUS_USER_INFO: &str = r#"{"id": "anonymous"}"#;

/// 標準アルファベット・パディング必須。末尾の余りビットは無視する
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// GET /auth/info/* - プロキシから渡された認証情報を返す
///
/// ヘッダ値はbase64デコードしてそのまま返す。中身のJSONは検証しない。
pub async fn auth_info(headers: HeaderMap) -> Result<Response, ApiError> {
    let encoded = headers
        .get(USER_INFO_HEADER)
        .map(|value| value.as_bytes())
        .unwrap_or_default();

    if encoded.is_empty() {
        tracing::debug!("no user info header, responding anonymous");
        return Ok((json_content_type(), ANONYMOUS_USER_INFO).into_response());
    }

    let decoded = BASE64
        .decode(encoded)
        .map_err(|err| ApiError::Internal(format!("Could not decode auth info: {}", err)))?;

    Ok((json_content_type(), decoded).into_response())
}
