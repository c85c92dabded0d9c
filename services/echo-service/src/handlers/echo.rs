use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    response::{IntoResponse, Response},
};
use common::{json_content_type, ApiError};
use serde::Deserialize;
use serde_json::{error::Category, Value};

/// ネストの上限（これを超える入力は不正なJSONとして扱う）
pub const MAX_NESTING_DEPTH: usize = 10_000;

/// デコード・エンコード・破棄を行う専用スタックのサイズ
const ECHO_STACK_SIZE: usize = 64 * 1024 * 1024;

/// POST /echo - 受け取ったJSONをそのまま返す
pub async fn echo(body: Result<Bytes, BytesRejection>) -> Result<Response, ApiError> {
    let body = body.map_err(|err| ApiError::Internal(format!("Could not get body: {}", err)))?;

    let encoded = stacker::grow(ECHO_STACK_SIZE, || reencode(&body))?;

    tracing::debug!(bytes = encoded.len(), "echoed request body");
    Ok((json_content_type(), encoded).into_response())
}

fn reencode(body: &[u8]) -> Result<Vec<u8>, ApiError> {
    let value = decode_first_value(body)?;
    serde_json::to_vec(&value)
        .map_err(|err| ApiError::Internal(format!("Could not marshal JSON: {}", err)))
}

/// 先頭のJSON値のみをデコードする（後続のバイト列は無視）
fn decode_first_value(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::Internal("Could not get body: EOF".to_string()));
    }
    if exceeds_max_depth(body) {
        return Err(ApiError::BadRequest(
            "Body was not valid JSON: exceeded max depth".to_string(),
        ));
    }

    let mut deserializer = serde_json::Deserializer::from_slice(body);
    deserializer.disable_recursion_limit();

    Value::deserialize(&mut deserializer).map_err(|err| {
        if is_number_out_of_range(&err) {
            return ApiError::Internal(format!("Could not get body: {}", err));
        }
        match err.classify() {
            Category::Syntax => ApiError::BadRequest(format!("Body was not valid JSON: {}", err)),
            Category::Data | Category::Eof | Category::Io => {
                ApiError::Internal(format!("Could not get body: {}", err))
            }
        }
    })
}

// 構文としては正しいが値として表現できない数値
fn is_number_out_of_range(err: &serde_json::Error) -> bool {
    err.to_string().starts_with("number out of range")
}

/// 先頭の値の配列・オブジェクトのネストが上限を超えるか
fn exceeds_max_depth(body: &[u8]) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for &byte in body {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'[' | b'{' => {
                depth += 1;
                if depth > MAX_NESTING_DEPTH {
                    return true;
                }
            }
            b']' | b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return false;
                }
            }
            b'"' if depth > 0 => in_string = true,
            _ if byte.is_ascii_whitespace() => {}
            _ if depth == 0 => return false,
            _ => {}
        }
    }
    false
}
