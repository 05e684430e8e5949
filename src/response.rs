use reqwest::{Response, StatusCode, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, AppResult};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Turns a raw response into `T`.
///
/// Failed statuses become `AppError::Api`. A 204, or any body that is not
/// declared as JSON, resolves to the empty result (`T` built from `null`).
pub async fn decode_response<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let status = response.status();
    let is_json = is_json_content(
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
    );
    let body = response
        .bytes()
        .await
        .map_err(|err| AppError::Transport(err.to_string()))?;

    decode_body(status, is_json, &body)
}

pub fn decode_body<T: DeserializeOwned>(
    status: StatusCode,
    is_json: bool,
    body: &[u8],
) -> AppResult<T> {
    if !status.is_success() {
        return Err(AppError::from_response(status, body));
    }
    if status == StatusCode::NO_CONTENT || !is_json {
        return empty_result();
    }
    Ok(serde_json::from_slice(body)?)
}

pub fn empty_result<T: DeserializeOwned>() -> AppResult<T> {
    serde_json::from_value(Value::Null)
        .map_err(|err| AppError::Decode(format!("expected a response body: {err}")))
}

pub fn is_json_content(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains(JSON_CONTENT_TYPE))
}
