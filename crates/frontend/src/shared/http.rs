//! Thin wrappers over `gloo_net` for talking to the admin API.
//!
//! All helpers attach the bearer token when one is stored, expect JSON, and
//! translate failures into the three-way [`ApiError`] taxonomy so the
//! modules can show a short human message without inspecting transport
//! details.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

/// What went wrong with a remote call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No response at all (connection refused, DNS, CORS, aborted).
    Network(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The body did not match the expected schema.
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(detail) => write!(f, "network error: {}", detail),
            ApiError::Status(code) => write!(f, "server responded with HTTP {}", code),
            ApiError::Decode(detail) => write!(f, "unexpected response shape: {}", detail),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    let response = with_auth(Request::get(&api_url(path)).header("Accept", "application/json"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    let request = with_auth(Request::post(&api_url(path)).header("Accept", "application/json"))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    let request = with_auth(Request::put(&api_url(path)).header("Accept", "application/json"))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    let request = with_auth(Request::patch(&api_url(path)).header("Accept", "application/json"))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub async fn delete(path: &str) -> ApiResult<()> {
    let response = with_auth(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}

/// Multipart POST used by the upload and banner endpoints.
pub async fn post_form<T: DeserializeOwned>(path: &str, form: web_sys::FormData) -> ApiResult<T> {
    let request = with_auth(Request::post(&api_url(path)).header("Accept", "application/json"))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_short_messages() {
        assert_eq!(
            ApiError::Status(502).to_string(),
            "server responded with HTTP 502"
        );
        assert!(ApiError::Network("timed out".into())
            .to_string()
            .contains("timed out"));
    }
}
