use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Response};

use crate::errors::{AppError, FetchError};
use crate::settings::AppConfig;

const JSON: &str = "application/json";

/// Builds the single client every API call goes through.
pub fn build_client(config: &AppConfig) -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON));
    headers.insert(header::ACCEPT, HeaderValue::from_static(JSON));

    let client = Client::builder()
        .default_headers(headers)
        .timeout(config.request_timeout())
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Rejects non-2xx responses, logging whatever body the server sent.
pub async fn ensure_success(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    tracing::error!(%url, status = status.as_u16(), %body, "API error response");
    Err(FetchError::Status(status.as_u16()))
}

/// Reads a successful response as JSON, insisting on a JSON content type.
pub async fn read_json(response: Response) -> Result<serde_json::Value, FetchError> {
    let response = ensure_success(response).await?;

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if !content_type.contains(JSON) {
        let text = response.text().await.unwrap_or_default();
        tracing::error!(%content_type, body = %text, "Invalid content type");
        return Err(FetchError::NotJson(content_type));
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| FetchError::MalformedPayload(e.to_string()))
}
