use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use super::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::{ApiError, Result};

/// `fetch`-backed transport rooted at the configured API base.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        builder = builder.header("Content-Type", "application/json");
        if let Some(token) = request.token.as_deref() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let response = match request.body {
            Some(body) => send_json(builder, &body).await,
            None => builder.send().await,
        }
        .map_err(|err| {
            log::error!("{} {} failed: {}", request.method.as_str(), request.path, err);
            ApiError::Transport(err.to_string())
        })?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        Ok(ApiResponse {
            status,
            status_text,
            body,
        })
    }
}

async fn send_json(
    builder: RequestBuilder,
    body: &serde_json::Value,
) -> std::result::Result<gloo_net::http::Response, gloo_net::Error> {
    builder.json(body)?.send().await
}
