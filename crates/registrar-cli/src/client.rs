//! Thin HTTP client for the Registrar API envelopes.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use registrar_core::ApiResponse;
use registrar_models::LoginResponse;

use crate::error::{CliError, CliResult};

pub const DEFAULT_API_URL: &str = "http://localhost:5001/api";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}/{}", self.base_url, path.trim_start_matches('/')));

        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends the request and unwraps the envelope. A `success: false`
    /// envelope becomes [`CliError::Api`] with the server's message.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> CliResult<ApiResponse<T>> {
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let envelope: ApiResponse<Value> = serde_json::from_slice(&bytes).map_err(|_| CliError::Api {
            status: status.as_u16(),
            message: format!("Unexpected response from server ({})", status),
        })?;

        if !envelope.success || !status.is_success() {
            return Err(CliError::Api {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| "Request failed".to_string()),
            });
        }

        let data = envelope
            .data
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| CliError::Api {
                status: status.as_u16(),
                message: format!("Unexpected response data: {}", e),
            })?;

        Ok(ApiResponse {
            success: true,
            message: envelope.message,
            data,
        })
    }

    pub async fn fetch_all(&self, segment: &str) -> CliResult<Vec<Value>> {
        let envelope = self
            .send::<Vec<Value>>(self.request(Method::GET, &format!("{segment}/fetch-all")))
            .await?;
        Ok(envelope.data.unwrap_or_default())
    }

    pub async fn fetch_single(&self, segment: &str, id: &str) -> CliResult<Value> {
        let envelope = self
            .send::<Value>(self.request(Method::GET, &format!("{segment}/fetch-single/{id}")))
            .await?;
        Ok(envelope.data.unwrap_or(Value::Null))
    }

    pub async fn create(&self, segment: &str, body: &Value) -> CliResult<ApiResponse<Value>> {
        self.send(self.request(Method::POST, &format!("{segment}/create")).json(body))
            .await
    }

    pub async fn update(&self, segment: &str, id: &str, body: &Value) -> CliResult<ApiResponse<Value>> {
        self.send(
            self.request(Method::PATCH, &format!("{segment}/update/{id}"))
                .json(body),
        )
        .await
    }

    /// Returns the server's confirmation message.
    pub async fn delete(&self, segment: &str, id: &str) -> CliResult<String> {
        let envelope = self
            .send::<Value>(self.request(Method::DELETE, &format!("{segment}/delete/{id}")))
            .await?;
        Ok(envelope.message.unwrap_or_default())
    }

    pub async fn login(&self, segment: &str, email: &str, password: &str) -> CliResult<LoginResponse> {
        let envelope = self
            .send::<LoginResponse>(
                self.request(Method::POST, &format!("{segment}/login"))
                    .json(&json!({"email": email, "password": password})),
            )
            .await?;

        envelope.data.ok_or_else(|| CliError::Api {
            status: 200,
            message: "Login response carried no token".to_string(),
        })
    }

    /// The identity behind the current token.
    pub async fn check(&self) -> CliResult<Value> {
        let envelope = self
            .send::<Value>(self.request(Method::GET, "auth/check"))
            .await?;
        Ok(envelope.data.unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalised() {
        let client = ApiClient::new("http://localhost:5001/api/");
        assert_eq!(client.base_url(), "http://localhost:5001/api");
    }
}
