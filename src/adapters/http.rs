use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AppError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Thin JSON-over-GET wrapper around a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = config.user_agent() {
            builder = builder.user_agent(user_agent.to_string());
        }

        Ok(Self::new(builder.build()?))
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        tracing::debug!("Making API request to: {}", url);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(AppError::HttpStatusError {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!("Received {} bytes", body.len());
        Ok(serde_json::from_slice(&body)?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(Client::new())
    }
}
