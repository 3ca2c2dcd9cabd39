//! `ImageSource` backed by the public dog.ceo API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::QuizConfig;
use crate::infra::image_source::{FetchError, ImageSource};

/// Body of `GET /api/breeds/image/random/<n>`.
#[derive(Debug, Deserialize)]
pub struct RandomImagesResponse {
    pub message: Vec<String>,
    pub status: String,
}

impl RandomImagesResponse {
    pub fn into_urls(self) -> Result<Vec<String>, FetchError> {
        if self.status != "success" {
            return Err(FetchError::Upstream {
                status: self.status,
            });
        }
        Ok(self.message)
    }
}

/// Decode a response body into image URLs.
pub fn parse_body(body: &str) -> Result<Vec<String>, FetchError> {
    let response: RandomImagesResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode {
            detail: e.to_string(),
        })?;
    response.into_urls()
}

#[derive(Debug, Clone)]
pub struct DogApiClient {
    client: Client,
    endpoint: String,
}

impl DogApiClient {
    pub fn new(config: &QuizConfig) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// `https://dog.ceo/api/breeds/image/random/50` for `count = 50`.
    pub fn batch_url(&self, count: usize) -> String {
        format!("{}/{count}", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl ImageSource for DogApiClient {
    async fn fetch_images(&self, count: usize) -> Result<Vec<String>, FetchError> {
        let url = self.batch_url(count);
        debug!(url = %url, "dog_api=request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_body(&body)
    }
}
