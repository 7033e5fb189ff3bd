//! HTTP client for the external character catalog API

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::outbound::CatalogPort;
use crate::domain::entities::Character;

/// Client for the catalog API (`GET {base}/characters`).
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout: std::time::Duration) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full character list. A single request; the client's
    /// timeout is the bounded wait, there is no retry loop.
    pub async fn fetch_characters(&self) -> Result<Vec<Character>, CatalogError> {
        let response = self
            .client
            .get(format!("{}/characters", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CatalogError::ApiError { status, body: error_text });
        }

        let payload: CharactersResponse = response.json().await?;
        Ok(payload.characters)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("catalog API returned {status}: {body}")]
    ApiError { status: reqwest::StatusCode, body: String },
}

#[derive(Debug, Deserialize)]
struct CharactersResponse {
    characters: Vec<Character>,
}

#[async_trait]
impl CatalogPort for CatalogClient {
    async fn fetch_characters(&self) -> Result<Vec<Character>> {
        let characters = CatalogClient::fetch_characters(self).await?;
        Ok(characters)
    }
}
