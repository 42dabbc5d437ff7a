//! Client for the external text-generation service

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::application::ports::outbound::{GenerationError, GenerationPort};

/// Client for the generation service's `/generate_*` endpoints
///
/// Built without a request timeout: a hung call keeps its form in
/// `Submitting` until the connection gives up.
pub struct GenerationClient {
    client: Client,
    base_url: String,
}

impl GenerationClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl GenerationPort for GenerationClient {
    async fn post_json(
        &self,
        path: &str,
        body: String,
    ) -> Result<serde_json::Value, GenerationError> {
        let response = self
            .client
            .post(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| GenerationError::Decode(e.to_string()))
    }
}
