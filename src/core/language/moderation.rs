//! Moderation Client
//!
//! Scores a finished sentence for toxicity via the Google Cloud Natural
//! Language `documents:moderateText` endpoint. The score is the confidence
//! of the `Toxic` category; a response without that category means "not
//! toxic", score 0.0, never an error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::syntax::DEFAULT_BASE_URL;
use super::types::{LanguageError, LanguageResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Moderation category the generator cares about.
const TOXIC_CATEGORY: &str = "Toxic";

/// Anything that can score a sentence for toxicity in `[0, 1]`.
#[async_trait]
pub trait ModerationScorer: Send + Sync {
    async fn moderate(&self, text: &str) -> LanguageResult<f64>;
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Deserialize)]
struct ModerateTextResponse {
    #[serde(rename = "moderationCategories", default)]
    moderation_categories: Vec<ModerationCategory>,
}

#[derive(Deserialize)]
struct ModerationCategory {
    #[serde(default)]
    name: String,
    #[serde(default)]
    confidence: f64,
}

// ============================================================================
// Google Client
// ============================================================================

/// Google Cloud Natural Language moderation client (API key based).
pub struct GoogleModerationClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl GoogleModerationClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different host (tests use a local mock server).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key: api_key.into().trim().to_string(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[async_trait]
impl ModerationScorer for GoogleModerationClient {
    async fn moderate(&self, text: &str) -> LanguageResult<f64> {
        let url = format!("{}/v1/documents:moderateText", self.base_url);
        let body = serde_json::json!({
            "document": {
                "type": "PLAIN_TEXT",
                "content": text,
            },
        });

        let resp = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            log::warn!("moderateText returned {status}");
            return Err(LanguageError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ModerateTextResponse = resp.json().await?;
        let score = parsed
            .moderation_categories
            .iter()
            .find(|c| c.name == TOXIC_CATEGORY)
            .map(|c| c.confidence.clamp(0.0, 1.0))
            .unwrap_or(0.0);

        log::debug!("moderateText: toxicity {score:.3}");
        Ok(score)
    }
}
