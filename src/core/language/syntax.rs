//! Syntax Analysis Client
//!
//! Classifies free text into part-of-speech buckets via the Google Cloud
//! Natural Language `documents:analyzeSyntax` endpoint. The trait exists so
//! the orchestrator can be driven by a stub in tests; the Google client is
//! the only production implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::types::{ClassifiedWords, LanguageError, LanguageResult};
use crate::core::wordgen::Category;

/// Production endpoint for the Natural Language API.
pub const DEFAULT_BASE_URL: &str = "https://language.googleapis.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can classify the words of free text by part of speech.
#[async_trait]
pub trait SyntaxAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> LanguageResult<ClassifiedWords>;
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Deserialize)]
struct AnalyzeSyntaxResponse {
    #[serde(default)]
    tokens: Vec<SyntaxToken>,
}

#[derive(Deserialize)]
struct SyntaxToken {
    text: TokenText,
    #[serde(rename = "partOfSpeech")]
    part_of_speech: PartOfSpeech,
}

#[derive(Deserialize)]
struct TokenText {
    #[serde(default)]
    content: String,
}

#[derive(Deserialize)]
struct PartOfSpeech {
    #[serde(default)]
    tag: String,
}

// ============================================================================
// Google Client
// ============================================================================

/// Google Cloud Natural Language syntax client (API key based).
pub struct GoogleSyntaxClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl GoogleSyntaxClient {
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
impl SyntaxAnalyzer for GoogleSyntaxClient {
    async fn analyze(&self, text: &str) -> LanguageResult<ClassifiedWords> {
        let url = format!("{}/v1/documents:analyzeSyntax", self.base_url);
        let body = serde_json::json!({
            "document": {
                "type": "PLAIN_TEXT",
                "content": text,
            },
            "encodingType": "UTF8",
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
            log::warn!("analyzeSyntax returned {status}");
            return Err(LanguageError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: AnalyzeSyntaxResponse = resp.json().await?;
        let token_count = parsed.tokens.len();

        let mut classified = ClassifiedWords::new();
        for token in parsed.tokens {
            // Tags outside the six recognized categories are dropped here
            // and play no further role.
            if let Some(category) = Category::from_pos_tag(&token.part_of_speech.tag) {
                classified.push(category, token.text.content);
            }
        }

        log::debug!(
            "analyzeSyntax: kept {} of {} tokens",
            classified.total(),
            token_count
        );
        Ok(classified)
    }
}
