use crate::config::CompletionSettings;
use crate::core::build_prompt;
use crate::models::TicketPayload;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// System message pinning the model to strict JSON output.
const SYSTEM_INSTRUCTION: &str =
    "You are a strict JSON generator. Respond with a single valid JSON object \
     matching the schema in the user message. Do not include markdown fences, \
     commentary, or any text outside the JSON object.";

/// Diagnostic snippet length for upstream error bodies.
const SNIPPET_LEN: usize = 500;

/// Errors that can occur while classifying a ticket
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("completion API credential is not configured")]
    Config,

    #[error("completion API returned {status}: {snippet}")]
    Upstream { status: u16, snippet: String },

    #[error("completion content is not valid JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Client for the chat-completion API
///
/// Owns the single outbound call of the pipeline: builds the prompt,
/// posts it to `{endpoint}/chat/completions`, and parses the completion
/// content as JSON. Stateless across calls; no retries, no caching.
pub struct CompletionClient {
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f64,
    client: Client,
}

impl CompletionClient {
    /// Create a client from settings. The reqwest client is built once and
    /// carries the configured request timeout.
    pub fn from_settings(settings: &CompletionSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            client,
        }
    }

    /// Classify one ticket payload.
    ///
    /// Returns the completion content parsed as JSON, passed through without
    /// schema validation. All-or-nothing: any failure yields an error, never
    /// a partial result.
    pub async fn classify(&self, payload: &TicketPayload) -> Result<Value, ClassifyError> {
        if self.api_key.is_empty() {
            return Err(ClassifyError::Config);
        }

        let prompt = build_prompt(payload);

        let body = json!({
            "model": self.model,
            "temperature": self.temperature,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": SYSTEM_INSTRUCTION },
                { "role": "user", "content": prompt },
            ],
        });

        let url = format!("{}/chat/completions", self.endpoint);

        tracing::debug!("Requesting classification from {} (model: {})", url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Completion API error {}: {}", status, snippet(&body));
            return Err(ClassifyError::Upstream {
                status: status.as_u16(),
                snippet: snippet(&body),
            });
        }

        let completion: Value = response.json().await?;

        // One choice is requested; a missing content field degrades to an
        // empty object rather than a panic.
        let content = completion
            .pointer("/choices/0/message/content")
            .and_then(|c| c.as_str())
            .unwrap_or("{}");

        serde_json::from_str(content).map_err(ClassifyError::MalformedResponse)
    }
}

/// Truncate a diagnostic string on a char boundary.
fn snippet(s: &str) -> String {
    if s.chars().count() <= SNIPPET_LEN {
        s.to_string()
    } else {
        s.chars().take(SNIPPET_LEN).collect()
    }
}
