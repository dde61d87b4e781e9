use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful webhook response carrying the model's classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookResponse {
    pub ok: bool,
    pub ai: Value,
}

/// Flattened failure response for any classification error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookErrorResponse {
    pub ok: bool,
    pub error: String,
}

/// Body returned on a failed shared-secret check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnauthorizedResponse {
    pub error: String,
}

impl UnauthorizedResponse {
    pub fn new() -> Self {
        Self { error: "Unauthorized".to_string() }
    }
}

impl Default for UnauthorizedResponse {
    fn default() -> Self {
        Self::new()
    }
}
