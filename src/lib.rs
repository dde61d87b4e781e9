//! Desk Triage - webhook service for AI-assisted helpdesk ticket classification
//!
//! Receives ticket webhooks from a helpdesk platform, builds a fixed prompt
//! around the ticket and a hardcoded category taxonomy, sends it to an LLM
//! completion API, and relays the structured result to the caller.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{build_prompt, render_taxonomy};
pub use crate::models::{ClassificationResult, TicketPayload};
pub use crate::services::{ClassifyError, CompletionClient};
