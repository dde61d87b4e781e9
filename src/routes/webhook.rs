use actix_web::{web, HttpRequest, HttpResponse, Responder};
use crate::models::{TicketPayload, UnauthorizedResponse, WebhookErrorResponse, WebhookResponse};
use crate::services::CompletionClient;
use std::sync::Arc;

/// Header carrying the caller's shared secret.
pub const SHARED_SECRET_HEADER: &str = "desk-shared-secret";

/// Log preview length for payloads and results.
const PREVIEW_LEN: usize = 200;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<CompletionClient>,
    pub shared_secret: String,
}

/// Configure all webhook routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(liveness))
        .route("/desk-webhook", web::post().to(desk_webhook))
        .route("/webhook", web::post().to(echo_webhook));
}

/// Liveness probe, no auth
async fn liveness() -> impl Responder {
    HttpResponse::Ok().body("desk-triage webhook receiver is running")
}

/// Ticket classification endpoint
///
/// POST /desk-webhook
///
/// Requires the `desk-shared-secret` header to equal the configured secret.
/// The JSON body is a TicketPayload; a missing body is treated as an empty
/// object. Returns `{ok: true, ai: <classification>}` on success and a
/// flattened `{ok: false, error}` 500 for every classification failure.
async fn desk_webhook(
    state: web::Data<AppState>,
    body: web::Bytes,
    http_req: HttpRequest,
) -> impl Responder {
    let provided = http_req
        .headers()
        .get(SHARED_SECRET_HEADER)
        .and_then(|v| v.to_str().ok());

    // Both sides must be present and equal; an empty configured secret
    // denies everything rather than disabling auth.
    let authorized = match provided {
        Some(value) => !state.shared_secret.is_empty() && value == state.shared_secret,
        None => false,
    };

    if !authorized {
        tracing::warn!(
            "Unauthorized webhook attempt (header present: {})",
            provided.is_some()
        );
        return HttpResponse::Forbidden().json(UnauthorizedResponse::new());
    }

    let payload: TicketPayload = if body.is_empty() {
        TicketPayload::default()
    } else {
        match serde_json::from_slice(&body) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Invalid JSON body on {}: {}", http_req.path(), e);
                return HttpResponse::BadRequest().json(WebhookErrorResponse {
                    ok: false,
                    error: format!("Invalid JSON body: {}", e),
                });
            }
        }
    };

    tracing::info!(
        "Classifying ticket: {}",
        preview(&String::from_utf8_lossy(&body))
    );

    match state.client.classify(&payload).await {
        Ok(result) => {
            tracing::info!("Classification result: {}", preview(&result.to_string()));
            HttpResponse::Ok().json(WebhookResponse { ok: true, ai: result })
        }
        Err(e) => {
            tracing::error!("Classification failed: {}", e);
            HttpResponse::InternalServerError().json(WebhookErrorResponse {
                ok: false,
                error: e.to_string(),
            })
        }
    }
}

/// Legacy echo endpoint: logs the body and acknowledges, nothing else
async fn echo_webhook(body: web::Bytes) -> impl Responder {
    tracing::info!("Echo webhook received: {}", preview(&String::from_utf8_lossy(&body)));
    HttpResponse::Ok().body("OK")
}

/// Truncate a log preview on a char boundary.
fn preview(s: &str) -> String {
    if s.chars().count() <= PREVIEW_LEN {
        s.to_string()
    } else {
        format!("{}...", s.chars().take(PREVIEW_LEN).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_string_unchanged() {
        assert_eq!(preview("hello"), "hello");
    }

    #[test]
    fn test_preview_truncates_with_ellipsis() {
        let long = "a".repeat(500);
        let p = preview(&long);
        assert!(p.ends_with("..."));
        assert_eq!(p.len(), PREVIEW_LEN + 3);
    }
}
