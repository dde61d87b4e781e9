use serde::{Deserialize, Serialize};

/// Ticket payload delivered by the helpdesk webhook.
///
/// Every field is optional; unknown fields are ignored. Defaults are applied
/// when the prompt is built, not here, so the payload round-trips as sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketPayload {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub conversation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes() {
        let payload: TicketPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.subject.is_none());
        assert!(payload.conversation.is_none());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let payload: TicketPayload =
            serde_json::from_str(r#"{"subject":"Hi","ticket_id":42,"tags":["a"]}"#).unwrap();
        assert_eq!(payload.subject.as_deref(), Some("Hi"));
    }
}
