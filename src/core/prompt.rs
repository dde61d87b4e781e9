//! Prompt construction
//!
//! Builds the single instruction string sent to the completion API. The
//! prompt is the real contract with the model: the taxonomy and the schema
//! example are embedded verbatim so the model is boxed into a closed label
//! set and a parseable output shape. Section order and wording are fixed;
//! the output is fully deterministic for a given payload.

use crate::core::taxonomy::render_taxonomy;
use crate::models::{ClassificationResult, FollowUpStatus, TicketPayload};

/// Default for missing metadata fields.
const MISSING_FIELD: &str = "N/A";
/// Default for a missing conversation transcript.
const MISSING_CONVERSATION: &str = "No conversation.";

fn field_or_default(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING_FIELD)
}

/// Build the classification prompt for one ticket.
///
/// Pure and infallible: missing payload fields fall back to their
/// documented defaults, and the static taxonomy is the only other input.
pub fn build_prompt(payload: &TicketPayload) -> String {
    let subject = field_or_default(&payload.subject);
    let status = field_or_default(&payload.status);
    let priority = field_or_default(&payload.priority);
    let channel = field_or_default(&payload.channel);
    let department = field_or_default(&payload.department);
    let conversation = payload
        .conversation
        .as_deref()
        .unwrap_or(MISSING_CONVERSATION);

    let mut prompt = String::new();

    // 1. Role / task preamble
    prompt.push_str(
        "You are a senior quality-assurance analyst for a helpdesk team. \
         Perform a 360\u{b0} audit of the support ticket below: evaluate the \
         agent's tone, the handling of the customer, and every follow-up \
         commitment made during the conversation.\n\n",
    );

    // 2. Follow-up audit labels
    prompt.push_str("FOLLOW-UP AUDIT\n");
    prompt.push_str(
        "Classify the ticket's follow-up state as exactly one of these four \
         mutually exclusive labels:\n",
    );
    for status in FollowUpStatus::ALL {
        prompt.push_str(&format!("- \"{}\": {}.\n", status, status.definition()));
    }
    prompt.push('\n');

    // 3. Category / subcategory instructions
    prompt.push_str("CATEGORY & SUBCATEGORY CLASSIFICATION\n");
    prompt.push_str(
        "Choose the category and subcategory strictly from the taxonomy \
         below. Do not invent labels, do not merge labels, and do not leave \
         either field empty. If nothing fits exactly, pick the closest \
         match from the taxonomy.\n\n",
    );

    // 4. The taxonomy itself
    prompt.push_str(&render_taxonomy());

    // 5. Scoring metrics
    prompt.push_str("SCORING\n");
    prompt.push_str("Score each metric on the stated scale:\n");
    prompt.push_str("- follow_up_frequency: 0-10\n");
    prompt.push_str("- no_drops: 0-10 (were any customer messages left unanswered?)\n");
    prompt.push_str("- sla_adherence: 0-10\n");
    prompt.push_str("- resolution_quality: 0-10\n");
    prompt.push_str("- customer_sentiment: -10 to +10\n");
    prompt.push_str("- agent_tone: 0-10\n\n");

    // 6. Final score weighting
    prompt.push_str("FINAL SCORE\n");
    prompt.push_str(
        "Compute final_score (0-10) as the weighted combination: \
         follow_up_frequency 15%, no_drops 15%, sla_adherence 20%, \
         resolution_quality 20%, customer_sentiment 15%, agent_tone 15%.\n\n",
    );

    // 7. Target schema
    prompt.push_str("Respond with a single JSON object in exactly this shape:\n");
    prompt.push_str(&ClassificationResult::schema_example());
    prompt.push_str("\n\n");

    // 8. Ticket metadata
    prompt.push_str(&format!(
        "Ticket: subject={} | status={} | priority={} | channel={} | department={}\n\n",
        subject, status, priority, channel, department
    ));

    // 9. Conversation transcript, verbatim, last
    prompt.push_str(conversation);

    prompt
}
