// Unit tests for desk-triage prompt construction

use desk_triage::core::{build_prompt, render_taxonomy, TAXONOMY};
use desk_triage::models::{ClassificationResult, TicketPayload};

fn scenario_payload() -> TicketPayload {
    TicketPayload {
        subject: Some("No dial tone".to_string()),
        status: Some("Open".to_string()),
        priority: Some("High".to_string()),
        channel: Some("Email".to_string()),
        department: Some("Support".to_string()),
        conversation: Some("Customer reports no dial tone since yesterday.".to_string()),
    }
}

#[test]
fn test_missing_fields_default_without_error() {
    // Every combination of present/absent fields must build a prompt
    let partials = vec![
        TicketPayload::default(),
        TicketPayload { subject: Some("Hi".into()), ..Default::default() },
        TicketPayload { conversation: Some("Hello".into()), ..Default::default() },
        TicketPayload { priority: Some("Low".into()), channel: Some("Chat".into()), ..Default::default() },
    ];

    for payload in &partials {
        let prompt = build_prompt(payload);
        assert!(!prompt.is_empty());
    }

    let prompt = build_prompt(&TicketPayload::default());
    assert!(prompt.contains("subject=N/A"));
    assert!(prompt.contains("department=N/A"));
    assert!(prompt.ends_with("No conversation."));
}

#[test]
fn test_taxonomy_text_byte_identical_across_calls() {
    let first = render_taxonomy();
    for _ in 0..10 {
        assert_eq!(render_taxonomy(), first);
    }

    // The prompt embeds the rendered taxonomy verbatim
    let prompt_a = build_prompt(&scenario_payload());
    let prompt_b = build_prompt(&scenario_payload());
    assert_eq!(prompt_a, prompt_b);
    assert!(prompt_a.contains(&first));
}

#[test]
fn test_taxonomy_covers_every_category_in_prompt() {
    let prompt = build_prompt(&TicketPayload::default());
    for entry in TAXONOMY {
        assert!(prompt.contains(&format!("Category: {}", entry.category)));
        for sub in entry.subcategories {
            assert!(prompt.contains(&format!("- {}", sub)));
        }
    }
}

#[test]
fn test_prompt_metadata_interpolation() {
    let prompt = build_prompt(&scenario_payload());
    assert!(prompt.contains(
        "Ticket: subject=No dial tone | status=Open | priority=High | channel=Email | department=Support"
    ));
    assert!(prompt.ends_with("Customer reports no dial tone since yesterday."));
}

#[test]
fn test_prompt_schema_block_is_valid_json() {
    let prompt = build_prompt(&TicketPayload::default());
    let example = ClassificationResult::schema_example();
    assert!(prompt.contains(&example));

    let parsed: serde_json::Value = serde_json::from_str(&example).unwrap();
    let scores = parsed["scores"].as_object().unwrap();
    assert_eq!(scores.len(), 6);
}

#[test]
fn test_prompt_names_final_score_weights() {
    let prompt = build_prompt(&TicketPayload::default());
    assert!(prompt.contains("follow_up_frequency 15%"));
    assert!(prompt.contains("no_drops 15%"));
    assert!(prompt.contains("sla_adherence 20%"));
    assert!(prompt.contains("resolution_quality 20%"));
    assert!(prompt.contains("customer_sentiment 15%"));
    assert!(prompt.contains("agent_tone 15%"));
}
