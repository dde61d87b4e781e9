//! Fixed ticket taxonomy
//!
//! The category/subcategory table the model is allowed to classify into.
//! The rendered text is embedded verbatim in every prompt, so both the
//! table and its formatting must stay stable.

/// One category block: a label and its ordered subcategory labels.
#[derive(Debug, Clone, Copy)]
pub struct TaxonomyEntry {
    pub category: &'static str,
    pub subcategories: &'static [&'static str],
}

/// The full taxonomy, in presentation order.
pub const TAXONOMY: &[TaxonomyEntry] = &[
    TaxonomyEntry {
        category: "Desktop Phones",
        subcategories: &[
            "Phone not registering",
            "Phone not ringing when receiving calls",
            "No dial tone",
            "One-way audio on desk phone",
            "Display or button malfunction",
            "Firmware or provisioning issue",
        ],
    },
    TaxonomyEntry {
        category: "Softphone & Mobile App",
        subcategories: &[
            "Cannot log in to app",
            "App not receiving incoming calls",
            "Push notification delays",
            "App crashes or freezes",
            "Contact sync issues",
        ],
    },
    TaxonomyEntry {
        category: "Call Quality",
        subcategories: &[
            "Choppy or robotic audio",
            "Echo on calls",
            "One-way audio",
            "Dropped calls",
            "Latency or delay in conversation",
        ],
    },
    TaxonomyEntry {
        category: "Call Routing & IVR",
        subcategories: &[
            "Calls going to wrong destination",
            "IVR menu not working as configured",
            "Business hours routing incorrect",
            "Voicemail not picking up",
            "Call queue or hold music issues",
        ],
    },
    TaxonomyEntry {
        category: "Numbers & Porting",
        subcategories: &[
            "Port-in request status",
            "Port-out request",
            "New number provisioning",
            "Caller ID displaying incorrectly",
            "Number release or cancellation",
        ],
    },
    TaxonomyEntry {
        category: "SMS & Fax",
        subcategories: &[
            "Outbound SMS not delivered",
            "Inbound SMS not received",
            "Fax transmission failures",
            "SMS campaign registration",
        ],
    },
    TaxonomyEntry {
        category: "Billing & Account",
        subcategories: &[
            "Invoice or charge question",
            "Plan upgrade or downgrade",
            "Payment method update",
            "Account cancellation request",
            "Credit or refund request",
        ],
    },
    TaxonomyEntry {
        category: "Integrations & API",
        subcategories: &[
            "CRM integration not syncing",
            "Webhook delivery failures",
            "API authentication errors",
            "Third-party app configuration",
        ],
    },
];

/// Render the taxonomy to the exact text block embedded in prompts:
/// a `Category: X` header line followed by one `- subcategory` line each.
pub fn render_taxonomy() -> String {
    let mut out = String::new();
    for entry in TAXONOMY {
        out.push_str("Category: ");
        out.push_str(entry.category);
        out.push('\n');
        for sub in entry.subcategories {
            out.push_str("- ");
            out.push_str(sub);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
