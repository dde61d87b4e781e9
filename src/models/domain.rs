use serde::{Deserialize, Serialize};

/// The four mutually exclusive follow-up audit labels the model must pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpStatus {
    CommitmentKept,
    CommitmentMissed,
    FollowUpPending,
    NoCommitmentFound,
}

impl FollowUpStatus {
    pub const ALL: [FollowUpStatus; 4] = [
        FollowUpStatus::CommitmentKept,
        FollowUpStatus::CommitmentMissed,
        FollowUpStatus::FollowUpPending,
        FollowUpStatus::NoCommitmentFound,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FollowUpStatus::CommitmentKept => "Commitment Kept",
            FollowUpStatus::CommitmentMissed => "Commitment Missed",
            FollowUpStatus::FollowUpPending => "Follow-up Pending",
            FollowUpStatus::NoCommitmentFound => "No Commitment Found",
        }
    }

    /// Short definition used when enumerating the labels in the prompt.
    pub fn definition(&self) -> &'static str {
        match self {
            FollowUpStatus::CommitmentKept => {
                "the agent promised a follow-up and the conversation shows it happened"
            }
            FollowUpStatus::CommitmentMissed => {
                "the agent promised a follow-up and the conversation shows it did not happen"
            }
            FollowUpStatus::FollowUpPending => {
                "the agent promised a follow-up and it is not yet due"
            }
            FollowUpStatus::NoCommitmentFound => {
                "no follow-up commitment was made anywhere in the conversation"
            }
        }
    }
}

impl std::fmt::Display for FollowUpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-metric scores emitted by the model. Five metrics are 0-10;
/// customer_sentiment runs -10..+10.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationScores {
    pub follow_up_frequency: f64,
    pub no_drops: f64,
    pub sla_adherence: f64,
    pub resolution_quality: f64,
    pub customer_sentiment: f64,
    pub agent_tone: f64,
}

/// The structured classification the model is asked to produce.
///
/// The wire result is passed through to the caller as parsed JSON without
/// schema validation; this type documents the shape and, serialized from
/// `Default`, produces the zero-valued schema example embedded in every
/// prompt so the two cannot drift apart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub title: String,
    pub follow_up_status: String,
    pub category: String,
    pub subcategory: String,
    pub scores: ClassificationScores,
    pub final_score: f64,
    pub reasons: String,
}

impl ClassificationResult {
    /// Render the zero-valued schema example for the prompt.
    pub fn schema_example() -> String {
        // Serializing a plain struct with string/number fields cannot fail
        serde_json::to_string_pretty(&Self::default()).unwrap()
    }
}
