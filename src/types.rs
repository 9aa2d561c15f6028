//! Canonical data model shared by all three scoring pipelines.
//!
//! One normalized message shape (`CanonicalMessage`) feeds the heuristic
//! classifier and the numeric scorer; the richer `Thread` shape feeds the
//! analyzer-backed executive scorer. Both are immutable once built.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source provider for a normalized message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Gmail,
    Slack,
}

/// A provider-agnostic message record produced by the normalizer.
///
/// Built once per fetch cycle and never mutated. Missing optional fields
/// normalize to empty strings so the classifiers stay total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalMessage {
    /// Unique within its source provider; (id, source) is globally unique.
    pub id: String,
    pub source: Provider,
    /// Synthesized for Slack as "Message from <sender>".
    pub subject: String,
    /// Display name, or channel/user identifier for Slack.
    pub sender: String,
    /// Sender email address when known, empty string otherwise.
    #[serde(default)]
    pub sender_email: String,
    /// Slack channel name, if the message came from a channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Short body preview.
    pub snippet: String,
    pub received_at: DateTime<Utc>,
}

/// Coarse priority bucket from the heuristic classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    Question,
    Normal,
}

/// A conversation unit as consumed by the executive scorer.
///
/// Richer than `CanonicalMessage`: participants, labels, unread state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: String,
    pub subject: String,
    pub snippet: String,
    /// Participant email addresses; contains at least the apparent sender.
    pub participants: Vec<String>,
    pub unread_count: u32,
    pub last_activity: DateTime<Utc>,
    pub has_attachments: bool,
    /// Provider labels (e.g. Gmail "IMPORTANT").
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Category assigned by the analyzer capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisCategory {
    Urgent,
    Important,
    Fyi,
    FollowUp,
}

/// Sentiment assigned by the analyzer capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Structured output of the injected analyzer capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadAnalysis {
    pub id: String,
    /// Lookup reference to `Thread::id`, not an ownership relation.
    pub thread_id: String,
    /// Base score in [0, 10]. `None` or a non-finite value is a hard
    /// validation error at scoring time, never silently defaulted.
    pub priority_score: Option<f64>,
    pub category: AnalysisCategory,
    pub summary: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub suggested_actions: Vec<String>,
    pub sentiment: Sentiment,
    /// Analyzer self-reported confidence in [0, 1].
    pub confidence_score: f64,
    pub created_at: DateTime<Utc>,
}

/// Four-band priority tier derived from a final boosted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    Standard,
    Bronze,
    Silver,
    Gold,
}

impl PriorityTier {
    /// Map a final score to its tier. Total over all finite inputs;
    /// boundaries are inclusive at the lower edge of each band.
    pub fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            Self::Gold
        } else if score >= 7.0 {
            Self::Silver
        } else if score >= 4.0 {
            Self::Bronze
        } else {
            Self::Standard
        }
    }

    /// Human-readable label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
            Self::Standard => "standard",
        }
    }
}

/// Final scored result for one thread.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredThread {
    pub thread: Thread,
    pub analysis: ThreadAnalysis,
    /// Boosted, clamped final score in [0, 10].
    pub priority_score: f64,
    pub priority_tier: PriorityTier,
    /// Names every boost rule that fired, comma-joined, for UI transparency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost_reason: Option<String>,
}
