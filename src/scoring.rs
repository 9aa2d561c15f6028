//! Deterministic numeric priority scorer.
//!
//! Accumulates fixed point awards for keyword-group hits in a message,
//! applies linear time decay, and floors the result at zero. Pure — the
//! only ambient input is the current time, taken once per call.

use chrono::{DateTime, Utc};

use crate::decay;
use crate::keywords::{
    contains_any, first_match, BOARD_KEYWORDS, BUSINESS_KEYWORDS, EXECUTIVE_TITLES,
    MEETING_KEYWORDS, PROMO_KEYWORDS, QUESTION_INDICATORS, SECURITY_KEYWORDS, URGENT_KEYWORDS,
    VIP_CHANNELS,
};
use crate::types::{CanonicalMessage, Provider};

// Point values per keyword group.
const URGENT_POINTS: i64 = 100;
const EXEC_TITLE_POINTS: i64 = 60;
const BOARD_SENDER_POINTS: i64 = 40;
const VIP_CHANNEL_POINTS: i64 = 40;
const DM_POINTS: i64 = 20;
const QUESTION_POINTS: i64 = 25;
const MEETING_POINTS: i64 = 20;
const BUSINESS_POINTS: i64 = 30;
const SECURITY_POINTS: i64 = 40;
const PROMO_PENALTY: i64 = -30;

/// Component-level result of scoring one message.
///
/// `total` is the decayed, floored final score (always >= 0). The raw
/// component sums are kept for diagnostics, and `reason` is a short prose
/// summary of what fired, for UI transparency.
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub total: i64,
    /// Sum of all point awards before decay; may be negative.
    pub raw: i64,
    pub decay: f64,
    pub reason: String,
}

/// Score a single message against the shared keyword tables.
pub fn score_message(message: &CanonicalMessage) -> ScoreBreakdown {
    score_message_at(message, Utc::now())
}

/// Score a message as of a given instant. Split out so tests and replay
/// tooling can pin the clock.
pub fn score_message_at(message: &CanonicalMessage, now: DateTime<Utc>) -> ScoreBreakdown {
    let content = format!(
        "{} {}",
        message.subject.to_lowercase(),
        message.snippet.to_lowercase()
    );
    let sender = format!(
        "{} {}",
        message.sender.to_lowercase(),
        message.sender_email.to_lowercase()
    );

    let mut raw: i64 = 0;
    let mut reasons: Vec<String> = Vec::new();

    // Urgent/incident keywords
    if let Some(kw) = first_match(&content, URGENT_KEYWORDS) {
        raw += URGENT_POINTS;
        reasons.push(kw.to_string());
    }

    // Sender signals: executive title, then board/investor fragment
    if contains_any(&sender, EXECUTIVE_TITLES) {
        raw += EXEC_TITLE_POINTS;
        reasons.push("executive sender".to_string());
    } else if contains_any(&sender, BOARD_KEYWORDS) {
        raw += BOARD_SENDER_POINTS;
        reasons.push("board sender".to_string());
    }

    // Slack-only channel signals
    if message.source == Provider::Slack {
        if let Some(channel) = &message.channel {
            if contains_any(&channel.to_lowercase(), VIP_CHANNELS) {
                raw += VIP_CHANNEL_POINTS;
                reasons.push(format!("#{}", channel.to_lowercase()));
            }
        } else {
            // Channel-less Slack message is a direct message
            raw += DM_POINTS;
            reasons.push("direct message".to_string());
        }
    }

    // Content keyword groups
    if contains_any(&content, QUESTION_INDICATORS) {
        raw += QUESTION_POINTS;
        reasons.push("question".to_string());
    }
    if contains_any(&content, MEETING_KEYWORDS) {
        raw += MEETING_POINTS;
        reasons.push("meeting".to_string());
    }
    if let Some(kw) = first_match(&content, BUSINESS_KEYWORDS) {
        raw += BUSINESS_POINTS;
        reasons.push(kw.to_string());
    }
    if contains_any(&content, SECURITY_KEYWORDS) {
        raw += SECURITY_POINTS;
        reasons.push("security".to_string());
    }

    // Promotional/automated penalty — checks sender too, which catches
    // no-reply addresses and mailing-list daemons
    if contains_any(&content, PROMO_KEYWORDS) || contains_any(&sender, PROMO_KEYWORDS) {
        raw += PROMO_PENALTY;
        reasons.push("promotional".to_string());
    }

    // Linear decay over 7 days with a 0.1 floor, then integer floor and
    // clamp at zero. Decay multiplies the possibly-negative raw sum.
    let decay = decay::decay_factor(decay::age_hours(message.received_at, now));
    let total = ((raw as f64 * decay).floor() as i64).max(0);

    ScoreBreakdown {
        total,
        raw,
        decay,
        reason: reasons.join(" · "),
    }
}

// ============================================================================
// Tests
// ============================================================================
