//! Heuristic priority classification (keyword rules, no AI).
//!
//! Maps a canonical message to a coarse bucket using substring matching
//! against the shared keyword tables. Classification precedence (first
//! match wins):
//!   1. VIP sender (caller-supplied allow-list)
//!   2. Urgent keywords in subject+content
//!   3. Executive title in sender
//!   4. High-importance Slack channel
//!   5. Question indicators
//!   6. Normal

use crate::keywords::{
    contains_any, EXECUTIVE_TITLES, QUESTION_INDICATORS, URGENT_KEYWORDS, VIP_CHANNELS,
};
use crate::types::{CanonicalMessage, Priority, Provider};

/// Classify a message into urgent / question / normal.
///
/// `vip_senders` entries are matched case-insensitively as substrings
/// against the sender name and email, so both "jane@acme.com" and a bare
/// "jane" work as allow-list entries.
pub fn classify(message: &CanonicalMessage, vip_senders: &[String]) -> Priority {
    let sender = message.sender.to_lowercase();
    let sender_email = message.sender_email.to_lowercase();
    let content = format!(
        "{} {}",
        message.subject.to_lowercase(),
        message.snippet.to_lowercase()
    );

    // ---- Step 1: VIP sender wins regardless of content ----
    let is_vip = vip_senders.iter().any(|vip| {
        let vip = vip.to_lowercase();
        !vip.is_empty() && (sender.contains(&vip) || sender_email.contains(&vip))
    });
    if is_vip {
        return Priority::Urgent;
    }

    // ---- Step 2: Urgent keywords in subject + content ----
    if contains_any(&content, URGENT_KEYWORDS) {
        return Priority::Urgent;
    }

    // ---- Step 3: Executive title in sender name/email ----
    if contains_any(&sender, EXECUTIVE_TITLES) || contains_any(&sender_email, EXECUTIVE_TITLES) {
        return Priority::Urgent;
    }

    // ---- Step 4: High-importance Slack channel ----
    if message.source == Provider::Slack {
        if let Some(channel) = &message.channel {
            if contains_any(&channel.to_lowercase(), VIP_CHANNELS) {
                return Priority::Urgent;
            }
        }
    }

    // ---- Step 5: Question indicators ----
    if contains_any(&content, QUESTION_INDICATORS) {
        return Priority::Question;
    }

    Priority::Normal
}

// ============================================================================
// Tests
// ============================================================================
