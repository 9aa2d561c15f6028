//! Shared keyword vocabulary tables.
//!
//! One versioned home for every keyword group used by the heuristic
//! classifier, the numeric scorer, and the executive scorer's boost rules.
//! Hoisting them here keeps the lists from drifting between pipelines.
//! All matching is case-insensitive substring matching against lowercased
//! haystacks.

/// Urgent/incident terms. Any hit in subject+content is an immediate
/// urgent classification and the largest point award.
pub const URGENT_KEYWORDS: &[&str] = &[
    "urgent",
    "asap",
    "emergency",
    "critical",
    "deadline",
    "blocked",
    "down",
    "broken",
    "outage",
    "immediately",
    "right away",
];

/// Executive title fragments matched against sender name/email.
pub const EXECUTIVE_TITLES: &[&str] = &[
    "ceo", "cfo", "coo", "cto", "vp", "director", "chief", "board", "founder", "president",
];

/// Board/investor sender fragments (lower weight than a direct title hit).
pub const BOARD_KEYWORDS: &[&str] = &["board", "investor", "chairman", "partner"];

/// Slack channels whose traffic is treated as high-importance.
pub const VIP_CHANNELS: &[&str] = &["general", "incidents", "leadership", "all-hands", "exec"];

/// Question indicators. The literal `?` is intentionally first.
pub const QUESTION_INDICATORS: &[&str] = &[
    "?",
    "can you",
    "could you",
    "please advise",
    "how to",
    "lmk",
    "any update",
    "thoughts on",
    "what do you think",
];

/// Meeting/calendar terms.
pub const MEETING_KEYWORDS: &[&str] = &[
    "meeting",
    "calendar",
    "invite",
    "reschedule",
    "sync",
    "agenda",
    "zoom",
    "standup",
];

/// Business/financial terms.
pub const BUSINESS_KEYWORDS: &[&str] = &[
    "contract",
    "renewal",
    "invoice",
    "budget",
    "revenue",
    "deal",
    "proposal",
    "quarterly",
    "escalation",
];

/// Security/compliance terms.
pub const SECURITY_KEYWORDS: &[&str] = &[
    "security",
    "breach",
    "compliance",
    "audit",
    "password",
    "phishing",
    "vulnerability",
];

/// Promotional/automated indicators. These subtract points; the sender
/// patterns also catch calendar bots and mailing-list daemons.
pub const PROMO_KEYWORDS: &[&str] = &[
    "unsubscribe",
    "newsletter",
    "no-reply",
    "noreply",
    "donotreply",
    "mailer-daemon",
    "promotion",
    "webinar",
    "special offer",
];

/// Time-sensitive phrases used by the executive scorer's boost rules.
pub const TIME_SENSITIVE_KEYWORDS: &[&str] = &[
    "urgent",
    "asap",
    "deadline today",
    "by end of day",
    "eod",
    "time sensitive",
    "expiring",
    "final notice",
];

/// C-level/executive fragments matched against thread participants.
pub const C_LEVEL_KEYWORDS: &[&str] = &[
    "ceo", "cto", "cfo", "coo", "board", "executive", "founder", "chief",
];

/// Check if a lowercased haystack contains any of the given substrings.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Return the first matching substring, for reason strings.
pub fn first_match<'a>(haystack: &str, needles: &'a [&str]) -> Option<&'a str> {
    needles.iter().find(|needle| haystack.contains(*needle)).copied()
}
