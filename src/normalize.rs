//! Strict parse-and-validate normalizer for provider payloads.
//!
//! Converts Gmail-shaped and Slack-shaped JSON into the one canonical
//! message shape both sync scoring pipelines consume. Malformed records
//! are rejected with `NormalizeError` rather than silently defaulted;
//! the batch helpers quarantine failures so one bad record never drops
//! a whole fetch cycle.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::error::NormalizeError;
use crate::types::{CanonicalMessage, Provider};

// ============================================================================
// Provider payload shapes
// ============================================================================

/// Gmail-shaped payload: flattened message metadata as delivered by the
/// upstream fetch layer (From/Subject/Date headers already extracted).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GmailPayload {
    #[serde(default)]
    id: String,
    #[serde(default)]
    from: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    date: String,
}

/// Slack-shaped payload: a single channel or DM message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SlackPayload {
    /// Message timestamp, e.g. "1717171717.000200". Doubles as the id.
    #[serde(default)]
    ts: String,
    #[serde(default)]
    user: String,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    text: String,
}

// ============================================================================
// Normalization
// ============================================================================

/// Normalize a Gmail-shaped JSON payload into a canonical message.
pub fn normalize_gmail(value: &serde_json::Value) -> Result<CanonicalMessage, NormalizeError> {
    let payload: GmailPayload =
        serde_json::from_value(value.clone()).map_err(|e| NormalizeError::MalformedPayload {
            provider: "gmail",
            reason: e.to_string(),
        })?;

    if payload.id.is_empty() {
        return Err(NormalizeError::MissingField("id"));
    }
    if payload.from.is_empty() {
        return Err(NormalizeError::MissingField("from"));
    }

    let received_at = parse_email_date(&payload.date)?;
    let (sender, sender_email) = parse_sender(&payload.from);

    Ok(CanonicalMessage {
        id: payload.id,
        source: Provider::Gmail,
        subject: payload.subject,
        sender,
        sender_email,
        channel: None,
        snippet: payload.snippet,
        received_at,
    })
}

/// Normalize a Slack-shaped JSON payload into a canonical message.
///
/// Slack messages have no subject; one is synthesized as
/// "Message from <sender>" so downstream keyword matching stays uniform.
pub fn normalize_slack(value: &serde_json::Value) -> Result<CanonicalMessage, NormalizeError> {
    let payload: SlackPayload =
        serde_json::from_value(value.clone()).map_err(|e| NormalizeError::MalformedPayload {
            provider: "slack",
            reason: e.to_string(),
        })?;

    if payload.ts.is_empty() {
        return Err(NormalizeError::MissingField("ts"));
    }
    if payload.user.is_empty() {
        return Err(NormalizeError::MissingField("user"));
    }

    let received_at = parse_slack_ts(&payload.ts)?;

    Ok(CanonicalMessage {
        id: payload.ts,
        source: Provider::Slack,
        subject: format!("Message from {}", payload.user),
        sender: payload.user,
        sender_email: String::new(),
        channel: payload.channel,
        snippet: payload.text,
        received_at,
    })
}

/// Normalize a batch of payloads, quarantining malformed records.
///
/// Returns the successfully normalized messages and the per-record errors
/// separately so the caller can surface quarantined records.
pub fn normalize_batch(
    provider: Provider,
    values: &[serde_json::Value],
) -> (Vec<CanonicalMessage>, Vec<NormalizeError>) {
    let mut messages = Vec::with_capacity(values.len());
    let mut quarantined = Vec::new();

    for value in values {
        let result = match provider {
            Provider::Gmail => normalize_gmail(value),
            Provider::Slack => normalize_slack(value),
        };
        match result {
            Ok(msg) => messages.push(msg),
            Err(e) => {
                log::warn!("normalize: quarantined malformed record: {}", e);
                quarantined.push(e);
            }
        }
    }

    (messages, quarantined)
}

// ============================================================================
// Field parsers
// ============================================================================

/// Parse a From header like `"Jane Doe" <jane@co.com>` into (name, email).
///
/// A bare address yields the address as both name and email; a bare name
/// yields an empty email.
fn parse_sender(from: &str) -> (String, String) {
    let trimmed = from.trim();
    if let (Some(lt), Some(gt)) = (trimmed.find('<'), trimmed.rfind('>')) {
        if lt < gt {
            let email = trimmed[lt + 1..gt].trim().to_string();
            let name = trimmed[..lt].trim().trim_matches('"').trim().to_string();
            if name.is_empty() {
                return (email.clone(), email);
            }
            return (name, email);
        }
    }
    if trimmed.contains('@') {
        return (trimmed.to_string(), trimmed.to_string());
    }
    (trimmed.to_string(), String::new())
}

/// Parse an email Date header: RFC2822 first (the wire format), falling
/// back to RFC3339 for pre-normalized feeds.
fn parse_email_date(date: &str) -> Result<DateTime<Utc>, NormalizeError> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(date) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Ok(dt.with_timezone(&Utc));
    }
    Err(NormalizeError::BadTimestamp(date.to_string()))
}

/// Parse a Slack `ts` value ("<epoch_seconds>.<suffix>") into a UTC time.
fn parse_slack_ts(ts: &str) -> Result<DateTime<Utc>, NormalizeError> {
    let secs_part = ts.split('.').next().unwrap_or(ts);
    let secs: i64 = secs_part
        .parse()
        .map_err(|_| NormalizeError::BadTimestamp(ts.to_string()))?;
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| NormalizeError::BadTimestamp(ts.to_string()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_gmail_full() {
        let value = json!({
            "id": "msg123",
            "from": "\"Jane Doe\" <jane@customer.com>",
            "subject": "Re: Contract renewal",
            "snippet": "Following up on the renewal...",
            "date": "Sun, 8 Feb 2026 09:30:00 -0500"
        });
        let msg = normalize_gmail(&value).unwrap();
        assert_eq!(msg.id, "msg123");
        assert_eq!(msg.source, Provider::Gmail);
        assert_eq!(msg.sender, "Jane Doe");
        assert_eq!(msg.sender_email, "jane@customer.com");
        assert_eq!(msg.subject, "Re: Contract renewal");
        assert_eq!(msg.received_at.to_rfc3339(), "2026-02-08T14:30:00+00:00");
    }

    #[test]
    fn test_normalize_gmail_bare_address() {
        let value = json!({
            "id": "msg1",
            "from": "noreply@newsletter.example.com",
            "subject": "Weekly Digest",
            "snippet": "",
            "date": "2026-02-08T06:00:00Z"
        });
        let msg = normalize_gmail(&value).unwrap();
        assert_eq!(msg.sender, "noreply@newsletter.example.com");
        assert_eq!(msg.sender_email, "noreply@newsletter.example.com");
    }

    #[test]
    fn test_normalize_gmail_missing_id_rejected() {
        let value = json!({
            "from": "a@b.com",
            "subject": "x",
            "date": "2026-02-08T06:00:00Z"
        });
        let err = normalize_gmail(&value).unwrap_err();
        assert!(matches!(err, NormalizeError::MissingField("id")));
    }

    #[test]
    fn test_normalize_gmail_bad_date_rejected() {
        let value = json!({
            "id": "m1",
            "from": "a@b.com",
            "subject": "x",
            "date": "not a date"
        });
        let err = normalize_gmail(&value).unwrap_err();
        assert!(matches!(err, NormalizeError::BadTimestamp(_)));
    }

    #[test]
    fn test_normalize_slack_synthesizes_subject() {
        let value = json!({
            "ts": "1770540600.000200",
            "user": "sarah.chen",
            "channel": "incidents",
            "text": "API gateway is down"
        });
        let msg = normalize_slack(&value).unwrap();
        assert_eq!(msg.id, "1770540600.000200");
        assert_eq!(msg.source, Provider::Slack);
        assert_eq!(msg.subject, "Message from sarah.chen");
        assert_eq!(msg.channel.as_deref(), Some("incidents"));
        assert_eq!(msg.snippet, "API gateway is down");
    }

    #[test]
    fn test_normalize_slack_dm_has_no_channel() {
        let value = json!({
            "ts": "1770540600.000300",
            "user": "bob",
            "text": "quick question"
        });
        let msg = normalize_slack(&value).unwrap();
        assert!(msg.channel.is_none());
        assert_eq!(msg.sender_email, "");
    }

    #[test]
    fn test_normalize_slack_bad_ts_rejected() {
        let value = json!({ "ts": "not-a-ts", "user": "bob", "text": "hi" });
        let err = normalize_slack(&value).unwrap_err();
        assert!(matches!(err, NormalizeError::BadTimestamp(_)));
    }

    #[test]
    fn test_normalize_batch_quarantines_failures() {
        let values = vec![
            json!({
                "id": "good",
                "from": "a@b.com",
                "subject": "ok",
                "date": "2026-02-08T06:00:00Z"
            }),
            json!({ "subject": "no id or from" }),
        ];
        let (messages, quarantined) = normalize_batch(Provider::Gmail, &values);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, "good");
        assert_eq!(quarantined.len(), 1);
    }

    #[test]
    fn test_parse_sender_unquoted_name() {
        let (name, email) = parse_sender("Bob Smith <bob@co.com>");
        assert_eq!(name, "Bob Smith");
        assert_eq!(email, "bob@co.com");
    }

    #[test]
    fn test_parse_sender_name_only() {
        let (name, email) = parse_sender("Mailer Daemon");
        assert_eq!(name, "Mailer Daemon");
        assert_eq!(email, "");
    }
}
