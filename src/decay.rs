//! Temporal decay for message scoring (pure math, no I/O).

use chrono::{DateTime, Utc};

/// Decay window: scores decay linearly over 7 days.
pub const DECAY_WINDOW_HOURS: f64 = 168.0;

/// Decay floor: a message is never fully zeroed by age alone.
pub const DECAY_FLOOR: f64 = 0.1;

/// Linear decay multiplier for a message of the given age.
///
/// `max(0.1, 1 - age_hours / 168)` — full weight at age zero, floor of
/// 0.1 past 7 days. Negative ages (clock skew) get full weight.
pub fn decay_factor(age_hours: f64) -> f64 {
    if age_hours <= 0.0 {
        return 1.0;
    }
    (1.0 - age_hours / DECAY_WINDOW_HOURS).max(DECAY_FLOOR)
}

/// Fractional hours elapsed between `received_at` and `now`. The caller
/// supplies the clock so scoring passes stay deterministic.
pub fn age_hours(received_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let secs = (now - received_at).num_seconds() as f64;
    (secs / 3600.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_zero_age_full_weight() {
        assert!((decay_factor(0.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_half_window_half_weight() {
        let result = decay_factor(84.0);
        assert!((result - 0.5).abs() < 0.001, "expected ~0.5, got {}", result);
    }

    #[test]
    fn test_past_window_hits_floor() {
        // 8 days old — well past the window
        assert!((decay_factor(192.0) - DECAY_FLOOR).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exactly_at_window_hits_floor() {
        assert!((decay_factor(DECAY_WINDOW_HOURS) - DECAY_FLOOR).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_age_full_weight() {
        assert!((decay_factor(-5.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_age_hours_same_instant() {
        let now = Utc::now();
        assert_eq!(age_hours(now, now), 0.0);
    }

    #[test]
    fn test_age_hours_one_day() {
        let now = Utc::now();
        let age = age_hours(now - Duration::hours(24), now);
        assert!((age - 24.0).abs() < 0.001, "expected ~24, got {}", age);
    }

    #[test]
    fn test_future_timestamp_clamps_to_zero() {
        let now = Utc::now();
        assert_eq!(age_hours(now + Duration::hours(2), now), 0.0);
    }
}
