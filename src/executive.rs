//! Analyzer-backed executive scoring with deterministic boost rules.
//!
//! `ExecutiveScorer` wraps the injected [`ThreadAnalyzer`] capability:
//! one analysis call per unique thread id (memoized until `clear_cache`),
//! deterministic boosts layered on the analyzer's base score, a [0, 10]
//! clamp, and a four-tier label. Batch scoring tolerates per-thread
//! failures and returns results sorted by descending final score.

use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::analyzer::ThreadAnalyzer;
use crate::error::ScoreError;
use crate::keywords::{contains_any, C_LEVEL_KEYWORDS, TIME_SENSITIVE_KEYWORDS};
use crate::types::{AnalysisCategory, PriorityTier, ScoredThread, Thread, ThreadAnalysis};

/// Validation message for analyzer output with a missing or non-finite
/// base score. Exact wording is part of the public contract.
const INVALID_SCORE_MSG: &str = "Invalid priority score received from AI analysis";

/// Named, tunable boost magnitudes.
///
/// The boosts are product policy, not physical law — they load from JSON
/// config so tuning never requires a code change. Defaults satisfy the
/// documented tier-crossing scenarios (e.g. an 8.5 base with a C-level
/// participant lands in gold).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoostPolicy {
    /// Any thread participant matching a C-level/executive fragment.
    pub executive_participant: f64,
    /// Time-sensitive phrase in the subject or snippet.
    pub time_sensitive: f64,
    /// Unread thread whose analysis category is urgent or important.
    pub unread_priority: f64,
    /// Provider label containing "important".
    pub important_label: f64,
}

impl Default for BoostPolicy {
    fn default() -> Self {
        Self {
            executive_participant: 0.8,
            time_sensitive: 0.4,
            unread_priority: 0.3,
            important_label: 0.2,
        }
    }
}

/// Executive-tuned thread scorer.
///
/// Holds the analyzer capability, the per-thread-id memoization cache,
/// and the boost policy. Cheap to share: all methods take `&self` and the
/// cache is a concurrent map.
pub struct ExecutiveScorer {
    analyzer: Arc<dyn ThreadAnalyzer>,
    cache: DashMap<String, ThreadAnalysis>,
    policy: BoostPolicy,
}

impl ExecutiveScorer {
    /// Create a scorer with the default boost policy.
    pub fn new(analyzer: Arc<dyn ThreadAnalyzer>) -> Self {
        Self::with_policy(analyzer, BoostPolicy::default())
    }

    /// Create a scorer with an explicit boost policy (e.g. loaded from
    /// product config).
    pub fn with_policy(analyzer: Arc<dyn ThreadAnalyzer>, policy: BoostPolicy) -> Self {
        Self {
            analyzer,
            cache: DashMap::new(),
            policy,
        }
    }

    /// Score one thread: analyze (or reuse the memoized analysis), apply
    /// boost rules, clamp to [0, 10], derive the tier.
    ///
    /// Fails with `ScoreError::Validation` when the thread is missing an
    /// id or subject, or when the analyzer returns a missing/non-finite
    /// base score. Analyzer errors propagate unchanged; neither failure
    /// kind is cached.
    pub async fn score_thread(&self, thread: &Thread) -> Result<ScoredThread, ScoreError> {
        if thread.id.is_empty() || thread.subject.is_empty() {
            return Err(ScoreError::Validation(
                "Thread id and subject are required".to_string(),
            ));
        }

        // Clone out of the map before any await so no guard is alive
        // across the suspend point.
        let cached = self.cache.get(&thread.id).map(|hit| hit.clone());
        let analysis = match cached {
            Some(hit) => {
                log::debug!("executive: cache hit for thread {}", thread.id);
                hit
            }
            None => {
                let fresh = self.analyzer.analyze_thread(thread).await?;
                // Validate before memoizing so a bad analysis is retried
                // on the next call instead of being served from cache.
                validate_base_score(&fresh)?;
                self.cache.insert(thread.id.clone(), fresh.clone());
                fresh
            }
        };

        let base = validate_base_score(&analysis)?;
        let (boost, boost_reason) = self.apply_boosts(thread, &analysis);
        let final_score = (base + boost).clamp(0.0, 10.0);
        let priority_tier = PriorityTier::from_score(final_score);
        log::debug!(
            "executive: thread {} scored {:.1} ({})",
            thread.id,
            final_score,
            priority_tier.label()
        );

        Ok(ScoredThread {
            thread: thread.clone(),
            analysis,
            priority_score: final_score,
            priority_tier,
            boost_reason,
        })
    }

    /// Score a batch with independent failure isolation, sorted by
    /// descending final score (stable — equal scores keep input order).
    ///
    /// A failed thread is omitted from the result and logged at warn;
    /// callers that need per-item errors use
    /// [`score_threads_detailed`](Self::score_threads_detailed).
    pub async fn score_threads(&self, threads: &[Thread]) -> Vec<ScoredThread> {
        let mut scored = Vec::with_capacity(threads.len());
        for thread in threads {
            match self.score_thread(thread).await {
                Ok(result) => scored.push(result),
                Err(e) => {
                    log::warn!("executive: dropping thread {} from batch: {}", thread.id, e);
                }
            }
        }
        scored.sort_by(|a, b| {
            b.priority_score
                .partial_cmp(&a.priority_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored
    }

    /// Score a batch, returning one result per input thread in input
    /// order. Nothing is dropped; the caller decides how to filter.
    pub async fn score_threads_detailed(
        &self,
        threads: &[Thread],
    ) -> Vec<Result<ScoredThread, ScoreError>> {
        let mut results = Vec::with_capacity(threads.len());
        for thread in threads {
            results.push(self.score_thread(thread).await);
        }
        results
    }

    /// Drop all memoized analyses. The next `score_thread` per id calls
    /// the analyzer again.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Number of memoized analyses currently held.
    pub fn cached_analyses(&self) -> usize {
        self.cache.len()
    }

    /// Evaluate the boost rules for a thread. Returns the total additive
    /// boost and, when any rule fired, a comma-joined reason string.
    fn apply_boosts(&self, thread: &Thread, analysis: &ThreadAnalysis) -> (f64, Option<String>) {
        let mut boost = 0.0;
        let mut reasons: Vec<&str> = Vec::new();

        if thread
            .participants
            .iter()
            .any(|p| contains_any(&p.to_lowercase(), C_LEVEL_KEYWORDS))
        {
            boost += self.policy.executive_participant;
            reasons.push("executive participant");
        }

        let content = format!(
            "{} {}",
            thread.subject.to_lowercase(),
            thread.snippet.to_lowercase()
        );
        if contains_any(&content, TIME_SENSITIVE_KEYWORDS) {
            boost += self.policy.time_sensitive;
            reasons.push("time-sensitive language");
        }

        if thread.unread_count > 0
            && matches!(
                analysis.category,
                AnalysisCategory::Urgent | AnalysisCategory::Important
            )
        {
            boost += self.policy.unread_priority;
            reasons.push("unread high-priority thread");
        }

        if thread
            .labels
            .iter()
            .any(|l| l.to_lowercase().contains("important"))
        {
            boost += self.policy.important_label;
            reasons.push("flagged important");
        }

        let reason = if reasons.is_empty() {
            None
        } else {
            Some(reasons.join(", "))
        };
        (boost, reason)
    }
}

/// Pull the base score out of an analysis, rejecting missing or
/// non-finite values with the contractual message.
fn validate_base_score(analysis: &ThreadAnalysis) -> Result<f64, ScoreError> {
    match analysis.priority_score {
        Some(score) if score.is_finite() => Ok(score),
        _ => Err(ScoreError::Validation(INVALID_SCORE_MSG.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================
