//! Priority scoring and triage core for a unified executive inbox.
//!
//! Consumes normalized Gmail/Slack message records plus an injected
//! analyzer capability, and produces scored, tiered, classified records
//! for a host application to render. Three pipelines share one canonical
//! message shape:
//!
//! - [`classify`] — keyword heuristic bucketing (urgent / question / normal)
//! - [`scoring`] — deterministic point-based scoring with time decay
//! - [`executive`] — analyzer-backed 0–10 scoring with boost rules and
//!   gold/silver/bronze/standard tiering
//!
//! The crate performs no I/O of its own: the only suspend point is the
//! [`analyzer::ThreadAnalyzer`] call inside the executive scorer.

pub mod analyzer;
pub mod classify;
pub mod decay;
pub mod error;
pub mod executive;
pub mod keywords;
pub mod normalize;
pub mod scoring;
pub mod strategy;
pub mod types;

pub use analyzer::ThreadAnalyzer;
pub use error::{AnalyzerError, NormalizeError, ScoreError};
pub use executive::{BoostPolicy, ExecutiveScorer};
pub use scoring::ScoreBreakdown;
pub use types::{
    AnalysisCategory, CanonicalMessage, Priority, PriorityTier, Provider, ScoredThread, Sentiment,
    Thread, ThreadAnalysis,
};
