//! The analyzer capability seam.
//!
//! Thread analysis is performed by an external collaborator (a
//! language-model-backed service in production). The core depends only on
//! this trait: one async call per thread, opaque errors propagated
//! verbatim. Timeouts, retries, and transport all belong to the
//! implementation behind the trait, not to this crate.

use async_trait::async_trait;

use crate::error::AnalyzerError;
use crate::types::{Thread, ThreadAnalysis};

/// Capability that produces a structured analysis for a thread.
///
/// Implementations must be cheap to share across tasks; the executive
/// scorer holds one behind an `Arc` and treats every call as the only
/// suspend point in a scoring pass.
#[async_trait]
pub trait ThreadAnalyzer: Send + Sync {
    /// Analyze a single thread, returning a base priority score in
    /// [0, 10] plus category, sentiment, and summary fields.
    async fn analyze_thread(&self, thread: &Thread) -> Result<ThreadAnalysis, AnalyzerError>;
}
