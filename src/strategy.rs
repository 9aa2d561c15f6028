//! Tagged scoring strategies over the canonical message shape.
//!
//! The heuristic classifier and the numeric scorer historically grew as
//! two separate pipelines with separate input shapes; both now consume
//! one `CanonicalMessage`, selected behind this tagged strategy so hosts
//! can swap bucketing for numeric ranking without changing call sites.

use serde::{Deserialize, Serialize};

use crate::classify;
use crate::scoring::{self, ScoreBreakdown};
use crate::types::{CanonicalMessage, Priority};

/// A synchronous scoring strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScoringStrategy {
    /// Keyword bucketing into urgent / question / normal.
    #[serde(rename_all = "camelCase")]
    Heuristic {
        #[serde(default)]
        vip_senders: Vec<String>,
    },
    /// Point-based numeric scoring with time decay.
    Numeric,
}

/// Result of evaluating a strategy against one message.
#[derive(Debug, Clone)]
pub enum ScoringVerdict {
    Heuristic(Priority),
    Numeric(ScoreBreakdown),
}

impl ScoringStrategy {
    /// Evaluate this strategy against a message.
    pub fn evaluate(&self, message: &CanonicalMessage) -> ScoringVerdict {
        match self {
            Self::Heuristic { vip_senders } => {
                ScoringVerdict::Heuristic(classify::classify(message, vip_senders))
            }
            Self::Numeric => ScoringVerdict::Numeric(scoring::score_message(message)),
        }
    }
}

impl ScoringVerdict {
    /// Collapse either verdict into a coarse priority bucket, mapping
    /// numeric scores onto the same three bands the heuristic uses.
    pub fn bucket(&self) -> Priority {
        match self {
            Self::Heuristic(priority) => *priority,
            Self::Numeric(breakdown) => {
                if breakdown.total >= 100 {
                    Priority::Urgent
                } else if breakdown.total >= 25 {
                    Priority::Question
                } else {
                    Priority::Normal
                }
            }
        }
    }
}
