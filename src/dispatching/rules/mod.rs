//! Built-in selection rules.
//!
//! | Rule | Score | Used by |
//! |------|-------|---------|
//! | `ShortestBurst` | burst | SJF (primary), priority (tie-break) |
//! | `EarliestArrival` | arrival | SJF (tie-break) |
//! | `LowestPriority` | priority | Priority (primary) |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionRule};
use crate::models::ProcessSpec;

/// Shortest burst first.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &ProcessSpec) -> RuleScore {
        process.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &ProcessSpec) -> RuleScore {
        process.arrival
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Smallest priority value first (lower value = more important).
#[derive(Debug, Clone, Copy)]
pub struct LowestPriority;

impl SelectionRule for LowestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &ProcessSpec) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}
