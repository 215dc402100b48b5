//! Timeline (Gantt) and simulation result model.
//!
//! A timeline is the chronological sequence of execution slices produced by
//! a simulation run. Idle gaps are not represented by entries; they show up
//! as the distance between one entry's `end` and the next entry's `start`.

use serde::{Deserialize, Serialize};

use super::ProcessOutcome;
use crate::scheduler::SimulationKpi;

/// One contiguous execution slice of a single process.
///
/// Covers the half-open interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Executing process ID.
    pub id: String,
    /// Slice start time.
    pub start: i64,
    /// Slice end time (exclusive).
    pub end: i64,
}

impl TimelineEntry {
    /// Creates a new timeline entry.
    pub fn new(id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// The output of one simulation run.
///
/// `timeline` is in execution order, which is also chronological order.
/// `processes` holds exactly one finalized outcome per input process, in
/// the caller's input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Execution slices, chronological.
    pub timeline: Vec<TimelineEntry>,
    /// Finalized per-process outcomes, input order.
    pub processes: Vec<ProcessOutcome>,
}

impl SimulationResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the run scheduled nothing.
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty() && self.processes.is_empty()
    }

    /// End of the last timeline entry, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.timeline.last().map(|e| e.end).unwrap_or(0)
    }

    /// Total time the CPU spent executing processes.
    pub fn busy_time(&self) -> i64 {
        self.timeline.iter().map(TimelineEntry::duration).sum()
    }

    /// Total time the CPU sat idle between t=0 and the makespan.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Number of times the CPU switched from one process to another.
    ///
    /// Consecutive slices of the same process (e.g. a round-robin process
    /// re-dispatched with an empty queue) do not count.
    pub fn context_switches(&self) -> usize {
        self.timeline
            .windows(2)
            .filter(|pair| pair[0].id != pair[1].id)
            .count()
    }

    /// All slices executed by a given process, chronological.
    pub fn entries_for(&self, id: &str) -> Vec<&TimelineEntry> {
        self.timeline.iter().filter(|e| e.id == id).collect()
    }

    /// Finds the outcome for a given process.
    pub fn outcome(&self, id: &str) -> Option<&ProcessOutcome> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Computes summary metrics for this result.
    pub fn kpi(&self) -> SimulationKpi {
        SimulationKpi::calculate(self)
    }
}
