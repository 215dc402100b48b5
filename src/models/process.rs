//! Process model.
//!
//! A process is the unit of work the simulated CPU executes. Its input
//! description ([`ProcessSpec`]) is supplied by the caller and never mutated;
//! every simulation run derives its own [`ProcessOutcome`] values from it.
//!
//! # Time Representation
//! All times are abstract integer time units relative to the simulation
//! epoch (t=0). The consumer decides what one unit means.

use serde::{Deserialize, Serialize};

/// Input description of a process.
///
/// # Contract
/// - `id` is unique within one run and non-empty.
/// - `arrival >= 0`.
/// - `burst > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier (also the join key for presentation).
    pub id: String,
    /// Time unit at which the process becomes schedulable.
    pub arrival: i64,
    /// Total execution units required.
    pub burst: i64,
    /// Scheduling priority (lower = more important).
    ///
    /// Only consulted by priority scheduling.
    #[serde(default)]
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a process with priority 0.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Per-run state and result for one process.
///
/// Created fresh by each simulation run from a [`ProcessSpec`]; never
/// aliased to caller-owned data. Times stay `None` until the event they
/// describe has happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Process identifier (copied from the spec).
    pub id: String,
    /// Arrival time (copied from the spec).
    pub arrival: i64,
    /// Burst time (copied from the spec).
    pub burst: i64,
    /// Priority (copied from the spec).
    pub priority: i32,
    /// Execution units left. Starts at `burst`.
    pub remaining: i64,
    /// Time of first dispatch.
    pub start_time: Option<i64>,
    /// Time the last unit finished executing.
    pub completion_time: Option<i64>,
    /// `turnaround_time - burst`, set on completion.
    pub waiting_time: i64,
    /// `completion_time - arrival`, set on completion.
    pub turnaround_time: i64,
}

impl ProcessOutcome {
    /// Creates the initial (undispatched) state for a process.
    pub fn from_spec(spec: &ProcessSpec) -> Self {
        Self {
            id: spec.id.clone(),
            arrival: spec.arrival,
            burst: spec.burst,
            priority: spec.priority,
            remaining: spec.burst,
            start_time: None,
            completion_time: None,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Records the first dispatch. Later calls are ignored.
    pub(crate) fn mark_started(&mut self, time: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(time);
        }
    }

    /// Finalizes the process at `time` and derives its metrics.
    pub(crate) fn complete(&mut self, time: i64) {
        self.remaining = 0;
        self.completion_time = Some(time);
        self.turnaround_time = time - self.arrival;
        self.waiting_time = self.turnaround_time - self.burst;
    }

    /// Whether the process has finished executing.
    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Response time: first dispatch minus arrival.
    pub fn response_time(&self) -> Option<i64> {
        self.start_time.map(|start| start - self.arrival)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_builder() {
        let spec = ProcessSpec::new("P1", 3, 7).with_priority(2);
        assert_eq!(spec.id, "P1");
        assert_eq!(spec.arrival, 3);
        assert_eq!(spec.burst, 7);
        assert_eq!(spec.priority, 2);
    }

    #[test]
    fn test_spec_default_priority() {
        let spec = ProcessSpec::new("P1", 0, 1);
        assert_eq!(spec.priority, 0);
    }

    #[test]
    fn test_outcome_initial_state() {
        let o = ProcessOutcome::from_spec(&ProcessSpec::new("P1", 2, 5));
        assert_eq!(o.remaining, 5);
        assert_eq!(o.start_time, None);
        assert_eq!(o.completion_time, None);
        assert!(!o.is_complete());
        assert_eq!(o.response_time(), None);
    }

    #[test]
    fn test_start_recorded_once() {
        let mut o = ProcessOutcome::from_spec(&ProcessSpec::new("P1", 0, 5));
        o.mark_started(4);
        o.mark_started(9);
        assert_eq!(o.start_time, Some(4));
        assert_eq!(o.response_time(), Some(4));
    }

    #[test]
    fn test_complete_derives_metrics() {
        let mut o = ProcessOutcome::from_spec(&ProcessSpec::new("P2", 2, 3));
        o.mark_started(5);
        o.complete(8);
        assert!(o.is_complete());
        assert_eq!(o.remaining, 0);
        assert_eq!(o.completion_time, Some(8));
        assert_eq!(o.turnaround_time, 6);
        assert_eq!(o.waiting_time, 3);
    }

    #[test]
    fn test_spec_deserialize_without_priority() {
        let spec: ProcessSpec =
            serde_json::from_str(r#"{"id":"P9","arrival":1,"burst":4}"#).unwrap();
        assert_eq!(spec, ProcessSpec::new("P9", 1, 4));
    }
}
