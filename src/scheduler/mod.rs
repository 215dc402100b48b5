//! Scheduling algorithms and metrics.
//!
//! Four single-CPU policies over a static, fully-known process set:
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | No | arrival, then input order |
//! | SJF | No | burst, arrival, input order |
//! | Priority | No | priority, burst, input order |
//! | Round Robin | Yes (quantum) | FIFO ready queue |
//!
//! Every run validates its input, copies it into fresh per-run state, and
//! returns a [`SimulationResult`]. Nothing is shared between runs.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod non_preemptive;
mod request;
mod round_robin;

pub use kpi::SimulationKpi;
pub use request::{Algorithm, ParseAlgorithmError, SimulationRequest, DEFAULT_QUANTUM};

use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::models::{ProcessOutcome, ProcessSpec, SimulationResult, TimelineEntry};
use crate::validation::validate_processes;

/// Runs one simulation.
///
/// `quantum` is only read for [`Algorithm::RoundRobin`]; values `<= 0` are
/// coerced to 1.
///
/// # Errors
/// Returns a [`SimulationError`](crate::error::SimulationError) if any
/// process has an empty or duplicate ID, a negative arrival, or a
/// non-positive burst, or if the latest arrival plus the total burst
/// overflows `i64`. Validation happens before any scheduling.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessSpec;
/// use u_cpusched::scheduler::{simulate, Algorithm};
///
/// let procs = vec![
///     ProcessSpec::new("P1", 0, 5).with_priority(2),
///     ProcessSpec::new("P2", 2, 3).with_priority(1),
///     ProcessSpec::new("P3", 4, 1).with_priority(3),
/// ];
/// let result = simulate(&procs, Algorithm::Sjf, 0).unwrap();
/// let order: Vec<&str> = result.timeline.iter().map(|e| e.id.as_str()).collect();
/// assert_eq!(order, vec!["P1", "P3", "P2"]);
/// assert_eq!(result.makespan(), 9);
/// ```
pub fn simulate(
    processes: &[ProcessSpec],
    algorithm: Algorithm,
    quantum: i64,
) -> Result<SimulationResult> {
    validate_processes(processes)?;

    debug!(
        %algorithm,
        processes = processes.len(),
        quantum,
        "starting simulation"
    );

    let result = match algorithm {
        Algorithm::Fcfs => fcfs::run(processes),
        Algorithm::Sjf => non_preemptive::run(processes, &non_preemptive::sjf_rules()),
        Algorithm::Priority => non_preemptive::run(processes, &non_preemptive::priority_rules()),
        Algorithm::RoundRobin => round_robin::run(processes, effective_quantum(quantum)),
    };

    debug!(
        %algorithm,
        slices = result.timeline.len(),
        makespan = result.makespan(),
        "simulation finished"
    );

    Ok(result)
}

/// Coerces a non-positive quantum to 1.
pub fn effective_quantum(quantum: i64) -> i64 {
    if quantum <= 0 {
        warn!(quantum, "non-positive quantum, using 1");
        1
    } else {
        quantum
    }
}

/// Working state of one simulation run.
///
/// Owns fresh outcomes (input order) and the timeline being built.
struct Run {
    outcomes: Vec<ProcessOutcome>,
    timeline: Vec<TimelineEntry>,
}

impl Run {
    fn new(processes: &[ProcessSpec]) -> Self {
        Self {
            outcomes: processes.iter().map(ProcessOutcome::from_spec).collect(),
            timeline: Vec::new(),
        }
    }

    fn remaining(&self, idx: usize) -> i64 {
        self.outcomes[idx].remaining
    }

    /// Executes process `idx` for `units` starting at `start`, emitting one
    /// timeline entry. Returns the slice end time.
    ///
    /// Validation bounds every slice end by the horizon, so the addition
    /// cannot overflow.
    fn execute(&mut self, idx: usize, start: i64, units: i64) -> i64 {
        let end = start + units;
        let outcome = &mut self.outcomes[idx];
        outcome.mark_started(start);
        outcome.remaining -= units;

        trace!(id = %outcome.id, start, end, remaining = outcome.remaining, "dispatch");
        self.timeline.push(TimelineEntry::new(outcome.id.clone(), start, end));
        end
    }

    fn complete(&mut self, idx: usize, time: i64) {
        self.outcomes[idx].complete(time);
    }

    fn finish(self) -> SimulationResult {
        SimulationResult {
            timeline: self.timeline,
            processes: self.outcomes,
        }
    }
}
