//! Algorithm selection and simulation requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{ProcessSpec, SimulationResult};

/// Quantum used when a request does not set one.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Scheduling policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Algorithm {
    /// First-come-first-served, non-preemptive.
    Fcfs,
    /// Shortest-job-first, non-preemptive.
    Sjf,
    /// Priority (lower value first), non-preemptive.
    Priority,
    /// Round-robin with a fixed quantum, preemptive.
    RoundRobin,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Stable short name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Priority => "PRIORITY",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come-First-Served",
            Algorithm::Sjf => "SJF (Non-preemptive)",
            Algorithm::Priority => "Priority (Non-preemptive)",
            Algorithm::RoundRobin => "Round Robin",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown scheduling algorithm: {0}")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Parses short names, labels, and common aliases (case-insensitive).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "fcfs" | "fifo" | "first-come-first-served" | "first come first served" => {
                Ok(Algorithm::Fcfs)
            }
            "sjf" | "spt" | "sjf (non-preemptive)" | "shortest job first" => Ok(Algorithm::Sjf),
            "priority" | "prio" | "priority (non-preemptive)" => Ok(Algorithm::Priority),
            "rr" | "round robin" | "round-robin" | "round_robin" | "roundrobin" => {
                Ok(Algorithm::RoundRobin)
            }
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Input container for one simulation.
///
/// # Example
/// ```
/// use u_cpusched::models::ProcessSpec;
/// use u_cpusched::scheduler::{Algorithm, SimulationRequest};
///
/// let request = SimulationRequest::new(
///     vec![ProcessSpec::new("P1", 0, 3), ProcessSpec::new("P2", 1, 2)],
///     Algorithm::RoundRobin,
/// )
/// .with_quantum(1);
///
/// let result = request.run().unwrap();
/// assert_eq!(result.timeline.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule, in caller order.
    pub processes: Vec<ProcessSpec>,
    /// Policy to apply.
    pub algorithm: Algorithm,
    /// Round-robin quantum. Ignored by other policies.
    #[serde(default = "default_quantum")]
    pub quantum: i64,
}

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

impl SimulationRequest {
    /// Creates a request with the default quantum.
    pub fn new(processes: Vec<ProcessSpec>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Adds a process.
    pub fn with_process(mut self, process: ProcessSpec) -> Self {
        self.processes.push(process);
        self
    }

    /// Runs the simulation.
    pub fn run(&self) -> Result<SimulationResult> {
        super::simulate(&self.processes, self.algorithm, self.quantum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("FCFS".parse::<Algorithm>(), Ok(Algorithm::Fcfs));
        assert_eq!("sjf".parse::<Algorithm>(), Ok(Algorithm::Sjf));
        assert_eq!("Priority (Non-preemptive)".parse::<Algorithm>(), Ok(Algorithm::Priority));
        assert_eq!(" Round Robin ".parse::<Algorithm>(), Ok(Algorithm::RoundRobin));
        assert_eq!("rr".parse::<Algorithm>(), Ok(Algorithm::RoundRobin));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "lottery".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, ParseAlgorithmError("lottery".into()));
        assert_eq!(err.to_string(), "Unknown scheduling algorithm: lottery");
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
            assert_eq!(algorithm.label().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_preemptive_flag() {
        assert!(Algorithm::RoundRobin.is_preemptive());
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
    }

    #[test]
    fn test_request_builder() {
        let req = SimulationRequest::new(Vec::new(), Algorithm::Priority)
            .with_process(ProcessSpec::new("P1", 0, 2))
            .with_quantum(4);
        assert_eq!(req.processes.len(), 1);
        assert_eq!(req.quantum, 4);
        assert_eq!(req.algorithm, Algorithm::Priority);
    }

    #[test]
    fn test_request_default_quantum() {
        let req = SimulationRequest::new(Vec::new(), Algorithm::RoundRobin);
        assert_eq!(req.quantum, DEFAULT_QUANTUM);
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "processes": [
                {"id": "P1", "arrival": 0, "burst": 5, "priority": 2},
                {"id": "P2", "arrival": 2, "burst": 3}
            ],
            "algorithm": "ROUND_ROBIN"
        }"#;
        let req: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.algorithm, Algorithm::RoundRobin);
        assert_eq!(req.quantum, DEFAULT_QUANTUM);
        assert_eq!(req.processes[1].priority, 0);

        let result = req.run().unwrap();
        assert_eq!(result.makespan(), 8);
    }
}
