//! Simulation metrics (KPIs).
//!
//! Pure reduction over a [`SimulationResult`].
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Response | mean(first dispatch - arrival) |
//! | Max Waiting | largest single waiting time |
//! | Makespan | end of the last timeline entry |
//! | Total Idle | makespan - busy time |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | completed processes / makespan |
//!
//! Averages are over completed processes. Every metric is 0 for an
//! empty result.

use serde::{Deserialize, Serialize};

use crate::models::SimulationResult;

/// Summary statistics of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Number of completed processes.
    pub process_count: usize,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Largest waiting time of any process.
    pub max_waiting: i64,
    /// End of the last timeline entry.
    pub makespan: i64,
    /// Time the CPU sat idle before the makespan.
    pub total_idle: i64,
    /// Fraction of the makespan spent executing (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a finished simulation.
    pub fn calculate(result: &SimulationResult) -> Self {
        let mut count: usize = 0;
        let mut total_waiting: f64 = 0.0;
        let mut total_turnaround: f64 = 0.0;
        let mut total_response: f64 = 0.0;
        let mut max_waiting: i64 = 0;

        for p in result.processes.iter().filter(|p| p.is_complete()) {
            count += 1;
            total_waiting += p.waiting_time as f64;
            total_turnaround += p.turnaround_time as f64;
            total_response += p.response_time().unwrap_or(0) as f64;
            max_waiting = max_waiting.max(p.waiting_time);
        }

        let mean = |total: f64| {
            if count == 0 {
                0.0
            } else {
                total / count as f64
            }
        };

        let makespan = result.makespan();
        let busy = result.busy_time();
        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (busy as f64 / makespan as f64, count as f64 / makespan as f64)
        };

        Self {
            process_count: count,
            avg_waiting: mean(total_waiting),
            avg_turnaround: mean(total_turnaround),
            avg_response: mean(total_response),
            max_waiting,
            makespan,
            total_idle: makespan - busy,
            cpu_utilization,
            throughput,
        }
    }
}
