//! CPU scheduling simulation.
//!
//! Given a static set of processes (arrival, burst, priority), computes the
//! execution timeline and per-process waiting/turnaround times under one of
//! four single-CPU policies. Deterministic, synchronous, and side-effect
//! free: every run owns its own working state.
//!
//! # Modules
//!
//! - **`models`**: `ProcessSpec`, `ProcessOutcome`, `TimelineEntry`, `SimulationResult`
//! - **`dispatching`**: Selection rules and rule chains for non-preemptive dispatch
//! - **`scheduler`**: `simulate`, `Algorithm`, `SimulationRequest`, `SimulationKpi`
//! - **`validation`**: Input integrity checks (empty/duplicate IDs, arrival, burst)
//! - **`workload`**: Sample and seeded random workloads
//!
//! # Example
//!
//! ```
//! use u_cpusched::scheduler::{simulate, Algorithm};
//! use u_cpusched::workload::sample_processes;
//!
//! let result = simulate(&sample_processes(), Algorithm::RoundRobin, 2).unwrap();
//! let kpi = result.kpi();
//! assert_eq!(kpi.makespan, 9);
//! assert!((kpi.avg_waiting - 3.0).abs() < 1e-10);
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events (`debug` per run, `trace` per slice). Install a
//! subscriber in the embedding application to see them.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{InvalidReason, SimulationError};
pub use scheduler::{simulate, Algorithm, SimulationKpi, SimulationRequest};
