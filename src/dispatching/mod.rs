//! Selection rules and rule chains for non-preemptive dispatch.
//!
//! When the CPU becomes free, a non-preemptive policy picks one process
//! from the set of arrived-and-pending processes. The pick is expressed as
//! a chain of rules: the primary rule decides, later rules only break ties,
//! and when every rule ties the candidate scanned first (input order) wins.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleChain};
//! use u_cpusched::models::ProcessSpec;
//!
//! let chain = RuleChain::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::EarliestArrival);
//!
//! let procs = vec![ProcessSpec::new("A", 0, 4), ProcessSpec::new("B", 1, 2)];
//! assert_eq!(chain.select_best(procs.iter().enumerate()), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::RuleChain;

use crate::models::ProcessSpec;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A rule that ranks pending processes.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for
/// processes that should run first.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Scores a process. Lower = dispatched first.
    fn evaluate(&self, process: &ProcessSpec) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
