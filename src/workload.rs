//! Workload generation.
//!
//! Provides the canonical three-process sample and a seeded random
//! generator for reproducible experiments and property tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::models::ProcessSpec;

/// The three-process sample workload.
///
/// | ID | Arrival | Burst | Priority |
/// |----|---------|-------|----------|
/// | P1 | 0 | 5 | 2 |
/// | P2 | 2 | 3 | 1 |
/// | P3 | 4 | 1 | 3 |
pub fn sample_processes() -> Vec<ProcessSpec> {
    vec![
        ProcessSpec::new("P1", 0, 5).with_priority(2),
        ProcessSpec::new("P2", 2, 3).with_priority(1),
        ProcessSpec::new("P3", 4, 1).with_priority(3),
    ]
}

/// Seeded random workload generator.
///
/// Always produces valid process sets: IDs `P1..Pn`, `arrival >= 0`,
/// `burst >= 1`. Ranges that would break those rules are clamped.
///
/// # Example
///
/// ```
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let procs = WorkloadGenerator::new(42).with_bursts(1..=4).generate(5);
/// assert_eq!(procs.len(), 5);
/// assert!(procs.iter().all(|p| (1..=4).contains(&p.burst)));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    arrivals: RangeInclusive<i64>,
    bursts: RangeInclusive<i64>,
    priorities: RangeInclusive<i32>,
}

impl WorkloadGenerator {
    /// Creates a generator with default ranges (arrival 0..=20,
    /// burst 1..=10, priority 1..=5).
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            arrivals: 0..=20,
            bursts: 1..=10,
            priorities: 1..=5,
        }
    }

    /// Sets the arrival range. Negative bounds are raised to 0.
    pub fn with_arrivals(mut self, range: RangeInclusive<i64>) -> Self {
        self.arrivals = clamp_range(range, 0);
        self
    }

    /// Sets the burst range. Bounds below 1 are raised to 1.
    pub fn with_bursts(mut self, range: RangeInclusive<i64>) -> Self {
        self.bursts = clamp_range(range, 1);
        self
    }

    /// Sets the priority range.
    pub fn with_priorities(mut self, range: RangeInclusive<i32>) -> Self {
        let (lo, hi) = range.into_inner();
        self.priorities = lo.min(hi)..=hi.max(lo);
        self
    }

    /// Generates `count` processes. Same seed and ranges → same output.
    pub fn generate(&self, count: usize) -> Vec<ProcessSpec> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        (1..=count)
            .map(|n| {
                ProcessSpec::new(
                    format!("P{n}"),
                    rng.random_range(self.arrivals.clone()),
                    rng.random_range(self.bursts.clone()),
                )
                .with_priority(rng.random_range(self.priorities.clone()))
            })
            .collect()
    }
}

fn clamp_range(range: RangeInclusive<i64>, floor: i64) -> RangeInclusive<i64> {
    let (lo, hi) = range.into_inner();
    let lo = lo.max(floor);
    lo..=hi.max(lo)
}
