//! Rule-driven non-preemptive dispatch (SJF and priority).
//!
//! # Algorithm
//!
//! Until every process has run:
//! 1. Collect processes that have arrived and not yet been dispatched.
//! 2. If none, jump the clock to the earliest pending arrival.
//! 3. Otherwise pick one with the rule chain and run it to completion.
//!
//! Jumping to the next arrival yields the same timeline as advancing the
//! clock one unit at a time, since nothing can be dispatched in between.
//!
//! # Complexity
//! O(n²): a linear scan per dispatch.

use super::Run;
use crate::dispatching::{rules, RuleChain};
use crate::models::{ProcessSpec, SimulationResult};

/// Burst, then arrival, then input order.
pub(super) fn sjf_rules() -> RuleChain {
    RuleChain::new()
        .with_rule(rules::ShortestBurst)
        .with_tie_breaker(rules::EarliestArrival)
}

/// Priority value, then burst, then input order.
pub(super) fn priority_rules() -> RuleChain {
    RuleChain::new()
        .with_rule(rules::LowestPriority)
        .with_tie_breaker(rules::ShortestBurst)
}

pub(super) fn run(processes: &[ProcessSpec], chain: &RuleChain) -> SimulationResult {
    let mut state = Run::new(processes);
    let mut dispatched = vec![false; processes.len()];
    let mut pending = processes.len();
    let mut time = 0;

    while pending > 0 {
        let ready = processes
            .iter()
            .enumerate()
            .filter(|(i, p)| !dispatched[*i] && p.arrival <= time);

        let idx = match chain.select_best(ready) {
            Some(idx) => idx,
            None => {
                match next_arrival(processes, &dispatched) {
                    Some(arrival) => time = arrival,
                    None => break,
                }
                continue;
            }
        };

        time = state.execute(idx, time, processes[idx].burst);
        state.complete(idx, time);
        dispatched[idx] = true;
        pending -= 1;
    }

    state.finish()
}

fn next_arrival(processes: &[ProcessSpec], dispatched: &[bool]) -> Option<i64> {
    processes
        .iter()
        .zip(dispatched)
        .filter(|(_, &done)| !done)
        .map(|(p, _)| p.arrival)
        .min()
}
