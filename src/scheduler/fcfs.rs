//! First-come-first-served.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (stable: ties keep input order).
//! 2. For each process, jump the clock to its arrival if the CPU is idle.
//! 3. Run it to completion in a single slice.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the simulation.

use super::Run;
use crate::dispatching::{rules, RuleChain};
use crate::models::{ProcessSpec, SimulationResult};

pub(super) fn run(processes: &[ProcessSpec]) -> SimulationResult {
    let order = RuleChain::new()
        .with_rule(rules::EarliestArrival)
        .sort_indices(processes);

    let mut state = Run::new(processes);
    let mut time = 0;

    for idx in order {
        let spec = &processes[idx];
        time = time.max(spec.arrival);
        time = state.execute(idx, time, spec.burst);
        state.complete(idx, time);
    }

    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineEntry;

    #[test]
    fn test_reference_scenario() {
        let procs = vec![
            ProcessSpec::new("P1", 0, 5).with_priority(2),
            ProcessSpec::new("P2", 2, 3).with_priority(1),
            ProcessSpec::new("P3", 4, 1).with_priority(3),
        ];
        let result = run(&procs);

        assert_eq!(
            result.timeline,
            vec![
                TimelineEntry::new("P1", 0, 5),
                TimelineEntry::new("P2", 5, 8),
                TimelineEntry::new("P3", 8, 9),
            ]
        );
        let waiting: Vec<i64> = result.processes.iter().map(|p| p.waiting_time).collect();
        let turnaround: Vec<i64> = result.processes.iter().map(|p| p.turnaround_time).collect();
        assert_eq!(waiting, vec![0, 3, 4]);
        assert_eq!(turnaround, vec![5, 6, 5]);
    }

    #[test]
    fn test_orders_by_arrival_not_input() {
        let procs = vec![ProcessSpec::new("late", 3, 1), ProcessSpec::new("early", 0, 2)];
        let result = run(&procs);
        assert_eq!(result.timeline[0].id, "early");
        assert_eq!(result.timeline[1], TimelineEntry::new("late", 3, 4));
    }

    #[test]
    fn test_arrival_ties_keep_input_order() {
        let procs = vec![
            ProcessSpec::new("B", 1, 2),
            ProcessSpec::new("A", 1, 2),
            ProcessSpec::new("C", 0, 1),
        ];
        let result = run(&procs);
        let order: Vec<&str> = result.timeline.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(order, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_idle_gap_not_emitted() {
        let procs = vec![ProcessSpec::new("P1", 0, 2), ProcessSpec::new("P2", 10, 3)];
        let result = run(&procs);
        assert_eq!(
            result.timeline,
            vec![TimelineEntry::new("P1", 0, 2), TimelineEntry::new("P2", 10, 13)]
        );
        let p2 = result.outcome("P2").unwrap();
        assert_eq!(p2.start_time, Some(10));
        assert_eq!(p2.waiting_time, 0);
        assert_eq!(result.idle_time(), 8);
    }

    #[test]
    fn test_late_first_arrival() {
        let procs = vec![ProcessSpec::new("P1", 4, 2)];
        let result = run(&procs);
        assert_eq!(result.timeline, vec![TimelineEntry::new("P1", 4, 6)]);
        assert_eq!(result.processes[0].turnaround_time, 2);
    }
}
