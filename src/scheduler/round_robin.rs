//! Preemptive round-robin.
//!
//! # Algorithm
//!
//! A FIFO ready queue and a single clock. Processes join the back of the
//! queue, in arrival order, as soon as `arrival <= time`.
//!
//! 1. Admit arrived processes.
//! 2. If the queue is empty, jump to the next arrival and admit again.
//! 3. Pop the head and run it for `min(quantum, remaining)`.
//! 4. Admit processes that arrived during the slice.
//! 5. Re-queue the preempted process behind them, or finalize it.
//!
//! Step 4 before step 5: a process arriving mid-slice is served before the
//! process that was just preempted.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use super::Run;
use crate::dispatching::{rules, RuleChain};
use crate::models::{ProcessSpec, SimulationResult};

/// `quantum` must already be positive.
pub(super) fn run(processes: &[ProcessSpec], quantum: i64) -> SimulationResult {
    let arrivals = RuleChain::new()
        .with_rule(rules::EarliestArrival)
        .sort_indices(processes);

    let mut state = Run::new(processes);
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
    let mut next = 0;
    let mut unfinished = processes.len();
    let mut time = 0;

    while unfinished > 0 {
        admit(processes, &arrivals, &mut next, time, &mut queue);

        let Some(idx) = queue.pop_front() else {
            match arrivals.get(next) {
                Some(&upcoming) => {
                    time = processes[upcoming].arrival;
                    continue;
                }
                None => break,
            }
        };

        let exec = quantum.min(state.remaining(idx));
        time = state.execute(idx, time, exec);

        admit(processes, &arrivals, &mut next, time, &mut queue);

        if state.remaining(idx) > 0 {
            queue.push_back(idx);
        } else {
            state.complete(idx, time);
            unfinished -= 1;
        }
    }

    state.finish()
}

/// Moves every not-yet-admitted process with `arrival <= time` to the back
/// of the queue. `arrivals` is sorted by arrival; `next` is the cursor.
fn admit(
    processes: &[ProcessSpec],
    arrivals: &[usize],
    next: &mut usize,
    time: i64,
    queue: &mut VecDeque<usize>,
) {
    while let Some(&idx) = arrivals.get(*next) {
        if processes[idx].arrival > time {
            break;
        }
        queue.push_back(idx);
        *next += 1;
    }
}
