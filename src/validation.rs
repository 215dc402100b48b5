//! Input validation for simulation runs.
//!
//! Checks structural integrity of the process set before any simulation
//! loop starts. Detects:
//! - Empty IDs
//! - Duplicate IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Horizons (latest arrival + total burst) that do not fit in `i64`
//!
//! Round-robin quantum is not validated here; non-positive values are
//! coerced to 1 by the scheduler.

use std::collections::HashSet;

use crate::error::{InvalidReason, Result, SimulationError};
use crate::models::ProcessSpec;

/// Validates a process set, failing on the first violation in input order.
///
/// Per process, checks run in this order: empty ID, duplicate ID,
/// arrival, burst. The horizon is checked once every process passes.
///
/// # Returns
/// `Ok(())` if all checks pass, otherwise the first error found.
pub fn validate_processes(processes: &[ProcessSpec]) -> Result<()> {
    let mut seen = HashSet::new();
    for (index, p) in processes.iter().enumerate() {
        check_process(index, p, &mut seen)?;
    }
    horizon(processes).map(|_| ()).ok_or(SimulationError::HorizonOverflow)
}

/// Latest arrival plus total burst: an upper bound on every clock value a
/// run can reach. `None` if it overflows `i64`.
pub fn horizon(processes: &[ProcessSpec]) -> Option<i64> {
    let latest = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    processes.iter().try_fold(latest, |acc, p| acc.checked_add(p.burst))
}

/// Validates a process set and reports every violation.
///
/// Intended for editors that want to flag all offending rows at once.
/// An empty vector means the set is valid.
pub fn collect_violations(processes: &[ProcessSpec]) -> Vec<SimulationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, p) in processes.iter().enumerate() {
        if p.id.is_empty() {
            errors.push(SimulationError::EmptyProcessId { index });
        } else if !seen.insert(p.id.as_str()) {
            errors.push(SimulationError::DuplicateProcessId(p.id.clone()));
        }
        if let Some(reason) = invalid_reason(p) {
            errors.push(SimulationError::InvalidProcess {
                id: p.id.clone(),
                reason,
            });
        }
    }

    if errors.is_empty() && horizon(processes).is_none() {
        errors.push(SimulationError::HorizonOverflow);
    }

    errors
}

fn check_process<'a>(
    index: usize,
    p: &'a ProcessSpec,
    seen: &mut HashSet<&'a str>,
) -> Result<()> {
    if p.id.is_empty() {
        return Err(SimulationError::EmptyProcessId { index });
    }
    if !seen.insert(p.id.as_str()) {
        return Err(SimulationError::DuplicateProcessId(p.id.clone()));
    }
    match invalid_reason(p) {
        Some(reason) => Err(SimulationError::InvalidProcess {
            id: p.id.clone(),
            reason,
        }),
        None => Ok(()),
    }
}

fn invalid_reason(p: &ProcessSpec) -> Option<InvalidReason> {
    if p.arrival < 0 {
        Some(InvalidReason::NegativeArrival(p.arrival))
    } else if p.burst <= 0 {
        Some(InvalidReason::NonPositiveBurst(p.burst))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("P1", 0, 5).with_priority(2),
            ProcessSpec::new("P2", 2, 3).with_priority(1),
            ProcessSpec::new("P3", 4, 1).with_priority(3),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
        assert!(collect_violations(&sample_processes()).is_empty());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_negative_arrival() {
        let procs = vec![ProcessSpec::new("P1", -1, 5)];
        let err = validate_processes(&procs).unwrap_err();
        assert_eq!(
            err,
            SimulationError::InvalidProcess {
                id: "P1".into(),
                reason: InvalidReason::NegativeArrival(-1),
            }
        );
    }

    #[test]
    fn test_zero_burst() {
        let procs = vec![ProcessSpec::new("P1", 0, 5), ProcessSpec::new("P2", 0, 0)];
        let err = validate_processes(&procs).unwrap_err();
        assert_eq!(err.process_id(), Some("P2"));
        assert!(matches!(
            err,
            SimulationError::InvalidProcess {
                reason: InvalidReason::NonPositiveBurst(0),
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_id() {
        let procs = vec![ProcessSpec::new("P1", 0, 5), ProcessSpec::new("P1", 1, 2)];
        let err = validate_processes(&procs).unwrap_err();
        assert_eq!(err, SimulationError::DuplicateProcessId("P1".into()));
    }

    #[test]
    fn test_empty_id() {
        let procs = vec![ProcessSpec::new("P1", 0, 5), ProcessSpec::new("", 1, 2)];
        let err = validate_processes(&procs).unwrap_err();
        assert_eq!(err, SimulationError::EmptyProcessId { index: 1 });
    }

    #[test]
    fn test_first_violation_wins() {
        let procs = vec![ProcessSpec::new("P1", 0, -3), ProcessSpec::new("P2", -1, 2)];
        let err = validate_processes(&procs).unwrap_err();
        assert_eq!(err.process_id(), Some("P1"));
    }

    #[test]
    fn test_horizon_overflow_rejected() {
        // Late arrival: the first slice end alone exceeds i64::MAX.
        let procs = vec![ProcessSpec::new("P1", i64::MAX - 1, 5)];
        assert_eq!(validate_processes(&procs).unwrap_err(), SimulationError::HorizonOverflow);

        // Each burst fits, their sum does not.
        let procs = vec![ProcessSpec::new("P1", 0, i64::MAX), ProcessSpec::new("P2", 0, 1)];
        assert_eq!(validate_processes(&procs).unwrap_err(), SimulationError::HorizonOverflow);
        assert_eq!(collect_violations(&procs), vec![SimulationError::HorizonOverflow]);
    }

    #[test]
    fn test_horizon_at_limit_is_valid() {
        let procs = vec![ProcessSpec::new("P1", 0, i64::MAX - 1), ProcessSpec::new("P2", 0, 1)];
        assert_eq!(horizon(&procs), Some(i64::MAX));
        assert!(validate_processes(&procs).is_ok());
    }

    #[test]
    fn test_horizon() {
        assert_eq!(horizon(&[]), Some(0));
        let procs = vec![ProcessSpec::new("P1", 0, 5), ProcessSpec::new("P2", 4, 1)];
        assert_eq!(horizon(&procs), Some(10));
    }

    #[test]
    fn test_collect_multiple_errors() {
        let procs = vec![
            ProcessSpec::new("P1", -1, 5),
            ProcessSpec::new("P1", 0, 0),
            ProcessSpec::new("", 0, 1),
        ];
        let errors = collect_violations(&procs);
        // negative arrival, duplicate, zero burst, empty id
        assert_eq!(errors.len(), 4);
        assert!(errors
            .iter()
            .any(|e| matches!(e, SimulationError::DuplicateProcessId(id) if id == "P1")));
        assert!(errors
            .iter()
            .any(|e| matches!(e, SimulationError::EmptyProcessId { index: 2 })));
    }
}
