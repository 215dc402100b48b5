//! Rule chain for multi-criteria selection.
//!
//! Rules are applied sequentially: the next rule is consulted only when
//! all previous rules tie. When every rule ties, scan order decides.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{RuleScore, SelectionRule};
use crate::models::ProcessSpec;

/// An ordered chain of selection rules.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleChain};
///
/// let sjf = RuleChain::new()
///     .with_rule(rules::ShortestBurst)
///     .with_tie_breaker(rules::EarliestArrival);
/// assert_eq!(sjf.rule_names(), vec!["SPT", "FIFO"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleChain {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleChain {
    /// Creates an empty chain. An empty chain ties everything.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted after all earlier rules tie.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &ProcessSpec) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(process)).collect()
    }

    /// Compares two processes rule by rule.
    pub fn compare(&self, a: &ProcessSpec, b: &ProcessSpec) -> Ordering {
        for rule in &self.rules {
            match rule.evaluate(a).cmp(&rule.evaluate(b)) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        Ordering::Equal
    }

    /// Returns the index of the best candidate.
    ///
    /// Candidates are `(index, process)` pairs in scan order. A later
    /// candidate replaces the current best only if it is strictly better,
    /// so full ties resolve to the first candidate scanned.
    pub fn select_best<'a, I>(&self, candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = (usize, &'a ProcessSpec)>,
    {
        let mut best: Option<(usize, &ProcessSpec)> = None;
        for (idx, p) in candidates {
            match best {
                Some((_, current)) if self.compare(p, current) != Ordering::Less => {}
                _ => best = Some((idx, p)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Returns process indices sorted by the chain (stable).
    pub fn sort_indices(&self, processes: &[ProcessSpec]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }
}

impl std::fmt::Debug for RuleChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleChain")
            .field("rules", &self.rule_names())
            .finish()
    }
}
