//! Simulation errors.

use thiserror::Error;

/// Why a process record was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// `arrival < 0`.
    NegativeArrival(i64),
    /// `burst <= 0`.
    NonPositiveBurst(i64),
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::NegativeArrival(v) => write!(f, "arrival must be >= 0 (got {v})"),
            InvalidReason::NonPositiveBurst(v) => write!(f, "burst must be > 0 (got {v})"),
        }
    }
}

/// Errors raised before a simulation starts.
///
/// No simulation loop runs when one of these is returned, so there is
/// never a partial timeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Invalid process '{id}': {reason}")]
    InvalidProcess { id: String, reason: InvalidReason },

    #[error("Duplicate process ID: {0}")]
    DuplicateProcessId(String),

    #[error("Process at index {index} has an empty ID")]
    EmptyProcessId { index: usize },

    #[error("Simulation horizon exceeds i64::MAX (latest arrival plus total burst)")]
    HorizonOverflow,
}

impl SimulationError {
    /// ID of the offending process, if it has one.
    pub fn process_id(&self) -> Option<&str> {
        match self {
            SimulationError::InvalidProcess { id, .. } => Some(id),
            SimulationError::DuplicateProcessId(id) => Some(id),
            SimulationError::EmptyProcessId { .. } | SimulationError::HorizonOverflow => None,
        }
    }
}

/// Result alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;
