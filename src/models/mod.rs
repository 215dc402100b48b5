//! CPU scheduling domain models.
//!
//! Input records, per-run outcomes, and the timeline produced by a
//! simulation. Colors and labels are not part of these types; collaborators
//! attach them using the process ID as join key.
//!
//! # Model Lifecycle
//!
//! | Type | Owner | Mutability |
//! |------|-------|------------|
//! | `ProcessSpec` | Caller | Read-only during a run |
//! | `ProcessOutcome` | One simulation run | Mutated until returned |
//! | `TimelineEntry` | `SimulationResult` | Immutable once emitted |
//! | `SimulationResult` | Caller (after return) | Caller's choice |

mod process;
mod timeline;

pub use process::{ProcessOutcome, ProcessSpec};
pub use timeline::{SimulationResult, TimelineEntry};
