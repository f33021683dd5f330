//! Steady-state hydraulic network solver.
//!
//! Pipe losses are evaluated once from their fixed flow rates, pressures are
//! propagated breadth-first from tanks and the pump, and the pump is checked
//! against the network it serves. The result is deterministic: identical
//! inputs give bit-identical output.

pub mod alerts;
pub mod error;
pub mod problem;
pub mod propagation;
pub mod pump_eval;
pub mod result;
pub mod solve;
pub mod telemetry;

pub use alerts::{Severity, ValidationAlert};
pub use error::{SolverError, SolverResult};
pub use problem::HydraulicProblem;
pub use result::{HydraulicsOutcome, HydraulicsResult, NodeSummary, PipePerformance};
pub use solve::{solve, try_solve};
pub use telemetry::{TelemetryReading, TelemetrySample, evaluate_pipe};
