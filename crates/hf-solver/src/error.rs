//! Error types for solver operations.

use hf_components::ComponentError;
use hf_core::error::HfError;
use hf_fluids::FluidError;
use thiserror::Error;

/// Errors that stop a network evaluation.
///
/// Configuration problems (no pump, unresolved pump references) are not
/// errors: they are reported as alerts on a best-effort result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Problem setup error: {what}")]
    ProblemSetup { what: String },

    #[error("Component error: {0}")]
    Component(#[from] ComponentError),

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),

    #[error("Graph error: {0}")]
    Graph(#[from] hf_graph::GraphError),

    #[error("Core error: {0}")]
    Core(#[from] HfError),

    #[error("Numeric error: {what}")]
    Numeric { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for HfError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::ProblemSetup { what } => HfError::Invariant { what },
            SolverError::Component(err) => err.into(),
            SolverError::Fluid(err) => err.into(),
            SolverError::Graph(err) => err.into(),
            SolverError::Core(err) => err,
            SolverError::Numeric { what } => HfError::Invariant { what },
        }
    }
}

/// Fail with [`SolverError::Numeric`] unless `value` is finite.
pub(crate) fn finite(value: f64, what: impl FnOnce() -> String) -> SolverResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolverError::Numeric {
            what: format!("{} is not finite ({})", what(), value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_errors_convert() {
        let err: SolverError = hf_graph::GraphError::DuplicateNode { key: "j1".into() }.into();
        assert!(err.to_string().contains("j1"));
        let core: HfError = err.into();
        assert!(matches!(core, HfError::Invariant { .. }));
    }

    #[test]
    fn finite_guard() {
        assert_eq!(finite(1.5, || "x".into()), Ok(1.5));
        let err = finite(f64::NAN, || "pressure at j1".into()).unwrap_err();
        assert!(err.to_string().contains("pressure at j1"));
    }
}
