//! CLI error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Project error: {0}")]
    Project(#[from] hf_project::ProjectError),

    #[error("Solver error: {0}")]
    Solver(#[from] hf_solver::SolverError),

    #[error("Fluid error: {0}")]
    Fluid(#[from] hf_fluids::FluidError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pipe '{id}' not found in model")]
    UnknownPipe { id: String },
}

pub type CliResult<T> = Result<T, CliError>;
