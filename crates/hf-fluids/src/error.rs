//! Fluid property errors.

use hf_core::HfError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while resolving fluid properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (non-positive density, negative vapor pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// The requested fluid is not known to the provider.
    #[error("Unknown fluid: {id}")]
    UnknownFluid { id: String },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<HfError> for FluidError {
    fn from(err: HfError) -> Self {
        match err {
            HfError::NonFinite { what, .. } => FluidError::NonPhysical { what },
            HfError::InvalidArg { what } => FluidError::InvalidArg { what },
            HfError::UnknownId { id, .. } => FluidError::UnknownFluid { id },
            HfError::Invariant { .. } => FluidError::InvalidArg {
                what: "fluid table invariant",
            },
        }
    }
}

impl From<FluidError> for HfError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::NonPhysical { what } => HfError::Invariant {
                what: format!("Non-physical fluid value: {}", what),
            },
            FluidError::UnknownFluid { id } => HfError::UnknownId { what: "fluid", id },
            FluidError::InvalidArg { what } => HfError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::NonPhysical { what: "density" };
        assert!(err.to_string().contains("density"));

        let err = FluidError::UnknownFluid {
            id: "mercury".into(),
        };
        assert!(err.to_string().contains("mercury"));
    }

    #[test]
    fn error_to_hf_error() {
        let hf: HfError = FluidError::UnknownFluid { id: "x".into() }.into();
        assert!(matches!(hf, HfError::UnknownId { what: "fluid", .. }));
    }
}
