//! Component errors.

use hf_core::error::HfError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    /// A computed or supplied quantity is NaN or infinite.
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    /// A constructor argument is outside its allowed range.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<ComponentError> for HfError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::NonPhysical { what } => HfError::NonFinite {
                what,
                value: f64::NAN,
            },
            ComponentError::InvalidArg { what } => HfError::InvalidArg { what },
        }
    }
}
