//! Common utilities for component calculations.

use crate::error::{ComponentError, ComponentResult};
use hf_core::numeric::ensure_finite;

pub use hf_core::constants::G0_MPS2 as GRAVITY;

/// Reynolds number below which pipe flow is treated as laminar.
pub const LAMINAR_REYNOLDS_LIMIT: f64 = 2300.0;

/// Ensure a value is finite, returning ComponentError if not.
pub fn check_finite(value: f64, what: &'static str) -> ComponentResult<f64> {
    ensure_finite(value, what).map_err(|_| ComponentError::NonPhysical { what })
}

/// Velocity head v²/2g [m].
pub fn velocity_head(velocity: f64) -> f64 {
    velocity * velocity / (2.0 * GRAVITY)
}
