//! hf-core: stable foundation for hydroflow.
//!
//! Contains:
//! - units (uom SI types + constructors, gravitational constant)
//! - numeric (Real, finiteness check, clamped table interpolation)
//! - ids (compact IDs for graph objects)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

pub use error::{HfError, HfResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
