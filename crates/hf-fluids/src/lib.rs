//! hf-fluids: liquid property lookup for hydroflow.
//!
//! Provides:
//! - `Fluid`: density, kinematic viscosity and vapor pressure of one liquid
//! - A built-in catalog of common process liquids tabulated against temperature
//! - `FluidPropertyProvider`: the lookup seam the solver depends on
//!
//! # Example
//!
//! ```
//! use hf_fluids::{BuiltinFluids, FluidPropertyProvider};
//! use hf_core::units::celsius;
//!
//! let fluids = BuiltinFluids::new();
//! let water = fluids.fluid("water").unwrap();
//! assert!(water.density.value > 990.0);
//!
//! let hot = fluids.fluid_at("water", celsius(80.0)).unwrap();
//! assert!(hot.vapor_pressure.value > water.vapor_pressure.value);
//! ```

pub mod catalog;
pub mod error;
pub mod fluid;
pub mod provider;

pub use catalog::{FluidCatalogEntry, PropertyPoint, builtin_catalog, find_entry, search};
pub use error::{FluidError, FluidResult};
pub use fluid::Fluid;
pub use provider::{BuiltinFluids, FluidPropertyProvider, REFERENCE_TEMPERATURE_C, SingleFluid};
