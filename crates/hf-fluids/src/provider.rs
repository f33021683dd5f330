//! Fluid property provider trait and implementations.

use crate::catalog::find_entry;
use crate::error::{FluidError, FluidResult};
use crate::fluid::Fluid;
use hf_core::units::Temperature;
use uom::si::thermodynamic_temperature::degree_celsius;

/// Temperature used when a caller asks for a fluid without one.
pub const REFERENCE_TEMPERATURE_C: f64 = 20.0;

/// Source of fluid properties for the solver.
///
/// Implementations must be thread-safe (Send + Sync) so independent solves can
/// share one provider.
pub trait FluidPropertyProvider: Send + Sync {
    /// Properties at the provider's reference temperature.
    fn fluid(&self, id: &str) -> FluidResult<Fluid>;

    /// Properties at an explicit temperature.
    fn fluid_at(&self, id: &str, temperature: Temperature) -> FluidResult<Fluid>;
}

/// Provider backed by the built-in catalog.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinFluids {
    reference_temperature_c: f64,
}

impl Default for BuiltinFluids {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinFluids {
    pub fn new() -> Self {
        Self {
            reference_temperature_c: REFERENCE_TEMPERATURE_C,
        }
    }

    /// Use a different reference temperature for `fluid()`.
    pub fn with_reference_temperature_c(mut self, temperature_c: f64) -> Self {
        self.reference_temperature_c = temperature_c;
        self
    }

    fn resolve(&self, id: &str, temperature_c: f64) -> FluidResult<Fluid> {
        let entry = find_entry(id).ok_or_else(|| FluidError::UnknownFluid { id: id.into() })?;
        entry.properties_at(temperature_c)
    }
}

impl FluidPropertyProvider for BuiltinFluids {
    fn fluid(&self, id: &str) -> FluidResult<Fluid> {
        self.resolve(id, self.reference_temperature_c)
    }

    fn fluid_at(&self, id: &str, temperature: Temperature) -> FluidResult<Fluid> {
        let t_c = temperature.get::<degree_celsius>();
        if !t_c.is_finite() {
            return Err(FluidError::InvalidArg {
                what: "temperature must be finite",
            });
        }
        self.resolve(id, t_c)
    }
}

/// Provider that answers every query with one user-defined fluid.
///
/// Useful for custom liquids that are not in the catalog; temperature is ignored.
#[derive(Debug, Clone)]
pub struct SingleFluid {
    fluid: Fluid,
}

impl SingleFluid {
    pub fn new(fluid: Fluid) -> Self {
        Self { fluid }
    }
}

impl FluidPropertyProvider for SingleFluid {
    fn fluid(&self, _id: &str) -> FluidResult<Fluid> {
        Ok(self.fluid.clone())
    }

    fn fluid_at(&self, _id: &str, _temperature: Temperature) -> FluidResult<Fluid> {
        Ok(self.fluid.clone())
    }
}
