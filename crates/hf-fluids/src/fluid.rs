//! Resolved properties of a single liquid.

use crate::error::{FluidError, FluidResult};
use hf_core::constants::G0_MPS2;
use hf_core::units::{Density, KinVisc, Pressure, kgpm3, m2ps, pa};

/// Properties of one liquid at one temperature, in SI.
#[derive(Debug, Clone, PartialEq)]
pub struct Fluid {
    pub name: String,
    /// Density [kg/m³]
    pub density: Density,
    /// Kinematic viscosity [m²/s]
    pub kinematic_viscosity: KinVisc,
    /// Saturation (vapor) pressure [Pa abs]
    pub vapor_pressure: Pressure,
}

impl Fluid {
    /// Build a fluid from raw SI values, rejecting non-physical inputs.
    pub fn new(
        name: impl Into<String>,
        density_kg_m3: f64,
        kinematic_viscosity_m2_s: f64,
        vapor_pressure_pa: f64,
    ) -> FluidResult<Self> {
        if !density_kg_m3.is_finite() || density_kg_m3 <= 0.0 {
            return Err(FluidError::NonPhysical { what: "density" });
        }
        if !kinematic_viscosity_m2_s.is_finite() || kinematic_viscosity_m2_s <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "kinematic viscosity",
            });
        }
        if !vapor_pressure_pa.is_finite() || vapor_pressure_pa < 0.0 {
            return Err(FluidError::NonPhysical {
                what: "vapor pressure",
            });
        }

        Ok(Self {
            name: name.into(),
            density: kgpm3(density_kg_m3),
            kinematic_viscosity: m2ps(kinematic_viscosity_m2_s),
            vapor_pressure: pa(vapor_pressure_pa),
        })
    }

    /// Specific weight γ = ρ·g [N/m³].
    pub fn specific_weight(&self) -> f64 {
        self.density.value * G0_MPS2
    }
}
