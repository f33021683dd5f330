//! Tank as a pressure boundary.

use crate::pump::SurfaceReference;
use hf_core::units::{Length, Pressure, pa};

/// A storage tank whose free surface fixes the pressure of the network.
///
/// An open tank's surface sits at ambient pressure; a sealed tank's surface
/// sits at its gas blanket pressure. The connection at the tank base sees the
/// surface pressure plus the hydrostatic column of the stored liquid.
#[derive(Debug, Clone)]
pub struct Tank {
    pub name: String,
    /// Elevation of the tank base (the pipe connection)
    pub base_elevation: Length,
    /// Liquid level above the base
    pub fluid_level: Length,
    pub sealed: bool,
    /// Gas blanket pressure [Pa abs], only used when sealed
    pub gas_pressure: Pressure,
}

impl Tank {
    /// Absolute pressure at the free surface.
    pub fn surface_pressure(&self, ambient: Pressure) -> Pressure {
        if self.sealed {
            self.gas_pressure
        } else {
            ambient
        }
    }

    /// Absolute pressure at the tank base: surface + γ·level.
    pub fn base_pressure(&self, ambient: Pressure, specific_weight: f64) -> Pressure {
        pa(self.surface_pressure(ambient).value + specific_weight * self.fluid_level.value)
    }

    /// Elevation of the free surface: base + level.
    pub fn surface_elevation(&self) -> Length {
        self.base_elevation + self.fluid_level
    }

    /// Surface pressure and elevation, as seen by a pump connected to this tank.
    pub fn surface_reference(&self, ambient: Pressure) -> SurfaceReference {
        SurfaceReference {
            pressure: self.surface_pressure(ambient),
            elevation: self.surface_elevation(),
        }
    }
}
