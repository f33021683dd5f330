//! Pump component model.

use crate::common::check_finite;
use crate::error::{ComponentError, ComponentResult};
use hf_core::units::{Length, Power, Pressure, VolumeRate, m, pa, watts};

/// Pressure and elevation of the free surface a pump draws from or delivers to.
///
/// For a tank this is its liquid surface; for any other node it is the node
/// itself at ambient pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceReference {
    pub pressure: Pressure,
    pub elevation: Length,
}

/// Centrifugal pump adding a fixed head at its operating point.
///
/// ## Model
///
/// The pump is the single head-adding discontinuity of the network. Its
/// suction pressure follows from the suction surface and the losses of the
/// pipes feeding it:
///
/// ```text
/// p_s = p_surf,s + γ·(z_surf,s − z_pump) − γ·h_loss,s
/// p_d = p_s + γ·H − γ·(h_loss,s + h_loss,d)
/// ```
///
/// Each formula is evaluated exactly in the order written.
#[derive(Clone, Debug)]
pub struct Pump {
    pub name: String,
    /// Centerline elevation
    pub centerline: Length,
    /// Head added at the operating point
    pub added_head: Length,
    /// NPSH required by the manufacturer
    pub required_npsh: Length,
    /// Hydraulic efficiency (0 < eta <= 1); 0 means unknown
    pub efficiency: f64,
}

/// Everything the pump needs to know about the network around it.
#[derive(Debug, Clone, Copy)]
pub struct PumpInputs {
    pub suction: SurfaceReference,
    pub discharge: SurfaceReference,
    /// Sum of head losses over pipes terminating at the pump
    pub suction_loss: Length,
    /// Sum of head losses over pipes leaving the pump
    pub discharge_loss: Length,
    /// Specific weight γ = ρ·g [N/m³]
    pub specific_weight: f64,
    pub vapor_pressure: Pressure,
    /// Flow delivered through the pump
    pub flow_rate: VolumeRate,
}

/// Pump operating diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PumpPerformance {
    pub suction_pressure: Pressure,
    pub discharge_pressure: Pressure,
    pub suction_head: Length,
    pub discharge_head: Length,
    pub static_lift: Length,
    pub total_dynamic_head: Length,
    /// Added head minus TDH; negative means the pump cannot overcome the network
    pub energy_balance: Length,
    pub npsh_available: Length,
    /// NPSHa − NPSHr
    pub npsh_margin: Length,
    pub hydraulic_power: Power,
    /// None when efficiency is unknown
    pub shaft_power: Option<Power>,
}

impl Pump {
    /// Create a new pump.
    ///
    /// # Errors
    /// Returns error if efficiency is outside [0, 1] or a head is negative.
    pub fn new(
        name: impl Into<String>,
        centerline: Length,
        added_head: Length,
        required_npsh: Length,
        efficiency: f64,
    ) -> ComponentResult<Self> {
        if !(0.0..=1.0).contains(&efficiency) {
            return Err(ComponentError::InvalidArg {
                what: "pump efficiency must be in [0,1]",
            });
        }
        if added_head.value < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "added head must be non-negative",
            });
        }
        if required_npsh.value < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "required NPSH must be non-negative",
            });
        }

        Ok(Self {
            name: name.into(),
            centerline,
            added_head,
            required_npsh,
            efficiency,
        })
    }

    /// Absolute pressure at the pump inlet.
    pub fn suction_pressure(
        &self,
        suction: SurfaceReference,
        specific_weight: f64,
        suction_loss: Length,
    ) -> Pressure {
        let gamma = specific_weight;
        pa(suction.pressure.value
            + gamma * (suction.elevation.value - self.centerline.value)
            - gamma * suction_loss.value)
    }

    /// Absolute pressure on the discharge side, seeded from the suction pressure.
    pub fn discharge_pressure(
        &self,
        suction_pressure: Pressure,
        specific_weight: f64,
        suction_loss: Length,
        discharge_loss: Length,
    ) -> Pressure {
        let gamma = specific_weight;
        pa(suction_pressure.value + gamma * self.added_head.value
            - gamma * (suction_loss.value + discharge_loss.value))
    }

    /// Evaluate the pump against the surrounding network.
    pub fn evaluate(&self, inputs: &PumpInputs) -> ComponentResult<PumpPerformance> {
        let gamma = check_finite(inputs.specific_weight, "specific weight")?;
        if gamma <= 0.0 {
            return Err(ComponentError::NonPhysical {
                what: "specific weight",
            });
        }

        let pump_z = self.centerline.value;
        let suction_z = inputs.suction.elevation.value;
        let discharge_z = inputs.discharge.elevation.value;
        let h_s = inputs.suction_loss.value;
        let h_d = inputs.discharge_loss.value;

        let p_s = self.suction_pressure(inputs.suction, gamma, inputs.suction_loss);
        let p_d = self.discharge_pressure(p_s, gamma, inputs.suction_loss, inputs.discharge_loss);
        check_finite(p_s.value, "suction pressure")?;
        check_finite(p_d.value, "discharge pressure")?;

        let static_lift = discharge_z - suction_z;
        let tdh = static_lift + h_s + h_d;
        let energy_balance = self.added_head.value - tdh;
        let npsha = check_finite(
            (p_s.value - inputs.vapor_pressure.value) / gamma,
            "NPSH available",
        )?;
        let suction_head = suction_z - pump_z - h_s;
        let discharge_head = discharge_z - pump_z + h_d;

        let hydraulic_power = gamma * inputs.flow_rate.value * self.added_head.value;
        let shaft_power = if self.efficiency > 0.0 {
            Some(watts(hydraulic_power / self.efficiency))
        } else {
            None
        };

        Ok(PumpPerformance {
            suction_pressure: p_s,
            discharge_pressure: p_d,
            suction_head: m(suction_head),
            discharge_head: m(discharge_head),
            static_lift: m(static_lift),
            total_dynamic_head: m(tdh),
            energy_balance: m(energy_balance),
            npsh_available: m(npsha),
            npsh_margin: m(npsha - self.required_npsh.value),
            hydraulic_power: watts(hydraulic_power),
            shaft_power,
        })
    }
}
