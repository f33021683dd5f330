//! Pipe friction using the Darcy-Weisbach correlation.

use crate::common::{LAMINAR_REYNOLDS_LIMIT, check_finite, velocity_head};
use crate::error::ComponentResult;
use hf_core::units::{KinVisc, Length, Velocity, VolumeRate, m, mps};
use std::f64::consts::PI;

/// Flow regime reported alongside a pipe's hydraulics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// No flow, no geometry, or an unusable Reynolds number.
    NoFlow,
    Laminar,
    Turbulent,
}

impl FlowRegime {
    pub fn as_str(self) -> &'static str {
        match self {
            FlowRegime::NoFlow => "no-flow",
            FlowRegime::Laminar => "laminar",
            FlowRegime::Turbulent => "turbulent",
        }
    }
}

/// Velocity, Reynolds number and head loss of one pipe at its flow rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeHydraulics {
    pub velocity: Velocity,
    pub reynolds: f64,
    /// Darcy friction factor (0 when there is no flow)
    pub friction_factor: f64,
    /// Major + minor loss expressed as fluid column
    pub head_loss: Length,
    pub regime: FlowRegime,
}

impl PipeHydraulics {
    fn no_flow(velocity: f64) -> Self {
        Self {
            velocity: mps(velocity),
            reynolds: 0.0,
            friction_factor: 0.0,
            head_loss: m(0.0),
            regime: FlowRegime::NoFlow,
        }
    }
}

/// Darcy friction factor.
///
/// Laminar flow uses the Hagen-Poiseuille result `64/Re`; otherwise the
/// Swamee-Jain explicit approximation of Colebrook-White.
pub fn friction_factor(reynolds: f64, relative_roughness: f64) -> f64 {
    if reynolds < LAMINAR_REYNOLDS_LIMIT {
        64.0 / reynolds
    } else {
        let a = relative_roughness / 3.7;
        let b = 5.74 / reynolds.powf(0.9);
        0.25 / (a + b).log10().powi(2)
    }
}

/// A straight pipe run with a fixed volumetric flow.
#[derive(Debug, Clone)]
pub struct Pipe {
    name: String,
    /// Pipe length
    pub length: Length,
    /// Pipe inner diameter
    pub diameter: Length,
    /// Surface roughness (absolute)
    pub roughness: Length,
    /// Minor loss coefficient (sum of K factors for fittings, bends, etc.)
    pub k_minor: f64,
    /// Volumetric flow rate through the pipe
    pub flow_rate: VolumeRate,
}

impl Pipe {
    pub fn new(
        name: impl Into<String>,
        length: Length,
        diameter: Length,
        roughness: Length,
        k_minor: f64,
        flow_rate: VolumeRate,
    ) -> Self {
        Self {
            name: name.into(),
            length,
            diameter,
            roughness,
            k_minor,
            flow_rate,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate velocity, Reynolds number and head loss for fluid viscosity `nu`.
    ///
    /// A pipe without flow or without a diameter is not an error: it reports
    /// zero loss. A non-positive or non-finite Reynolds number (e.g. zero
    /// viscosity) keeps the computed velocity but reports zero loss.
    pub fn hydraulics(&self, nu: KinVisc) -> ComponentResult<PipeHydraulics> {
        let q = check_finite(self.flow_rate.value, "flow rate")?;
        let d = check_finite(self.diameter.value, "pipe diameter")?;
        let l = check_finite(self.length.value, "pipe length")?;
        let eps = check_finite(self.roughness.value, "pipe roughness")?;
        let k = check_finite(self.k_minor, "minor loss coefficient")?;

        if q <= 0.0 || d <= 0.0 {
            return Ok(PipeHydraulics::no_flow(0.0));
        }

        let area = PI * (d * d) / 4.0;
        let velocity = check_finite(q / area, "velocity")?;

        let reynolds = velocity * d / nu.value;
        if !reynolds.is_finite() || reynolds <= 0.0 {
            return Ok(PipeHydraulics::no_flow(velocity));
        }

        let f = check_finite(friction_factor(reynolds, eps / d), "friction factor")?;
        let hv = velocity_head(velocity);
        let head_loss = check_finite(f * (l / d) * hv + k * hv, "head loss")?;

        let regime = if reynolds < LAMINAR_REYNOLDS_LIMIT {
            FlowRegime::Laminar
        } else {
            FlowRegime::Turbulent
        };

        Ok(PipeHydraulics {
            velocity: mps(velocity),
            reynolds,
            friction_factor: f,
            head_loss: m(head_loss),
            regime,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_core::units::{m2ps, m3ps};

    fn pipe(d: f64, l: f64, q: f64) -> Pipe {
        Pipe::new("test", m(l), m(d), m(0.000045), 0.0, m3ps(q))
    }

    #[test]
    fn zero_flow_is_silent_zero() {
        let h = pipe(0.1, 10.0, 0.0).hydraulics(m2ps(1.0e-6)).unwrap();
        assert_eq!(h.head_loss.value, 0.0);
        assert_eq!(h.velocity.value, 0.0);
        assert_eq!(h.reynolds, 0.0);
        assert_eq!(h.regime, FlowRegime::NoFlow);
    }

    #[test]
    fn negative_flow_is_silent_zero() {
        let h = pipe(0.1, 10.0, -0.01).hydraulics(m2ps(1.0e-6)).unwrap();
        assert_eq!(h.head_loss.value, 0.0);
        assert_eq!(h.velocity.value, 0.0);
        assert_eq!(h.reynolds, 0.0);
        assert_eq!(h.regime, FlowRegime::NoFlow);
    }

    #[test]
    fn re_2300_is_already_turbulent() {
        let rr = 4.5e-5 / 0.1;
        let swamee_jain = 0.25 / (rr / 3.7 + 5.74 / 2300.0_f64.powf(0.9)).log10().powi(2);
        assert_eq!(friction_factor(2300.0, rr), swamee_jain);
        assert_ne!(friction_factor(2300.0, rr), 64.0 / 2300.0);
        assert_eq!(friction_factor(2299.0, rr), 64.0 / 2299.0);
    }

    #[test]
    fn zero_diameter_is_silent_zero() {
        let h = pipe(0.0, 10.0, 0.01).hydraulics(m2ps(1.0e-6)).unwrap();
        assert_eq!(h.head_loss.value, 0.0);
        assert_eq!(h.velocity.value, 0.0);
        assert_eq!(h.reynolds, 0.0);
    }

    #[test]
    fn zero_viscosity_keeps_velocity_but_no_loss() {
        let h = pipe(0.1, 10.0, 0.01).hydraulics(m2ps(0.0)).unwrap();
        assert!(h.velocity.value > 0.0);
        assert_eq!(h.reynolds, 0.0);
        assert_eq!(h.head_loss.value, 0.0);
    }

    #[test]
    fn laminar_uses_64_over_re() {
        // Very viscous fluid keeps Re well below 2300
        let h = pipe(0.05, 10.0, 0.0005).hydraulics(m2ps(1.0e-3)).unwrap();
        assert_eq!(h.regime, FlowRegime::Laminar);
        assert_eq!(h.friction_factor, 64.0 / h.reynolds);
    }

    #[test]
    fn turbulent_water_in_discharge_line() {
        let h = pipe(0.08, 35.0, 0.01).hydraulics(m2ps(1.0e-6)).unwrap();
        assert_eq!(h.regime, FlowRegime::Turbulent);
        // v = 0.01 / (π·0.0016) ≈ 1.989 m/s, Re ≈ 159 000
        assert!((h.velocity.value - 1.989).abs() < 1e-3);
        assert!((h.reynolds - 159_155.0).abs() < 1.0);
        assert!(h.friction_factor > 0.015 && h.friction_factor < 0.025);
        assert!(h.head_loss.value > 1.0 && h.head_loss.value < 2.0);
    }

    #[test]
    fn minor_losses_add_k_velocity_heads() {
        let plain = pipe(0.1, 4.0, 0.01);
        let mut fitted = plain.clone();
        fitted.k_minor = 2.5;

        let nu = m2ps(1.0e-6);
        let h0 = plain.hydraulics(nu).unwrap();
        let h1 = fitted.hydraulics(nu).unwrap();
        let expected = 2.5 * velocity_head(h0.velocity.value);
        assert!((h1.head_loss.value - h0.head_loss.value - expected).abs() < 1e-12);
    }

    #[test]
    fn non_finite_input_is_an_error() {
        assert!(pipe(0.1, f64::NAN, 0.01).hydraulics(m2ps(1.0e-6)).is_err());
    }
}
