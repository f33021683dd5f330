//! Single-pipe evaluation from measured flow and temperature.

use crate::error::SolverResult;
use crate::problem::pipe_component;
use crate::result::PipePerformance;
use hf_core::units::celsius;
use hf_fluids::FluidPropertyProvider;
use hf_project::PipeDef;
use serde::{Deserialize, Serialize};

/// One measurement from a flow meter on a pipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    pub flow_rate_m3_s: f64,
    pub temperature_c: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryReading {
    pub pipe_id: String,
    pub fluid_name: String,
    pub density_kg_m3: f64,
    pub kinematic_viscosity_m2_s: f64,
    pub hydraulics: PipePerformance,
    /// γ·head loss [Pa]
    pub pressure_drop_pa: f64,
}

/// Evaluate `pipe` at the sampled flow, with fluid properties taken at the
/// sampled temperature. The pipe's own design flow is ignored.
pub fn evaluate_pipe(
    pipe: &PipeDef,
    fluid_id: &str,
    sample: TelemetrySample,
    provider: &dyn FluidPropertyProvider,
) -> SolverResult<TelemetryReading> {
    let fluid = provider.fluid_at(fluid_id, celsius(sample.temperature_c))?;

    let measured = PipeDef {
        flow_rate_m3_s: sample.flow_rate_m3_s,
        ..pipe.clone()
    };
    let h = pipe_component(&measured).hydraulics(fluid.kinematic_viscosity)?;
    let pressure_drop_pa = fluid.specific_weight() * h.head_loss.value;

    Ok(TelemetryReading {
        pipe_id: pipe.id.clone(),
        fluid_name: fluid.name.clone(),
        density_kg_m3: fluid.density.value,
        kinematic_viscosity_m2_s: fluid.kinematic_viscosity.value,
        hydraulics: PipePerformance {
            head_loss_m: h.head_loss.value,
            velocity_m_s: h.velocity.value,
            reynolds: h.reynolds,
            friction_factor: h.friction_factor,
            regime: h.regime.as_str().to_string(),
        },
        pressure_drop_pa,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use hf_fluids::BuiltinFluids;

    fn line() -> PipeDef {
        PipeDef::new("line", "a", "b", 0.05, 30.0)
            .with_roughness(1.5e-6)
            .with_flow(0.0)
    }

    #[test]
    fn measured_flow_overrides_design_flow() {
        let sample = TelemetrySample {
            flow_rate_m3_s: 0.003,
            temperature_c: 20.0,
        };
        let reading = evaluate_pipe(&line(), "water", sample, &BuiltinFluids::new()).unwrap();
        assert!(reading.hydraulics.head_loss_m > 0.0);
        assert_eq!(
            reading.pressure_drop_pa,
            998.21 * 9.806_65 * reading.hydraulics.head_loss_m
        );
    }

    #[test]
    fn warm_water_loses_less_head() {
        let provider = BuiltinFluids::new();
        let at = |t| {
            evaluate_pipe(
                &line(),
                "water",
                TelemetrySample {
                    flow_rate_m3_s: 0.003,
                    temperature_c: t,
                },
                &provider,
            )
            .unwrap()
        };
        let cold = at(10.0);
        let hot = at(80.0);
        assert!(hot.hydraulics.reynolds > cold.hydraulics.reynolds);
        assert!(hot.hydraulics.head_loss_m < cold.hydraulics.head_loss_m);
    }

    #[test]
    fn zero_flow_reads_zero_drop() {
        let sample = TelemetrySample {
            flow_rate_m3_s: 0.0,
            temperature_c: 20.0,
        };
        let reading = evaluate_pipe(&line(), "water", sample, &BuiltinFluids::new()).unwrap();
        assert_eq!(reading.pressure_drop_pa, 0.0);
        assert_eq!(reading.hydraulics.regime, "no-flow");
    }

    #[test]
    fn unknown_fluid_is_an_error_here() {
        let sample = TelemetrySample {
            flow_rate_m3_s: 0.001,
            temperature_c: 20.0,
        };
        let err = evaluate_pipe(&line(), "mercury", sample, &BuiltinFluids::new()).unwrap_err();
        assert!(matches!(err, SolverError::Fluid(_)));
    }
}
