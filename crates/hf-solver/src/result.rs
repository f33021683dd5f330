//! Result aggregation.
//!
//! All figures are plain SI `f64` so the result serializes without unit
//! wrappers; the CLI converts for display.

use crate::alerts::ValidationAlert;
use crate::problem::HydraulicProblem;
use crate::propagation::{PressureField, PressureSource};
use crate::pump_eval::PumpAssessment;
use hf_project::{Model, NodeDef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Explanation attached to every node of a fallback result.
pub const NOT_COMPUTED: &str = "not computed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipePerformance {
    pub head_loss_m: f64,
    pub velocity_m_s: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub regime: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSummary {
    pub id: String,
    pub label: String,
    pub kind: String,
    pub elevation_m: f64,
    pub reference_elevation_m: f64,
    pub absolute_pressure_pa: f64,
    pub gauge_pressure_pa: f64,
    pub specific_weight_n_m3: f64,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydraulicsResult {
    pub fluid_name: String,
    pub fluid_density_kg_m3: f64,
    pub specific_weight_n_m3: f64,
    pub vapor_pressure_pa: f64,
    pub ambient_pressure_pa: f64,

    pub pump_id: Option<String>,
    pub pump_head_m: f64,
    pub pump_elevation_m: f64,
    pub pump_flow_m3_s: f64,
    pub suction_head_m: f64,
    pub discharge_head_m: f64,
    pub suction_pressure_pa: f64,
    pub discharge_pressure_pa: f64,
    pub static_lift_m: f64,
    pub suction_loss_m: f64,
    pub discharge_loss_m: f64,
    pub total_dynamic_head_m: f64,
    pub energy_balance_m: f64,
    pub npsh_available_m: f64,
    pub npsh_required_m: f64,
    pub npsh_margin_m: f64,
    pub hydraulic_power_w: f64,
    /// Absent when the pump efficiency is unknown
    pub shaft_power_w: Option<f64>,

    pub pipes: BTreeMap<String, PipePerformance>,
    /// Sorted by elevation, highest first; ties keep model order
    pub nodes: Vec<NodeSummary>,
}

/// What `solve` hands back: a result (possibly the fallback) and its alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydraulicsOutcome {
    pub result: HydraulicsResult,
    pub alerts: Vec<ValidationAlert>,
}

impl HydraulicsOutcome {
    pub fn has_errors(&self) -> bool {
        self.alerts
            .iter()
            .any(|a| a.severity == crate::alerts::Severity::Error)
    }

    pub fn alert(&self, id: &str) -> Option<&ValidationAlert> {
        self.alerts.iter().find(|a| a.id == id)
    }
}

impl HydraulicsResult {
    /// Zero-initialized result listing every node as not computed.
    pub fn fallback(model: &Model) -> Self {
        let mut nodes: Vec<NodeSummary> = model
            .nodes
            .iter()
            .map(|node| NodeSummary {
                explanation: NOT_COMPUTED.to_string(),
                ..summary_shell(node)
            })
            .collect();
        sort_by_elevation(&mut nodes);

        Self {
            fluid_name: model.fluid_id.clone(),
            fluid_density_kg_m3: 0.0,
            specific_weight_n_m3: 0.0,
            vapor_pressure_pa: 0.0,
            ambient_pressure_pa: model.ambient_pressure_pa,
            pump_id: None,
            pump_head_m: 0.0,
            pump_elevation_m: 0.0,
            pump_flow_m3_s: 0.0,
            suction_head_m: 0.0,
            discharge_head_m: 0.0,
            suction_pressure_pa: 0.0,
            discharge_pressure_pa: 0.0,
            static_lift_m: 0.0,
            suction_loss_m: 0.0,
            discharge_loss_m: 0.0,
            total_dynamic_head_m: 0.0,
            energy_balance_m: 0.0,
            npsh_available_m: 0.0,
            npsh_required_m: 0.0,
            npsh_margin_m: 0.0,
            hydraulic_power_w: 0.0,
            shaft_power_w: None,
            pipes: BTreeMap::new(),
            nodes,
        }
    }

    pub fn node(&self, id: &str) -> Option<&NodeSummary> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Assemble the final result from the solved pieces.
pub fn aggregate(
    problem: &HydraulicProblem<'_>,
    pump: &PumpAssessment,
    field: &PressureField,
) -> HydraulicsResult {
    let model = problem.model;
    let gamma = problem.specific_weight;
    let ambient = problem.ambient.value;
    let mut result = HydraulicsResult::fallback(model);

    result.fluid_name = problem.fluid.name.clone();
    result.fluid_density_kg_m3 = problem.fluid.density.value;
    result.specific_weight_n_m3 = gamma;
    result.vapor_pressure_pa = problem.fluid.vapor_pressure.value;
    result.ambient_pressure_pa = ambient;

    match pump {
        PumpAssessment::Evaluated(p) => {
            let def = problem.node_def(p.node);
            let perf = &p.performance;
            result.pump_id = Some(def.id.clone());
            result.pump_head_m = p.added_head;
            result.pump_elevation_m = def.elevation_m();
            result.pump_flow_m3_s = p.flow_rate;
            result.suction_head_m = perf.suction_head.value;
            result.discharge_head_m = perf.discharge_head.value;
            result.suction_pressure_pa = perf.suction_pressure.value;
            result.discharge_pressure_pa = perf.discharge_pressure.value;
            result.static_lift_m = perf.static_lift.value;
            result.suction_loss_m = p.suction_loss;
            result.discharge_loss_m = p.discharge_loss;
            result.total_dynamic_head_m = perf.total_dynamic_head.value;
            result.energy_balance_m = perf.energy_balance.value;
            result.npsh_available_m = perf.npsh_available.value;
            result.npsh_required_m = p.required_npsh;
            result.npsh_margin_m = perf.npsh_margin.value;
            result.hydraulic_power_w = perf.hydraulic_power.value;
            result.shaft_power_w = perf.shaft_power.map(|w| w.value);
        }
        PumpAssessment::Unresolved { node, .. } => {
            result.pump_id = Some(problem.node_def(*node).id.clone());
        }
        PumpAssessment::Absent => {}
    }

    result.pipes = model
        .pipes
        .iter()
        .zip(&problem.pipe_hydraulics)
        .map(|(def, h)| {
            (
                def.id.clone(),
                PipePerformance {
                    head_loss_m: h.head_loss.value,
                    velocity_m_s: h.velocity.value,
                    reynolds: h.reynolds,
                    friction_factor: h.friction_factor,
                    regime: h.regime.as_str().to_string(),
                },
            )
        })
        .collect();

    let mut nodes: Vec<NodeSummary> = problem
        .graph
        .nodes()
        .iter()
        .filter_map(|node| {
            let np = field.get(node.id)?;
            let def = problem.node_def(node.id);
            Some(NodeSummary {
                absolute_pressure_pa: np.pressure,
                gauge_pressure_pa: np.pressure - ambient,
                specific_weight_n_m3: gamma,
                explanation: explain(problem, &np.source),
                ..summary_shell(def)
            })
        })
        .collect();
    sort_by_elevation(&mut nodes);
    result.nodes = nodes;

    result
}

fn summary_shell(node: &NodeDef) -> NodeSummary {
    NodeSummary {
        id: node.id.clone(),
        label: node.name.clone(),
        kind: node.kind.label().to_string(),
        elevation_m: node.elevation_m(),
        reference_elevation_m: node.reference_elevation_m(),
        absolute_pressure_pa: 0.0,
        gauge_pressure_pa: 0.0,
        specific_weight_n_m3: 0.0,
        explanation: String::new(),
    }
}

fn sort_by_elevation(nodes: &mut [NodeSummary]) {
    nodes.sort_by(|a, b| b.elevation_m.total_cmp(&a.elevation_m));
}

fn explain(problem: &HydraulicProblem<'_>, source: &PressureSource) -> String {
    let gamma = problem.specific_weight;
    match source {
        PressureSource::TankBase {
            surface_pressure,
            sealed,
            fluid_level,
        } => format!(
            "{} surface {:.0} Pa + γ·level ({:.1} N/m³ × {:.3} m)",
            if *sealed { "sealed gas" } else { "open" },
            surface_pressure,
            gamma,
            fluid_level
        ),
        PressureSource::PumpSuction {
            surface_pressure,
            surface_elevation,
            suction_loss,
        } => format!(
            "suction surface {:.0} Pa at {:.3} m, minus suction loss {:.4} m",
            surface_pressure, surface_elevation, suction_loss
        ),
        PressureSource::Propagated {
            from,
            pipe,
            upstream_pressure,
            elevation_drop,
            head_loss,
            pump_discharge,
        } => format!(
            "{} {:.0} Pa at '{}' via '{}': Δz {:+.3} m, head loss {:.4} m",
            if *pump_discharge {
                "pump discharge"
            } else {
                "upstream"
            },
            upstream_pressure,
            problem.node_def(*from).id,
            problem.pipe_def(*pipe).id,
            elevation_drop,
            head_loss
        ),
    }
}
