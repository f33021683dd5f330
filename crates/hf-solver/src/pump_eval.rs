//! Pump selection and performance evaluation.

use crate::alerts::{PumpFigures, PumpStatus};
use crate::error::SolverResult;
use crate::problem::HydraulicProblem;
use hf_components::{Pump, PumpInputs, PumpPerformance};
use hf_core::NodeId;
use hf_core::units::{Pressure, m, m3ps};
use hf_project::{NodeKind, PumpDef};

/// The pump chosen for evaluation together with its computed operating point.
#[derive(Debug, Clone)]
pub struct EvaluatedPump {
    pub node: NodeId,
    pub suction_node: NodeId,
    pub discharge_node: NodeId,
    /// Σ head loss of pipes ending at the pump [m]
    pub suction_loss: f64,
    /// Σ head loss of pipes leaving the pump [m]
    pub discharge_loss: f64,
    /// Σ flow of pipes ending at the pump [m³/s]
    pub flow_rate: f64,
    pub added_head: f64,
    pub required_npsh: f64,
    /// Model efficiency outside [0, 1]; the pump is evaluated as if unknown.
    pub ignored_efficiency: Option<f64>,
    pub performance: PumpPerformance,
}

impl EvaluatedPump {
    pub fn suction_pressure(&self) -> Pressure {
        self.performance.suction_pressure
    }

    pub fn discharge_pressure(&self) -> Pressure {
        self.performance.discharge_pressure
    }
}

#[derive(Debug, Clone)]
pub enum PumpAssessment {
    Absent,
    Unresolved { node: NodeId, missing: Vec<String> },
    Evaluated(Box<EvaluatedPump>),
}

impl PumpAssessment {
    pub fn evaluated(&self) -> Option<&EvaluatedPump> {
        match self {
            PumpAssessment::Evaluated(pump) => Some(pump),
            PumpAssessment::Absent | PumpAssessment::Unresolved { .. } => None,
        }
    }

    pub fn status(&self, problem: &HydraulicProblem<'_>) -> PumpStatus {
        match self {
            PumpAssessment::Absent => PumpStatus::Absent,
            PumpAssessment::Unresolved { node, missing } => PumpStatus::Unresolved {
                pump: problem.node_def(*node).id.clone(),
                missing: missing.clone(),
            },
            PumpAssessment::Evaluated(pump) => PumpStatus::Evaluated(PumpFigures {
                suction_pressure_pa: pump.performance.suction_pressure.value,
                vapor_pressure_pa: problem.fluid.vapor_pressure.value,
                npsh_available_m: pump.performance.npsh_available.value,
                npsh_required_m: pump.required_npsh,
                suction_head_m: pump.performance.suction_head.value,
                energy_balance_m: pump.performance.energy_balance.value,
                total_dynamic_head_m: pump.performance.total_dynamic_head.value,
            }),
        }
    }
}

/// Pumps in node order; the first one is the one evaluated.
pub fn pump_nodes(problem: &HydraulicProblem<'_>) -> Vec<NodeId> {
    problem
        .graph
        .nodes()
        .iter()
        .filter(|n| matches!(problem.node_def(n.id).kind, NodeKind::Pump(_)))
        .map(|n| n.id)
        .collect()
}

/// Locate the first pump, resolve its suction/discharge nodes and evaluate it.
pub fn assess_pump(problem: &HydraulicProblem<'_>) -> SolverResult<PumpAssessment> {
    let Some(&node) = pump_nodes(problem).first() else {
        return Ok(PumpAssessment::Absent);
    };
    let def = match &problem.node_def(node).kind {
        NodeKind::Pump(def) => def,
        _ => return Ok(PumpAssessment::Absent),
    };

    let suction = resolve_ref(problem, def.suction_node_id.as_deref());
    let discharge = resolve_ref(problem, def.discharge_node_id.as_deref());
    let (suction_node, discharge_node) = match (suction, discharge) {
        (Ok(s), Ok(d)) => (s, d),
        (s, d) => {
            let mut missing = Vec::new();
            if let Err(reason) = s {
                missing.push(format!("suction {}", reason));
            }
            if let Err(reason) = d {
                missing.push(format!("discharge {}", reason));
            }
            return Ok(PumpAssessment::Unresolved { node, missing });
        }
    };

    let mut suction_loss = 0.0;
    let mut flow_rate = 0.0;
    for inc in problem.graph.incoming(node) {
        suction_loss += problem.head_loss(inc.pipe);
        flow_rate += problem.pipe_def(inc.pipe).flow_rate_m3_s;
    }
    let mut discharge_loss = 0.0;
    for inc in problem.graph.outgoing(node) {
        discharge_loss += problem.head_loss(inc.pipe);
    }

    let ignored_efficiency = (!(0.0..=1.0).contains(&def.efficiency)).then_some(def.efficiency);
    let pump = component(&problem.node_def(node).name, def, ignored_efficiency.is_none())?;
    let performance = pump.evaluate(&PumpInputs {
        suction: problem.surface_reference(suction_node),
        discharge: problem.surface_reference(discharge_node),
        suction_loss: m(suction_loss),
        discharge_loss: m(discharge_loss),
        specific_weight: problem.specific_weight,
        vapor_pressure: problem.fluid.vapor_pressure,
        flow_rate: m3ps(flow_rate),
    })?;

    Ok(PumpAssessment::Evaluated(Box::new(EvaluatedPump {
        node,
        suction_node,
        discharge_node,
        suction_loss,
        discharge_loss,
        flow_rate,
        added_head: def.added_head_m,
        required_npsh: def.required_npsh_m,
        ignored_efficiency,
        performance,
    })))
}

fn resolve_ref(problem: &HydraulicProblem<'_>, id: Option<&str>) -> Result<NodeId, String> {
    match id {
        None => Err("node not set".to_string()),
        Some(id) => problem
            .graph
            .node_by_key(id)
            .ok_or_else(|| format!("node '{}' not found", id)),
    }
}

fn component(name: &str, def: &PumpDef, efficiency_valid: bool) -> SolverResult<Pump> {
    let efficiency = if efficiency_valid { def.efficiency } else { 0.0 };
    Ok(Pump::new(
        name,
        m(def.elevation_m),
        m(def.added_head_m),
        m(def.required_npsh_m),
        efficiency,
    )?)
}
