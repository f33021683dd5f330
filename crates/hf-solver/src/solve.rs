//! High-level solver interface.

use crate::alerts::{NetworkNotes, ValidationAlert, evaluate_rules};
use crate::error::SolverResult;
use crate::problem::HydraulicProblem;
use crate::propagation::propagate;
use crate::pump_eval::{PumpAssessment, assess_pump, pump_nodes};
use crate::result::{HydraulicsOutcome, HydraulicsResult, aggregate};
use hf_fluids::FluidPropertyProvider;
use hf_project::Model;
use tracing::{info, warn};

/// Evaluate the steady-state hydraulics of `model`.
///
/// Never fails: structural and numeric errors produce the zero-initialized
/// fallback result with a single `solver-failure` alert.
pub fn solve(model: &Model, provider: &dyn FluidPropertyProvider) -> HydraulicsOutcome {
    match try_solve(model, provider) {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(error = %err, "solve failed, returning fallback result");
            HydraulicsOutcome {
                result: HydraulicsResult::fallback(model),
                alerts: vec![ValidationAlert::solver_failure(&err.to_string())],
            }
        }
    }
}

/// Like [`solve`], but surfaces the typed error instead of a fallback.
///
/// Configuration problems (no pump, unresolved pump references, unknown
/// fluid, out-of-range efficiency) are still reported as alerts on an `Ok`
/// outcome. An unresolved pump yields the fallback result with `pump_id` set.
///
/// 1. Compile the model: graph, fluid, per-pipe hydraulics
/// 2. Evaluate the first pump against its suction/discharge surfaces
/// 3. Propagate pressures breadth-first from tanks and the pump
/// 4. Apply the alert rules and aggregate the result
pub fn try_solve(
    model: &Model,
    provider: &dyn FluidPropertyProvider,
) -> SolverResult<HydraulicsOutcome> {
    let problem = HydraulicProblem::compile(model, provider)?;
    let pump = assess_pump(&problem)?;

    let pumps = pump_nodes(&problem);
    let id_of = |slot: usize| model.nodes[slot].id.clone();
    let mut notes = NetworkNotes {
        extra_pumps: match pumps.split_first() {
            Some((first, rest)) if !rest.is_empty() => Some((
                id_of(first.slot()),
                rest.iter().map(|n| id_of(n.slot())).collect(),
            )),
            _ => None,
        },
        ignored_efficiency: pump
            .evaluated()
            .and_then(|p| p.ignored_efficiency.map(|eta| (id_of(p.node.slot()), eta))),
        fluid_substitution: problem
            .substituted_fluid
            .as_ref()
            .map(|requested| (requested.clone(), problem.fluid.name.clone())),
        ..NetworkNotes::default()
    };

    // Pressures past an unresolved pump would lack its head.
    if let PumpAssessment::Unresolved { node, .. } = &pump {
        let mut result = HydraulicsResult::fallback(model);
        result.pump_id = Some(id_of(node.slot()));
        let alerts = evaluate_rules(&pump.status(&problem), &notes);
        warn!(pump = %id_of(node.slot()), "pump unresolved, returning fallback result");
        return Ok(HydraulicsOutcome { result, alerts });
    }

    let field = propagate(&problem, pump.evaluated())?;
    notes.unreached = field.unreached().map(id_of).collect();
    notes.multi_fed = field.multi_fed.iter().map(|n| id_of(n.slot())).collect();

    let alerts = evaluate_rules(&pump.status(&problem), &notes);
    let result = aggregate(&problem, &pump, &field);

    info!(
        nodes = result.nodes.len(),
        pipes = result.pipes.len(),
        alerts = alerts.len(),
        tdh = result.total_dynamic_head_m,
        energy_balance = result.energy_balance_m,
        fluid = %result.fluid_name,
        "network solved"
    );

    Ok(HydraulicsOutcome { result, alerts })
}
