//! Breadth-first pressure propagation from the known boundary nodes.
//!
//! Seeds are every tank (at its base pressure) and the evaluated pump (at its
//! suction pressure), taken in node order. Each node is assigned once, by the
//! first forward pipe that reaches it; later paths are ignored.

use crate::error::{SolverResult, finite};
use crate::problem::{HydraulicProblem, tank_component};
use crate::pump_eval::EvaluatedPump;
use hf_core::{NodeId, PipeId};
use hf_project::NodeKind;
use std::collections::VecDeque;
use tracing::debug;

/// How a node obtained its pressure.
#[derive(Debug, Clone, PartialEq)]
pub enum PressureSource {
    /// Tank connection: surface pressure plus the liquid column
    TankBase {
        surface_pressure: f64,
        sealed: bool,
        fluid_level: f64,
    },
    /// Pump inlet computed from the suction surface
    PumpSuction {
        surface_pressure: f64,
        surface_elevation: f64,
        suction_loss: f64,
    },
    /// Carried along a forward pipe from an upstream node
    Propagated {
        from: NodeId,
        pipe: PipeId,
        upstream_pressure: f64,
        elevation_drop: f64,
        head_loss: f64,
        /// Set when the upstream node is the pump's discharge side
        pump_discharge: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodePressure {
    /// Absolute pressure [Pa]
    pub pressure: f64,
    pub source: PressureSource,
}

#[derive(Debug, Clone, Default)]
pub struct PressureField {
    /// Indexed by node slot; `None` for nodes no path reached
    pub pressures: Vec<Option<NodePressure>>,
    /// Non-seed nodes fed by more than one pressurised upstream pipe
    pub multi_fed: Vec<NodeId>,
}

impl PressureField {
    pub fn get(&self, node: NodeId) -> Option<&NodePressure> {
        self.pressures.get(node.slot()).and_then(Option::as_ref)
    }

    pub fn unreached(&self) -> impl Iterator<Item = usize> + '_ {
        self.pressures
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_none())
            .map(|(i, _)| i)
    }
}

pub fn propagate(
    problem: &HydraulicProblem<'_>,
    pump: Option<&EvaluatedPump>,
) -> SolverResult<PressureField> {
    let gamma = problem.specific_weight;
    let node_count = problem.graph.nodes().len();
    let mut pressures: Vec<Option<NodePressure>> = vec![None; node_count];
    let mut seeded = vec![false; node_count];
    let mut queue = VecDeque::new();

    for node in problem.graph.nodes() {
        let def = problem.node_def(node.id);
        let seed = match &def.kind {
            NodeKind::Tank(tank) => {
                let component = tank_component(&def.name, tank);
                let surface = component.surface_pressure(problem.ambient).value;
                Some(NodePressure {
                    pressure: component.base_pressure(problem.ambient, gamma).value,
                    source: PressureSource::TankBase {
                        surface_pressure: surface,
                        sealed: tank.sealed,
                        fluid_level: tank.fluid_level_m,
                    },
                })
            }
            NodeKind::Pump(_) => match pump {
                Some(p) if p.node == node.id => {
                    let surface = problem.surface_reference(p.suction_node);
                    Some(NodePressure {
                        pressure: p.suction_pressure().value,
                        source: PressureSource::PumpSuction {
                            surface_pressure: surface.pressure.value,
                            surface_elevation: surface.elevation.value,
                            suction_loss: p.suction_loss,
                        },
                    })
                }
                _ => None,
            },
            NodeKind::Junction { .. }
            | NodeKind::Valve { .. }
            | NodeKind::Regulator { .. }
            | NodeKind::Meter { .. } => None,
        };

        if let Some(seed) = seed {
            finite(seed.pressure, || format!("seed pressure at '{}'", def.id))?;
            debug!(node = %def.id, pressure = seed.pressure, "seeded");
            pressures[node.id.slot()] = Some(seed);
            seeded[node.id.slot()] = true;
            queue.push_back(node.id);
        }
    }

    while let Some(current) = queue.pop_front() {
        let is_pump = pump.is_some_and(|p| p.node == current);
        let upstream = match (&pressures[current.slot()], pump) {
            (_, Some(p)) if is_pump => p.discharge_pressure().value,
            (Some(np), _) => np.pressure,
            (None, _) => continue,
        };
        let z_current = problem.elevation(current);

        for inc in problem.graph.outgoing(current) {
            if pressures[inc.neighbor.slot()].is_some() {
                continue;
            }
            let dz = z_current - problem.elevation(inc.neighbor);
            let head_loss = problem.head_loss(inc.pipe);
            let pressure = upstream + gamma * dz - gamma * head_loss;
            finite(pressure, || {
                format!("pressure at '{}'", problem.node_def(inc.neighbor).id)
            })?;

            debug!(
                from = %problem.node_def(current).id,
                to = %problem.node_def(inc.neighbor).id,
                pipe = %problem.pipe_def(inc.pipe).id,
                pressure,
                "propagated"
            );
            pressures[inc.neighbor.slot()] = Some(NodePressure {
                pressure,
                source: PressureSource::Propagated {
                    from: current,
                    pipe: inc.pipe,
                    upstream_pressure: upstream,
                    elevation_drop: dz,
                    head_loss,
                    pump_discharge: is_pump,
                },
            });
            queue.push_back(inc.neighbor);
        }
    }

    let multi_fed = problem
        .graph
        .nodes()
        .iter()
        .filter(|node| !seeded[node.id.slot()])
        .filter(|node| {
            problem
                .graph
                .incoming(node.id)
                .filter(|inc| pressures[inc.neighbor.slot()].is_some())
                .count()
                > 1
        })
        .map(|node| node.id)
        .collect();

    Ok(PressureField {
        pressures,
        multi_fed,
    })
}
