//! Problem compilation: model snapshot to graph, fluid and pipe hydraulics.

use crate::error::{SolverResult, finite};
use hf_components::{Pipe, PipeHydraulics, SurfaceReference, Tank};
use hf_core::units::{Pressure, celsius, m, m3ps, pa};
use hf_core::{NodeId, PipeId};
use hf_fluids::{Fluid, FluidError, FluidPropertyProvider};
use hf_graph::{GraphBuilder, NetworkGraph};
use hf_project::{Model, NodeDef, NodeKind, PipeDef, TankDef};
use tracing::{debug, warn};

/// Catalog id used when the requested fluid is unknown.
pub const FALLBACK_FLUID_ID: &str = "water";

/// Everything the propagation and pump passes need, resolved once.
///
/// Node and pipe ids in `graph` are the positions of the definitions in the
/// model, so `model.nodes[id.slot()]` is the definition of `id`.
pub struct HydraulicProblem<'a> {
    pub model: &'a Model,
    pub graph: NetworkGraph,
    pub fluid: Fluid,
    /// Requested fluid id when the catalog did not know it
    pub substituted_fluid: Option<String>,
    /// γ = ρ·g [N/m³]
    pub specific_weight: f64,
    pub ambient: Pressure,
    /// Indexed by pipe slot
    pub pipe_hydraulics: Vec<PipeHydraulics>,
}

impl<'a> HydraulicProblem<'a> {
    /// Build the graph, resolve the fluid and evaluate every pipe.
    pub fn compile(model: &'a Model, provider: &dyn FluidPropertyProvider) -> SolverResult<Self> {
        let ambient = pa(finite(model.ambient_pressure_pa, || {
            "ambient pressure".to_string()
        })?);

        let graph = build_graph(model)?;
        let (fluid, substituted_fluid) = resolve_fluid(model, provider)?;
        let specific_weight = finite(fluid.specific_weight(), || "specific weight".to_string())?;

        let mut pipe_hydraulics = Vec::with_capacity(model.pipes.len());
        for def in &model.pipes {
            let pipe = pipe_component(def);
            let hydraulics = pipe.hydraulics(fluid.kinematic_viscosity)?;
            debug!(
                pipe = pipe.name(),
                velocity = hydraulics.velocity.value,
                reynolds = hydraulics.reynolds,
                head_loss = hydraulics.head_loss.value,
                regime = hydraulics.regime.as_str(),
                "pipe evaluated"
            );
            pipe_hydraulics.push(hydraulics);
        }

        Ok(Self {
            model,
            graph,
            fluid,
            substituted_fluid,
            specific_weight,
            ambient,
            pipe_hydraulics,
        })
    }

    pub fn node_def(&self, id: NodeId) -> &'a NodeDef {
        &self.model.nodes[id.slot()]
    }

    pub fn pipe_def(&self, id: PipeId) -> &'a PipeDef {
        &self.model.pipes[id.slot()]
    }

    pub fn head_loss(&self, id: PipeId) -> f64 {
        self.pipe_hydraulics[id.slot()].head_loss.value
    }

    /// Node elevation used for hydrostatic differences.
    pub fn elevation(&self, id: NodeId) -> f64 {
        self.node_def(id).elevation_m()
    }

    /// Free-surface pressure and elevation seen from a pump looking at `id`.
    pub fn surface_reference(&self, id: NodeId) -> SurfaceReference {
        let node = self.node_def(id);
        match &node.kind {
            NodeKind::Tank(def) => tank_component(&node.name, def).surface_reference(self.ambient),
            NodeKind::Pump(_)
            | NodeKind::Junction { .. }
            | NodeKind::Valve { .. }
            | NodeKind::Regulator { .. }
            | NodeKind::Meter { .. } => SurfaceReference {
                pressure: self.ambient,
                elevation: m(node.elevation_m()),
            },
        }
    }
}

fn build_graph(model: &Model) -> SolverResult<NetworkGraph> {
    let mut builder = GraphBuilder::new();
    for node in &model.nodes {
        builder.add_node(node.id.as_str());
    }
    for pipe in &model.pipes {
        builder.connect(pipe.id.as_str(), &pipe.from_node_id, &pipe.to_node_id)?;
    }
    Ok(builder.build()?)
}

fn resolve_fluid(
    model: &Model,
    provider: &dyn FluidPropertyProvider,
) -> SolverResult<(Fluid, Option<String>)> {
    let lookup = |id: &str| match model.fluid_temperature_c {
        Some(t) => provider.fluid_at(id, celsius(t)),
        None => provider.fluid(id),
    };

    match lookup(&model.fluid_id) {
        Ok(fluid) => Ok((fluid, None)),
        Err(FluidError::UnknownFluid { id }) => {
            warn!(fluid = %id, fallback = FALLBACK_FLUID_ID, "unknown fluid, substituting");
            Ok((lookup(FALLBACK_FLUID_ID)?, Some(id)))
        }
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn pipe_component(def: &PipeDef) -> Pipe {
    Pipe::new(
        def.id.as_str(),
        m(def.length_m),
        m(def.diameter_m),
        m(def.roughness_m),
        def.k_minor,
        m3ps(def.flow_rate_m3_s),
    )
}

pub(crate) fn tank_component(name: &str, def: &TankDef) -> Tank {
    Tank {
        name: name.to_string(),
        base_elevation: m(def.base_elevation_m),
        fluid_level: m(def.fluid_level_m),
        sealed: def.sealed,
        gas_pressure: pa(def.gas_pressure_pa),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use hf_fluids::{BuiltinFluids, SingleFluid};
    use hf_graph::GraphError;

    fn two_node_model() -> Model {
        let mut model = Model::new("water");
        model.nodes.push(NodeDef::new(
            "t1",
            NodeKind::Tank(TankDef {
                base_elevation_m: 2.0,
                reference_elevation_m: 0.0,
                fluid_level_m: 3.0,
                sealed: false,
                gas_pressure_pa: 0.0,
            }),
        ));
        model
            .nodes
            .push(NodeDef::new("j1", NodeKind::Junction { elevation_m: 1.0 }));
        model.pipes.push(
            PipeDef::new("p1", "t1", "j1", 0.1, 10.0)
                .with_roughness(4.5e-5)
                .with_flow(0.01),
        );
        model
    }

    #[test]
    fn compiles_pipe_hydraulics_in_model_order() {
        let model = two_node_model();
        let problem = HydraulicProblem::compile(&model, &BuiltinFluids::new()).unwrap();
        assert_eq!(problem.pipe_hydraulics.len(), 1);
        assert!(problem.pipe_hydraulics[0].head_loss.value > 0.0);
        assert_eq!(problem.substituted_fluid, None);
        assert_eq!(problem.specific_weight, 998.21 * 9.806_65);
    }

    #[test]
    fn tank_surface_reference_sits_on_the_liquid() {
        let model = two_node_model();
        let problem = HydraulicProblem::compile(&model, &BuiltinFluids::new()).unwrap();
        let tank = problem.graph.node_by_key("t1").unwrap();
        let junction = problem.graph.node_by_key("j1").unwrap();

        let surface = problem.surface_reference(tank);
        assert_eq!(surface.elevation.value, 5.0);
        assert_eq!(surface.pressure.value, 101_325.0);

        let other = problem.surface_reference(junction);
        assert_eq!(other.elevation.value, 1.0);
        assert_eq!(other.pressure.value, 101_325.0);
    }

    #[test]
    fn unknown_fluid_falls_back_to_water() {
        let mut model = two_node_model();
        model.fluid_id = "kerosene".into();
        let problem = HydraulicProblem::compile(&model, &BuiltinFluids::new()).unwrap();
        assert_eq!(problem.substituted_fluid.as_deref(), Some("kerosene"));
        assert_eq!(problem.fluid.name, "Water");
    }

    #[test]
    fn temperature_selects_properties() {
        let mut model = two_node_model();
        model.fluid_temperature_c = Some(60.0);
        let problem = HydraulicProblem::compile(&model, &BuiltinFluids::new()).unwrap();
        assert_eq!(problem.fluid.vapor_pressure.value, 19_940.0);
    }

    #[test]
    fn dangling_pipe_is_a_graph_error() {
        let mut model = two_node_model();
        model.pipes.push(PipeDef::new("p2", "j1", "ghost", 0.1, 1.0));
        let provider = SingleFluid::new(Fluid::new("Water", 998.0, 1.0e-6, 2_339.0).unwrap());
        let err = HydraulicProblem::compile(&model, &provider).err().unwrap();
        assert!(matches!(
            err,
            SolverError::Graph(GraphError::UnknownNodeRef { .. })
        ));
    }
}
