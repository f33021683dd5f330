//! Network model schema definitions.
//!
//! All quantities are SI; field names carry their unit suffix.

use hf_core::constants::STANDARD_ATMOSPHERE_PA;
use serde::{Deserialize, Serialize};

/// A complete network snapshot handed to the solver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Model {
    #[serde(default)]
    pub units: UnitsMode,
    #[serde(default = "default_ambient_pressure")]
    pub ambient_pressure_pa: f64,
    pub fluid_id: String,
    /// Fluid temperature; the provider's reference temperature when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluid_temperature_c: Option<f64>,
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
    #[serde(default)]
    pub pipes: Vec<PipeDef>,
}

fn default_ambient_pressure() -> f64 {
    STANDARD_ATMOSPHERE_PA
}

impl Model {
    /// Empty model at standard atmosphere.
    pub fn new(fluid_id: impl Into<String>) -> Self {
        Self {
            units: UnitsMode::default(),
            ambient_pressure_pa: STANDARD_ATMOSPHERE_PA,
            fluid_id: fluid_id.into(),
            fluid_temperature_c: None,
            nodes: Vec::new(),
            pipes: Vec::new(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&NodeDef> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn pipe(&self, id: &str) -> Option<&PipeDef> {
        self.pipes.iter().find(|p| p.id == id)
    }

    /// Pumps in node order.
    pub fn pumps(&self) -> impl Iterator<Item = (&NodeDef, &PumpDef)> + '_ {
        self.nodes.iter().filter_map(|n| match &n.kind {
            NodeKind::Pump(pump) => Some((n, pump)),
            _ => None,
        })
    }
}

/// Display unit system. The solver always works in SI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitsMode {
    #[default]
    Si,
    Us,
}

/// Diagram position; carried through, never used by the solver.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: Position,
    pub kind: NodeKind,
}

impl NodeDef {
    /// Node whose display name is its id.
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            position: Position::default(),
            kind,
        }
    }

    /// Elevation used for hydrostatic differences: tank base, pump centerline,
    /// or the node's own elevation.
    pub fn elevation_m(&self) -> f64 {
        match &self.kind {
            NodeKind::Tank(tank) => tank.base_elevation_m,
            NodeKind::Pump(pump) => pump.elevation_m,
            NodeKind::Junction { elevation_m }
            | NodeKind::Valve { elevation_m, .. }
            | NodeKind::Regulator { elevation_m, .. }
            | NodeKind::Meter { elevation_m, .. } => *elevation_m,
        }
    }

    /// Reporting reference: a tank's declared reference elevation, otherwise
    /// the node elevation.
    pub fn reference_elevation_m(&self) -> f64 {
        match &self.kind {
            NodeKind::Tank(tank) => tank.reference_elevation_m,
            NodeKind::Pump(_)
            | NodeKind::Junction { .. }
            | NodeKind::Valve { .. }
            | NodeKind::Regulator { .. }
            | NodeKind::Meter { .. } => self.elevation_m(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum NodeKind {
    Tank(TankDef),
    Pump(PumpDef),
    Junction {
        elevation_m: f64,
    },
    Valve {
        elevation_m: f64,
        #[serde(default)]
        loss_coefficient: f64,
        /// 0 = closed, 1 = fully open
        #[serde(default = "default_valve_opening")]
        opening: f64,
    },
    Regulator {
        elevation_m: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        setpoint_pa: Option<f64>,
    },
    Meter {
        elevation_m: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        meter_type: Option<String>,
    },
}

fn default_valve_opening() -> f64 {
    1.0
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Tank(_) => "tank",
            NodeKind::Pump(_) => "pump",
            NodeKind::Junction { .. } => "junction",
            NodeKind::Valve { .. } => "valve",
            NodeKind::Regulator { .. } => "regulator",
            NodeKind::Meter { .. } => "meter",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TankDef {
    pub base_elevation_m: f64,
    #[serde(default)]
    pub reference_elevation_m: f64,
    pub fluid_level_m: f64,
    #[serde(default)]
    pub sealed: bool,
    /// Absolute gas blanket pressure; only read when `sealed`.
    #[serde(default)]
    pub gas_pressure_pa: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PumpDef {
    pub elevation_m: f64,
    pub added_head_m: f64,
    #[serde(default)]
    pub required_npsh_m: f64,
    /// Fraction in [0, 1]; 0 when unknown.
    #[serde(default)]
    pub efficiency: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suction_node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discharge_node_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipeDef {
    pub id: String,
    pub from_node_id: String,
    pub to_node_id: String,
    pub diameter_m: f64,
    pub length_m: f64,
    #[serde(default)]
    pub roughness_m: f64,
    #[serde(default)]
    pub flow_rate_m3_s: f64,
    #[serde(default)]
    pub k_minor: f64,
}

impl PipeDef {
    pub fn new(
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        diameter_m: f64,
        length_m: f64,
    ) -> Self {
        Self {
            id: id.into(),
            from_node_id: from.into(),
            to_node_id: to.into(),
            diameter_m,
            length_m,
            roughness_m: 0.0,
            flow_rate_m3_s: 0.0,
            k_minor: 0.0,
        }
    }

    pub fn with_roughness(mut self, roughness_m: f64) -> Self {
        self.roughness_m = roughness_m;
        self
    }

    pub fn with_flow(mut self, flow_rate_m3_s: f64) -> Self {
        self.flow_rate_m3_s = flow_rate_m3_s;
        self
    }

    pub fn with_k_minor(mut self, k_minor: f64) -> Self {
        self.k_minor = k_minor;
        self
    }
}
