//! Model validation logic.
//!
//! Pump suction/discharge references are deliberately not checked here: the
//! solver reports them as a `pump-unresolved` alert instead of refusing the
//! model.

use crate::schema::{Model, NodeDef, NodeKind, PipeDef};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_model(model: &Model) -> Result<(), ValidationError> {
    if !model.ambient_pressure_pa.is_finite() || model.ambient_pressure_pa <= 0.0 {
        return Err(invalid(
            "ambient_pressure_pa",
            model.ambient_pressure_pa,
            "must be positive",
        ));
    }
    if model.fluid_id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "fluid_id".to_string(),
            value: String::new(),
            reason: "must not be empty".to_string(),
        });
    }
    if let Some(t) = model.fluid_temperature_c
        && !t.is_finite()
    {
        return Err(invalid("fluid_temperature_c", t, "must be finite"));
    }

    let mut node_ids = HashSet::new();
    for node in &model.nodes {
        if !node_ids.insert(node.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: node.id.clone(),
                context: "nodes".to_string(),
            });
        }
        validate_node(node)?;
    }

    let mut pipe_ids = HashSet::new();
    for pipe in &model.pipes {
        if !pipe_ids.insert(pipe.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: pipe.id.clone(),
                context: "pipes".to_string(),
            });
        }
        for endpoint in [&pipe.from_node_id, &pipe.to_node_id] {
            if !node_ids.contains(endpoint.as_str()) {
                return Err(ValidationError::MissingReference {
                    id: endpoint.clone(),
                    context: format!("pipe {}", pipe.id),
                });
            }
        }
        validate_pipe(pipe)?;
    }

    Ok(())
}

fn validate_node(node: &NodeDef) -> Result<(), ValidationError> {
    let field = |name: &str| format!("node {}.{}", node.id, name);

    let elevation = node.elevation_m();
    if !elevation.is_finite() {
        return Err(invalid(&field("elevation_m"), elevation, "must be finite"));
    }

    match &node.kind {
        NodeKind::Tank(tank) => {
            if !tank.fluid_level_m.is_finite() || tank.fluid_level_m < 0.0 {
                return Err(invalid(
                    &field("fluid_level_m"),
                    tank.fluid_level_m,
                    "must be non-negative",
                ));
            }
            if !tank.reference_elevation_m.is_finite() {
                return Err(invalid(
                    &field("reference_elevation_m"),
                    tank.reference_elevation_m,
                    "must be finite",
                ));
            }
            if tank.sealed && !(tank.gas_pressure_pa.is_finite() && tank.gas_pressure_pa > 0.0)
            {
                return Err(invalid(
                    &field("gas_pressure_pa"),
                    tank.gas_pressure_pa,
                    "sealed tank needs a positive gas pressure",
                ));
            }
        }
        NodeKind::Pump(pump) => {
            if !pump.added_head_m.is_finite() || pump.added_head_m < 0.0 {
                return Err(invalid(
                    &field("added_head_m"),
                    pump.added_head_m,
                    "must be non-negative",
                ));
            }
            if !pump.required_npsh_m.is_finite() || pump.required_npsh_m < 0.0 {
                return Err(invalid(
                    &field("required_npsh_m"),
                    pump.required_npsh_m,
                    "must be non-negative",
                ));
            }
            if !(0.0..=1.0).contains(&pump.efficiency) {
                return Err(invalid(
                    &field("efficiency"),
                    pump.efficiency,
                    "must be a fraction in [0, 1]",
                ));
            }
        }
        NodeKind::Valve {
            loss_coefficient,
            opening,
            ..
        } => {
            if !loss_coefficient.is_finite() || *loss_coefficient < 0.0 {
                return Err(invalid(
                    &field("loss_coefficient"),
                    *loss_coefficient,
                    "must be non-negative",
                ));
            }
            if !(0.0..=1.0).contains(opening) {
                return Err(invalid(&field("opening"), *opening, "must be in [0, 1]"));
            }
        }
        NodeKind::Regulator { setpoint_pa, .. } => {
            if let Some(p) = setpoint_pa
                && (!p.is_finite() || *p <= 0.0)
            {
                return Err(invalid(&field("setpoint_pa"), *p, "must be positive"));
            }
        }
        NodeKind::Junction { .. } | NodeKind::Meter { .. } => {}
    }

    Ok(())
}

fn validate_pipe(pipe: &PipeDef) -> Result<(), ValidationError> {
    let field = |name: &str| format!("pipe {}.{}", pipe.id, name);

    if !pipe.diameter_m.is_finite() || pipe.diameter_m <= 0.0 {
        return Err(invalid(&field("diameter_m"), pipe.diameter_m, "must be positive"));
    }
    if !pipe.length_m.is_finite() || pipe.length_m <= 0.0 {
        return Err(invalid(&field("length_m"), pipe.length_m, "must be positive"));
    }
    if !pipe.roughness_m.is_finite() || pipe.roughness_m < 0.0 {
        return Err(invalid(
            &field("roughness_m"),
            pipe.roughness_m,
            "must be non-negative",
        ));
    }
    if !pipe.flow_rate_m3_s.is_finite() || pipe.flow_rate_m3_s < 0.0 {
        return Err(invalid(
            &field("flow_rate_m3_s"),
            pipe.flow_rate_m3_s,
            "must be non-negative",
        ));
    }
    if !pipe.k_minor.is_finite() || pipe.k_minor < 0.0 {
        return Err(invalid(&field("k_minor"), pipe.k_minor, "must be non-negative"));
    }
    Ok(())
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
