//! Engineering validation rules.
//!
//! Rules are independent and always evaluated in the same order, so the
//! alert list is reproducible for identical inputs.

use serde::{Deserialize, Serialize};

/// Threshold below which suction head is reported as an excessive lift [m].
pub const SUCTION_LIFT_LIMIT_M: f64 = -5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationAlert {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub detail: String,
}

impl ValidationAlert {
    fn new(id: &str, severity: Severity, title: &str, detail: String) -> Self {
        Self {
            id: id.to_string(),
            severity,
            title: title.to_string(),
            detail,
        }
    }

    pub fn no_pump() -> Self {
        Self::new(
            "no-pump",
            Severity::Warning,
            "No pump in network",
            "Pump diagnostics are zero; pressures are propagated from tanks only.".to_string(),
        )
    }

    pub fn pump_unresolved(pump: &str, missing: &[String]) -> Self {
        Self::new(
            "pump-unresolved",
            Severity::Error,
            "Pump suction/discharge unresolved",
            format!(
                "Pump '{}' cannot be evaluated: {}.",
                pump,
                missing.join(", ")
            ),
        )
    }

    pub fn cavitation_imminent(suction_pressure_pa: f64, vapor_pressure_pa: f64) -> Self {
        Self::new(
            "cavitation-imminent",
            Severity::Error,
            "Cavitation imminent",
            format!(
                "Suction pressure {:.0} Pa is at or below the vapor pressure {:.0} Pa.",
                suction_pressure_pa, vapor_pressure_pa
            ),
        )
    }

    pub fn npsh_insufficient(available_m: f64, required_m: f64) -> Self {
        Self::new(
            "npsh-insufficient",
            Severity::Error,
            "Insufficient NPSH",
            format!(
                "NPSH available {:.2} m is below the required {:.2} m.",
                available_m, required_m
            ),
        )
    }

    pub fn excessive_suction_lift(suction_head_m: f64) -> Self {
        Self::new(
            "excessive-suction-lift",
            Severity::Warning,
            "Excessive suction lift",
            format!(
                "Suction head {:.2} m is below {:.1} m.",
                suction_head_m, SUCTION_LIFT_LIMIT_M
            ),
        )
    }

    pub fn head_deficit(energy_balance_m: f64, tdh_m: f64) -> Self {
        Self::new(
            "head-deficit",
            Severity::Error,
            "Pump head deficit",
            format!(
                "Pump falls {:.2} m short of the required TDH {:.2} m.",
                -energy_balance_m, tdh_m
            ),
        )
    }

    pub fn multiple_pumps(evaluated: &str, ignored: &[String]) -> Self {
        Self::new(
            "multiple-pumps",
            Severity::Warning,
            "Multiple pumps",
            format!(
                "Only pump '{}' is evaluated; also present: {}.",
                evaluated,
                ignored.join(", ")
            ),
        )
    }

    pub fn invalid_efficiency(pump: &str, efficiency: f64) -> Self {
        Self::new(
            "invalid-efficiency",
            Severity::Warning,
            "Pump efficiency out of range",
            format!(
                "Pump '{}' efficiency {} is outside [0, 1]; shaft power is not reported.",
                pump, efficiency
            ),
        )
    }

    pub fn unknown_fluid(requested: &str, used: &str) -> Self {
        Self::new(
            "unknown-fluid",
            Severity::Warning,
            "Unknown fluid",
            format!(
                "Fluid '{}' is not in the catalog; {} properties are used.",
                requested, used
            ),
        )
    }

    pub fn unreached_nodes(nodes: &[String]) -> Self {
        Self::new(
            "unreached-nodes",
            Severity::Info,
            "Nodes without pressure",
            format!(
                "No forward path from a tank or the pump reaches: {}.",
                nodes.join(", ")
            ),
        )
    }

    pub fn multi_path_node(nodes: &[String]) -> Self {
        Self::new(
            "multi-path-node",
            Severity::Info,
            "Nodes fed by several pipes",
            format!(
                "Pressure comes from the first path found; other feeds are ignored at: {}.",
                nodes.join(", ")
            ),
        )
    }

    pub fn solver_failure(message: &str) -> Self {
        Self::new(
            "solver-failure",
            Severity::Error,
            "Solver failure",
            message.to_string(),
        )
    }
}

/// Pump figures the pump rules look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PumpFigures {
    pub suction_pressure_pa: f64,
    pub vapor_pressure_pa: f64,
    pub npsh_available_m: f64,
    pub npsh_required_m: f64,
    pub suction_head_m: f64,
    pub energy_balance_m: f64,
    pub total_dynamic_head_m: f64,
}

/// Outcome of the pump lookup as far as the rules are concerned.
#[derive(Debug, Clone, PartialEq)]
pub enum PumpStatus {
    Absent,
    Unresolved { pump: String, missing: Vec<String> },
    Evaluated(PumpFigures),
}

/// Observations beyond the pump rules, appended after them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkNotes {
    /// (evaluated pump, other pumps)
    pub extra_pumps: Option<(String, Vec<String>)>,
    /// (pump, efficiency as given)
    pub ignored_efficiency: Option<(String, f64)>,
    /// (requested id, fluid actually used)
    pub fluid_substitution: Option<(String, String)>,
    pub unreached: Vec<String>,
    pub multi_fed: Vec<String>,
}

/// Apply the rule set in its fixed order.
pub fn evaluate_rules(pump: &PumpStatus, notes: &NetworkNotes) -> Vec<ValidationAlert> {
    let mut alerts = Vec::new();

    match pump {
        PumpStatus::Absent => alerts.push(ValidationAlert::no_pump()),
        PumpStatus::Unresolved { pump, missing } => {
            alerts.push(ValidationAlert::pump_unresolved(pump, missing))
        }
        PumpStatus::Evaluated(f) => {
            if f.suction_pressure_pa <= f.vapor_pressure_pa {
                alerts.push(ValidationAlert::cavitation_imminent(
                    f.suction_pressure_pa,
                    f.vapor_pressure_pa,
                ));
            }
            if f.npsh_available_m < f.npsh_required_m {
                alerts.push(ValidationAlert::npsh_insufficient(
                    f.npsh_available_m,
                    f.npsh_required_m,
                ));
            }
            if f.suction_head_m < SUCTION_LIFT_LIMIT_M {
                alerts.push(ValidationAlert::excessive_suction_lift(f.suction_head_m));
            }
            if f.energy_balance_m < 0.0 {
                alerts.push(ValidationAlert::head_deficit(
                    f.energy_balance_m,
                    f.total_dynamic_head_m,
                ));
            }
        }
    }

    if let Some((evaluated, ignored)) = &notes.extra_pumps {
        alerts.push(ValidationAlert::multiple_pumps(evaluated, ignored));
    }
    if let Some((pump, efficiency)) = &notes.ignored_efficiency {
        alerts.push(ValidationAlert::invalid_efficiency(pump, *efficiency));
    }
    if let Some((requested, used)) = &notes.fluid_substitution {
        alerts.push(ValidationAlert::unknown_fluid(requested, used));
    }
    if !notes.unreached.is_empty() {
        alerts.push(ValidationAlert::unreached_nodes(&notes.unreached));
    }
    if !notes.multi_fed.is_empty() {
        alerts.push(ValidationAlert::multi_path_node(&notes.multi_fed));
    }

    alerts
}
