//! Text reports with SI or US customary display units.

use hf_core::constants::G0_MPS2;
use hf_core::units::{celsius, kgpm3, m, m3ps, mps, pa, watts};
use hf_fluids::FluidCatalogEntry;
use hf_project::UnitsMode;
use hf_solver::{HydraulicsOutcome, Severity, TelemetryReading};
use uom::si::length::{foot, meter};
use uom::si::mass_density::{kilogram_per_cubic_meter, pound_per_cubic_foot};
use uom::si::power::{horsepower, kilowatt};
use uom::si::pressure::{kilopascal, pound_force_per_square_inch};
use uom::si::thermodynamic_temperature::{degree_celsius, degree_fahrenheit};
use uom::si::velocity::{foot_per_second, meter_per_second};
use uom::si::volume_rate::{cubic_meter_per_second, gallon_per_minute};

/// Formats SI values in the selected display system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayUnits(pub UnitsMode);

impl DisplayUnits {
    pub fn pressure(self, value_pa: f64) -> String {
        let p = pa(value_pa);
        match self.0 {
            UnitsMode::Si => format!("{:.2} kPa", p.get::<kilopascal>()),
            UnitsMode::Us => format!("{:.2} psi", p.get::<pound_force_per_square_inch>()),
        }
    }

    pub fn length(self, value_m: f64) -> String {
        let l = m(value_m);
        match self.0 {
            UnitsMode::Si => format!("{:.3} m", l.get::<meter>()),
            UnitsMode::Us => format!("{:.2} ft", l.get::<foot>()),
        }
    }

    pub fn velocity(self, value_m_s: f64) -> String {
        let v = mps(value_m_s);
        match self.0 {
            UnitsMode::Si => format!("{:.3} m/s", v.get::<meter_per_second>()),
            UnitsMode::Us => format!("{:.2} ft/s", v.get::<foot_per_second>()),
        }
    }

    pub fn flow(self, value_m3_s: f64) -> String {
        let q = m3ps(value_m3_s);
        match self.0 {
            UnitsMode::Si => format!("{:.4} m³/s", q.get::<cubic_meter_per_second>()),
            UnitsMode::Us => format!("{:.1} gpm", q.get::<gallon_per_minute>()),
        }
    }

    pub fn power(self, value_w: f64) -> String {
        let w = watts(value_w);
        match self.0 {
            UnitsMode::Si => format!("{:.2} kW", w.get::<kilowatt>()),
            UnitsMode::Us => format!("{:.2} hp", w.get::<horsepower>()),
        }
    }

    pub fn density(self, value_kg_m3: f64) -> String {
        let rho = kgpm3(value_kg_m3);
        match self.0 {
            UnitsMode::Si => format!("{:.2} kg/m³", rho.get::<kilogram_per_cubic_meter>()),
            UnitsMode::Us => format!("{:.3} lb/ft³", rho.get::<pound_per_cubic_foot>()),
        }
    }

    /// Specific weight; in US units lbf/ft³ equals lb/ft³ under standard gravity.
    pub fn specific_weight(self, value_n_m3: f64) -> String {
        match self.0 {
            UnitsMode::Si => format!("{:.1} N/m³", value_n_m3),
            UnitsMode::Us => format!(
                "{:.3} lbf/ft³",
                kgpm3(value_n_m3 / G0_MPS2).get::<pound_per_cubic_foot>()
            ),
        }
    }

    pub fn temperature(self, value_c: f64) -> String {
        let t = celsius(value_c);
        match self.0 {
            UnitsMode::Si => format!("{:.1} °C", t.get::<degree_celsius>()),
            UnitsMode::Us => format!("{:.1} °F", t.get::<degree_fahrenheit>()),
        }
    }
}

pub fn print_outcome(outcome: &HydraulicsOutcome, units: DisplayUnits) {
    let r = &outcome.result;

    println!("Fluid: {}", r.fluid_name);
    println!(
        "  density {}  specific weight {}  vapor pressure {}",
        units.density(r.fluid_density_kg_m3),
        units.specific_weight(r.specific_weight_n_m3),
        units.pressure(r.vapor_pressure_pa)
    );
    println!("  ambient {}", units.pressure(r.ambient_pressure_pa));

    match &r.pump_id {
        Some(id) => {
            println!("Pump: {}", id);
            println!(
                "  added head {}  centerline {}  flow {}",
                units.length(r.pump_head_m),
                units.length(r.pump_elevation_m),
                units.flow(r.pump_flow_m3_s)
            );
            println!(
                "  suction   {} head {} loss {}",
                units.pressure(r.suction_pressure_pa),
                units.length(r.suction_head_m),
                units.length(r.suction_loss_m)
            );
            println!(
                "  discharge {} head {} loss {}",
                units.pressure(r.discharge_pressure_pa),
                units.length(r.discharge_head_m),
                units.length(r.discharge_loss_m)
            );
            println!(
                "  static lift {}  TDH {}  energy balance {}",
                units.length(r.static_lift_m),
                units.length(r.total_dynamic_head_m),
                units.length(r.energy_balance_m)
            );
            println!(
                "  NPSHa {}  NPSHr {}  margin {}",
                units.length(r.npsh_available_m),
                units.length(r.npsh_required_m),
                units.length(r.npsh_margin_m)
            );
            match r.shaft_power_w {
                Some(shaft) => println!(
                    "  hydraulic power {}  shaft power {}",
                    units.power(r.hydraulic_power_w),
                    units.power(shaft)
                ),
                None => println!("  hydraulic power {}", units.power(r.hydraulic_power_w)),
            }
        }
        None => println!("Pump: none"),
    }

    if !r.pipes.is_empty() {
        println!("Pipes:");
        for (id, pipe) in &r.pipes {
            println!(
                "  {:<12} {:<10} v {}  Re {:.0}  f {:.5}  loss {}",
                id,
                pipe.regime,
                units.velocity(pipe.velocity_m_s),
                pipe.reynolds,
                pipe.friction_factor,
                units.length(pipe.head_loss_m)
            );
        }
    }

    if !r.nodes.is_empty() {
        println!("Nodes (highest first):");
        for node in &r.nodes {
            println!(
                "  {:<12} {:<9} z {}  p {} ({} gauge)",
                node.id,
                node.kind,
                units.length(node.elevation_m),
                units.pressure(node.absolute_pressure_pa),
                units.pressure(node.gauge_pressure_pa)
            );
            println!("      {}", node.explanation);
        }
    }

    if outcome.alerts.is_empty() {
        println!("✓ No alerts");
    } else {
        println!("Alerts:");
        for alert in &outcome.alerts {
            let marker = match alert.severity {
                Severity::Error => "✗",
                Severity::Warning => "!",
                Severity::Info => "i",
            };
            println!(
                "  {} [{}] {}: {}",
                marker,
                alert.severity.as_str(),
                alert.title,
                alert.detail
            );
        }
    }
}

pub fn print_reading(reading: &TelemetryReading, units: DisplayUnits) {
    let h = &reading.hydraulics;
    println!("Pipe: {} ({})", reading.pipe_id, reading.fluid_name);
    println!(
        "  density {}  viscosity {:.3e} m²/s",
        units.density(reading.density_kg_m3),
        reading.kinematic_viscosity_m2_s
    );
    println!(
        "  {}  v {}  Re {:.0}  f {:.5}",
        h.regime,
        units.velocity(h.velocity_m_s),
        h.reynolds,
        h.friction_factor
    );
    println!(
        "  head loss {}  pressure drop {}",
        units.length(h.head_loss_m),
        units.pressure(reading.pressure_drop_pa)
    );
}

pub fn print_catalog(
    entries: &[&FluidCatalogEntry],
    temperature_c: f64,
    units: DisplayUnits,
) -> hf_fluids::FluidResult<()> {
    println!("Fluids at {}:", units.temperature(temperature_c));
    for entry in entries {
        let fluid = entry.properties_at(temperature_c)?;
        let (lo, hi) = entry.temperature_range_c();
        println!(
            "  {:<10} {:<24} {}  ν {:.3e} m²/s  pv {}  [{} .. {}]",
            entry.canonical_id,
            entry.display_name,
            units.density(fluid.density.value),
            fluid.kinematic_viscosity.value,
            units.pressure(fluid.vapor_pressure.value),
            units.temperature(lo),
            units.temperature(hi)
        );
    }
    Ok(())
}
