//! Built-in liquid catalog.
//!
//! Each entry carries a small property table against temperature. Values are
//! engineering-handbook figures at atmospheric pressure; between knots the
//! properties are interpolated linearly and outside the table they are held at
//! the nearest end.

use crate::error::FluidResult;
use crate::fluid::Fluid;
use hf_core::interpolate_clamped;

/// One row of a property table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyPoint {
    pub temperature_c: f64,
    pub density_kg_m3: f64,
    pub kinematic_viscosity_m2_s: f64,
    pub vapor_pressure_pa: f64,
}

const fn point(t: f64, rho: f64, nu: f64, pv: f64) -> PropertyPoint {
    PropertyPoint {
        temperature_c: t,
        density_kg_m3: rho,
        kinematic_viscosity_m2_s: nu,
        vapor_pressure_pa: pv,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidCatalogEntry {
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    /// Ascending in temperature.
    pub table: &'static [PropertyPoint],
}

impl FluidCatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }

    /// Exact (case-insensitive) match on id, display name or alias.
    pub fn is_named(&self, name: &str) -> bool {
        let name = name.trim();
        self.canonical_id.eq_ignore_ascii_case(name)
            || self.display_name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Lowest and highest tabulated temperature [°C].
    pub fn temperature_range_c(&self) -> (f64, f64) {
        let lo = self.table.first().map_or(0.0, |p| p.temperature_c);
        let hi = self.table.last().map_or(0.0, |p| p.temperature_c);
        (lo, hi)
    }

    /// Resolve the fluid at `temperature_c`, clamped to the table range.
    pub fn properties_at(&self, temperature_c: f64) -> FluidResult<Fluid> {
        let column = |f: fn(&PropertyPoint) -> f64| -> Vec<(f64, f64)> {
            self.table.iter().map(|p| (p.temperature_c, f(p))).collect()
        };

        let rho = interpolate_clamped(&column(|p| p.density_kg_m3), temperature_c)?;
        let nu = interpolate_clamped(&column(|p| p.kinematic_viscosity_m2_s), temperature_c)?;
        let pv = interpolate_clamped(&column(|p| p.vapor_pressure_pa), temperature_c)?;

        Fluid::new(self.display_name, rho, nu, pv)
    }
}

const WATER: &[PropertyPoint] = &[
    point(0.0, 999.84, 1.787e-6, 611.0),
    point(10.0, 999.70, 1.307e-6, 1_228.0),
    point(20.0, 998.21, 1.004e-6, 2_339.0),
    point(30.0, 995.65, 0.801e-6, 4_246.0),
    point(40.0, 992.22, 0.658e-6, 7_384.0),
    point(50.0, 988.03, 0.553e-6, 12_350.0),
    point(60.0, 983.20, 0.475e-6, 19_940.0),
    point(70.0, 977.76, 0.413e-6, 31_190.0),
    point(80.0, 971.79, 0.365e-6, 47_410.0),
    point(90.0, 965.31, 0.326e-6, 70_140.0),
    point(100.0, 958.35, 0.294e-6, 101_420.0),
];

// 35 g/kg salinity
const SEAWATER: &[PropertyPoint] = &[
    point(0.0, 1_028.1, 1.826e-6, 599.0),
    point(10.0, 1_026.9, 1.354e-6, 1_206.0),
    point(20.0, 1_024.8, 1.049e-6, 2_299.0),
    point(30.0, 1_021.7, 0.839e-6, 4_168.0),
    point(40.0, 1_018.0, 0.690e-6, 7_250.0),
];

// 30 % by mass ethylene glycol in water
const GLYCOL_30: &[PropertyPoint] = &[
    point(-10.0, 1_050.0, 5.60e-6, 230.0),
    point(0.0, 1_046.0, 3.90e-6, 520.0),
    point(20.0, 1_039.0, 2.10e-6, 2_000.0),
    point(40.0, 1_030.0, 1.30e-6, 6_300.0),
    point(60.0, 1_019.0, 0.90e-6, 17_000.0),
    point(80.0, 1_006.0, 0.65e-6, 41_000.0),
];

const DIESEL: &[PropertyPoint] = &[
    point(0.0, 850.0, 6.0e-6, 200.0),
    point(20.0, 835.0, 3.5e-6, 400.0),
    point(40.0, 821.0, 2.3e-6, 700.0),
    point(60.0, 807.0, 1.6e-6, 1_200.0),
];

const BUILTIN_CATALOG: [FluidCatalogEntry; 4] = [
    FluidCatalogEntry {
        canonical_id: "water",
        display_name: "Water",
        aliases: &["h2o", "fresh water"],
        table: WATER,
    },
    FluidCatalogEntry {
        canonical_id: "seawater",
        display_name: "Seawater",
        aliases: &["sea water", "brine"],
        table: SEAWATER,
    },
    FluidCatalogEntry {
        canonical_id: "glycol30",
        display_name: "Ethylene Glycol 30%",
        aliases: &["glycol", "meg30", "ethylene glycol"],
        table: GLYCOL_30,
    },
    FluidCatalogEntry {
        canonical_id: "diesel",
        display_name: "Diesel",
        aliases: &["gasoil", "fuel oil"],
        table: DIESEL,
    },
];

pub fn builtin_catalog() -> &'static [FluidCatalogEntry] {
    &BUILTIN_CATALOG
}

/// Find a catalog entry by exact id, display name or alias.
pub fn find_entry(name: &str) -> Option<&'static FluidCatalogEntry> {
    BUILTIN_CATALOG.iter().find(|entry| entry.is_named(name))
}

/// Substring search over ids, names and aliases.
pub fn search(query: &str) -> Vec<&'static FluidCatalogEntry> {
    BUILTIN_CATALOG
        .iter()
        .filter(|entry| entry.matches_query(query))
        .collect()
}
