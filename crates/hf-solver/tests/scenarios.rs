//! End-to-end network scenarios.

use hf_fluids::{BuiltinFluids, Fluid, SingleFluid};
use hf_project::{Model, NodeDef, NodeKind, PipeDef, PumpDef, TankDef};
use hf_solver::result::NOT_COMPUTED;
use hf_solver::{Severity, SolverError, solve, try_solve};

fn water() -> SingleFluid {
    SingleFluid::new(Fluid::new("Water", 998.0, 1.0e-6, 2_339.0).unwrap())
}

fn tank(id: &str, base: f64, level: f64) -> NodeDef {
    NodeDef::new(
        id,
        NodeKind::Tank(TankDef {
            base_elevation_m: base,
            reference_elevation_m: 0.0,
            fluid_level_m: level,
            sealed: false,
            gas_pressure_pa: 0.0,
        }),
    )
}

fn pump(id: &str, z: f64, head: f64, suction: &str, discharge: &str) -> NodeDef {
    NodeDef::new(
        id,
        NodeKind::Pump(PumpDef {
            elevation_m: z,
            added_head_m: head,
            required_npsh_m: 3.0,
            efficiency: 0.7,
            suction_node_id: Some(suction.to_string()),
            discharge_node_id: Some(discharge.to_string()),
        }),
    )
}

/// Tank (level 4 m) → pump (20 m, centerline 0.5 m) → junction at 12 m.
fn scenario_a() -> Model {
    let mut model = Model::new("water");
    model.nodes = vec![
        tank("tank", 0.0, 4.0),
        pump("pump", 0.5, 20.0, "tank", "header"),
        NodeDef::new("header", NodeKind::Junction { elevation_m: 12.0 }),
    ];
    model.pipes = vec![
        PipeDef::new("suction", "tank", "pump", 0.1, 4.0)
            .with_roughness(4.5e-5)
            .with_flow(0.01),
        PipeDef::new("discharge", "pump", "header", 0.08, 35.0)
            .with_roughness(4.5e-5)
            .with_flow(0.01),
    ];
    model
}

fn alert_ids(outcome: &hf_solver::HydraulicsOutcome) -> Vec<&str> {
    outcome.alerts.iter().map(|a| a.id.as_str()).collect()
}

#[test]
fn scenario_a_tank_pump_junction() {
    let outcome = solve(&scenario_a(), &water());
    let r = &outcome.result;

    assert_eq!(r.static_lift_m, 8.0);
    assert!(r.suction_loss_m > 0.0);
    assert!(r.discharge_loss_m > 0.0);
    assert!(r.total_dynamic_head_m > 8.0);
    assert_eq!(r.energy_balance_m, 20.0 - r.total_dynamic_head_m);
    assert_eq!(
        r.total_dynamic_head_m,
        r.static_lift_m + r.suction_loss_m + r.discharge_loss_m
    );
    assert_eq!(r.pump_id.as_deref(), Some("pump"));
    assert_eq!(r.pump_flow_m3_s, 0.01);
    assert!(outcome.alerts.is_empty(), "unexpected alerts: {:?}", outcome.alerts);

    let order: Vec<&str> = r.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(order, ["header", "pump", "tank"]);
    assert_eq!(r.pipes.keys().collect::<Vec<_>>(), ["discharge", "suction"]);
    assert_eq!(r.pipes["discharge"].regime, "turbulent");
}

#[test]
fn scenario_a_pressures_follow_the_formulas() {
    let outcome = solve(&scenario_a(), &water());
    let r = &outcome.result;
    let gamma = 998.0 * 9.806_65;
    assert_eq!(r.specific_weight_n_m3, gamma);

    let tank = r.node("tank").unwrap();
    assert_eq!(tank.absolute_pressure_pa, 101_325.0 + gamma * 4.0);
    assert_eq!(tank.gauge_pressure_pa, tank.absolute_pressure_pa - 101_325.0);

    let ps = 101_325.0 + gamma * (4.0 - 0.5) - gamma * r.suction_loss_m;
    assert_eq!(r.suction_pressure_pa, ps);
    assert_eq!(r.node("pump").unwrap().absolute_pressure_pa, ps);

    let pd = ps + gamma * 20.0 - gamma * (r.suction_loss_m + r.discharge_loss_m);
    assert_eq!(r.discharge_pressure_pa, pd);

    let header = r.node("header").unwrap();
    let expected = pd + gamma * (0.5 - 12.0) - gamma * r.pipes["discharge"].head_loss_m;
    assert_eq!(header.absolute_pressure_pa, expected);
    assert!(header.explanation.contains("pump discharge"));

    assert_eq!(r.npsh_available_m, (ps - 2_339.0) / gamma);
    assert_eq!(r.npsh_margin_m, r.npsh_available_m - 3.0);
    assert_eq!(r.hydraulic_power_w, gamma * 0.01 * 20.0);
    assert_eq!(r.shaft_power_w, Some(gamma * 0.01 * 20.0 / 0.7));
}

#[test]
fn scenario_b_sealed_tank_uses_gas_pressure() {
    let mut model = scenario_a();
    model.nodes[0] = NodeDef::new(
        "tank",
        NodeKind::Tank(TankDef {
            base_elevation_m: 0.0,
            reference_elevation_m: 0.0,
            fluid_level_m: 4.0,
            sealed: true,
            gas_pressure_pa: 150_000.0,
        }),
    );
    let outcome = solve(&model, &water());
    let r = &outcome.result;
    let gamma = r.specific_weight_n_m3;

    assert_eq!(r.ambient_pressure_pa, 101_325.0);
    assert_eq!(
        r.node("tank").unwrap().absolute_pressure_pa,
        150_000.0 + gamma * 4.0
    );
    assert_eq!(
        r.suction_pressure_pa,
        150_000.0 + gamma * (4.0 - 0.5) - gamma * r.suction_loss_m
    );
    assert!(r.node("tank").unwrap().explanation.contains("sealed"));
}

#[test]
fn scenario_c_high_suction_lift_cavitates() {
    let mut model = scenario_a();
    model.nodes[1] = pump("pump", 16.0, 20.0, "tank", "header");
    let outcome = solve(&model, &water());

    assert!(outcome.result.suction_pressure_pa <= outcome.result.vapor_pressure_pa);
    assert_eq!(
        alert_ids(&outcome),
        [
            "cavitation-imminent",
            "npsh-insufficient",
            "excessive-suction-lift"
        ]
    );
    let cavitation = outcome.alert("cavitation-imminent").unwrap();
    assert_eq!(cavitation.severity, Severity::Error);
}

#[test]
fn scenario_d_zero_head_runs_a_deficit() {
    let mut model = scenario_a();
    model.nodes[1] = pump("pump", 0.5, 0.0, "tank", "header");
    let outcome = solve(&model, &water());

    assert!(outcome.result.energy_balance_m < 0.0);
    assert_eq!(alert_ids(&outcome), ["head-deficit"]);
    assert!(outcome.has_errors());
}

#[test]
fn no_pump_still_propagates_from_tanks() {
    let mut model = Model::new("water");
    model.nodes = vec![
        tank("tank", 10.0, 2.0),
        NodeDef::new("tap", NodeKind::Junction { elevation_m: 0.0 }),
    ];
    model.pipes = vec![PipeDef::new("p", "tank", "tap", 0.05, 20.0).with_flow(0.001)];
    let outcome = solve(&model, &water());

    assert_eq!(alert_ids(&outcome), ["no-pump"]);
    assert_eq!(outcome.alerts[0].severity, Severity::Warning);
    assert_eq!(outcome.result.pump_id, None);
    assert_eq!(outcome.result.total_dynamic_head_m, 0.0);
    let tap = outcome.result.node("tap").unwrap();
    assert!(tap.absolute_pressure_pa > outcome.result.node("tank").unwrap().absolute_pressure_pa);
}

#[test]
fn unresolved_pump_returns_fallback_with_error_alert() {
    let mut model = scenario_a();
    model.nodes[1] = pump("pump", 0.5, 20.0, "tank", "missing");
    let outcome = solve(&model, &water());

    assert_eq!(alert_ids(&outcome), ["pump-unresolved"]);
    assert!(outcome.alerts[0].detail.contains("missing"));
    let r = &outcome.result;
    assert_eq!(r.pump_id.as_deref(), Some("pump"));
    assert_eq!(r.energy_balance_m, 0.0);
    assert_eq!(r.suction_pressure_pa, 0.0);
    assert!(r.pipes.is_empty());
    assert_eq!(r.nodes.len(), 3);
    assert!(
        r.nodes
            .iter()
            .all(|n| n.explanation == NOT_COMPUTED && n.absolute_pressure_pa == 0.0)
    );
    assert!(try_solve(&model, &water()).is_ok());
}

#[test]
fn percentage_efficiency_keeps_the_pressure_field() {
    let mut model = scenario_a();
    if let NodeKind::Pump(def) = &mut model.nodes[1].kind {
        def.efficiency = 75.0;
    }
    let outcome = solve(&model, &water());
    let reference = solve(&scenario_a(), &water());

    assert_eq!(alert_ids(&outcome), ["invalid-efficiency"]);
    assert_eq!(outcome.alerts[0].severity, Severity::Warning);
    let r = &outcome.result;
    assert_eq!(r.shaft_power_w, None);
    assert_eq!(r.hydraulic_power_w, reference.result.hydraulic_power_w);
    assert_eq!(r.total_dynamic_head_m, reference.result.total_dynamic_head_m);
    assert_eq!(r.nodes, reference.result.nodes);
    assert_eq!(r.pipes, reference.result.pipes);
}

#[test]
fn dangling_pipe_returns_fallback() {
    let mut model = scenario_a();
    model.pipes.push(PipeDef::new("stray", "header", "ghost", 0.05, 5.0));

    let outcome = solve(&model, &water());
    assert_eq!(alert_ids(&outcome), ["solver-failure"]);
    assert!(outcome.alerts[0].detail.contains("ghost"));
    assert_eq!(outcome.result.nodes.len(), 3);
    assert!(
        outcome
            .result
            .nodes
            .iter()
            .all(|n| n.explanation == NOT_COMPUTED && n.absolute_pressure_pa == 0.0)
    );

    assert!(matches!(
        try_solve(&model, &water()),
        Err(SolverError::Graph(_))
    ));
}

#[test]
fn duplicate_node_ids_return_fallback() {
    let mut model = scenario_a();
    model
        .nodes
        .push(NodeDef::new("header", NodeKind::Junction { elevation_m: 3.0 }));
    let outcome = solve(&model, &water());
    assert_eq!(alert_ids(&outcome), ["solver-failure"]);
    assert_eq!(outcome.result.nodes.len(), 4);
}

#[test]
fn non_finite_elevation_is_a_solver_failure() {
    let mut model = scenario_a();
    model.nodes[2] = NodeDef::new("header", NodeKind::Junction { elevation_m: f64::NAN });
    let outcome = solve(&model, &water());
    assert_eq!(alert_ids(&outcome), ["solver-failure"]);
}

#[test]
fn unknown_fluid_falls_back_to_water() {
    let mut model = scenario_a();
    model.fluid_id = "kerosene".to_string();
    let outcome = solve(&model, &BuiltinFluids::new());
    assert_eq!(alert_ids(&outcome), ["unknown-fluid"]);
    assert_eq!(outcome.result.fluid_name, "Water");
}

#[test]
fn supplemented_alerts_follow_pump_rules() {
    let mut model = scenario_a();
    model.nodes[1] = pump("pump", 0.5, 0.0, "tank", "header");
    model.nodes.push(pump("standby", 0.5, 20.0, "tank", "header"));
    model
        .nodes
        .push(NodeDef::new("island", NodeKind::Junction { elevation_m: 1.0 }));
    let outcome = solve(&model, &water());

    assert_eq!(
        alert_ids(&outcome),
        ["head-deficit", "multiple-pumps", "unreached-nodes"]
    );
    assert!(outcome.alert("unreached-nodes").unwrap().detail.contains("island"));
    assert!(outcome.result.node("island").is_none());
    assert_eq!(outcome.result.pump_id.as_deref(), Some("pump"));
}

#[test]
fn warmer_water_lowers_npsh_available() {
    let fluids = BuiltinFluids::new();
    let cold = solve(&scenario_a(), &fluids);
    let mut hot_model = scenario_a();
    hot_model.fluid_temperature_c = Some(80.0);
    let hot = solve(&hot_model, &fluids);

    assert!(hot.result.vapor_pressure_pa > cold.result.vapor_pressure_pa);
    assert!(hot.result.npsh_available_m < cold.result.npsh_available_m);
}
