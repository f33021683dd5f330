use hf_project::schema::*;
use hf_project::{load_json, load_model, load_yaml, save_json, save_yaml, validate_model};

fn pumped_model() -> Model {
    let mut model = Model::new("water");
    model.fluid_temperature_c = Some(15.0);
    model.nodes = vec![
        NodeDef {
            id: "tank".to_string(),
            name: "Supply".to_string(),
            position: Position { x: 10.0, y: 20.0 },
            kind: NodeKind::Tank(TankDef {
                base_elevation_m: 0.0,
                reference_elevation_m: 0.0,
                fluid_level_m: 4.0,
                sealed: false,
                gas_pressure_pa: 0.0,
            }),
        },
        NodeDef::new(
            "pump",
            NodeKind::Pump(PumpDef {
                elevation_m: 0.5,
                added_head_m: 20.0,
                required_npsh_m: 3.0,
                efficiency: 0.7,
                suction_node_id: Some("tank".to_string()),
                discharge_node_id: Some("reg".to_string()),
            }),
        ),
        NodeDef::new(
            "reg",
            NodeKind::Regulator {
                elevation_m: 12.0,
                setpoint_pa: Some(200_000.0),
            },
        ),
    ];
    model.pipes = vec![
        PipeDef::new("s", "tank", "pump", 0.1, 4.0)
            .with_roughness(4.5e-5)
            .with_flow(0.01),
        PipeDef::new("d", "pump", "reg", 0.08, 35.0)
            .with_roughness(4.5e-5)
            .with_flow(0.01)
            .with_k_minor(1.5),
    ];
    model
}

#[test]
fn roundtrip_yaml_empty_model() {
    let model = Model::new("water");
    validate_model(&model).unwrap();

    let path = std::env::temp_dir().join("hf_project_roundtrip_empty.yaml");
    save_yaml(&path, &model).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(model, loaded);
}

#[test]
fn roundtrip_yaml_pumped_model() {
    let model = pumped_model();
    let path = std::env::temp_dir().join("hf_project_roundtrip_pumped.yaml");

    save_yaml(&path, &model).unwrap();
    let loaded = load_model(&path).unwrap();

    assert_eq!(model, loaded);
}

#[test]
fn roundtrip_json_pumped_model() {
    let model = pumped_model();
    let path = std::env::temp_dir().join("hf_project_roundtrip_pumped.json");

    save_json(&path, &model).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(model, loaded);
}

#[test]
fn save_refuses_invalid_model() {
    let mut model = pumped_model();
    model.pipes[0].length_m = -1.0;
    let path = std::env::temp_dir().join("hf_project_invalid.yaml");
    assert!(save_yaml(&path, &model).is_err());
}

#[test]
fn unknown_extension_is_rejected() {
    let path = std::env::temp_dir().join("hf_project_model.toml");
    assert!(matches!(
        load_model(&path),
        Err(hf_project::ProjectError::UnsupportedFormat { .. })
    ));
}
