use aerobody::{
    aero::AeroBody,
    config::{AeroConfig, BodyDescription, ConfigError},
    physics::BodyKinematics,
};
use approx::assert_relative_eq;
use nalgebra::Vector3;
use std::io::Write;
use tempfile::NamedTempFile;

const WATER_CONFIG: &str = r#"
fluid:
  density: 1000.0
  viscosity: 0.001
magnus:
  enabled: true
"#;

const PADDLE: &str = r#"
name: paddle
scale: [0.05, 1.2, 0.3]
camber: 0.01
"#;

#[test]
fn test_config_from_file_drives_body() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(WATER_CONFIG.as_bytes()).unwrap();

    let config = AeroConfig::from_file(file.path()).unwrap();
    assert!(config.magnus.enabled);
    assert_eq!(config.drag, AeroConfig::default().drag);

    let description = BodyDescription::from_yaml_str(PADDLE).unwrap();
    let mut water = AeroBody::from_description(&description, config).unwrap();
    let mut air = AeroBody::from_description(&description, AeroConfig::default()).unwrap();

    let wind = Vector3::new(0.0, 0.0, 2.0);
    water.step_with_wind(&BodyKinematics::default(), wind, Vector3::zeros()).unwrap();
    air.step_with_wind(&BodyKinematics::default(), wind, Vector3::zeros()).unwrap();

    assert_eq!(water.name(), "paddle");
    assert!(water.composer().get("magnus").is_some());
    assert!(air.composer().get("magnus").is_none());
    assert_relative_eq!(water.dynamic_pressure(), 0.5 * 1000.0 * 4.0);
    assert_relative_eq!(
        water.dynamic_pressure() / air.dynamic_pressure(),
        1000.0 / 1.2,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        water.coefficients().drag.reynolds_number,
        1000.0 * 2.0 * water.eab().chord() / 0.001,
        max_relative = 1e-12
    );
}

#[test]
fn test_body_description_sets_geometry() {
    let description = BodyDescription::from_yaml_str(PADDLE).unwrap();
    let body = AeroBody::from_description(&description, AeroConfig::default()).unwrap();

    assert_relative_eq!(body.body().span(), 1.2);
    assert_relative_eq!(body.body().chord(), 0.3);
    assert_relative_eq!(body.body().thickness(), 0.05);
    assert_relative_eq!(body.body().camber(), 0.01);
    assert!(!body.is_dynamically_variable_shape());
}

#[test]
fn test_invalid_files_are_rejected() {
    let negative_density = AeroConfig::from_yaml_str("fluid:\n  density: -1.0\n");
    assert!(matches!(negative_density, Err(ConfigError::ValidationError(_))));

    let malformed = AeroConfig::from_yaml_str("fluid: [1, 2");
    assert!(matches!(malformed, Err(ConfigError::YamlError(_))));

    let flat = BodyDescription::from_yaml_str("name: flat\nscale: [1.0, 0.0, 1.0]\n");
    assert!(matches!(flat, Err(ConfigError::ValidationError(_))));

    let missing = AeroConfig::from_file("/nonexistent/aero.yaml");
    assert!(matches!(missing, Err(ConfigError::FileError(_))));
}
