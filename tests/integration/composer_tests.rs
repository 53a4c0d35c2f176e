use aerobody::{
    aero::{
        AeroBody, AeroCurve, ComponentContribution, CustomAerofoil, ForceComposer, ThinAerofoil,
        TranslationalDrag,
    },
    components::PhysicsComponent,
    config::AeroConfig,
    physics::BodyKinematics,
};
use approx::assert_relative_eq;
use nalgebra::{UnitQuaternion, Vector3};
use pretty_assertions::assert_eq;

use crate::common::{assert_loads_valid, test_wing, wind_at, wing_with_composer};

fn tumbling_kinematics() -> BodyKinematics {
    BodyKinematics::new(
        Vector3::new(5.0, 120.0, -3.0),
        UnitQuaternion::from_euler_angles(0.2, -0.4, 0.9),
    )
    .with_linear_velocity(Vector3::new(4.0, -2.0, 25.0))
    .with_angular_velocity(Vector3::new(0.5, 1.5, -2.0))
}

fn contribution_sum(contributions: &[ComponentContribution]) -> Vector3<f64> {
    contributions.iter().map(|c| c.force_body).sum()
}

/// Net force and moment about the body position, totalled the way the force calculator does.
fn net_load(physics: &PhysicsComponent, position: &Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
    let mut force = Vector3::zeros();
    let mut moment = Vector3::zeros();
    for f in &physics.forces {
        force += f.vector;
        if let Some(point) = f.point {
            moment += (point - position).cross(&f.vector);
        }
    }
    for m in &physics.moments {
        moment += m.vector;
    }
    (force, moment)
}

#[test]
fn test_components_add_without_cross_terms() {
    let kinematics = tumbling_kinematics();

    let mut lift_only = wing_with_composer(ForceComposer::new().with(ThinAerofoil::default()));
    let mut drag_only = wing_with_composer(ForceComposer::new().with(TranslationalDrag::default()));
    let mut combined = test_wing(0.0);

    let lift = lift_only.step_all(&kinematics).unwrap().force_body;
    let drag = drag_only.step_all(&kinematics).unwrap().force_body;
    let loads = combined.step_all(&kinematics).unwrap().clone();

    assert_loads_valid(&loads);
    assert_relative_eq!(lift + drag, loads.force_body, epsilon = 1e-9);
    assert_relative_eq!(contribution_sum(&loads.contributions), loads.force_body, epsilon = 1e-9);

    let moments: Vector3<f64> = loads.contributions.iter().map(|c| c.moment_body).sum();
    assert_relative_eq!(moments, loads.moment_body, epsilon = 1e-9);
}

#[test]
fn test_removing_a_component_removes_its_load() {
    let kinematics = tumbling_kinematics();
    let mut body = test_wing(0.0);
    let full = body.step_all(&kinematics).unwrap().clone();
    let drag = full.contribution("translational_drag").unwrap().force_body;

    assert!(body.composer_mut().remove("translational_drag").is_some());
    let reduced = body.step_all(&kinematics).unwrap().clone();

    assert!(reduced.contribution("translational_drag").is_none());
    assert_relative_eq!(reduced.force_body, full.force_body - drag, epsilon = 1e-9);
}

#[test]
fn test_custom_aerofoil_replaces_thin_aerofoil() {
    let lift_curve = AeroCurve::new(vec![(-20.0, -1.0), (0.0, 0.0), (20.0, 1.0)]).unwrap();
    let composer = ForceComposer::new().with(CustomAerofoil::new(
        lift_curve,
        AeroCurve::constant(0.1),
        AeroCurve::constant(0.0),
    ));
    let mut body = wing_with_composer(composer);

    body.set_angle_of_attack(10f64.to_radians()).unwrap();
    body.compute_coefficients().unwrap();
    let loads = body.compute_forces().unwrap().clone();

    let qs = body.qs();
    let expected =
        qs * 0.5 * *body.lift_direction() - qs * 0.1 * *body.body_wind_direction();
    assert_relative_eq!(loads.force_body, expected, epsilon = 1e-9);
    assert_relative_eq!(loads.moment_body, Vector3::zeros(), epsilon = 1e-12);
}

#[test]
fn test_point_application_matches_resultant() {
    let kinematics = tumbling_kinematics();
    let mut body = test_wing(0.02);
    body.step_all(&kinematics).unwrap();

    let mut resultant = PhysicsComponent::new();
    let mut at_points = PhysicsComponent::new();
    body.apply_loads(&mut resultant);
    body.apply_loads_at_points(&mut at_points);

    assert_eq!(resultant.forces.len(), 1);
    assert_eq!(at_points.forces.len(), body.loads().contributions.len());

    let (force_a, moment_a) = net_load(&resultant, &kinematics.position);
    let (force_b, moment_b) = net_load(&at_points, &kinematics.position);
    assert_relative_eq!(force_a, force_b, epsilon = 1e-9);
    assert_relative_eq!(moment_a, moment_b, epsilon = 1e-9);
    assert_relative_eq!(force_a, body.loads().force_earth, epsilon = 1e-12);
}

#[test]
fn test_stages_are_reentrant() {
    let mut body = test_wing(0.03);
    let sweep: Vec<f64> = (-17..=17).map(|i| f64::from(i) * 5.0).collect();

    let mut first = Vec::new();
    for alpha_deg in &sweep {
        body.set_angle_of_attack(alpha_deg.to_radians()).unwrap();
        body.compute_coefficients().unwrap();
        first.push((body.coefficients().clone(), body.compute_forces().unwrap().clone()));
    }

    // Sweep backwards, then forwards again; every point must match the first pass
    for alpha_deg in sweep.iter().rev() {
        body.set_angle_of_attack(alpha_deg.to_radians()).unwrap();
        body.compute_coefficients().unwrap();
    }
    for (alpha_deg, (coefficients, loads)) in sweep.iter().zip(&first) {
        body.set_angle_of_attack(alpha_deg.to_radians()).unwrap();
        body.compute_coefficients().unwrap();
        assert_eq!(body.coefficients(), coefficients);
        assert_eq!(body.compute_forces().unwrap(), loads);
    }
}

#[test]
fn test_repeated_stage_is_idempotent() {
    let mut body = test_wing(0.0);
    let kinematics = tumbling_kinematics();
    body.step_all(&kinematics).unwrap();
    let once = body.telemetry();

    body.resolve_geometry().unwrap();
    body.resolve_wind(&kinematics, None, None).unwrap();
    body.resolve_angles().unwrap();
    body.resolve_angles().unwrap();
    body.resolve_eab().unwrap();
    body.resolve_eab().unwrap();
    body.compute_coefficients().unwrap();
    body.compute_coefficients().unwrap();
    body.compute_forces().unwrap();

    assert_eq!(body.telemetry(), once);
}

#[test]
fn test_telemetry_reports_current_step() {
    let mut body = AeroBody::builder(Vector3::new(4.0, 0.2, 1.0))
        .name("left_wing")
        .config(AeroConfig::default())
        .build()
        .unwrap();
    body.step_with_wind(&BodyKinematics::default(), wind_at(30.0, 6.0, 10.0), Vector3::zeros())
        .unwrap();

    let telemetry = body.telemetry();
    assert_eq!(telemetry.name, "left_wing");
    assert_relative_eq!(telemetry.alpha_deg, 6.0, epsilon = 1e-9);
    assert_relative_eq!(telemetry.beta_deg, 10.0, epsilon = 1e-9);
    assert_relative_eq!(telemetry.airspeed, 30.0, epsilon = 1e-9);
    assert_relative_eq!(telemetry.qs, telemetry.dynamic_pressure * telemetry.planform_area);
    assert_eq!(telemetry.force_body, body.loads().force_body);
}
