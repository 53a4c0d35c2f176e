use aerobody::{
    aero::AeroBody,
    coefficients::{reynolds_number, skin_friction_coefficient},
    config::AeroConfig,
};
use approx::assert_relative_eq;
use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::common::{
    assert_loads_valid, flat_wing, magnus_config, resting_kinematics, test_wing, unit_sphere,
};

fn cl_at(body: &mut AeroBody, alpha_deg: f64) -> f64 {
    body.set_angle_of_attack(alpha_deg.to_radians()).unwrap();
    body.compute_coefficients().unwrap();
    body.coefficients().lift.cl
}

#[test]
fn test_unit_sphere_head_on() {
    let mut body = unit_sphere();
    let config = AeroConfig::default();
    let loads = body
        .step_with_wind(&resting_kinematics(), Vector3::new(0.0, 0.0, 1.0), Vector3::zeros())
        .unwrap()
        .clone();
    assert_loads_valid(&loads);

    let coefficients = body.coefficients();
    assert_eq!(body.angles().alpha, 0.0);
    assert_eq!(body.angles().beta, 0.0);
    assert_relative_eq!(body.eab().aspect_ratio(), 1.0 / PI, epsilon = 1e-12);
    assert_relative_eq!(coefficients.lift.cl, 0.0, epsilon = 1e-12);
    assert_relative_eq!(coefficients.lift.cd_induced, 0.0, epsilon = 1e-12);

    // Zero incidence: shear on both faces plus pressure drag of the rough sphere
    let re = reynolds_number(1.0, 1.0, &config.fluid);
    assert_relative_eq!(re, 1.2 / 1.8e-5, max_relative = 1e-12);
    let cf = skin_friction_coefficient(re, &config.drag);
    let expected_cd = 2.0 * cf + 1.0 * (1.0 * config.drag.cd_rough_sphere);

    assert_relative_eq!(coefficients.drag.cd_profile, expected_cd, epsilon = 1e-12);
    assert_relative_eq!(coefficients.drag.cd, expected_cd, epsilon = 1e-12);

    let q = 0.5 * 1.2;
    let drag = loads.contribution("translational_drag").unwrap();
    assert_relative_eq!(
        drag.force_body,
        Vector3::new(0.0, 0.0, -expected_cd * q * PI / 4.0),
        epsilon = 1e-12
    );
}

#[test]
fn test_flat_wing_lift_slope() {
    let mut body = flat_wing();
    let config = AeroConfig::default();
    let alpha = 5f64.to_radians();

    body.set_angle_of_attack(alpha).unwrap();
    body.compute_coefficients().unwrap();
    let lift = &body.coefficients().lift;

    let aspect_ratio = 10.0 / PI;
    let k_ar = aspect_ratio / (2.0 + aspect_ratio);
    let k_t = (-config.lift.thickness_correction * 0.01 * 0.01).exp();

    assert_relative_eq!(body.eab().aspect_ratio(), aspect_ratio, epsilon = 1e-9);
    assert_relative_eq!(lift.thickness_correction, k_t, epsilon = 1e-9);
    assert_relative_eq!(lift.lift_curve_slope, 2.0 * PI * k_ar * k_t, epsilon = 1e-9);
    assert_relative_eq!(lift.cl_pre_stall, lift.lift_curve_slope * alpha, epsilon = 1e-9);

    // Well below stall the blended lift follows the linear curve
    assert!(lift.stall_blend > 0.99);
    assert_relative_eq!(lift.cl, lift.cl_pre_stall, max_relative = 0.02);
}

#[test]
fn test_slender_wing_approaches_thin_aerofoil_slope() {
    let mut body = AeroBody::new(Vector3::new(1000.0, 0.01, 1.0), AeroConfig::default()).unwrap();
    body.set_angle_of_attack(5f64.to_radians()).unwrap();
    body.compute_coefficients().unwrap();

    let slope = body.coefficients().lift.lift_curve_slope;
    assert!(slope < 2.0 * PI);
    assert_relative_eq!(slope, 2.0 * PI, max_relative = 0.01);
}

#[test]
fn test_lift_is_odd_without_camber() {
    let mut body = test_wing(0.0);

    for alpha_deg in [1.0, 5.0, 12.0, 20.0, 35.0, 60.0, 85.0] {
        let positive = cl_at(&mut body, alpha_deg);
        let negative = cl_at(&mut body, -alpha_deg);
        assert_relative_eq!(negative, -positive, epsilon = 1e-10);
        assert!(positive > 0.0, "CL at {} deg = {}", alpha_deg, positive);
    }

    cl_at(&mut body, 0.0);
    let lift = &body.coefficients().lift;
    assert_eq!(lift.cl, 0.0);
    assert_eq!(lift.cm_delta, 0.0);
    assert_eq!(lift.cm_0, 0.0);
}

#[test]
fn test_camber_shifts_zero_lift_angle() {
    let mut body = test_wing(0.05);
    let cl = cl_at(&mut body, 0.0);

    assert_relative_eq!(body.coefficients().lift.zero_lift_angle, -0.05, epsilon = 1e-12);
    assert!(cl > 0.0);
    assert!(body.coefficients().lift.cm_0 > 0.0);
}

#[test]
fn test_lift_stalls() {
    let mut body = flat_wing();
    let stall = {
        cl_at(&mut body, 0.0);
        body.coefficients().lift.stall_angle
    };

    let before = cl_at(&mut body, stall - 5.0);
    let after = cl_at(&mut body, stall + 15.0);
    assert!(after < before, "CL {} after stall, {} before", after, before);
    assert!(body.coefficients().lift.stall_blend < 0.5);
}

#[test]
fn test_drag_rises_with_incidence() {
    let mut body = test_wing(0.0);
    let mut previous = 0.0;
    for alpha_deg in [0.0, 10.0, 30.0, 60.0, 89.0] {
        body.set_angle_of_attack(f64::to_radians(alpha_deg)).unwrap();
        body.compute_coefficients().unwrap();
        let cd_profile = body.coefficients().drag.cd_profile;
        assert!(cd_profile > previous, "CD {} at {} deg", cd_profile, alpha_deg);
        previous = cd_profile;
    }
}

#[test]
fn test_damping_opposes_rotation() {
    let mut body = test_wing(0.0);
    for omega in [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, -3.0, 0.0),
        Vector3::new(0.0, 0.0, 7.0),
        Vector3::new(2.0, -1.0, 0.5),
    ] {
        body.step_with_wind(&resting_kinematics(), Vector3::new(0.0, 0.0, 10.0), omega)
            .unwrap();
        let torque = body.coefficients().damping.torque;

        assert!(torque.dot(&omega) < 0.0, "torque {:?} for spin {:?}", torque, omega);
        for i in 0..3 {
            assert!(torque[i] * omega[i] <= 0.0);
        }
        let rotational = body.loads().contribution("rotational_drag").unwrap();
        assert_eq!(rotational.moment_body, torque);
        assert_eq!(rotational.force_body, Vector3::zeros());
    }
}

#[test]
fn test_magnus_force() {
    let mut body = AeroBody::builder(Vector3::new(1.0, 1.0, 1.0))
        .config(magnus_config())
        .build()
        .unwrap();

    let wind = Vector3::new(0.0, 0.0, 10.0);
    let spin = Vector3::new(1.0, 0.0, 0.0);
    body.step_with_wind(&resting_kinematics(), wind, spin).unwrap();

    let volume = body.properties().volume_vector;
    let expected = -2.0 * 1.2 * wind.cross(&volume.component_mul(&spin));
    let magnus = body.loads().contribution("magnus").unwrap();

    assert_relative_eq!(magnus.force_body, expected, epsilon = 1e-9);
    assert!(magnus.force_body.y < 0.0);
    assert_eq!(magnus.moment_body, Vector3::zeros());
}

#[test]
fn test_magnus_coefficient_is_capped() {
    let mut body = AeroBody::builder(Vector3::new(1.0, 1.0, 1.0))
        .config(magnus_config())
        .build()
        .unwrap();
    body.step_with_wind(&resting_kinematics(), Vector3::new(0.0, 0.0, 0.01), Vector3::new(500.0, 0.0, 0.0))
        .unwrap();

    let clr = body.coefficients().rotational_lift;
    assert_relative_eq!(clr.norm(), magnus_config().magnus.max_coefficient, epsilon = 1e-12);
}

#[test]
fn test_pitching_moment_sign_follows_lift() {
    let mut body = test_wing(0.0);
    body.set_angle_of_attack(8f64.to_radians()).unwrap();
    body.compute_coefficients().unwrap();
    let loads = body.compute_forces().unwrap().clone();

    let aerofoil = loads.contribution("thin_aerofoil").unwrap();
    assert!(aerofoil.force_body.y > 0.0);

    // Lift acting ahead of the centre pitches the nose up, same sense as r x F
    let arm = aerofoil.point_of_action - body.position();
    let r_cross_f = arm.cross(&aerofoil.force_earth);
    assert!(aerofoil.moment_earth.x < 0.0);
    assert!(aerofoil.moment_earth.x * r_cross_f.x > 0.0);
}
