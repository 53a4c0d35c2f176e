use aerobody::{aero::AeroBody, config::AeroConfig, utils::AeroError};
use approx::assert_relative_eq;
use nalgebra::{UnitQuaternion, Vector3};

use crate::common::assert_axes_ordered;

fn sorted_desc(scale: &Vector3<f64>) -> Vec<f64> {
    let mut values: Vec<f64> = scale.iter().copied().collect();
    values.sort_by(|a, b| b.total_cmp(a));
    values
}

#[test]
fn test_axis_ordering_for_all_permutations() {
    let orderings = [
        Vector3::new(3.0, 2.0, 1.0),
        Vector3::new(3.0, 1.0, 2.0),
        Vector3::new(2.0, 3.0, 1.0),
        Vector3::new(1.0, 3.0, 2.0),
        Vector3::new(2.0, 1.0, 3.0),
        Vector3::new(1.0, 2.0, 3.0),
    ];

    for scale in orderings {
        let body = AeroBody::new(scale, AeroConfig::default()).unwrap();
        assert_axes_ordered(&body);

        let ellipsoid = body.body();
        assert_eq!(
            vec![ellipsoid.span(), ellipsoid.chord(), ellipsoid.thickness()],
            sorted_desc(&scale),
            "scale {:?}",
            scale
        );

        // The body rotation carries the body axes onto the object axes chosen for them
        let rotation = body.axes().rotation;
        assert_relative_eq!(rotation * Vector3::z(), body.axes().chord_axis, epsilon = 1e-12);
        assert_relative_eq!(rotation * Vector3::y(), body.axes().thickness_axis, epsilon = 1e-12);
    }
}

#[test]
fn test_axis_ordering_on_arbitrary_scales() {
    let mut value = 0.37;
    for _ in 0..50 {
        // Deterministic spread of positive extents
        let x = value;
        value = (value * 7.13 + 0.61) % 5.0 + 0.01;
        let y = value;
        value = (value * 3.71 + 1.19) % 5.0 + 0.01;
        let z = value;
        value = (value * 5.37 + 0.29) % 5.0 + 0.01;

        let scale = Vector3::new(x, y, z);
        let body = AeroBody::new(scale, AeroConfig::default()).unwrap();
        assert_axes_ordered(&body);
        assert_eq!(
            vec![body.body().span(), body.body().chord(), body.body().thickness()],
            sorted_desc(&scale)
        );
    }
}

#[test]
fn test_three_way_tie_keeps_identity_axes() {
    let body = AeroBody::new(Vector3::new(2.0, 2.0, 2.0), AeroConfig::default()).unwrap();
    let axes = body.axes();

    assert_eq!(axes.span_axis, Vector3::x());
    assert_eq!(axes.thickness_axis, Vector3::y());
    assert_eq!(axes.chord_axis, Vector3::z());
    assert_relative_eq!(axes.rotation, UnitQuaternion::identity(), epsilon = 1e-12);
}

#[test]
fn test_degenerate_geometry_rejected() {
    for scale in [
        Vector3::new(0.0, 1.0, 1.0),
        Vector3::new(1.0, -2.0, 1.0),
        Vector3::new(1.0, 1.0, f64::NAN),
    ] {
        let result = AeroBody::new(scale, AeroConfig::default());
        assert!(
            matches!(result, Err(AeroError::GeometryDegenerate { .. })),
            "scale {:?} accepted",
            scale
        );
    }
}

#[test]
fn test_dynamic_shape_rejects_degenerate_rescale() {
    let mut body = AeroBody::builder(Vector3::new(4.0, 0.2, 1.0))
        .dynamically_variable_shape(true)
        .build()
        .unwrap();
    body.set_scale(Vector3::new(4.0, 0.0, 1.0));

    let result = body.resolve_geometry();
    assert!(matches!(result, Err(AeroError::GeometryDegenerate { .. })));
}

#[test]
fn test_sphere_properties() {
    let body = AeroBody::new(Vector3::new(1.0, 1.0, 1.0), AeroConfig::default()).unwrap();
    let properties = body.properties();
    let quarter_pi = std::f64::consts::FRAC_PI_4;

    assert_relative_eq!(properties.area_vector, Vector3::repeat(quarter_pi), epsilon = 1e-12);
    assert_relative_eq!(properties.planform_area, quarter_pi, epsilon = 1e-12);
    // Knud Thomsen's approximation is exact for a sphere
    assert_relative_eq!(properties.surface_area, std::f64::consts::PI, epsilon = 1e-12);
    assert_relative_eq!(body.body().aspect_ratio(), 1.0 / std::f64::consts::PI, epsilon = 1e-12);
}
