use aerobody::{
    components::SpatialComponent,
    physics::BodyKinematics,
};
use nalgebra::{UnitQuaternion, Vector3};

/// Body at rest at the origin with identity orientation
pub fn resting_kinematics() -> BodyKinematics {
    BodyKinematics::default()
}

/// Spatial component flying along +z at `speed`
pub fn create_test_spatial(speed: f64) -> SpatialComponent {
    SpatialComponent {
        position: Vector3::new(0.0, 100.0, 0.0),
        velocity: Vector3::new(0.0, 0.0, speed),
        attitude: UnitQuaternion::identity(),
        angular_velocity: Vector3::zeros(),
    }
}
