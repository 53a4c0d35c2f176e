use nalgebra::Vector3;

use super::kinematics::BodyKinematics;

/// Supplies the rigid-body state the aerodynamic model reads each step.
pub trait KinematicsSource {
    fn kinematics(&self) -> BodyKinematics;
}

/// Receives earth-frame loads from the aerodynamic model.
pub trait ForceSink {
    fn apply_force(&mut self, force: Vector3<f64>);
    fn apply_torque(&mut self, torque: Vector3<f64>);
    fn apply_force_at_point(&mut self, force: Vector3<f64>, point: Vector3<f64>);
}

/// Supplies object-space extents along x, y and z.
pub trait ShapeSource {
    fn scale(&self) -> Vector3<f64>;
}

impl KinematicsSource for BodyKinematics {
    fn kinematics(&self) -> BodyKinematics {
        *self
    }
}
