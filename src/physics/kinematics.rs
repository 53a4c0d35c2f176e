use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Rigid-body state handed to the aerodynamic model each step. All vectors are in the earth frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyKinematics {
    pub position: Vector3<f64>,
    pub linear_velocity: Vector3<f64>,
    pub angular_velocity: Vector3<f64>,
    /// Object-to-earth rotation
    pub orientation: UnitQuaternion<f64>,
}

impl Default for BodyKinematics {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            linear_velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
        }
    }
}

impl BodyKinematics {
    pub fn new(position: Vector3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            position,
            orientation,
            ..Default::default()
        }
    }

    pub fn with_linear_velocity(mut self, velocity: Vector3<f64>) -> Self {
        self.linear_velocity = velocity;
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: Vector3<f64>) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }
}
