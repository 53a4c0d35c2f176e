use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::physics::{BodyKinematics, KinematicsSource};

/// Component for storing spatial state of an entity
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in body frame [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

impl KinematicsSource for SpatialComponent {
    fn kinematics(&self) -> BodyKinematics {
        BodyKinematics {
            position: self.position,
            linear_velocity: self.velocity,
            angular_velocity: self.attitude * self.angular_velocity,
            orientation: self.attitude,
        }
    }
}
