use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Velocity of the surrounding fluid in the earth frame (y up).
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum AmbientFlow {
    #[default]
    Still,
    Constant {
        velocity: Vector3<f64>,
    },
    /// Horizontal wind growing with height as `u_r (h / z_r)^alpha`.
    PowerLaw {
        /// Wind speed at the reference height [m/s]
        u_r: f64,
        /// Reference height [m]
        z_r: f64,
        /// Direction the wind blows towards, from +z towards +x [rad]
        bearing: f64,
        alpha: f64,
    },
}

impl AmbientFlow {
    pub fn velocity_at(&self, position: &Vector3<f64>) -> Vector3<f64> {
        match self {
            AmbientFlow::Still => Vector3::zeros(),
            AmbientFlow::Constant { velocity } => *velocity,
            AmbientFlow::PowerLaw {
                u_r,
                z_r,
                bearing,
                alpha,
            } => {
                let height = position.y;
                if height <= 0.0 || *z_r <= 0.0 {
                    return Vector3::zeros();
                }
                let speed = u_r * (height / z_r).powf(*alpha);
                Vector3::new(bearing.sin(), 0.0, bearing.cos()) * speed
            }
        }
    }
}
