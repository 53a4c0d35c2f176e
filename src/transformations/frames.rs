use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::math::safe_normalize;

/// A coordinate frame positioned relative to its parent.
///
/// `rotation` takes vectors from this frame into the parent frame; the inverse is
/// stored alongside it and both are only ever written together by [`ReferenceFrame::set_rotation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceFrame {
    rotation: UnitQuaternion<f64>,
    inverse_rotation: UnitQuaternion<f64>,
    wind_velocity: Vector3<f64>,
    wind_direction: Vector3<f64>,
    angular_wind_velocity: Vector3<f64>,
    angular_wind_direction: Vector3<f64>,
}

impl Default for ReferenceFrame {
    fn default() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            inverse_rotation: UnitQuaternion::identity(),
            wind_velocity: Vector3::zeros(),
            wind_direction: Vector3::zeros(),
            angular_wind_velocity: Vector3::zeros(),
            angular_wind_direction: Vector3::zeros(),
        }
    }
}

impl ReferenceFrame {
    pub fn new(rotation: UnitQuaternion<f64>) -> Self {
        let mut frame = Self::default();
        frame.set_rotation(rotation);
        frame
    }

    pub fn set_rotation(&mut self, rotation: UnitQuaternion<f64>) {
        self.rotation = rotation;
        self.inverse_rotation = rotation.inverse();
    }

    /// Resolve wind vectors expressed in the parent frame into this frame.
    pub fn resolve_wind(&mut self, parent_wind: &Vector3<f64>, parent_angular_wind: &Vector3<f64>) {
        self.wind_velocity = self.inverse_rotation * parent_wind;
        self.wind_direction = safe_normalize(&self.wind_velocity);
        self.angular_wind_velocity = self.inverse_rotation * parent_angular_wind;
        self.angular_wind_direction = safe_normalize(&self.angular_wind_velocity);
    }

    /// Express a vector given in this frame in the parent frame.
    pub fn to_parent(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * v
    }

    /// Express a vector given in the parent frame in this frame.
    pub fn from_parent(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.inverse_rotation * v
    }

    pub fn rotation(&self) -> &UnitQuaternion<f64> {
        &self.rotation
    }

    pub fn inverse_rotation(&self) -> &UnitQuaternion<f64> {
        &self.inverse_rotation
    }

    pub fn wind_velocity(&self) -> &Vector3<f64> {
        &self.wind_velocity
    }

    pub fn wind_direction(&self) -> &Vector3<f64> {
        &self.wind_direction
    }

    pub fn angular_wind_velocity(&self) -> &Vector3<f64> {
        &self.angular_wind_velocity
    }

    pub fn angular_wind_direction(&self) -> &Vector3<f64> {
        &self.angular_wind_direction
    }
}
