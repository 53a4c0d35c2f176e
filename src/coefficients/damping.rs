use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::drag::skin_friction_coefficient;
use crate::config::{DragConfig, FluidConfig};
use crate::geometry::{EllipsoidBody, EllipsoidProperties};
use crate::utils::math::signed_square_vector;

/// Torques resisting rotation about each body axis.
///
/// Each axis blends a pressure term and a skin friction term by that axis's ratio λ:
/// slender axes are pressure dominated, round ones shear dominated. Older revisions
/// of this model scaled the torques by fixed constants (1/64, π/64) or blended by
/// eccentricity squared instead of λ.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RotationalDamping {
    pub reynolds_number: Vector3<f64>,
    pub skin_friction: Vector3<f64>,
    /// ½ρ r³ ω|ω| per axis
    pub rotational_pressure: Vector3<f64>,
    pub pressure_torque: Vector3<f64>,
    pub shear_torque: Vector3<f64>,
    /// Net damping torque, always opposing the angular velocity.
    pub torque: Vector3<f64>,
}

impl RotationalDamping {
    /// `angular_velocity` is the body-frame angular wind.
    pub fn compute(
        angular_velocity: &Vector3<f64>,
        body: &EllipsoidBody,
        properties: &EllipsoidProperties,
        fluid: &FluidConfig,
        drag: &DragConfig,
    ) -> Self {
        let major = body.major_axis();
        let mid = body.mid_axis();
        let w = angular_velocity;

        let rotational_reynolds = |omega: f64, length_squared: f64| {
            (PI * fluid.density * omega * length_squared / fluid.viscosity).abs()
        };
        let reynolds_number = Vector3::new(
            rotational_reynolds(w.x, mid * major),
            rotational_reynolds(w.y, major * major),
            rotational_reynolds(w.z, major * major),
        );
        let skin_friction = reynolds_number.map(|re| skin_friction_coefficient(re, drag));

        let signed = signed_square_vector(w);
        let rotational_pressure = 0.5
            * fluid.density
            * Vector3::new(
                mid.powi(3) * signed.x,
                major.powi(3) * signed.y,
                major.powi(3) * signed.z,
            );

        let area = &properties.area_vector;
        let pressure_torque = drag.cd_flat_plate
            * Vector3::new(area.y / 2.0, area.z / 2.0, area.y / 2.0).component_mul(&rotational_pressure);
        let shear_torque = skin_friction.component_mul(&rotational_pressure) * properties.surface_area;

        let lambda = &properties.axis_ratios;
        let blended = (Vector3::repeat(1.0) - lambda).component_mul(&pressure_torque)
            + lambda.component_mul(&shear_torque);

        Self {
            reynolds_number,
            skin_friction,
            rotational_pressure,
            pressure_torque,
            shear_torque,
            torque: -blended,
        }
    }
}
