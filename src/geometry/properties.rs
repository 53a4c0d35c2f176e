use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::ellipsoid::EllipsoidBody;
use crate::utils::constants::KNUD_THOMSEN_EXPONENT;

/// Areas, volumes and axis ratios derived from the body ellipsoid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipsoidProperties {
    /// Projected ellipse area normal to each body axis.
    pub area_vector: Vector3<f64>,
    /// Per-axis volume terms used by the rotational lift model.
    pub volume_vector: Vector3<f64>,
    /// Planform area after any group area scaling.
    pub planform_area: f64,
    pub surface_area: f64,
    /// Pressure/shear blend ratios (thickness/chord, chord/span, thickness/span).
    pub axis_ratios: Vector3<f64>,
}

impl EllipsoidProperties {
    pub fn compute(body: &EllipsoidBody, area_scale: f64) -> Self {
        let major = body.major_axis();
        let minor = body.minor_axis();
        let mid = body.mid_axis();

        let area_vector = PI * Vector3::new(minor * mid, major * mid, major * minor);

        let volume_vector = 4.0 / 3.0
            * PI
            * Vector3::new(major * mid * mid, minor * major * major, mid * major * major);

        let p = KNUD_THOMSEN_EXPONENT;
        let surface_area = 4.0
            * PI
            * (((major * minor).powf(p) + (major * mid).powf(p) + (minor * mid).powf(p)) / 3.0)
                .powf(1.0 / p);

        let axis_ratios = Vector3::new(
            body.thickness() / body.chord(),
            body.chord() / body.span(),
            body.thickness() / body.span(),
        );

        Self {
            area_vector,
            volume_vector,
            planform_area: area_vector.y * area_scale,
            surface_area,
            axis_ratios,
        }
    }

    /// Planform area before group scaling.
    pub fn unscaled_planform_area(&self) -> f64 {
        self.area_vector.y
    }

    /// Area presented to a wind blowing along `wind_direction` (body frame, unit length).
    pub fn profile_area(&self, wind_direction: &Vector3<f64>) -> f64 {
        self.area_vector.component_mul(wind_direction).norm()
    }
}
