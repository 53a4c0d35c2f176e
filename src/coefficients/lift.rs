use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::config::LiftConfig;
use crate::utils::math::{logistic, rad_to_deg};

/// Inputs to the lift and pitching moment model, all taken from the equivalent aerodynamic body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftInputs {
    pub aspect_ratio: f64,
    pub thickness_to_chord: f64,
    pub camber_ratio: f64,
    /// Chordwise semi-axis (m)
    pub mid_axis: f64,
    /// Angle of attack (rad)
    pub alpha: f64,
    pub cos_alpha: f64,
    /// cos(2α), from the 2cos²α − 1 identity
    pub cos_2alpha: f64,
}

impl LiftInputs {
    pub fn new(aspect_ratio: f64, thickness_to_chord: f64, camber_ratio: f64, mid_axis: f64, alpha: f64) -> Self {
        let cos_alpha = alpha.cos();
        Self {
            aspect_ratio,
            thickness_to_chord,
            camber_ratio,
            mid_axis,
            alpha,
            cos_alpha,
            cos_2alpha: 2.0 * cos_alpha * cos_alpha - 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LiftCoefficients {
    pub aspect_ratio_correction: f64,
    pub thickness_correction: f64,
    /// Stall angle (degrees)
    pub stall_angle: f64,
    pub lift_curve_slope: f64,
    /// Zero-lift angle of attack (rad)
    pub zero_lift_angle: f64,
    pub cl_pre_stall: f64,
    pub cl_post_stall: f64,
    /// Weight of the pre-stall curve, 1 near the zero-lift angle and 0 deep in stall
    pub stall_blend: f64,
    pub cl: f64,
    pub cd_induced: f64,
    pub cm_0: f64,
    /// Distance of the centre of pressure ahead of the body centre along the chord (m)
    pub centre_of_pressure: f64,
    pub cm_delta: f64,
    pub cm: f64,
}

/// Lift slope attenuation for low aspect ratios, zero for a zero aspect ratio.
pub fn aspect_ratio_correction(aspect_ratio: f64) -> f64 {
    if aspect_ratio == 0.0 {
        0.0
    } else {
        (aspect_ratio / (2.0 + aspect_ratio)).clamp(0.0, 1.0)
    }
}

/// Viscous attenuation of the lift slope with thickness.
pub fn thickness_correction(thickness_to_chord: f64, config: &LiftConfig) -> f64 {
    (-config.thickness_correction * thickness_to_chord * thickness_to_chord).exp()
}

/// Stall angle in degrees, falling from the maximum towards the minimum as aspect ratio grows.
pub fn stall_angle(aspect_ratio: f64, config: &LiftConfig) -> f64 {
    config.stall_angle_min_deg
        + (config.stall_angle_max_deg - config.stall_angle_min_deg) * (-aspect_ratio / 2.0).exp()
}

/// Blend weight between the pre- and post-stall curves.
///
/// The sharpness constant is calibrated in degrees, so the angles are converted first.
pub fn stall_blend(alpha: f64, zero_lift_angle: f64, stall_angle_deg: f64, sharpness: f64) -> f64 {
    let offset_deg = rad_to_deg(zero_lift_angle - alpha);
    let upper = logistic((stall_angle_deg - offset_deg) * sharpness);
    let lower = logistic((-stall_angle_deg - offset_deg) * sharpness);
    lower - upper
}

impl LiftCoefficients {
    pub fn compute(inputs: &LiftInputs, config: &LiftConfig) -> Self {
        let aspect_ratio_correction = aspect_ratio_correction(inputs.aspect_ratio);
        let thickness_correction = thickness_correction(inputs.thickness_to_chord, config);
        let stall_angle = stall_angle(inputs.aspect_ratio, config);

        let lift_curve_slope = 2.0 * PI * aspect_ratio_correction * thickness_correction;
        let zero_lift_angle = -inputs.camber_ratio;
        let effective_alpha = inputs.alpha - zero_lift_angle;

        let cl_pre_stall = lift_curve_slope * effective_alpha;
        let cl_post_stall = 0.5 * config.cz_max * thickness_correction * (2.0 * effective_alpha).sin();

        let stall_blend = stall_blend(
            inputs.alpha,
            zero_lift_angle,
            stall_angle,
            config.stall_sharpness,
        );
        let cl = stall_blend * cl_pre_stall + (1.0 - stall_blend) * cl_post_stall;

        let cd_induced = if inputs.aspect_ratio > 0.0 {
            cl * cl / (PI * inputs.aspect_ratio)
        } else {
            0.0
        };

        // Camber moment only acts while the flow is attached
        let cm_0 = 0.25 * (-lift_curve_slope * zero_lift_angle * stall_blend);

        // z_cop = c/8 (cos 2α + 1) with c = 2 * mid_axis
        let centre_of_pressure = inputs.mid_axis / 4.0 * (inputs.cos_2alpha + 1.0);
        let cm_delta = if inputs.mid_axis > 0.0 {
            cl * centre_of_pressure * inputs.cos_alpha / inputs.mid_axis
        } else {
            0.0
        };

        Self {
            aspect_ratio_correction,
            thickness_correction,
            stall_angle,
            lift_curve_slope,
            zero_lift_angle,
            cl_pre_stall,
            cl_post_stall,
            stall_blend,
            cl,
            cd_induced,
            cm_0,
            centre_of_pressure,
            cm_delta,
            cm: cm_0 + cm_delta,
        }
    }
}
