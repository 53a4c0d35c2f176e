use serde::{Deserialize, Serialize};

use crate::config::{DragConfig, FluidConfig};

pub fn reynolds_number(speed: f64, length: f64, fluid: &FluidConfig) -> f64 {
    fluid.density * speed * length / fluid.viscosity
}

/// Turbulent flat plate skin friction, `Cf = k / Re^n`. Zero flow gives zero friction.
pub fn skin_friction_coefficient(reynolds_number: f64, config: &DragConfig) -> f64 {
    if reynolds_number == 0.0 {
        0.0
    } else {
        config.skin_friction_factor / reynolds_number.powf(config.skin_friction_exponent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragCoefficients {
    pub reynolds_number: f64,
    pub skin_friction: f64,
    pub cd_shear_0: f64,
    pub cd_shear_90: f64,
    pub cd_pressure_0: f64,
    pub cd_pressure_90: f64,
    pub cd_profile: f64,
    pub cd_induced: f64,
    pub cd: f64,
}

impl DragCoefficients {
    /// Profile drag blended from 0 to 90 degree incidence by sin²α, plus induced drag.
    pub fn compute(
        reynolds_number: f64,
        thickness_to_chord: f64,
        sin_alpha: f64,
        cd_induced: f64,
        config: &DragConfig,
    ) -> Self {
        let tc = thickness_to_chord;
        let skin_friction = skin_friction_coefficient(reynolds_number, config);

        let cd_shear_0 = 2.0 * skin_friction;
        let cd_shear_90 = tc * 2.0 * skin_friction;
        let cd_pressure_0 = tc * config.cd_rough_sphere;
        let cd_pressure_90 =
            config.cd_flat_plate - tc * (config.cd_flat_plate - config.cd_rough_sphere);

        let cd_zero_incidence = cd_shear_0 + tc * cd_pressure_0;
        let cd_profile = cd_zero_incidence
            + (cd_shear_90 + cd_pressure_90 - cd_zero_incidence) * sin_alpha * sin_alpha;

        Self {
            reynolds_number,
            skin_friction,
            cd_shear_0,
            cd_shear_90,
            cd_pressure_0,
            cd_pressure_90,
            cd_profile,
            cd_induced,
            cd: cd_profile + cd_induced,
        }
    }
}
