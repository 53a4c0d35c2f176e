use serde::{Deserialize, Serialize};

use crate::utils::{constants::MAX_ANGLE_OF_ATTACK_DEG, math::rad_to_deg, AeroError};

/// Pipeline stages in the order they must run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Created,
    Geometry,
    Wind,
    Angles,
    Eab,
    Coefficients,
    Forces,
}

impl Stage {
    /// The stage that has to be complete before this one can run.
    pub fn prerequisite(self) -> Stage {
        match self {
            Stage::Created | Stage::Geometry => Stage::Created,
            Stage::Wind => Stage::Geometry,
            Stage::Angles => Stage::Wind,
            Stage::Eab => Stage::Angles,
            Stage::Coefficients => Stage::Eab,
            Stage::Forces => Stage::Coefficients,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowState {
    /// ½ρ|v|² from the body-frame wind (Pa)
    pub dynamic_pressure: f64,
    /// Dynamic pressure times planform area (N)
    pub qs: f64,
    /// Body-frame wind speed (m/s)
    pub airspeed: f64,
}

/// Angle of attack and sideslip, with the trig terms reused downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroAngles {
    pub alpha: f64,
    pub beta: f64,
    pub sin_alpha: f64,
    pub cos_alpha: f64,
    pub cos_2alpha: f64,
    pub sin_beta: f64,
    pub cos_beta: f64,
}

impl Default for AeroAngles {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl AeroAngles {
    pub fn new(alpha: f64, beta: f64) -> Self {
        let (sin_alpha, cos_alpha) = alpha.sin_cos();
        let (sin_beta, cos_beta) = beta.sin_cos();
        Self {
            alpha,
            beta,
            sin_alpha,
            cos_alpha,
            cos_2alpha: 2.0 * cos_alpha * cos_alpha - 1.0,
            sin_beta,
            cos_beta,
        }
    }

    pub fn alpha_deg(&self) -> f64 {
        rad_to_deg(self.alpha)
    }

    pub fn beta_deg(&self) -> f64 {
        rad_to_deg(self.beta)
    }
}

/// The lift and drag models are only derived for |α| ≤ 90°.
pub fn validate_angle_of_attack(alpha: f64) -> Result<(), AeroError> {
    let alpha_deg = rad_to_deg(alpha);
    if alpha_deg.abs() > MAX_ANGLE_OF_ATTACK_DEG || alpha_deg.is_nan() {
        return Err(AeroError::AngleOfAttackOutOfRange { alpha_deg });
    }
    Ok(())
}
