use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::constants::*;

/// Tunable constants of the aerodynamic model.
///
/// Every field has a default, so a YAML file only needs the values it overrides.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AeroConfig {
    pub fluid: FluidConfig,
    pub lift: LiftConfig,
    pub drag: DragConfig,
    pub magnus: MagnusConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidConfig {
    /// Fluid density (kg/m^3)
    pub density: f64,
    /// Dynamic viscosity (Pa·s)
    pub viscosity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftConfig {
    /// Stall angle reached by an infinitely slender body (degrees)
    pub stall_angle_min_deg: f64,
    /// Stall angle of a zero aspect ratio body (degrees)
    pub stall_angle_max_deg: f64,
    /// Sharpness of the stall sigmoid, calibrated per degree
    pub stall_sharpness: f64,
    /// Peak of the post-stall normal force curve
    pub cz_max: f64,
    /// Exponential decay of the lift slope with thickness ratio
    pub thickness_correction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    pub cd_flat_plate: f64,
    pub cd_rough_sphere: f64,
    /// Factor of the turbulent flat plate law `Cf = k / Re^n`
    pub skin_friction_factor: f64,
    /// Exponent of the turbulent flat plate law `Cf = k / Re^n`
    pub skin_friction_exponent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnusConfig {
    pub enabled: bool,
    /// Cap on the magnitude of the rotational lift coefficient
    pub max_coefficient: f64,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            density: AIR_DENSITY,
            viscosity: AIR_VISCOSITY,
        }
    }
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self {
            stall_angle_min_deg: STALL_ANGLE_MIN_DEG,
            stall_angle_max_deg: STALL_ANGLE_MAX_DEG,
            stall_sharpness: STALL_SHARPNESS,
            cz_max: CZ_MAX,
            thickness_correction: THICKNESS_CORRECTION,
        }
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            cd_flat_plate: CD_FLAT_PLATE,
            cd_rough_sphere: CD_ROUGH_SPHERE,
            skin_friction_factor: SKIN_FRICTION_FACTOR,
            skin_friction_exponent: SKIN_FRICTION_EXPONENT,
        }
    }
}

impl Default for MagnusConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_coefficient: MAX_ROTATIONAL_LIFT_COEFFICIENT,
        }
    }
}
