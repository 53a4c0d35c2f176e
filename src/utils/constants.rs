pub const AIR_DENSITY: f64 = 1.2; // kg/m^3
pub const AIR_VISCOSITY: f64 = 1.8e-5; // Pa·s

// Lift model
pub const STALL_ANGLE_MIN_DEG: f64 = 15.0;
pub const STALL_ANGLE_MAX_DEG: f64 = 35.0;
pub const STALL_SHARPNESS: f64 = 0.75; // per degree
pub const CZ_MAX: f64 = 1.2;
pub const THICKNESS_CORRECTION: f64 = 6.0;

// Drag model
pub const CD_FLAT_PLATE: f64 = 1.2;
pub const CD_ROUGH_SPHERE: f64 = 0.5;
pub const SKIN_FRICTION_FACTOR: f64 = 0.027;
pub const SKIN_FRICTION_EXPONENT: f64 = 1.0 / 7.0;

// Magnus model
pub const MAX_ROTATIONAL_LIFT_COEFFICIENT: f64 = 3.0;

/// The model is only derived for |alpha| up to this value (degrees).
pub const MAX_ANGLE_OF_ATTACK_DEG: f64 = 90.0;

/// Exponent of the Knud-Thomsen ellipsoid surface area approximation.
pub const KNUD_THOMSEN_EXPONENT: f64 = 1.6;
