use nalgebra::Vector3;

use crate::config::MagnusConfig;
use crate::utils::math::clamp_magnitude;

/// Rotational lift coefficient `CLr = 4 v × (V ⊙ ω) / (|v|² S)`.
///
/// Zero when there is no wind. The magnitude is capped because the coefficient
/// grows without bound as the wind speed falls for a fixed spin.
pub fn rotational_lift_coefficient(
    wind_velocity: &Vector3<f64>,
    angular_wind_velocity: &Vector3<f64>,
    volume_vector: &Vector3<f64>,
    planform_area: f64,
    config: &MagnusConfig,
) -> Vector3<f64> {
    let speed_squared = wind_velocity.norm_squared();
    if speed_squared == 0.0 || planform_area <= 0.0 {
        return Vector3::zeros();
    }

    let spin_volume = volume_vector.component_mul(angular_wind_velocity);
    let coefficient = 4.0 * wind_velocity.cross(&spin_volume) / (speed_squared * planform_area);
    clamp_magnitude(&coefficient, config.max_coefficient)
}
