use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Square that keeps the sign of its argument, `v²·sign(v)`.
#[inline]
pub fn signed_square(value: f64) -> f64 {
    value * value.abs()
}

/// Component-wise [`signed_square`].
pub fn signed_square_vector(v: &Vector3<f64>) -> Vector3<f64> {
    v.map(signed_square)
}

/// Standard logistic function `1 / (1 + e^x)`, as used by the stall blend.
#[inline]
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + x.exp())
}

/// Unit vector in the direction of `v`, or zero when `v` has no length.
pub fn safe_normalize(v: &Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm > 0.0 && norm.is_finite() {
        v / norm
    } else {
        Vector3::zeros()
    }
}

/// Rotation whose local z axis points along `forward` and local y axis along `up`.
pub fn look_rotation(forward: &Vector3<f64>, up: &Vector3<f64>) -> UnitQuaternion<f64> {
    UnitQuaternion::face_towards(forward, up)
}

/// Rescales `v` so its magnitude does not exceed `max`.
pub fn clamp_magnitude(v: &Vector3<f64>, max: f64) -> Vector3<f64> {
    let norm = v.norm();
    if norm > max && norm > 0.0 {
        v * (max / norm)
    } else {
        *v
    }
}

#[inline]
pub fn is_finite_vector(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}
