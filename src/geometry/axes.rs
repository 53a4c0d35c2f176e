use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::{math::look_rotation, AeroError};

/// Mapping of object-space extents onto aerodynamic axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisAssignment {
    pub span: f64,
    pub thickness: f64,
    pub chord: f64,
    /// Object-space unit axis carrying the span.
    pub span_axis: Vector3<f64>,
    /// Object-space unit axis normal to the lifting plane.
    pub thickness_axis: Vector3<f64>,
    /// Object-space unit axis along the chord.
    pub chord_axis: Vector3<f64>,
    /// Body-to-object rotation: body z onto the chord axis, body y onto the thickness axis.
    pub rotation: UnitQuaternion<f64>,
}

/// Sort object extents into span >= chord >= thickness.
///
/// Ties resolve towards the identity mapping (x span, y thickness, z chord), so a
/// sphere keeps the object axes as its aerodynamic axes.
pub fn assign_body_axes(scale: &Vector3<f64>) -> Result<AxisAssignment, AeroError> {
    let (x, y, z) = (scale.x, scale.y, scale.z);
    if scale.iter().any(|s| !(*s > 0.0 && s.is_finite())) {
        return Err(AeroError::GeometryDegenerate { x, y, z });
    }

    let (ex, ey, ez) = (Vector3::x(), Vector3::y(), Vector3::z());

    // (span, thickness, chord) values and the object axis each one lies along
    let ((span, span_axis), (thickness, thickness_axis), (chord, chord_axis)) = if x >= y {
        if y > z {
            ((x, ex), (z, ez), (y, ey))
        } else if x >= z {
            ((x, ex), (y, ey), (z, ez))
        } else {
            ((z, ez), (y, ey), (x, ex))
        }
    } else if y >= z {
        if x >= z {
            ((y, ey), (z, ez), (x, ex))
        } else {
            ((y, ey), (x, ex), (z, ez))
        }
    } else {
        ((z, ez), (x, ex), (y, ey))
    };

    Ok(AxisAssignment {
        span,
        thickness,
        chord,
        span_axis,
        thickness_axis,
        chord_axis,
        rotation: look_rotation(&chord_axis, &thickness_axis),
    })
}
