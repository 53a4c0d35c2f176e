//! Empirical coefficient model for ellipsoidal bodies.
//!
//! Each sub-module is a set of pure functions of the resolved geometry and
//! angles. Nothing here reads frames or owns state between steps.

pub mod damping;
pub mod drag;
pub mod lift;
pub mod magnus;

pub use damping::RotationalDamping;
pub use drag::{reynolds_number, skin_friction_coefficient, DragCoefficients};
pub use lift::{LiftCoefficients, LiftInputs};
pub use magnus::rotational_lift_coefficient;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Every coefficient computed for one body in one step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AeroCoefficients {
    pub lift: LiftCoefficients,
    pub drag: DragCoefficients,
    pub damping: RotationalDamping,
    /// Rotational (Magnus) lift coefficient vector, body frame.
    pub rotational_lift: Vector3<f64>,
}
