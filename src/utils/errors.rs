use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::aero::Stage;

/// Hard validation failures of the aerodynamic pipeline.
///
/// Guarded divisions (zero Reynolds number, zero aspect ratio, zero wind) are
/// not errors: they resolve to zero coefficients by construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AeroError {
    #[error("Degenerate geometry: scale ({x}, {y}, {z}) must be positive and finite")]
    GeometryDegenerate { x: f64, y: f64, z: f64 },

    #[error("Angle of attack {alpha_deg:.3} deg is outside the model range of +/-90 deg")]
    AngleOfAttackOutOfRange { alpha_deg: f64 },

    #[error("Stage {requested:?} requires {required:?}, last completed stage is {completed:?}")]
    StageOutOfOrder {
        requested: Stage,
        required: Stage,
        completed: Stage,
    },

    #[error("Aero group has no planform area to scale (total {total_planform})")]
    GroupDegenerate { total_planform: f64 },
}

/// Non-fatal conditions recovered during force composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AeroDiagnostic {
    /// A force contribution was NaN/Inf and was replaced by zero.
    NonFiniteForce { component: String },
    /// A moment contribution was NaN/Inf and was replaced by zero.
    NonFiniteMoment { component: String },
}

impl fmt::Display for AeroDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AeroDiagnostic::NonFiniteForce { component } => {
                write!(f, "non-finite force from '{}' replaced by zero", component)
            }
            AeroDiagnostic::NonFiniteMoment { component } => {
                write!(f, "non-finite moment from '{}' replaced by zero", component)
            }
        }
    }
}
