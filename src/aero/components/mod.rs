//! Force generators attached to an [`AeroBody`](crate::aero::AeroBody).
//!
//! Each component reads the resolved body state and returns its own force and
//! moment. Any coupling between two physical effects lives inside one component.

mod custom_aerofoil;
mod magnus;
mod rotational_drag;
mod thin_aerofoil;
mod translational_drag;

pub use custom_aerofoil::{AeroCurve, CustomAerofoil};
pub use magnus::MagnusLift;
pub use rotational_drag::RotationalDrag;
pub use thin_aerofoil::ThinAerofoil;
pub use translational_drag::TranslationalDrag;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::body::AeroBody;

/// Load produced by one component for one step.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentOutput {
    /// Body frame (N)
    pub force: Vector3<f64>,
    /// Body frame, about the body position (N·m)
    pub moment: Vector3<f64>,
    /// Earth frame
    pub point_of_action: Vector3<f64>,
}

impl ComponentOutput {
    /// A force through the body position with no moment.
    pub fn force_at_centre(body: &AeroBody, force: Vector3<f64>) -> Self {
        Self {
            force,
            moment: Vector3::zeros(),
            point_of_action: *body.position(),
        }
    }

    pub fn moment_only(body: &AeroBody, moment: Vector3<f64>) -> Self {
        Self {
            force: Vector3::zeros(),
            moment,
            point_of_action: *body.position(),
        }
    }
}

pub trait AeroComponent: Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Called once per step after the body's coefficients are computed.
    fn evaluate(&mut self, body: &AeroBody) -> ComponentOutput;
}

/// Pitching moment about the span of the equivalent body, expressed in the body frame.
///
/// A centre of pressure ahead of the body centre with positive lift gives a negative
/// moment here, the same sign as `r × F` for that lift.
pub(crate) fn pitching_moment(body: &AeroBody, cm: f64) -> Vector3<f64> {
    use crate::transformations::FrameId;

    let moment_eab = Vector3::new(-cm * body.qs() * body.eab().chord(), 0.0, 0.0);
    body.frames()
        .transform(FrameId::EAB, FrameId::BODY, &moment_eab)
}
