use nalgebra::Vector3;

use super::{AeroComponent, ComponentOutput};
use crate::aero::body::AeroBody;

/// Torque resisting rotation, from the body's rotational damping coefficients.
#[derive(Debug, Clone, Default)]
pub struct RotationalDrag {
    pub torque: Vector3<f64>,
}

impl AeroComponent for RotationalDrag {
    fn name(&self) -> &str {
        "rotational_drag"
    }

    fn evaluate(&mut self, body: &AeroBody) -> ComponentOutput {
        self.torque = body.coefficients().damping.torque;
        ComponentOutput::moment_only(body, self.torque)
    }
}
