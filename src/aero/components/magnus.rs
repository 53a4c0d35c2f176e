use nalgebra::Vector3;

use super::{AeroComponent, ComponentOutput};
use crate::aero::body::AeroBody;

/// Lift from spin, `-CLr · qS`.
///
/// Earlier revisions wrote this as `-ρ v × (2 V ⊙ ω)`, which is the same force
/// without the coefficient cap. The sign is carried over unchanged from both.
#[derive(Debug, Clone, Default)]
pub struct MagnusLift {
    pub lift: Vector3<f64>,
}

impl AeroComponent for MagnusLift {
    fn name(&self) -> &str {
        "magnus"
    }

    fn evaluate(&mut self, body: &AeroBody) -> ComponentOutput {
        self.lift = -body.coefficients().rotational_lift * body.qs();
        ComponentOutput::force_at_centre(body, self.lift)
    }
}
