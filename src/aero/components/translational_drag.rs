use nalgebra::Vector3;

use super::{AeroComponent, ComponentOutput};
use crate::aero::body::AeroBody;

/// Profile drag on the area presented to the wind.
#[derive(Debug, Clone, Default)]
pub struct TranslationalDrag {
    pub drag: Vector3<f64>,
}

impl AeroComponent for TranslationalDrag {
    fn name(&self) -> &str {
        "translational_drag"
    }

    fn evaluate(&mut self, body: &AeroBody) -> ComponentOutput {
        let cd_profile = body.coefficients().drag.cd_profile;
        self.drag = -cd_profile * body.dynamic_pressure() * body.profile_area()
            * *body.body_wind_direction();
        ComponentOutput::force_at_centre(body, self.drag)
    }
}
