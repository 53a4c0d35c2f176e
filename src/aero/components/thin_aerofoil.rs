use nalgebra::Vector3;

use super::{pitching_moment, AeroComponent, ComponentOutput};
use crate::aero::body::AeroBody;
use crate::transformations::FrameId;

/// Lift, lift-induced drag and pitching moment from thin aerofoil theory with stall blending.
///
/// Induced drag is kept here rather than in a drag component since it only exists
/// because of the lift.
#[derive(Debug, Clone, Default)]
pub struct ThinAerofoil {
    pub lift: Vector3<f64>,
    pub induced_drag: Vector3<f64>,
    pub moment: Vector3<f64>,
}

impl AeroComponent for ThinAerofoil {
    fn name(&self) -> &str {
        "thin_aerofoil"
    }

    fn evaluate(&mut self, body: &AeroBody) -> ComponentOutput {
        let lift_coefficients = &body.coefficients().lift;
        let qs = body.qs();

        self.lift = qs * lift_coefficients.cl * *body.lift_direction();
        self.induced_drag = -lift_coefficients.cd_induced * qs * *body.body_wind_direction();
        self.moment = pitching_moment(body, lift_coefficients.cm);

        let centre_of_pressure = Vector3::new(0.0, 0.0, lift_coefficients.centre_of_pressure);
        let point_of_action = *body.position()
            + body
                .frames()
                .transform(FrameId::EAB, FrameId::EARTH, &centre_of_pressure);

        ComponentOutput {
            force: self.lift + self.induced_drag,
            moment: self.moment,
            point_of_action,
        }
    }
}
