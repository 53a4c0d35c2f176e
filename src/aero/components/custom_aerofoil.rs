use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::{pitching_moment, AeroComponent, ComponentOutput};
use crate::aero::body::AeroBody;
use crate::config::ConfigError;
use crate::utils::math::{lerp, rad_to_deg};

/// Piecewise-linear coefficient curve over angle of attack in degrees.
///
/// Held constant beyond the first and last points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct AeroCurve {
    points: Vec<(f64, f64)>,
}

impl AeroCurve {
    pub fn new(mut points: Vec<(f64, f64)>) -> Result<Self, ConfigError> {
        if points.is_empty() {
            return Err(ConfigError::ValidationError(
                "aero curve needs at least one point".to_string(),
            ));
        }
        if points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(ConfigError::ValidationError(
                "aero curve points must be finite".to_string(),
            ));
        }
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(Self { points })
    }

    pub fn constant(value: f64) -> Self {
        Self {
            points: vec![(0.0, value)],
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if x <= first.0 {
            return first.1;
        }
        if x >= last.0 {
            return last.1;
        }

        let upper = self.points.partition_point(|p| p.0 <= x);
        let (x0, y0) = self.points[upper - 1];
        let (x1, y1) = self.points[upper];
        if x1 == x0 {
            return y1;
        }
        lerp(y0, y1, (x - x0) / (x1 - x0))
    }
}

impl TryFrom<Vec<(f64, f64)>> for AeroCurve {
    type Error = ConfigError;

    fn try_from(points: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<AeroCurve> for Vec<(f64, f64)> {
    fn from(curve: AeroCurve) -> Self {
        curve.points
    }
}

/// Lift, drag and pitching moment looked up from measured section curves.
///
/// The curves are indexed by the effective angle of attack, α − α₀, in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomAerofoil {
    pub lift_curve: AeroCurve,
    pub drag_curve: AeroCurve,
    pub moment_curve: AeroCurve,
    #[serde(skip)]
    pub cl: f64,
    #[serde(skip)]
    pub cd: f64,
    #[serde(skip)]
    pub cm: f64,
}

impl CustomAerofoil {
    pub fn new(lift_curve: AeroCurve, drag_curve: AeroCurve, moment_curve: AeroCurve) -> Self {
        Self {
            lift_curve,
            drag_curve,
            moment_curve,
            cl: 0.0,
            cd: 0.0,
            cm: 0.0,
        }
    }
}

impl AeroComponent for CustomAerofoil {
    fn name(&self) -> &str {
        "custom_aerofoil"
    }

    fn evaluate(&mut self, body: &AeroBody) -> ComponentOutput {
        let zero_lift_angle = body.coefficients().lift.zero_lift_angle;
        let effective_alpha_deg = rad_to_deg(body.angles().alpha - zero_lift_angle);

        self.cl = self.lift_curve.evaluate(effective_alpha_deg);
        self.cd = self.drag_curve.evaluate(effective_alpha_deg);
        self.cm = self.moment_curve.evaluate(effective_alpha_deg);

        let qs = body.qs();
        let lift: Vector3<f64> = qs * self.cl * *body.lift_direction();
        let drag: Vector3<f64> = -qs * self.cd * *body.body_wind_direction();

        ComponentOutput {
            force: lift + drag,
            moment: pitching_moment(body, self.cm),
            point_of_action: *body.position(),
        }
    }
}
