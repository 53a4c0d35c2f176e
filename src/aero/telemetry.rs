use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::body::AeroBody;
use super::state::Stage;
use crate::coefficients::AeroCoefficients;

/// Snapshot of a body's derived state for logging and plotting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AeroTelemetry {
    pub name: String,
    pub stage: Stage,
    pub alpha_deg: f64,
    pub beta_deg: f64,
    pub airspeed: f64,
    pub dynamic_pressure: f64,
    pub qs: f64,
    pub planform_area: f64,
    pub profile_area: f64,
    pub coefficients: AeroCoefficients,
    pub force_body: Vector3<f64>,
    pub moment_body: Vector3<f64>,
    pub force_earth: Vector3<f64>,
    pub moment_earth: Vector3<f64>,
}

impl AeroBody {
    pub fn telemetry(&self) -> AeroTelemetry {
        let loads = self.loads();
        AeroTelemetry {
            name: self.name().to_string(),
            stage: self.stage(),
            alpha_deg: self.angles().alpha_deg(),
            beta_deg: self.angles().beta_deg(),
            airspeed: self.flow().airspeed,
            dynamic_pressure: self.dynamic_pressure(),
            qs: self.qs(),
            planform_area: self.properties().planform_area,
            profile_area: self.profile_area(),
            coefficients: self.coefficients().clone(),
            force_body: loads.force_body,
            moment_body: loads.moment_body,
            force_earth: loads.force_earth,
            moment_earth: loads.moment_earth,
        }
    }
}
