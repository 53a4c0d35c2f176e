use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Ellipsoid described by its three diameters in aerodynamic axes.
///
/// Span runs along body x, thickness along body y and chord along body z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipsoidBody {
    span: f64,
    thickness: f64,
    chord: f64,
    camber: f64,
    aspect_ratio: f64,
    thickness_to_chord: f64,
    camber_ratio: f64,
}

impl Default for EllipsoidBody {
    fn default() -> Self {
        Self::from_diameters(1.0, 1.0, 1.0, 0.0)
    }
}

impl EllipsoidBody {
    /// Build from diameters. Callers are responsible for positive dimensions.
    pub fn from_diameters(span: f64, thickness: f64, chord: f64, camber: f64) -> Self {
        let mut body = Self {
            span,
            thickness,
            chord,
            camber,
            aspect_ratio: 0.0,
            thickness_to_chord: 0.0,
            camber_ratio: 0.0,
        };
        body.set_aerodynamic_ratios(camber);
        body
    }

    /// Build from semi-axes: major along span, minor along thickness, mid along chord.
    pub fn from_radii(major: f64, minor: f64, mid: f64, camber: f64) -> Self {
        Self::from_diameters(2.0 * major, 2.0 * minor, 2.0 * mid, camber)
    }

    pub fn set_aerodynamic_ratios(&mut self, camber: f64) {
        self.camber = camber;
        self.aspect_ratio = self.span / (PI * self.chord);
        self.thickness_to_chord = self.thickness / self.chord;
        self.camber_ratio = camber / self.chord;
    }

    /// Equivalent body seen head-on by a wind with sideslip `beta`.
    ///
    /// The span/chord ellipse is projected into the wind while keeping its area,
    /// so `major * mid` is the same before and after.
    pub fn equivalent_aerodynamic_body(&self, sin_beta: f64, cos_beta: f64) -> Self {
        let major = self.major_axis();
        let mid = self.mid_axis();

        let projected_mid = major * mid
            / (mid * mid * sin_beta * sin_beta + major * major * cos_beta * cos_beta).sqrt();
        let projected_major = major * mid / projected_mid;

        Self::from_radii(projected_major, self.minor_axis(), projected_mid, self.camber)
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn chord(&self) -> f64 {
        self.chord
    }

    pub fn camber(&self) -> f64 {
        self.camber
    }

    /// Semi-axis along the span.
    pub fn major_axis(&self) -> f64 {
        self.span / 2.0
    }

    /// Semi-axis along the thickness.
    pub fn minor_axis(&self) -> f64 {
        self.thickness / 2.0
    }

    /// Semi-axis along the chord.
    pub fn mid_axis(&self) -> f64 {
        self.chord / 2.0
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn thickness_to_chord(&self) -> f64 {
        self.thickness_to_chord
    }

    pub fn camber_ratio(&self) -> f64 {
        self.camber_ratio
    }
}
