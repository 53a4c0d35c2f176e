use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::physics::ShapeSource;

/// Object-space extents of an aerodynamic body [m]
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeComponent {
    pub scale: Vector3<f64>,
}

impl ShapeComponent {
    pub fn new(scale: Vector3<f64>) -> Self {
        Self { scale }
    }
}

impl ShapeSource for ShapeComponent {
    fn scale(&self) -> Vector3<f64> {
        self.scale
    }
}
