use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::physics::ForceSink;

/// Loads collected for a rigid body during one tick, plus their totals.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub net_force: Vector3<f64>,
    pub net_moment: Vector3<f64>,
    pub forces: Vec<Force>,
    pub moments: Vec<Moment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    /// Point of application, in the same frame as the force.
    pub point: Option<Vector3<f64>>,
    pub frame: LoadFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Moment {
    pub vector: Vector3<f64>,
    pub frame: LoadFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LoadFrame {
    Body,
    Inertial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Custom(String),
}

impl PhysicsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    pub fn add_moment(&mut self, moment: Moment) {
        self.moments.push(moment);
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
        self.moments.clear();
        self.net_force = Vector3::zeros();
        self.net_moment = Vector3::zeros();
    }

    /// Drop every force and moment of one category, keeping the rest.
    pub fn clear_category(&mut self, category: &ForceCategory) {
        self.forces.retain(|f| &f.category != category);
        self.moments.retain(|m| &m.category != category);
    }
}

/// Loads arriving through the sink are aerodynamic and expressed in the inertial frame.
impl ForceSink for PhysicsComponent {
    fn apply_force(&mut self, force: Vector3<f64>) {
        self.add_force(Force {
            vector: force,
            point: None,
            frame: LoadFrame::Inertial,
            category: ForceCategory::Aerodynamic,
        });
    }

    fn apply_torque(&mut self, torque: Vector3<f64>) {
        self.add_moment(Moment {
            vector: torque,
            frame: LoadFrame::Inertial,
            category: ForceCategory::Aerodynamic,
        });
    }

    fn apply_force_at_point(&mut self, force: Vector3<f64>, point: Vector3<f64>) {
        self.add_force(Force {
            vector: force,
            point: Some(point),
            frame: LoadFrame::Inertial,
            category: ForceCategory::Aerodynamic,
        });
    }
}
