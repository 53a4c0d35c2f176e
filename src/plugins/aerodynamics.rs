use bevy::prelude::*;

use crate::config::AeroConfig;
use crate::resources::AmbientFlow;
use crate::systems::{
    aero_body_system, aero_group_system, force_calculator_system, missing_physics_warning_system,
};

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum AerodynamicsSet {
    Groups,
    Bodies,
    ForceCalculation,
}

#[derive(Default)]
pub struct AerodynamicsPlugin {
    pub config: AeroConfig,
    pub ambient_flow: AmbientFlow,
    /// Fixed update rate [s], left to the host when `None`.
    pub timestep: Option<f64>,
}

impl AerodynamicsPlugin {
    pub fn with_config(config: AeroConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn with_ambient_flow(mut self, ambient_flow: AmbientFlow) -> Self {
        self.ambient_flow = ambient_flow;
        self
    }

    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = Some(timestep);
        self
    }
}

impl Plugin for AerodynamicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(self.ambient_flow.clone());

        if let Some(timestep) = self.timestep {
            app.insert_resource(Time::<Fixed>::from_seconds(timestep));
        }

        app.configure_sets(
            FixedUpdate,
            (
                AerodynamicsSet::Groups,
                AerodynamicsSet::Bodies,
                AerodynamicsSet::ForceCalculation,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                (missing_physics_warning_system, aero_group_system).in_set(AerodynamicsSet::Groups),
                aero_body_system.in_set(AerodynamicsSet::Bodies),
                force_calculator_system.in_set(AerodynamicsSet::ForceCalculation),
            ),
        );
    }
}
