use bevy::prelude::*;

use crate::components::{
    AeroBodyComponent, ForceCategory, LoadApplication, PhysicsComponent, ShapeComponent,
    SpatialComponent,
};
use crate::config::AeroConfig;
use crate::physics::{KinematicsSource, ShapeSource};
use crate::resources::AmbientFlow;

/// Run the full aerodynamic pipeline for every body and hand the loads to its physics component.
///
/// A body that fails validation contributes no aerodynamic load for the tick.
pub fn aero_body_system(
    config: Res<AeroConfig>,
    ambient_flow: Res<AmbientFlow>,
    mut query: Query<(
        &mut AeroBodyComponent,
        &SpatialComponent,
        Option<&ShapeComponent>,
        Option<&mut PhysicsComponent>,
    )>,
) {
    for (mut aero, spatial, shape, physics) in query.iter_mut() {
        let aero = aero.as_mut();
        let kinematics = spatial.kinematics();

        if config.is_changed() {
            aero.body.set_config((*config).clone());
        }
        if let Some(shape) = shape {
            if aero.body.is_dynamically_variable_shape() {
                aero.body.set_scale(shape.scale());
            }
        }
        aero.body
            .set_external_flow(ambient_flow.velocity_at(&kinematics.position));

        let result = aero.body.step_all(&kinematics).map(|_| ());

        let mut physics = physics;
        if let Some(physics) = physics.as_mut() {
            physics.clear_category(&ForceCategory::Aerodynamic);
        }

        match result {
            Ok(()) => {
                if aero.halted.take().is_some() {
                    info!("Aero body '{}' resumed", aero.body.name());
                }
                if let Some(physics) = physics.as_mut() {
                    match aero.application {
                        LoadApplication::Resultant => aero.body.apply_loads(physics.as_mut()),
                        LoadApplication::PointOfAction => {
                            aero.body.apply_loads_at_points(physics.as_mut())
                        }
                    }
                }
            }
            Err(e) => {
                if aero.halted.as_ref() != Some(&e) {
                    error!("Aero body '{}' halted for this tick: {}", aero.body.name(), e);
                }
                aero.halted = Some(e);
            }
        }
    }
}

/// Report aero bodies spawned without anything to apply their loads to.
pub fn missing_physics_warning_system(
    query: Query<(Entity, &AeroBodyComponent), (Added<AeroBodyComponent>, Without<PhysicsComponent>)>,
) {
    for (entity, aero) in query.iter() {
        warn!(
            "Aero body '{}' on {:?} has no PhysicsComponent, its loads will not be applied",
            aero.body.name(),
            entity
        );
    }
}
