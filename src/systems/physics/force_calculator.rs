use crate::components::{LoadFrame, PhysicsComponent, SpatialComponent};
use bevy::prelude::*;
use nalgebra::Vector3;

/// Total every collected load into a net inertial-frame force and a moment about the body position.
pub fn force_calculator_system(mut query: Query<(&mut PhysicsComponent, &SpatialComponent)>) {
    for (mut physics, spatial) in query.iter_mut() {
        let mut net_force = Vector3::zeros();
        let mut net_moment = Vector3::zeros();

        for force in &physics.forces {
            let force_inertial = match force.frame {
                LoadFrame::Body => spatial.attitude * force.vector,
                LoadFrame::Inertial => force.vector,
            };
            net_force += force_inertial;

            if let Some(point) = force.point {
                let arm = match force.frame {
                    LoadFrame::Body => spatial.attitude * point,
                    LoadFrame::Inertial => point - spatial.position,
                };
                net_moment += arm.cross(&force_inertial);
            }
        }

        for moment in &physics.moments {
            net_moment += match moment.frame {
                LoadFrame::Body => spatial.attitude * moment.vector,
                LoadFrame::Inertial => moment.vector,
            };
        }

        physics.net_force = net_force;
        physics.net_moment = net_moment;
    }
}
