use bevy::prelude::*;

use crate::components::{AeroBodyComponent, AeroGroupComponent};

/// Push the group area scale to every member whenever a group is added or changed.
pub fn aero_group_system(
    groups: Query<(Entity, &AeroGroupComponent), Changed<AeroGroupComponent>>,
    mut bodies: Query<&mut AeroBodyComponent>,
) {
    for (group_entity, group) in groups.iter() {
        let planform_areas: Vec<f64> = group
            .members
            .iter()
            .filter_map(|member| bodies.get(*member).ok())
            .map(|aero| aero.body.properties().unscaled_planform_area())
            .collect();

        let membership = match group.group.membership(planform_areas) {
            Ok(membership) => membership,
            Err(e) => {
                error!("Aero group {:?} not applied: {}", group_entity, e);
                continue;
            }
        };

        for member in &group.members {
            let Ok(mut aero) = bodies.get_mut(*member) else {
                warn!("Aero group {:?} member {:?} has no aero body", group_entity, member);
                continue;
            };
            if let Err(e) = aero.body.set_group(Some(membership)) {
                error!("Aero body '{}' rejected group scaling: {}", aero.body.name(), e);
            }
        }
    }
}
