use bevy::prelude::*;

use crate::geometry::AeroGroup;

/// Bodies whose planform areas are scaled together.
#[derive(Component, Debug, Clone)]
pub struct AeroGroupComponent {
    pub group: AeroGroup,
    pub members: Vec<Entity>,
}

impl AeroGroupComponent {
    pub fn new(group: AeroGroup, members: Vec<Entity>) -> Self {
        Self { group, members }
    }
}
