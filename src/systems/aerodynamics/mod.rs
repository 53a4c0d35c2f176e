mod aero_body;
mod group;

pub use aero_body::{aero_body_system, missing_physics_warning_system};
pub use group::aero_group_system;
