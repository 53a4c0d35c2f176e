pub mod aerodynamics;
pub mod physics;

pub use aerodynamics::{aero_body_system, aero_group_system, missing_physics_warning_system};
pub use physics::force_calculator_system;
