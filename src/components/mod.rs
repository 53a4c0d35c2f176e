pub mod aero_body;
pub mod group;
pub mod physics;
pub mod shape;
pub mod spatial;

pub use aero_body::{AeroBodyComponent, LoadApplication};
pub use group::AeroGroupComponent;
pub use physics::{Force, ForceCategory, LoadFrame, Moment, PhysicsComponent};
pub use shape::ShapeComponent;
pub use spatial::SpatialComponent;
