pub mod kinematics;
pub mod traits;

pub use kinematics::BodyKinematics;
pub use traits::{ForceSink, KinematicsSource, ShapeSource};
