pub mod aerodynamics;
pub mod body;
pub mod loader;

pub use aerodynamics::{AeroConfig, DragConfig, FluidConfig, LiftConfig, MagnusConfig};
pub use body::BodyDescription;
pub use loader::ConfigError;
