pub mod axes;
pub mod ellipsoid;
pub mod group;
pub mod properties;

pub use axes::{assign_body_axes, AxisAssignment};
pub use ellipsoid::EllipsoidBody;
pub use group::{AeroGroup, GroupMembership};
pub use properties::EllipsoidProperties;
