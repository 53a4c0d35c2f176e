use serde::{Deserialize, Serialize};

/// Serialized description of a single aerodynamic body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDescription {
    pub name: String,
    /// Object-space extents along x, y and z.
    pub scale: [f64; 3],
    #[serde(default)]
    pub camber: f64,
    #[serde(default)]
    pub dynamically_variable_shape: bool,
}
