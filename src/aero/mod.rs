//! Per-body aerodynamic pipeline.
//!
//! An [`AeroBody`] runs a fixed sequence of stages each step: geometry, wind,
//! angles, equivalent aerodynamic body, coefficients and forces. Each stage reads
//! only what earlier stages produced in the same step.

pub mod body;
pub mod components;
pub mod composer;
pub mod state;
pub mod telemetry;

pub use body::{AeroBody, AeroBodyBuilder};
pub use components::{
    AeroComponent, AeroCurve, ComponentOutput, CustomAerofoil, MagnusLift, RotationalDrag,
    ThinAerofoil, TranslationalDrag,
};
pub use composer::{AeroLoads, ComponentContribution, ForceComposer};
pub use state::{validate_angle_of_attack, AeroAngles, FlowState, Stage};
pub use telemetry::AeroTelemetry;
