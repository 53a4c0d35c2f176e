//! Quasi-steady aerodynamics for ellipsoidal rigid bodies.
//!
//! Each body is modelled as an ellipsoid whose axes are sorted into span, chord
//! and thickness. Every step the wind is resolved through an
//! earth → object → body → equivalent-aerodynamic-body frame chain, empirical
//! lift, drag and damping coefficients are computed, and a set of pluggable
//! components turns them into forces and moments for the host integrator.

pub mod aero;
pub mod coefficients;
pub mod components;
pub mod config;
pub mod geometry;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod transformations;
pub mod utils;

pub use aero::{AeroBody, AeroBodyBuilder, AeroLoads, ForceComposer, Stage};
pub use config::AeroConfig;
pub use physics::{BodyKinematics, ForceSink, KinematicsSource, ShapeSource};
pub use plugins::{AerodynamicsPlugin, AerodynamicsSet};
pub use utils::{AeroDiagnostic, AeroError};
