use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::aero::AeroBody;
use crate::utils::AeroError;

/// How an entity's aerodynamic loads are handed to its physics component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoadApplication {
    /// One force and one torque about the body position.
    #[default]
    Resultant,
    /// One force per aerodynamic component, at that component's point of action.
    PointOfAction,
}

/// Entity-side wrapper around an [`AeroBody`].
///
/// Inside the ECS the body's config is replaced by the [`AeroConfig`](crate::config::AeroConfig)
/// resource on the first tick and whenever the resource changes.
#[derive(Component, Debug)]
pub struct AeroBodyComponent {
    pub body: AeroBody,
    pub application: LoadApplication,
    /// Set when the last step failed validation; cleared by the next good step.
    pub halted: Option<AeroError>,
}

impl AeroBodyComponent {
    pub fn new(body: AeroBody) -> Self {
        Self {
            body,
            application: LoadApplication::default(),
            halted: None,
        }
    }

    pub fn with_application(mut self, application: LoadApplication) -> Self {
        self.application = application;
        self
    }

    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }
}
