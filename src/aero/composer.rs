use bevy::log::warn;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::body::AeroBody;
use super::components::{AeroComponent, MagnusLift, RotationalDrag, ThinAerofoil, TranslationalDrag};
use crate::config::AeroConfig;
use crate::transformations::FrameId;
use crate::utils::{math::is_finite_vector, AeroDiagnostic};

/// One component's share of the loads, in both frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentContribution {
    pub name: String,
    pub force_body: Vector3<f64>,
    pub moment_body: Vector3<f64>,
    pub force_earth: Vector3<f64>,
    pub moment_earth: Vector3<f64>,
    /// Earth-frame point the force acts through.
    pub point_of_action: Vector3<f64>,
}

/// Summed loads of every component. Moments are taken about the body position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AeroLoads {
    pub force_body: Vector3<f64>,
    pub moment_body: Vector3<f64>,
    pub force_earth: Vector3<f64>,
    pub moment_earth: Vector3<f64>,
    pub contributions: Vec<ComponentContribution>,
}

impl AeroLoads {
    pub fn contribution(&self, name: &str) -> Option<&ComponentContribution> {
        self.contributions.iter().find(|c| c.name == name)
    }
}

/// Ordered collection of force generators evaluated once per step.
///
/// Components must not depend on each other's results; the composer only sums.
#[derive(Debug, Default)]
pub struct ForceComposer {
    components: Vec<Box<dyn AeroComponent>>,
}

impl ForceComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Thin aerofoil lift, profile drag and rotational damping, plus Magnus lift when enabled.
    pub fn standard(config: &AeroConfig) -> Self {
        let mut composer = Self::new()
            .with(ThinAerofoil::default())
            .with(TranslationalDrag::default())
            .with(RotationalDrag::default());
        if config.magnus.enabled {
            composer.push(MagnusLift::default());
        }
        composer
    }

    pub fn with<C: AeroComponent + 'static>(mut self, component: C) -> Self {
        self.push(component);
        self
    }

    pub fn push<C: AeroComponent + 'static>(&mut self, component: C) {
        self.components.push(Box::new(component));
    }

    /// Remove the first component called `name`.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn AeroComponent>> {
        let index = self.components.iter().position(|c| c.name() == name)?;
        Some(self.components.remove(index))
    }

    pub fn clear(&mut self) {
        self.components.clear();
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|c| c.name())
    }

    pub fn get(&self, name: &str) -> Option<&dyn AeroComponent> {
        self.components
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Evaluate every component against `body` and sum the results.
    ///
    /// Non-finite contributions are replaced by zero and reported rather than
    /// passed on to the integrator.
    pub fn compose(&mut self, body: &AeroBody) -> (AeroLoads, Vec<AeroDiagnostic>) {
        let to_earth = body.frames().rotation_to_root(FrameId::BODY);
        let mut loads = AeroLoads::default();
        let mut diagnostics = Vec::new();

        for component in self.components.iter_mut() {
            let mut output = component.evaluate(body);
            let name = component.name().to_string();

            if !is_finite_vector(&output.force) {
                diagnostics.push(AeroDiagnostic::NonFiniteForce {
                    component: name.clone(),
                });
                output.force = Vector3::zeros();
            }
            if !is_finite_vector(&output.moment) {
                diagnostics.push(AeroDiagnostic::NonFiniteMoment {
                    component: name.clone(),
                });
                output.moment = Vector3::zeros();
            }
            if !is_finite_vector(&output.point_of_action) {
                warn!("Component '{}' returned a non-finite point of action", name);
                output.point_of_action = *body.position();
            }

            loads.force_body += output.force;
            loads.moment_body += output.moment;
            loads.contributions.push(ComponentContribution {
                name,
                force_body: output.force,
                moment_body: output.moment,
                force_earth: to_earth * output.force,
                moment_earth: to_earth * output.moment,
                point_of_action: output.point_of_action,
            });
        }

        loads.force_earth = to_earth * loads.force_body;
        loads.moment_earth = to_earth * loads.moment_body;
        (loads, diagnostics)
    }
}
