use bevy::prelude::*;
use std::path::Path;
use thiserror::Error;

use super::aerodynamics::AeroConfig;
use super::body::BodyDescription;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aerodynamics configuration: {0}")]
    ValidationError(String),
}

impl AeroConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: AeroConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&file_contents)?;
        info!("Loaded aerodynamics config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name: &str, value: f64| {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::ValidationError(format!(
                    "{} must be positive, got {}",
                    name, value
                )))
            }
        };

        positive("fluid.density", self.fluid.density)?;
        positive("fluid.viscosity", self.fluid.viscosity)?;
        positive("lift.stall_sharpness", self.lift.stall_sharpness)?;
        positive("drag.skin_friction_exponent", self.drag.skin_friction_exponent)?;

        if self.lift.stall_angle_min_deg > self.lift.stall_angle_max_deg {
            return Err(ConfigError::ValidationError(format!(
                "lift.stall_angle_min_deg ({}) exceeds lift.stall_angle_max_deg ({})",
                self.lift.stall_angle_min_deg, self.lift.stall_angle_max_deg
            )));
        }

        if self.lift.thickness_correction < 0.0 {
            return Err(ConfigError::ValidationError(
                "lift.thickness_correction must not be negative".to_string(),
            ));
        }

        if self.magnus.max_coefficient < 0.0 {
            return Err(ConfigError::ValidationError(
                "magnus.max_coefficient must not be negative".to_string(),
            ));
        }

        Ok(())
    }
}

impl BodyDescription {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let description: BodyDescription = serde_yaml::from_str(yaml)?;
        description.validate()?;
        Ok(description)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&file_contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale.iter().any(|s| !(*s > 0.0 && s.is_finite())) {
            return Err(ConfigError::ValidationError(format!(
                "body '{}' has a non-positive scale {:?}",
                self.name, self.scale
            )));
        }
        Ok(())
    }
}
