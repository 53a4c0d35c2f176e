use serde::{Deserialize, Serialize};

use crate::utils::AeroError;

/// A set of bodies that together make up one lifting surface.
///
/// The members' planform areas are rescaled so their sum matches `target_planform_area`.
/// An explicit `aspect_ratio` replaces each member's own in the lift model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AeroGroup {
    pub target_planform_area: f64,
    #[serde(default)]
    pub aspect_ratio: Option<f64>,
}

/// What a body receives from its group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupMembership {
    pub area_scale: f64,
    pub aspect_ratio: Option<f64>,
}

impl AeroGroup {
    pub fn new(target_planform_area: f64) -> Self {
        Self {
            target_planform_area,
            aspect_ratio: None,
        }
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }

    /// Scale factor mapping the summed unscaled member planform onto the target.
    pub fn area_scale<I>(&self, member_planform_areas: I) -> Result<f64, AeroError>
    where
        I: IntoIterator<Item = f64>,
    {
        let total_planform: f64 = member_planform_areas.into_iter().sum();
        if !(total_planform > 0.0 && total_planform.is_finite()) {
            return Err(AeroError::GroupDegenerate { total_planform });
        }
        Ok(self.target_planform_area / total_planform)
    }

    pub fn membership<I>(&self, member_planform_areas: I) -> Result<GroupMembership, AeroError>
    where
        I: IntoIterator<Item = f64>,
    {
        Ok(GroupMembership {
            area_scale: self.area_scale(member_planform_areas)?,
            aspect_ratio: self.aspect_ratio,
        })
    }
}
