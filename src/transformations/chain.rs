use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use super::frames::ReferenceFrame;

/// Index of a frame inside a [`FrameChain`].
///
/// Only the chain mints ids: the four aerodynamic constants below, or [`FrameChain::push`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameId(usize);

impl FrameId {
    /// World frame, root of every chain.
    pub const EARTH: FrameId = FrameId(0);
    /// The rigid body's own frame, rotated by its world orientation.
    pub const OBJECT: FrameId = FrameId(1);
    /// Aerodynamic axes: x span, y thickness normal, z chord.
    pub const BODY: FrameId = FrameId(2);
    /// Equivalent aerodynamic body, the body frame yawed into the wind.
    pub const EAB: FrameId = FrameId(3);
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChainLink {
    frame: ReferenceFrame,
    parent: Option<FrameId>,
}

/// Ordered list of frames where every frame names its parent by index.
///
/// Parents always precede their children, so resolving in index order visits
/// each parent before any frame that depends on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameChain {
    links: Vec<ChainLink>,
}

impl Default for FrameChain {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameChain {
    /// Chain holding only the root frame.
    pub fn new() -> Self {
        Self {
            links: vec![ChainLink {
                frame: ReferenceFrame::default(),
                parent: None,
            }],
        }
    }

    /// The earth → object → body → EAB chain used by every aerodynamic body.
    pub fn aerodynamic() -> Self {
        let mut chain = Self::new();
        chain.push(FrameId::EARTH);
        chain.push(FrameId::OBJECT);
        chain.push(FrameId::BODY);
        chain
    }

    /// Append a frame with an identity rotation under `parent`.
    ///
    /// # Panics
    /// Panics if `parent` is not already part of the chain.
    pub fn push(&mut self, parent: FrameId) -> FrameId {
        assert!(parent.0 < self.links.len(), "unknown parent frame {:?}", parent);
        self.links.push(ChainLink {
            frame: ReferenceFrame::default(),
            parent: Some(parent),
        });
        FrameId(self.links.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// `None` for an id pushed onto a longer chain.
    pub fn get(&self, id: FrameId) -> Option<&ReferenceFrame> {
        self.links.get(id.0).map(|link| &link.frame)
    }

    /// # Panics
    /// Panics if `id` belongs to a longer chain; see [`FrameChain::get`].
    pub fn frame(&self, id: FrameId) -> &ReferenceFrame {
        &self.links[id.0].frame
    }

    pub fn parent(&self, id: FrameId) -> Option<FrameId> {
        self.links.get(id.0).and_then(|link| link.parent)
    }

    /// # Panics
    /// Panics if `id` belongs to a longer chain.
    pub fn set_rotation(&mut self, id: FrameId, rotation: UnitQuaternion<f64>) {
        self.links[id.0].frame.set_rotation(rotation);
    }

    /// Resolve root-frame wind into every frame of the chain.
    pub fn resolve_wind(&mut self, wind: &Vector3<f64>, angular_wind: &Vector3<f64>) {
        self.links[0].frame.resolve_wind(wind, angular_wind);
        self.resolve_descendants(FrameId(1), |_| true);
    }

    /// Re-resolve `id` and everything below it from its parent's current wind.
    ///
    /// Used after a frame's rotation changes mid-step without the upstream wind changing.
    pub fn resolve_wind_from(&mut self, id: FrameId) {
        if self.links[id.0].parent.is_none() {
            let wind = *self.links[id.0].frame.wind_velocity();
            let angular = *self.links[id.0].frame.angular_wind_velocity();
            self.resolve_wind(&wind, &angular);
            return;
        }

        // Children always sit after their parent in the list.
        let mut in_subtree = vec![false; self.links.len()];
        in_subtree[id.0] = true;
        for index in (id.0 + 1)..self.links.len() {
            if let Some(parent) = self.links[index].parent {
                in_subtree[index] = in_subtree[parent.0];
            }
        }
        self.resolve_descendants(id, |link_id| in_subtree[link_id.0]);
    }

    fn resolve_descendants<F>(&mut self, start: FrameId, include: F)
    where
        F: Fn(FrameId) -> bool,
    {
        for index in start.0..self.links.len() {
            if !include(FrameId(index)) {
                continue;
            }
            let Some(parent) = self.links[index].parent else {
                continue;
            };
            let parent_frame = &self.links[parent.0].frame;
            let wind = *parent_frame.wind_velocity();
            let angular = *parent_frame.angular_wind_velocity();
            self.links[index].frame.resolve_wind(&wind, &angular);
        }
    }

    /// Rotation taking vectors from frame `id` into the root frame.
    pub fn rotation_to_root(&self, id: FrameId) -> UnitQuaternion<f64> {
        let mut rotation = UnitQuaternion::identity();
        let mut current = Some(id);
        while let Some(frame_id) = current {
            let link = &self.links[frame_id.0];
            rotation = link.frame.rotation() * rotation;
            current = link.parent;
        }
        rotation
    }

    /// Rotation taking vectors from frame `from` into frame `to`.
    pub fn rotation_between(&self, from: FrameId, to: FrameId) -> UnitQuaternion<f64> {
        self.rotation_to_root(to).inverse() * self.rotation_to_root(from)
    }

    pub fn transform(&self, from: FrameId, to: FrameId, v: &Vector3<f64>) -> Vector3<f64> {
        self.rotation_between(from, to) * v
    }
}
