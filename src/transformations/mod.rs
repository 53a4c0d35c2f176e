pub mod chain;
pub mod frames;

pub use chain::{FrameChain, FrameId};
pub use frames::ReferenceFrame;
