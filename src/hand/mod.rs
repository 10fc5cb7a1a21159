//! Hand landmark analysis and pose classification.

pub mod curl;
pub mod landmark;
pub mod pose;

pub use landmark::{Handedness, Keypoint, KeypointMap, LandmarkName, CONNECTIVITY};
pub use pose::{classify, HandPose};
