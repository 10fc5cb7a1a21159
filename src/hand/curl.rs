//! Per-finger curl and closure tests.
//!
//! Two different notions of a "bent" finger are used by the pose classifier:
//!
//! - **Curled**: the fingertip has folded back toward the finger's own MCP joint. Used for the
//!   knob-grip pose, where all four fingers wrap around an imaginary knob.
//! - **Closed**: the fingertip is nearer the *wrist* than the finger's DIP joint is. A looser
//!   notion, used for the scissors pose where pinky and ring only fold partway.
//!
//! All predicates taking a [`KeypointMap`] return [`None`] when a required landmark is missing
//! from the frame, so partial detections degrade instead of panicking.

use nalgebra::distance;

use super::landmark::{Keypoint, KeypointMap, LandmarkName};

/// The four non-thumb fingers.
///
/// The thumb articulates differently and has its own closure test, [`is_thumb_closed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    /// The finger's knuckle joint at the palm.
    pub fn mcp(self) -> LandmarkName {
        match self {
            Finger::Index => LandmarkName::IndexFingerMcp,
            Finger::Middle => LandmarkName::MiddleFingerMcp,
            Finger::Ring => LandmarkName::RingFingerMcp,
            Finger::Pinky => LandmarkName::PinkyMcp,
        }
    }

    pub fn pip(self) -> LandmarkName {
        match self {
            Finger::Index => LandmarkName::IndexFingerPip,
            Finger::Middle => LandmarkName::MiddleFingerPip,
            Finger::Ring => LandmarkName::RingFingerPip,
            Finger::Pinky => LandmarkName::PinkyPip,
        }
    }

    /// The finger's joint right below the tip.
    pub fn dip(self) -> LandmarkName {
        match self {
            Finger::Index => LandmarkName::IndexFingerDip,
            Finger::Middle => LandmarkName::MiddleFingerDip,
            Finger::Ring => LandmarkName::RingFingerDip,
            Finger::Pinky => LandmarkName::PinkyDip,
        }
    }

    pub fn tip(self) -> LandmarkName {
        match self {
            Finger::Index => LandmarkName::IndexFingerTip,
            Finger::Middle => LandmarkName::MiddleFingerTip,
            Finger::Ring => LandmarkName::RingFingerTip,
            Finger::Pinky => LandmarkName::PinkyTip,
        }
    }
}

/// Returns whether `first` is closer to `reference` than `second` is.
pub fn is_first_point_closer(first: &Keypoint, second: &Keypoint, reference: &Keypoint) -> bool {
    distance(&first.position(), &reference.position())
        < distance(&second.position(), &reference.position())
}

/// Returns whether `finger` is curled: its tip is closer to the finger's MCP joint than the DIP
/// joint is.
pub fn is_finger_curled(map: &KeypointMap, finger: Finger) -> Option<bool> {
    let tip = map.get(finger.tip())?;
    let dip = map.get(finger.dip())?;
    let mcp = map.get(finger.mcp())?;
    Some(is_first_point_closer(tip, dip, mcp))
}

/// Returns whether `finger` is closed: its tip is closer to the wrist than the DIP joint is.
pub fn is_finger_closed(map: &KeypointMap, finger: Finger) -> Option<bool> {
    let tip = map.get(finger.tip())?;
    let dip = map.get(finger.dip())?;
    let wrist = map.get(LandmarkName::Wrist)?;
    Some(is_first_point_closer(tip, dip, wrist))
}

/// Returns whether the thumb is tucked across the palm: its tip is closer to the index-finger MCP
/// than the thumb's own MCP is.
pub fn is_thumb_closed(map: &KeypointMap) -> Option<bool> {
    let thumb_tip = map.get(LandmarkName::ThumbTip)?;
    let thumb_mcp = map.get(LandmarkName::ThumbMcp)?;
    let index_mcp = map.get(LandmarkName::IndexFingerMcp)?;
    Some(is_first_point_closer(thumb_tip, thumb_mcp, index_mcp))
}
