//! Hand landmark names, per-frame keypoints, and the keypoint lookup map.

use std::fmt;
use std::str::FromStr;

use nalgebra::Point2;

/// Which physical hand a detected skeleton belongs to.
///
/// Supplied per hand by the external detector as a `"Left"`/`"Right"` label; any other label is a
/// validation fault and rejected by [`Handedness::from_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// Parses a detector-supplied handedness label.
    pub fn from_label(label: &str) -> anyhow::Result<Self> {
        match label {
            "Left" => Ok(Handedness::Left),
            "Right" => Ok(Handedness::Right),
            _ => anyhow::bail!("unsupported handedness label `{label}`"),
        }
    }
}

impl FromStr for Handedness {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// Names for the hand pose landmarks.
///
/// # Terminology
///
/// - **CMC**: [Carpometacarpal joint], the lowest joint of the thumb, located near the wrist.
/// - **MCP**: [Metacarpophalangeal joint], the lower joint forming the knuckles near the palm of
///   the hand.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
///
/// [Carpometacarpal joint]: https://en.wikipedia.org/wiki/Carpometacarpal_joint
/// [Metacarpophalangeal joint]: https://en.wikipedia.org/wiki/Metacarpophalangeal_joint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkName {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

impl LandmarkName {
    /// All 21 landmark names, in the order the detector reports them.
    pub const ALL: [LandmarkName; 21] = {
        use LandmarkName::*;
        [
            Wrist,
            ThumbCmc,
            ThumbMcp,
            ThumbIp,
            ThumbTip,
            IndexFingerMcp,
            IndexFingerPip,
            IndexFingerDip,
            IndexFingerTip,
            MiddleFingerMcp,
            MiddleFingerPip,
            MiddleFingerDip,
            MiddleFingerTip,
            RingFingerMcp,
            RingFingerPip,
            RingFingerDip,
            RingFingerTip,
            PinkyMcp,
            PinkyPip,
            PinkyDip,
            PinkyTip,
        ]
    };

    /// Returns the wire name the detector uses for this landmark (eg. `pinky_finger_tip`).
    pub fn label(self) -> &'static str {
        use LandmarkName::*;
        match self {
            Wrist => "wrist",
            ThumbCmc => "thumb_cmc",
            ThumbMcp => "thumb_mcp",
            ThumbIp => "thumb_ip",
            ThumbTip => "thumb_tip",
            IndexFingerMcp => "index_finger_mcp",
            IndexFingerPip => "index_finger_pip",
            IndexFingerDip => "index_finger_dip",
            IndexFingerTip => "index_finger_tip",
            MiddleFingerMcp => "middle_finger_mcp",
            MiddleFingerPip => "middle_finger_pip",
            MiddleFingerDip => "middle_finger_dip",
            MiddleFingerTip => "middle_finger_tip",
            RingFingerMcp => "ring_finger_mcp",
            RingFingerPip => "ring_finger_pip",
            RingFingerDip => "ring_finger_dip",
            RingFingerTip => "ring_finger_tip",
            PinkyMcp => "pinky_finger_mcp",
            PinkyPip => "pinky_finger_pip",
            PinkyDip => "pinky_finger_dip",
            PinkyTip => "pinky_finger_tip",
        }
    }

    /// Looks up a landmark by its detector wire name.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.label() == label)
    }
}

impl fmt::Display for LandmarkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single named 2D keypoint, produced fresh every frame by the external detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    name: LandmarkName,
    x: f32,
    y: f32,
    confidence: Option<f32>,
}

impl Keypoint {
    pub fn new(name: LandmarkName, x: f32, y: f32) -> Self {
        Self {
            name,
            x,
            y,
            confidence: None,
        }
    }

    pub fn with_confidence(self, confidence: f32) -> Self {
        Self {
            confidence: Some(confidence),
            ..self
        }
    }

    #[inline]
    pub fn name(&self) -> LandmarkName {
        self.name
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Detector confidence for this keypoint, if the detector reports one.
    #[inline]
    pub fn confidence(&self) -> Option<f32> {
        self.confidence
    }

    #[inline]
    pub fn position(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }
}

/// Per-frame lookup of a hand's keypoints by landmark name.
///
/// Built fresh per hand per frame. The map tolerates partial detections: looking up a landmark the
/// detector did not produce yields [`None`], and classification degrades accordingly instead of
/// failing.
#[derive(Debug, Clone)]
pub struct KeypointMap {
    points: [Option<Keypoint>; 21],
}

impl KeypointMap {
    /// Builds the map from a frame's keypoints.
    ///
    /// If the same landmark occurs more than once, the last occurrence wins.
    pub fn from_keypoints<I: IntoIterator<Item = Keypoint>>(keypoints: I) -> Self {
        let mut points = [None; 21];
        for kp in keypoints {
            points[kp.name() as usize] = Some(kp);
        }
        Self { points }
    }

    pub fn get(&self, name: LandmarkName) -> Option<&Keypoint> {
        self.points[name as usize].as_ref()
    }

    /// Returns whether all 21 landmarks were detected this frame.
    pub fn is_complete(&self) -> bool {
        self.points.iter().all(Option::is_some)
    }

    /// Iterates over the landmarks that were detected this frame.
    pub fn iter(&self) -> impl Iterator<Item = &Keypoint> {
        self.points.iter().flatten()
    }
}

impl FromIterator<Keypoint> for KeypointMap {
    fn from_iter<I: IntoIterator<Item = Keypoint>>(iter: I) -> Self {
        Self::from_keypoints(iter)
    }
}

/// Landmark pairs connected by the hand skeleton, for renderers drawing keypoint overlays.
pub const CONNECTIVITY: &[(LandmarkName, LandmarkName)] = {
    use LandmarkName::*;
    &[
        // Surround the palm:
        (Wrist, ThumbCmc),
        (ThumbCmc, IndexFingerMcp),
        (IndexFingerMcp, MiddleFingerMcp),
        (MiddleFingerMcp, RingFingerMcp),
        (RingFingerMcp, PinkyMcp),
        (PinkyMcp, Wrist),
        // Thumb:
        (ThumbCmc, ThumbMcp),
        (ThumbMcp, ThumbIp),
        (ThumbIp, ThumbTip),
        // Index:
        (IndexFingerMcp, IndexFingerPip),
        (IndexFingerPip, IndexFingerDip),
        (IndexFingerDip, IndexFingerTip),
        // Middle:
        (MiddleFingerMcp, MiddleFingerPip),
        (MiddleFingerPip, MiddleFingerDip),
        (MiddleFingerDip, MiddleFingerTip),
        // Ring:
        (RingFingerMcp, RingFingerPip),
        (RingFingerPip, RingFingerDip),
        (RingFingerDip, RingFingerTip),
        // Pinky:
        (PinkyMcp, PinkyPip),
        (PinkyPip, PinkyDip),
        (PinkyDip, PinkyTip),
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for name in LandmarkName::ALL {
            assert_eq!(LandmarkName::from_label(name.label()), Some(name));
        }
        assert_eq!(LandmarkName::from_label("thumb"), None);
    }

    #[test]
    fn map_tolerates_missing_landmarks() {
        let map = KeypointMap::from_keypoints([
            Keypoint::new(LandmarkName::Wrist, 1.0, 2.0),
            Keypoint::new(LandmarkName::ThumbTip, 3.0, 4.0).with_confidence(0.9),
        ]);
        assert!(!map.is_complete());
        assert_eq!(map.get(LandmarkName::Wrist).unwrap().position().y, 2.0);
        assert_eq!(map.get(LandmarkName::ThumbTip).unwrap().confidence(), Some(0.9));
        assert!(map.get(LandmarkName::PinkyTip).is_none());
        assert_eq!(map.iter().count(), 2);
    }

    #[test]
    fn later_duplicate_wins() {
        let map = KeypointMap::from_keypoints([
            Keypoint::new(LandmarkName::Wrist, 1.0, 1.0),
            Keypoint::new(LandmarkName::Wrist, 5.0, 5.0),
        ]);
        assert_eq!(map.get(LandmarkName::Wrist).unwrap().x(), 5.0);
    }

    #[test]
    fn handedness_labels() {
        assert_eq!(Handedness::from_label("Left").unwrap(), Handedness::Left);
        assert_eq!("Right".parse::<Handedness>().unwrap(), Handedness::Right);
        assert!(Handedness::from_label("Both").is_err());
        assert!(Handedness::from_label("left").is_err());
    }
}
