//! Discrete hand pose classification.
//!
//! [`classify`] is a pure function of a single frame's [`KeypointMap`]: no history is consulted
//! and no state is mutated. Poses are checked in priority order, grip first, then scissors, and
//! anything else is [`HandPose::Unknown`].

use std::f32::consts::PI;

use crate::num::angle_between;

use super::curl::{is_finger_closed, is_finger_curled, is_thumb_closed, Finger};
use super::landmark::{Handedness, KeypointMap, LandmarkName};

/// Hand-angle magnitude, in radians, above which a gripping hand counts as turned.
pub const KNOB_TURN_THRESHOLD: f32 = PI / 8.0;

/// Index/middle spread angle, in radians, above which a scissors hand counts as open.
pub const SCISSORS_OPEN_THRESHOLD: f32 = PI / 15.0;

/// A discrete hand pose, classified from a single frame's landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandPose {
    /// No recognized pose, or a required landmark was missing from the frame.
    Unknown,
    /// All four fingers curled around an imaginary knob, wrist roughly upright.
    KnobGripNeutral,
    /// Gripping hand turned clockwise past [`KNOB_TURN_THRESHOLD`].
    KnobGripClockwise,
    /// Gripping hand turned counter-clockwise past [`KNOB_TURN_THRESHOLD`].
    KnobGripCounterClockwise,
    /// Scissors shape with index and middle finger spread apart.
    ScissorsOpen,
    /// Scissors shape with index and middle finger together.
    ScissorsClosed,
}

/// Classifies a hand's pose from this frame's landmarks.
///
/// Classification is stateless: the same map always yields the same pose. A missing landmark makes
/// the affected test unanswerable and yields [`HandPose::Unknown`], as does degenerate geometry
/// (eg. the wrist coinciding with the middle-finger MCP, which leaves the hand angle undefined).
///
/// `handedness` does not affect the returned pose: the turn direction is derived from the hand's
/// orientation alone. It is accepted here because callers already carry it per hand and historical
/// variants of the turn test needed it.
pub fn classify(map: &KeypointMap, handedness: Handedness) -> HandPose {
    let pose = classify_impl(map).unwrap_or(HandPose::Unknown);
    log::trace!("{:?} hand classified as {:?}", handedness, pose);
    pose
}

fn classify_impl(map: &KeypointMap) -> Option<HandPose> {
    if is_grip(map)? {
        let angle = hand_angle(map)?;
        let pose = if angle > KNOB_TURN_THRESHOLD {
            HandPose::KnobGripCounterClockwise
        } else if angle < -KNOB_TURN_THRESHOLD {
            HandPose::KnobGripClockwise
        } else if angle.is_nan() {
            // Wrist and middle-finger MCP coincide; the grip has no usable orientation.
            HandPose::Unknown
        } else {
            HandPose::KnobGripNeutral
        };
        return Some(pose);
    }

    if is_scissors(map)? {
        // A NaN spread angle compares false and counts as closed.
        let open = scissors_angle(map)? > SCISSORS_OPEN_THRESHOLD;
        return Some(if open {
            HandPose::ScissorsOpen
        } else {
            HandPose::ScissorsClosed
        });
    }

    Some(HandPose::Unknown)
}

/// Returns whether all four non-thumb fingers are curled (the knob-grip shape).
pub fn is_grip(map: &KeypointMap) -> Option<bool> {
    for finger in Finger::ALL {
        if !is_finger_curled(map, finger)? {
            return Some(false);
        }
    }
    Some(true)
}

/// Returns whether the hand forms the scissors shape: pinky, ring and thumb closed, index and
/// middle extended.
pub fn is_scissors(map: &KeypointMap) -> Option<bool> {
    Some(
        is_finger_closed(map, Finger::Pinky)?
            && is_finger_closed(map, Finger::Ring)?
            && is_thumb_closed(map)?
            && !is_finger_closed(map, Finger::Index)?
            && !is_finger_closed(map, Finger::Middle)?,
    )
}

/// Computes the hand's rotation about the camera axis, as the arcsine of the horizontal fraction
/// of the wrist → middle-finger-MCP displacement.
///
/// 0 means the hand points straight up; positive values lean toward +X. NaN if the two landmarks
/// coincide, and `None` if either is missing.
pub fn hand_angle(map: &KeypointMap) -> Option<f32> {
    let wrist = map.get(LandmarkName::Wrist)?;
    let mcp = map.get(LandmarkName::MiddleFingerMcp)?;
    let delta = mcp.position() - wrist.position();
    Some((delta.x / delta.magnitude()).asin())
}

/// Computes the spread angle between the index and middle fingertips, as seen from the wrist.
///
/// NaN if a fingertip coincides with the wrist, `None` if a landmark is missing.
pub fn scissors_angle(map: &KeypointMap) -> Option<f32> {
    let index = map.get(LandmarkName::IndexFingerTip)?;
    let middle = map.get(LandmarkName::MiddleFingerTip)?;
    let wrist = map.get(LandmarkName::Wrist)?;
    Some(angle_between(
        index.position() - wrist.position(),
        middle.position() - wrist.position(),
    ))
}

/// Returns whether the palm faces the camera, judged by the ring-finger MCP lying on the expected
/// side of the pinky MCP for the given handedness.
///
/// Not consulted by [`classify`]; exposed for callers that want to reject poses made with the back
/// of the hand toward the camera.
pub fn is_facing_camera(map: &KeypointMap, handedness: Handedness) -> Option<bool> {
    let ring = map.get(LandmarkName::RingFingerMcp)?;
    let pinky = map.get(LandmarkName::PinkyMcp)?;
    Some(match handedness {
        Handedness::Right => ring.x() < pinky.x(),
        Handedness::Left => ring.x() > pinky.x(),
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::hand::landmark::Keypoint;

    use super::*;

    use std::f32::consts::FRAC_PI_4;

    fn kp(name: LandmarkName, x: f32, y: f32) -> Keypoint {
        Keypoint::new(name, x, y)
    }

    /// A hand gripping an imaginary knob: all four fingertips folded back toward their knuckles,
    /// fingers in columns above the palm. Moving the wrist horizontally leans the hand.
    fn grip_hand(wrist_x: f32) -> KeypointMap {
        let mut kps = vec![kp(LandmarkName::Wrist, wrist_x, 220.0)];
        for (finger, x) in [
            (Finger::Index, 180.0),
            (Finger::Middle, 200.0),
            (Finger::Ring, 220.0),
            (Finger::Pinky, 240.0),
        ] {
            kps.push(kp(finger.mcp(), x, 150.0));
            kps.push(kp(finger.dip(), x, 112.0));
            kps.push(kp(finger.tip(), x, 142.0));
        }
        KeypointMap::from_keypoints(kps)
    }

    /// A scissors hand: pinky, ring and thumb folded in, index and middle extended upward with
    /// the given fingertip positions.
    fn scissors_hand(index_tip: (f32, f32), middle_tip: (f32, f32)) -> KeypointMap {
        KeypointMap::from_keypoints([
            kp(LandmarkName::Wrist, 200.0, 200.0),
            kp(LandmarkName::IndexFingerMcp, 185.0, 150.0),
            kp(LandmarkName::IndexFingerDip, 175.0, 120.0),
            kp(LandmarkName::IndexFingerTip, index_tip.0, index_tip.1),
            kp(LandmarkName::MiddleFingerMcp, 205.0, 150.0),
            kp(LandmarkName::MiddleFingerDip, 225.0, 120.0),
            kp(LandmarkName::MiddleFingerTip, middle_tip.0, middle_tip.1),
            kp(LandmarkName::RingFingerMcp, 215.0, 150.0),
            kp(LandmarkName::RingFingerDip, 215.0, 140.0),
            kp(LandmarkName::RingFingerTip, 210.0, 190.0),
            kp(LandmarkName::PinkyMcp, 230.0, 150.0),
            kp(LandmarkName::PinkyDip, 228.0, 142.0),
            kp(LandmarkName::PinkyTip, 220.0, 192.0),
            kp(LandmarkName::ThumbMcp, 230.0, 180.0),
            kp(LandmarkName::ThumbTip, 190.0, 160.0),
        ])
    }

    #[test]
    fn grip_neutral() {
        let map = grip_hand(200.0);
        assert_relative_eq!(hand_angle(&map).unwrap(), 0.0);
        assert_eq!(classify(&map, Handedness::Right), HandPose::KnobGripNeutral);
    }

    #[test]
    fn grip_turned() {
        // Wrist displaced to the side leans the hand by 45°, well past the turn threshold.
        let map = grip_hand(130.0);
        assert_relative_eq!(hand_angle(&map).unwrap(), FRAC_PI_4, epsilon = 1e-6);
        assert_eq!(
            classify(&map, Handedness::Right),
            HandPose::KnobGripCounterClockwise
        );

        let map = grip_hand(270.0);
        assert_relative_eq!(hand_angle(&map).unwrap(), -FRAC_PI_4, epsilon = 1e-6);
        assert_eq!(classify(&map, Handedness::Left), HandPose::KnobGripClockwise);
    }

    #[test]
    fn scissors_open_and_closed() {
        let map = scissors_hand((160.0, 100.0), (240.0, 100.0));
        assert!(scissors_angle(&map).unwrap() > SCISSORS_OPEN_THRESHOLD);
        assert_eq!(classify(&map, Handedness::Right), HandPose::ScissorsOpen);

        let map = scissors_hand((195.0, 100.0), (205.0, 100.0));
        assert!(scissors_angle(&map).unwrap() < SCISSORS_OPEN_THRESHOLD);
        assert_eq!(classify(&map, Handedness::Right), HandPose::ScissorsClosed);
    }

    #[test]
    fn grip_takes_priority_over_scissors() {
        // A gripping hand also has its pinky and ring folded in; the grip test must win.
        let map = grip_hand(200.0);
        assert_eq!(is_grip(&map), Some(true));
        assert_ne!(classify(&map, Handedness::Right), HandPose::ScissorsClosed);
    }

    #[test]
    fn missing_landmark_is_unknown() {
        let map = KeypointMap::from_keypoints(
            grip_hand(200.0)
                .iter()
                .copied()
                .filter(|kp| kp.name() != LandmarkName::PinkyTip),
        );
        assert_eq!(classify(&map, Handedness::Right), HandPose::Unknown);
    }

    #[test]
    fn degenerate_orientation_is_unknown() {
        // Wrist placed exactly on the middle-finger MCP: hand angle is NaN.
        let map = KeypointMap::from_keypoints(
            grip_hand(200.0)
                .iter()
                .copied()
                .map(|p| match p.name() {
                    LandmarkName::Wrist => kp(LandmarkName::Wrist, 200.0, 150.0),
                    _ => p,
                }),
        );
        assert!(hand_angle(&map).unwrap().is_nan());
        assert_eq!(classify(&map, Handedness::Right), HandPose::Unknown);
    }

    #[test]
    fn classify_is_idempotent() {
        let map = grip_hand(130.0);
        let first = classify(&map, Handedness::Left);
        assert_eq!(classify(&map, Handedness::Left), first);
    }

    #[test]
    fn facing_camera() {
        let map = scissors_hand((160.0, 100.0), (240.0, 100.0));
        assert_eq!(is_facing_camera(&map, Handedness::Right), Some(true));
        assert_eq!(is_facing_camera(&map, Handedness::Left), Some(false));
        assert_eq!(
            is_facing_camera(&KeypointMap::from_keypoints([]), Handedness::Left),
            None
        );
    }
}
