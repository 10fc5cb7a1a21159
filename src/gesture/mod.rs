//! Per-hand gesture event streams derived from frame-by-frame pose classification.
//!
//! A [`GestureTracker`] consumes one frame of detector output at a time, classifies every detected
//! hand, and pushes a [`GestureEvent`] onto the matching per-handedness channel. Events for a
//! given hand are delivered in frame arrival order and are never reordered; a failed delivery is
//! logged, never silently swallowed.
//!
//! By default every processed frame produces an event (the raw, continuous signal). Switching to
//! [`EmitMode::Transitions`] emits only when a hand's pose changes; the most recent classification
//! remains available either way through [`GestureTracker::state`].

use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use nalgebra::Point2;

use crate::hand::landmark::LandmarkName;
use crate::hand::pose::{self, HandPose};
use crate::hand::{Handedness, Keypoint, KeypointMap};

pub mod command;

/// One hand's detector output for a frame: a validated handedness plus the frame's keypoints.
#[derive(Debug, Clone)]
pub struct DetectedHand {
    pub handedness: Handedness,
    pub keypoints: Vec<Keypoint>,
}

impl DetectedHand {
    pub fn new(handedness: Handedness, keypoints: Vec<Keypoint>) -> Self {
        Self {
            handedness,
            keypoints,
        }
    }

    /// Builds a hand from the detector's raw handedness label.
    ///
    /// Returns an error for any label other than `"Left"` or `"Right"`; the frame should be
    /// rejected for that hand (other hands are unaffected).
    pub fn from_label(label: &str, keypoints: Vec<Keypoint>) -> anyhow::Result<Self> {
        Ok(Self::new(Handedness::from_label(label)?, keypoints))
    }
}

/// A classified hand observation, pushed to subscribers once per processed frame (or once per pose
/// change in [`EmitMode::Transitions`]).
#[derive(Debug, Clone, PartialEq)]
pub struct GestureEvent {
    pub handedness: Handedness,
    pub pose: HandPose,
    /// Hand rotation about the camera axis, in radians. See [`pose::hand_angle`].
    pub angle: f32,
    /// The wrist landmark's position.
    pub position: Point2<f32>,
}

/// The last-known classification of one tracked hand.
///
/// Created when a hand is first seen and updated every frame the hand appears in; it keeps its
/// last value (rather than being cleared) when the hand leaves the frame.
#[derive(Debug, Clone, Copy)]
pub struct HandState {
    pub handedness: Handedness,
    pub last_pose: HandPose,
    pub last_angle: f32,
    pub last_position: Point2<f32>,
}

/// Controls when [`GestureTracker`] pushes events to its streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitMode {
    /// Emit an event for every processed frame, re-emitting unchanged poses.
    #[default]
    Continuous,
    /// Emit only when a hand's pose differs from the previous frame's.
    Transitions,
}

/// Per-session frame clock, deduplicating display-refresh callbacks that deliver the same
/// timestamp twice.
///
/// Each independent session owns one and passes it to [`GestureTracker::process_frame`]; no global
/// state is involved, so concurrent sessions (or tests) don't interfere.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_timestamp: Option<Duration>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `timestamp` and returns whether it differs from the previous frame's.
    fn advance(&mut self, timestamp: Duration) -> bool {
        let fresh = self.last_timestamp != Some(timestamp);
        self.last_timestamp = Some(timestamp);
        fresh
    }
}

/// The receiving halves of a [`GestureTracker`]'s per-hand event streams.
///
/// Each receiver delivers one hand's events in frame arrival order. Cloning a receiver shares the
/// stream between competing consumers; it does not broadcast.
pub struct GestureStreams {
    pub left: Receiver<GestureEvent>,
    pub right: Receiver<GestureEvent>,
}

/// Tracks per-hand pose state across frames and emits [`GestureEvent`]s.
pub struct GestureTracker {
    mode: EmitMode,
    left: HandChannel,
    right: HandChannel,
}

struct HandChannel {
    sender: Sender<GestureEvent>,
    state: Option<HandState>,
}

impl HandChannel {
    fn new() -> (Self, Receiver<GestureEvent>) {
        let (sender, receiver) = unbounded();
        (
            Self {
                sender,
                state: None,
            },
            receiver,
        )
    }
}

impl GestureTracker {
    /// Creates a tracker in [`EmitMode::Continuous`] along with the receiving halves of its event
    /// streams.
    pub fn new() -> (Self, GestureStreams) {
        let (left, left_recv) = HandChannel::new();
        let (right, right_recv) = HandChannel::new();
        (
            Self {
                mode: EmitMode::default(),
                left,
                right,
            },
            GestureStreams {
                left: left_recv,
                right: right_recv,
            },
        )
    }

    /// Sets when events are pushed to the streams.
    ///
    /// By default, [`EmitMode::Continuous`] is used.
    pub fn set_emit_mode(&mut self, mode: EmitMode) {
        self.mode = mode;
    }

    /// Returns the last-known state of the given hand, regardless of emit mode.
    ///
    /// [`None`] until the hand has been seen with a complete landmark set at least once.
    pub fn state(&self, handedness: Handedness) -> Option<&HandState> {
        self.channel(handedness).state.as_ref()
    }

    /// Processes one frame of detector output.
    ///
    /// A frame whose `timestamp` equals the previously processed one is a duplicate refresh
    /// callback and is skipped entirely. A hand whose landmark set is incomplete is skipped for
    /// this frame, emitting nothing; a complete hand that merely matches no pose still yields an
    /// event with [`HandPose::Unknown`].
    pub fn process_frame(
        &mut self,
        clock: &mut FrameClock,
        timestamp: Duration,
        hands: &[DetectedHand],
    ) {
        if !clock.advance(timestamp) {
            log::trace!("duplicate frame timestamp {:?}, skipping", timestamp);
            return;
        }

        for hand in hands {
            self.process_hand(hand);
        }
    }

    fn process_hand(&mut self, hand: &DetectedHand) {
        let map = KeypointMap::from_keypoints(hand.keypoints.iter().copied());
        if !map.is_complete() {
            log::trace!(
                "incomplete landmark set for {:?} hand ({} of 21 points), skipping frame",
                hand.handedness,
                map.iter().count(),
            );
            return;
        }

        let pose = pose::classify(&map, hand.handedness);
        let (Some(angle), Some(wrist)) = (pose::hand_angle(&map), map.get(LandmarkName::Wrist))
        else {
            return;
        };

        let event = GestureEvent {
            handedness: hand.handedness,
            pose,
            angle,
            position: wrist.position(),
        };

        let mode = self.mode;
        let channel = self.channel_mut(hand.handedness);
        let transition = channel
            .state
            .map_or(true, |state| state.last_pose != pose);
        channel.state = Some(HandState {
            handedness: hand.handedness,
            last_pose: pose,
            last_angle: angle,
            last_position: event.position,
        });

        if mode == EmitMode::Transitions && !transition {
            return;
        }
        if channel.sender.send(event).is_err() {
            log::warn!(
                "{:?} hand stream disconnected, dropping gesture event",
                hand.handedness
            );
        }
    }

    fn channel(&self, handedness: Handedness) -> &HandChannel {
        match handedness {
            Handedness::Left => &self.left,
            Handedness::Right => &self.right,
        }
    }

    fn channel_mut(&mut self, handedness: Handedness) -> &mut HandChannel {
        match handedness {
            Handedness::Left => &mut self.left,
            Handedness::Right => &mut self.right,
        }
    }
}
