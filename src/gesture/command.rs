//! Maps per-hand gesture events to 3D viewer control commands.

use std::mem;

use crate::hand::HandPose;

use super::GestureEvent;

/// A discrete control command for the 3D viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    /// Rotate the scene clockwise by one step.
    RotateClockwise,
    /// Rotate the scene counter-clockwise by one step.
    RotateCounterClockwise,
    /// Toggle the clipping plane.
    ToggleClipPlane,
}

/// Turns one hand's gesture event stream into [`ViewerCommand`]s.
///
/// A turned knob grip commands a rotation step on every event it appears in, so holding the turn
/// keeps the scene rotating. The clipping plane toggles once per scissors *snip*, the transition
/// from [`HandPose::ScissorsOpen`] to [`HandPose::ScissorsClosed`].
///
/// The interpreter keeps per-hand state; use one instance per hand stream.
#[derive(Debug)]
pub struct CommandInterpreter {
    last_pose: HandPose,
}

impl CommandInterpreter {
    pub fn new() -> Self {
        Self {
            last_pose: HandPose::Unknown,
        }
    }

    /// Feeds the next event of the hand's stream, returning the command it triggers, if any.
    pub fn interpret(&mut self, event: &GestureEvent) -> Option<ViewerCommand> {
        let previous = mem::replace(&mut self.last_pose, event.pose);
        match event.pose {
            HandPose::KnobGripClockwise => Some(ViewerCommand::RotateClockwise),
            HandPose::KnobGripCounterClockwise => Some(ViewerCommand::RotateCounterClockwise),
            HandPose::ScissorsClosed if previous == HandPose::ScissorsOpen => {
                Some(ViewerCommand::ToggleClipPlane)
            }
            _ => None,
        }
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
