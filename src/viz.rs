//! Pose visualization mapping for keypoint overlay rendering.
//!
//! Purely a lookup: the renderer collaborator asks which color to draw a hand's skeleton in and
//! what to label it. Adding a pose means adding table rows here, not editing per-consumer
//! switches.

use crate::hand::{HandPose, Handedness};

/// A display color token, named after the CSS colors the overlay renderer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseColor {
    Red,
    Green,
    Yellow,
    White,
    Black,
    Blue,
    Purple,
    Aqua,
}

impl PoseColor {
    /// Returns the CSS color name for this token.
    pub fn css_name(self) -> &'static str {
        match self {
            PoseColor::Red => "red",
            PoseColor::Green => "green",
            PoseColor::Yellow => "yellow",
            PoseColor::White => "white",
            PoseColor::Black => "black",
            PoseColor::Blue => "blue",
            PoseColor::Purple => "purple",
            PoseColor::Aqua => "aqua",
        }
    }
}

const COLOR_TABLE: &[(HandPose, Handedness, PoseColor)] = {
    use HandPose::*;
    use Handedness::*;
    use PoseColor::*;
    &[
        (KnobGripClockwise, Right, Green),
        (KnobGripCounterClockwise, Right, Yellow),
        (ScissorsOpen, Right, White),
        (ScissorsClosed, Right, Black),
        (KnobGripClockwise, Left, Purple),
        (KnobGripCounterClockwise, Left, Aqua),
        (ScissorsOpen, Left, White),
        (ScissorsClosed, Left, Black),
    ]
};

/// Returns the overlay color for a hand in the given pose.
///
/// Poses without a table entry (including [`HandPose::Unknown`]) fall back to the hand's base
/// color: red for the right hand, blue for the left.
pub fn color_for(pose: HandPose, handedness: Handedness) -> PoseColor {
    COLOR_TABLE
        .iter()
        .find(|&&(p, h, _)| p == pose && h == handedness)
        .map(|&(_, _, color)| color)
        .unwrap_or(match handedness {
            Handedness::Right => PoseColor::Red,
            Handedness::Left => PoseColor::Blue,
        })
}

/// Returns a short human-readable label for a pose, for overlay text.
pub fn label_for(pose: HandPose) -> &'static str {
    match pose {
        HandPose::Unknown => "unknown",
        HandPose::KnobGripNeutral => "knob grip",
        HandPose::KnobGripClockwise => "knob grip (clockwise)",
        HandPose::KnobGripCounterClockwise => "knob grip (counter-clockwise)",
        HandPose::ScissorsOpen => "scissors (open)",
        HandPose::ScissorsClosed => "scissors (closed)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_handedness_palette() {
        assert_eq!(
            color_for(HandPose::KnobGripClockwise, Handedness::Right),
            PoseColor::Green
        );
        assert_eq!(
            color_for(HandPose::KnobGripClockwise, Handedness::Left),
            PoseColor::Purple
        );
        assert_eq!(
            color_for(HandPose::ScissorsOpen, Handedness::Left),
            PoseColor::White
        );
    }

    #[test]
    fn unmatched_poses_use_base_color() {
        assert_eq!(color_for(HandPose::Unknown, Handedness::Right), PoseColor::Red);
        assert_eq!(
            color_for(HandPose::KnobGripNeutral, Handedness::Right),
            PoseColor::Red
        );
        assert_eq!(color_for(HandPose::Unknown, Handedness::Left), PoseColor::Blue);
    }

    #[test]
    fn css_names() {
        assert_eq!(PoseColor::Aqua.css_name(), "aqua");
        assert_eq!(color_for(HandPose::ScissorsClosed, Handedness::Right).css_name(), "black");
    }
}
