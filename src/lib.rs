//! Tessen hand-gesture interpretation library.
//!
//! Tessen turns per-frame hand-skeleton keypoints (the 21 landmarks produced by an external
//! pose-estimation model) into discrete [`HandPose`] values, per-hand gesture event streams, and
//! 3D-viewer control commands. It contains no camera capture, inference, or rendering code; those
//! collaborators feed keypoints in and consume classified poses out.
//!
//! # Coordinates
//!
//! Landmark coordinates use the image coordinate system of the detector's input: X points to the
//! right, Y points *down*. All angles are in radians.
//!
//! [`HandPose`]: hand::HandPose

use log::LevelFilter;

pub mod gesture;
pub mod hand;
pub mod num;
pub mod viz;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and Tessen will log at *debug* level; the `RUST_LOG` environment variable can
/// override this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
