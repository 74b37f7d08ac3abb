//! Time-driven value animation: easing curves, finite runs, springs and
//! looping keyframe tracks. Nothing here touches the DOM; components feed
//! frame deltas in and render whatever comes out.

pub mod easing;
pub mod keyframes;
pub mod spring;
pub mod tween;

pub use easing::{Easing, EMPHASIZED};
pub use keyframes::KeyframeLoop;
pub use spring::{Spring, SpringConfig};
pub use tween::{map_range, AnimationRun, Counter};

/// Frame interval used by the interval-driven animation clock.
pub const FRAME_MS: u32 = 16;
