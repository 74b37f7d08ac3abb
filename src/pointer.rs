//! Magnetic pointer-follow: an element's content leans toward the pointer,
//! capped and smoothed by a spring per axis.

use crate::motion::{Spring, SpringConfig};
use crate::viewport::Rect;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticConfig {
    pub scale: f64,
    pub max: f64,
    pub spring: SpringConfig,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self { scale: 0.25, max: 14.0, spring: SpringConfig::MAGNETIC }
    }
}

/// Target offset for a pointer at `(x, y)` over `rect`.
pub fn magnetic_offset(pointer: (f64, f64), rect: Rect, config: &MagneticConfig) -> (f64, f64) {
    let (cx, cy) = rect.center();
    let pull = |delta: f64| (delta * config.scale).clamp(-config.max, config.max);
    (pull(pointer.0 - cx), pull(pointer.1 - cy))
}

#[derive(Clone, Debug)]
pub struct Magnet {
    config: MagneticConfig,
    x: Spring,
    y: Spring,
    reduced_motion: bool,
}

impl Magnet {
    pub fn new(config: MagneticConfig, reduced_motion: bool) -> Self {
        Self {
            x: Spring::new(0.0, config.spring),
            y: Spring::new(0.0, config.spring),
            config,
            reduced_motion,
        }
    }

    pub fn pointer_move(&mut self, pointer: (f64, f64), rect: Rect) {
        if self.reduced_motion {
            return;
        }
        let (tx, ty) = magnetic_offset(pointer, rect, &self.config);
        self.x.set_target(tx);
        self.y.set_target(ty);
    }

    pub fn pointer_leave(&mut self) {
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
        if reduced {
            self.x.snap_to(0.0);
            self.y.snap_to(0.0);
        }
    }

    /// Advances both springs; returns the offset to render.
    pub fn tick(&mut self, dt_ms: f64) -> (f64, f64) {
        if self.reduced_motion {
            return (0.0, 0.0);
        }
        (self.x.step(dt_ms), self.y.step(dt_ms))
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.x.value(), self.y.value())
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Rect {
        Rect::new(100.0, 100.0, 200.0, 60.0)
    }

    fn settle(magnet: &mut Magnet) {
        for _ in 0..1000 {
            magnet.tick(16.0);
            if magnet.is_at_rest() {
                return;
            }
        }
        panic!("magnet never settled");
    }

    #[test]
    fn offset_scales_and_clamps_per_axis() {
        let config = MagneticConfig::default();
        assert_eq!(magnetic_offset((220.0, 130.0), button(), &config), (5.0, 0.0));
        assert_eq!(magnetic_offset((400.0, 0.0), button(), &config), (14.0, -14.0));
        assert_eq!(magnetic_offset((0.0, 150.0), button(), &config), (-14.0, 5.0));
    }

    #[test]
    fn springs_toward_target_then_back_on_leave() {
        let mut magnet = Magnet::new(MagneticConfig::default(), false);
        magnet.pointer_move((400.0, 0.0), button());
        let first = magnet.tick(16.0);
        assert!(first.0 > 0.0 && first.0 < 14.0, "snapped to {first:?}");
        settle(&mut magnet);
        assert_eq!(magnet.offset(), (14.0, -14.0));

        magnet.pointer_leave();
        settle(&mut magnet);
        assert_eq!(magnet.offset(), (0.0, 0.0));
    }

    #[test]
    fn reduced_motion_never_moves() {
        let mut magnet = Magnet::new(MagneticConfig::default(), true);
        for pointer in [(0.0, 0.0), (400.0, 0.0), (187.0, 999.0)] {
            magnet.pointer_move(pointer, button());
            assert_eq!(magnet.tick(16.0), (0.0, 0.0));
            assert_eq!(magnet.offset(), (0.0, 0.0));
        }
    }

    #[test]
    fn enabling_reduced_motion_recentres() {
        let mut magnet = Magnet::new(MagneticConfig::default(), false);
        magnet.pointer_move((400.0, 0.0), button());
        magnet.tick(100.0);
        magnet.set_reduced_motion(true);
        assert_eq!(magnet.offset(), (0.0, 0.0));
        assert!(magnet.is_at_rest());
    }
}
