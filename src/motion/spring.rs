/// Physical parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target under which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed (units per second) under which the spring may come to rest.
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Scroll-progress smoothing. Works on a `[0, 1]` ratio.
    pub const PROGRESS: SpringConfig = SpringConfig {
        stiffness: 120.0,
        damping: 20.0,
        mass: 0.2,
        rest_delta: 0.001,
        rest_speed: 0.01,
    };

    /// Magnetic button pull. Works in CSS pixels.
    pub const MAGNETIC: SpringConfig = SpringConfig {
        stiffness: 300.0,
        damping: 20.0,
        mass: 0.3,
        rest_delta: 0.01,
        rest_speed: 0.1,
    };

    /// `damping / (2 * sqrt(stiffness * mass))`. At or above 1.0 the spring
    /// does not oscillate.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

// Integrating in sub-steps keeps stiff springs stable at any frame interval.
const MAX_STEP_MS: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        Self { config, value: initial, velocity: 0.0, target: initial }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jumps straight to `value` with no motion.
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advances the simulation by `dt_ms` and returns the new value.
    pub fn step(&mut self, dt_ms: f64) -> f64 {
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }

        let mut remaining = dt_ms.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_MS) / 1000.0;
            remaining -= MAX_STEP_MS;

            let SpringConfig { stiffness, damping, mass, .. } = self.config;
            let displacement = self.value - self.target;
            let accel = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }

        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.value).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(spring: &mut Spring, frame_ms: f64) -> (usize, f64) {
        let mut peak = spring.value();
        for frame in 0..10_000 {
            let v = spring.step(frame_ms);
            peak = peak.max(v);
            if spring.is_at_rest() {
                return (frame, peak);
            }
        }
        panic!("spring never settled");
    }

    #[test]
    fn presets_are_not_oscillating() {
        assert!(SpringConfig::PROGRESS.damping_ratio() >= 1.0);
        assert!(SpringConfig::MAGNETIC.damping_ratio() >= 1.0);
    }

    #[test]
    fn progress_spring_settles_without_visible_overshoot() {
        let mut spring = Spring::new(0.0, SpringConfig::PROGRESS);
        spring.set_target(1.0);
        let (_, peak) = settle(&mut spring, 16.0);
        assert!(peak <= 1.05, "overshoot to {peak}");
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn magnetic_spring_is_stable_at_long_frames() {
        let mut spring = Spring::new(0.0, SpringConfig::MAGNETIC);
        spring.set_target(14.0);
        let (_, peak) = settle(&mut spring, 50.0);
        assert!(peak <= 14.0 * 1.05);
        assert_eq!(spring.value(), 14.0);
    }

    #[test]
    fn resting_spring_does_not_move() {
        let mut spring = Spring::new(3.0, SpringConfig::MAGNETIC);
        assert!(spring.is_at_rest());
        assert_eq!(spring.step(16.0), 3.0);
    }

    #[test]
    fn retargeting_mid_flight_reverses_direction() {
        let mut spring = Spring::new(0.0, SpringConfig::MAGNETIC);
        spring.set_target(10.0);
        for _ in 0..3 {
            spring.step(16.0);
        }
        let mid = spring.value();
        assert!(mid > 0.0 && mid < 10.0);
        spring.set_target(0.0);
        settle(&mut spring, 16.0);
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn snap_skips_the_animation() {
        let mut spring = Spring::new(0.0, SpringConfig::PROGRESS);
        spring.snap_to(0.7);
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 0.7);
    }
}
