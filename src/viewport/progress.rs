use crate::motion::{Spring, SpringConfig};

/// One reading of the document scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
    pub at_ms: f64,
}

impl ScrollSample {
    /// Raw scroll ratio in `[0, 1]`. A document that cannot scroll reads 0.
    pub fn ratio(&self) -> f64 {
        let scrollable = self.scroll_height - self.client_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_top / scrollable).clamp(0.0, 1.0)
    }
}

/// Smoothed page scroll progress.
///
/// Samples set the spring target; frames move the spring. A sample older
/// than the newest one already applied is dropped.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    spring: Spring,
    raw: f64,
    last_sample_at: Option<f64>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::with_config(SpringConfig::PROGRESS)
    }

    pub fn with_config(config: SpringConfig) -> Self {
        Self { spring: Spring::new(0.0, config), raw: 0.0, last_sample_at: None }
    }

    /// Returns false when the sample was stale and ignored.
    pub fn sample(&mut self, sample: ScrollSample) -> bool {
        if matches!(self.last_sample_at, Some(last) if sample.at_ms < last) {
            return false;
        }
        self.last_sample_at = Some(sample.at_ms);
        self.raw = sample.ratio();
        self.spring.set_target(self.raw);
        true
    }

    pub fn advance(&mut self, dt_ms: f64) -> f64 {
        self.spring.step(dt_ms).clamp(0.0, 1.0)
    }

    /// Skips the smoothing, e.g. under reduced motion.
    pub fn jump(&mut self) {
        self.spring.snap_to(self.raw);
    }

    pub fn raw(&self) -> f64 {
        self.raw
    }

    pub fn progress(&self) -> f64 {
        self.spring.value().clamp(0.0, 1.0)
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_at_rest()
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(scroll_top: f64, at_ms: f64) -> ScrollSample {
        ScrollSample { scroll_top, scroll_height: 5000.0, client_height: 1000.0, at_ms }
    }

    #[test]
    fn ratio_is_offset_over_scrollable_height() {
        assert_eq!(sample(2000.0, 0.0).ratio(), 0.5);
        assert_eq!(sample(9000.0, 0.0).ratio(), 1.0);
        assert_eq!(sample(-40.0, 0.0).ratio(), 0.0);
        let short = ScrollSample { scroll_top: 0.0, scroll_height: 600.0, client_height: 800.0, at_ms: 0.0 };
        assert_eq!(short.ratio(), 0.0);
    }

    #[test]
    fn progress_follows_samples_smoothly() {
        let mut tracker = ScrollTracker::new();
        tracker.sample(sample(4000.0, 10.0));
        let first = tracker.advance(16.0);
        assert!(first > 0.0 && first < 1.0, "jumped to {first}");
        for _ in 0..500 {
            tracker.advance(16.0);
        }
        assert!(tracker.is_settled());
        assert_eq!(tracker.progress(), 1.0);
    }

    #[test]
    fn stale_samples_are_dropped() {
        let mut tracker = ScrollTracker::new();
        assert!(tracker.sample(sample(2000.0, 50.0)));
        assert!(!tracker.sample(sample(0.0, 20.0)));
        assert_eq!(tracker.raw(), 0.5);
        assert!(tracker.sample(sample(1000.0, 50.0)));
        assert_eq!(tracker.raw(), 0.25);
    }

    #[test]
    fn jump_skips_smoothing() {
        let mut tracker = ScrollTracker::new();
        tracker.sample(sample(2000.0, 0.0));
        tracker.jump();
        assert_eq!(tracker.progress(), 0.5);
        assert!(tracker.is_settled());
    }
}
