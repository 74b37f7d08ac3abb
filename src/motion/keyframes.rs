use super::easing::Easing;

/// Endlessly repeating keyframe track.
///
/// Keyframes are spaced evenly over `duration_ms`; each segment is eased
/// independently. Before `delay_ms` has passed the track holds its first
/// keyframe.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeLoop {
    frames: Vec<f64>,
    duration_ms: f64,
    delay_ms: f64,
    easing: Easing,
}

impl KeyframeLoop {
    pub fn new(frames: Vec<f64>, duration_ms: f64) -> Self {
        Self { frames, duration_ms: duration_ms.max(1.0), delay_ms: 0.0, easing: Easing::EaseInOut }
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn sample(&self, time_ms: f64) -> f64 {
        let (first, rest) = match self.frames.split_first() {
            Some(split) => split,
            None => return 0.0,
        };
        if rest.is_empty() || time_ms <= self.delay_ms {
            return *first;
        }

        let phase = ((time_ms - self.delay_ms) % self.duration_ms) / self.duration_ms;
        let segments = (self.frames.len() - 1) as f64;
        let position = phase * segments;
        let index = (position.floor() as usize).min(self.frames.len() - 2);
        let local = self.easing.apply(position - index as f64);

        let a = self.frames[index];
        let b = self.frames[index + 1];
        a * (1.0 - local) + b * local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drift() -> KeyframeLoop {
        KeyframeLoop::new(vec![0.0, 24.0, -16.0, 12.0, 0.0], 18_000.0)
    }

    #[test]
    fn hits_each_keyframe_on_its_boundary() {
        let track = drift();
        assert_eq!(track.sample(0.0), 0.0);
        assert_eq!(track.sample(4_500.0), 24.0);
        assert_eq!(track.sample(9_000.0), -16.0);
        assert_eq!(track.sample(13_500.0), 12.0);
    }

    #[test]
    fn repeats_after_one_period() {
        let track = drift();
        assert_eq!(track.sample(4_500.0), track.sample(22_500.0));
        assert!((track.sample(2_000.0) - track.sample(38_000.0)).abs() < 1e-9);
    }

    #[test]
    fn delay_holds_the_first_frame() {
        let track = drift().delay(1_200.0);
        assert_eq!(track.sample(600.0), 0.0);
        assert_eq!(track.sample(1_200.0 + 4_500.0), 24.0);
    }

    #[test]
    fn degenerate_tracks() {
        assert_eq!(KeyframeLoop::new(vec![], 1000.0).sample(10.0), 0.0);
        assert_eq!(KeyframeLoop::new(vec![1.08], 1000.0).sample(10.0), 1.08);
    }
}
