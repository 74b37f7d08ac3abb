use super::easing::Easing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Completed,
    Cancelled,
}

/// One in-flight transition of a value from `from` to `to`.
///
/// `tick` advances the clock and yields the eased value. The run yields
/// exactly `to` on the tick that reaches `duration_ms` and nothing after
/// that. A cancelled run keeps whatever value it had reached.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationRun {
    from: f64,
    to: f64,
    duration_ms: f64,
    easing: Easing,
    elapsed_ms: f64,
    current: f64,
    state: RunState,
}

impl AnimationRun {
    pub fn new(from: f64, to: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            easing,
            elapsed_ms: 0.0,
            current: from,
            state: RunState::Running,
        }
    }

    pub fn tick(&mut self, dt_ms: f64) -> Option<f64> {
        if self.state != RunState::Running {
            return None;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms >= self.duration_ms {
            self.elapsed_ms = self.duration_ms;
            self.current = self.to;
            self.state = RunState::Completed;
            return Some(self.to);
        }
        let eased = self.easing.apply(self.elapsed_ms / self.duration_ms);
        let mut value = self.from + (self.to - self.from) * eased;
        if self.easing.is_monotonic() {
            value = clamp_between(value, self.from, self.to);
        }
        self.current = value;
        Some(value)
    }

    pub fn cancel(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Cancelled;
        }
    }

    /// Replaces this run with a new one that starts from the current value.
    pub fn retarget(&mut self, to: f64, duration_ms: f64) {
        self.cancel();
        *self = AnimationRun::new(self.current, to, duration_ms, self.easing);
    }

    pub fn value(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Drains the run as a finite sequence sampled every `step_ms`.
    pub fn frames(self, step_ms: f64) -> Frames {
        Frames { run: self, step_ms: step_ms.max(f64::EPSILON) }
    }
}

pub struct Frames {
    run: AnimationRun,
    step_ms: f64,
}

impl Iterator for Frames {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.run.tick(self.step_ms)
    }
}

/// Integer counter on top of an [`AnimationRun`].
///
/// Only changed integers are reported, so for `to > from` the reported
/// sequence strictly increases and finishes exactly on `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct Counter {
    run: AnimationRun,
    display: i64,
}

impl Counter {
    pub const DEFAULT_DURATION_MS: f64 = 2000.0;

    pub fn new(from: i64, to: i64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            run: AnimationRun::new(from as f64, to as f64, duration_ms, easing),
            display: from,
        }
    }

    pub fn tick(&mut self, dt_ms: f64) -> Option<i64> {
        let value = self.run.tick(dt_ms)?;
        let lo = self.run.from.min(self.run.to) as i64;
        let hi = self.run.from.max(self.run.to) as i64;
        let next = (value.round() as i64).clamp(lo, hi);
        if next == self.display {
            return None;
        }
        self.display = next;
        Some(next)
    }

    pub fn stop(&mut self) {
        self.run.cancel();
    }

    pub fn display(&self) -> i64 {
        self.display
    }

    pub fn is_running(&self) -> bool {
        self.run.is_running()
    }
}

/// Linear map of `value` from `input` onto `output`, clamped to `output`.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let span = input.1 - input.0;
    if span == 0.0 {
        return output.0;
    }
    let t = ((value - input.0) / span).clamp(0.0, 1.0);
    output.0 * (1.0 - t) + output.1 * t
}

fn clamp_between(value: f64, a: f64, b: f64) -> f64 {
    value.clamp(a.min(b), a.max(b))
}
