use crate::motion::{AnimationRun, Easing, EMPHASIZED};

use super::RootMargin;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealMode {
    /// Enter once, then stay revealed for the element's lifetime.
    #[default]
    Once,
    /// Enter on every re-entry, exit when leaving.
    Repeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEvent {
    Enter,
    Exit,
}

/// Per-element reveal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    mode: RevealMode,
    revealed: bool,
    in_view: bool,
}

impl Reveal {
    pub fn new(mode: RevealMode) -> Self {
        Self { mode, revealed: false, in_view: false }
    }

    /// Feeds the latest in-view reading; returns the transition to play, if any.
    pub fn observe(&mut self, in_view: bool) -> Option<RevealEvent> {
        if self.mode == RevealMode::Once && self.revealed {
            return None;
        }
        let was = std::mem::replace(&mut self.in_view, in_view);
        match (was, in_view) {
            (false, true) => {
                self.revealed = true;
                Some(RevealEvent::Enter)
            }
            (true, false) if self.mode == RevealMode::Repeat => {
                self.revealed = false;
                Some(RevealEvent::Exit)
            }
            _ => None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Once-mode reveals that have fired no longer need observing.
    pub fn is_settled(&self) -> bool {
        self.mode == RevealMode::Once && self.revealed
    }
}

/// Visual state interpolated by a reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const SHOWN: Pose = Pose { opacity: 1.0, y: 0.0, scale: 1.0 };

    pub fn hidden(y: f64) -> Self {
        Pose { opacity: 0.0, y, scale: 1.0 }
    }

    pub fn lerp(self, to: Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a * (1.0 - t) + b * t;
        Pose { opacity: mix(self.opacity, to.opacity), y: mix(self.y, to.y), scale: mix(self.scale, to.scale) }
    }

    pub fn to_style(self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px) scale({:.4});",
            self.opacity, self.y, self.scale
        )
    }
}

/// When an element counts as in view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InViewOptions {
    pub margin: RootMargin,
    /// Minimum visible fraction; `0.0` means any intersection.
    pub threshold: f64,
    pub mode: RevealMode,
}

impl InViewOptions {
    pub fn is_in_view(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.threshold
    }
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self { margin: RootMargin::ZERO, threshold: 0.0, mode: RevealMode::Once }
    }
}

/// Declarative description of an entrance: where it starts, where it ends,
/// how long it takes, and what triggers it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
    pub trigger: InViewOptions,
}

impl RevealSpec {
    pub fn fade_up(y: f64) -> Self {
        Self {
            from: Pose::hidden(y),
            to: Pose::SHOWN,
            duration_ms: 600.0,
            delay_ms: 0.0,
            easing: EMPHASIZED,
            trigger: InViewOptions::default(),
        }
    }

    pub fn duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn scale_from(mut self, scale: f64) -> Self {
        self.from.scale = scale;
        self
    }

    pub fn trigger(mut self, trigger: InViewOptions) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn start(&self) -> RevealAnimation {
        self.start_from(self.from, self.to)
    }

    pub fn start_exit(&self) -> RevealAnimation {
        self.start_from(self.to, self.from)
    }

    /// Run from an arbitrary pose, e.g. wherever an interrupted run stopped.
    pub fn start_from(&self, from: Pose, to: Pose) -> RevealAnimation {
        RevealAnimation::new(*self, from, to)
    }
}

impl Default for RevealSpec {
    fn default() -> Self {
        RevealSpec::fade_up(24.0)
    }
}

/// A running reveal: waits out the delay, then eases `from` into `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealAnimation {
    from: Pose,
    to: Pose,
    wait_ms: f64,
    run: AnimationRun,
    pose: Pose,
}

impl RevealAnimation {
    fn new(spec: RevealSpec, from: Pose, to: Pose) -> Self {
        Self {
            from,
            to,
            wait_ms: spec.delay_ms.max(0.0),
            run: AnimationRun::new(0.0, 1.0, spec.duration_ms, spec.easing),
            pose: from,
        }
    }

    pub fn tick(&mut self, dt_ms: f64) -> Pose {
        let mut dt = dt_ms;
        if self.wait_ms > 0.0 {
            let waited = dt.min(self.wait_ms);
            self.wait_ms -= waited;
            dt -= waited;
            if self.wait_ms > 0.0 {
                return self.pose;
            }
        }
        if let Some(t) = self.run.tick(dt) {
            self.pose = self.from.lerp(self.to, t);
        }
        self.pose
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn is_finished(&self) -> bool {
        !self.run.is_running()
    }
}

/// Child delays for a group revealed as one unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub base_delay_ms: f64,
    pub interval_ms: f64,
}

impl Stagger {
    /// Services grid.
    pub const CARDS: Stagger = Stagger { base_delay_ms: 200.0, interval_ms: 80.0 };
    /// Testimonials.
    pub const QUOTES: Stagger = Stagger { base_delay_ms: 80.0, interval_ms: 120.0 };

    /// Delay of child `index`, measured from the moment the group is in view.
    pub fn delay_for(&self, index: usize) -> f64 {
        self.base_delay_ms + index as f64 * self.interval_ms
    }

    pub fn child(&self, spec: RevealSpec, index: usize) -> RevealSpec {
        spec.delay(self.delay_for(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_mode_fires_a_single_enter() {
        let mut reveal = Reveal::new(RevealMode::Once);
        assert_eq!(reveal.observe(false), None);
        assert_eq!(reveal.observe(true), Some(RevealEvent::Enter));
        assert_eq!(reveal.observe(true), None);
        assert_eq!(reveal.observe(false), None);
        assert_eq!(reveal.observe(true), None);
        assert!(reveal.is_revealed());
        assert!(reveal.is_settled());
    }

    #[test]
    fn repeat_mode_replays_on_reentry() {
        let mut reveal = Reveal::new(RevealMode::Repeat);
        assert_eq!(reveal.observe(true), Some(RevealEvent::Enter));
        assert_eq!(reveal.observe(false), Some(RevealEvent::Exit));
        assert!(!reveal.is_revealed());
        assert_eq!(reveal.observe(true), Some(RevealEvent::Enter));
        assert!(!reveal.is_settled());
    }

    #[test]
    fn animation_waits_for_delay_then_lands_on_shown() {
        let spec = RevealSpec::fade_up(24.0).delay(100.0);
        let mut anim = spec.start();
        assert_eq!(anim.tick(60.0), Pose::hidden(24.0));
        let partial = anim.tick(60.0);
        assert!(partial.opacity > 0.0 && partial.opacity < 1.0);
        for _ in 0..100 {
            anim.tick(16.0);
        }
        assert!(anim.is_finished());
        assert_eq!(anim.pose(), Pose::SHOWN);
    }

    #[test]
    fn exit_runs_the_entrance_backwards() {
        let mut anim = RevealSpec::fade_up(16.0).start_exit();
        anim.tick(10_000.0);
        assert_eq!(anim.pose(), Pose::hidden(16.0));
    }

    #[test]
    fn interrupted_entrance_exits_from_where_it_stopped() {
        let spec = RevealSpec::fade_up(24.0);
        let mut enter = spec.start();
        let midway = enter.tick(150.0);
        assert!(midway.opacity > 0.0 && midway.opacity < 1.0);

        let mut exit = spec.start_from(midway, spec.from);
        assert_eq!(exit.pose(), midway);
        let first = exit.tick(16.0);
        assert!(first.opacity <= midway.opacity, "exit brightened to {}", first.opacity);
        assert!(first.y >= midway.y);
        exit.tick(10_000.0);
        assert_eq!(exit.pose(), spec.from);
    }

    #[test]
    fn reentry_mid_exit_does_not_snap_to_hidden() {
        let spec = RevealSpec::fade_up(24.0);
        let mut exit = spec.start_exit();
        let midway = exit.tick(150.0);
        assert!(midway.opacity < 1.0 && midway.opacity > 0.0);

        let mut enter = spec.start_from(midway, spec.to);
        let first = enter.tick(16.0);
        assert!(first.opacity >= midway.opacity, "re-entry dropped to {}", first.opacity);
        enter.tick(10_000.0);
        assert_eq!(enter.pose(), Pose::SHOWN);
    }

    #[test]
    fn stagger_offsets_children_from_group_entry() {
        assert_eq!(Stagger::CARDS.delay_for(0), 200.0);
        assert_eq!(Stagger::CARDS.delay_for(3), 440.0);
        let spec = Stagger::QUOTES.child(RevealSpec::fade_up(18.0).scale_from(0.98), 2);
        assert_eq!(spec.delay_ms, 320.0);
        assert_eq!(spec.from.scale, 0.98);
    }

    #[test]
    fn threshold_and_any_intersection() {
        let any = InViewOptions::default();
        assert!(!any.is_in_view(0.0));
        assert!(any.is_in_view(0.01));
        let half = InViewOptions { threshold: 0.5, ..InViewOptions::default() };
        assert!(!half.is_in_view(0.4));
        assert!(half.is_in_view(0.5));
    }

    #[test]
    fn style_string_is_css() {
        assert_eq!(Pose::SHOWN.to_style(), "opacity: 1.000; transform: translateY(0.00px) scale(1.0000);");
    }
}
