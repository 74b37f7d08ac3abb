/// Timing curve applied to normalized animation progress.
///
/// Every variant maps `0.0 -> 0.0` and `1.0 -> 1.0`; input outside `[0, 1]`
/// is clamped first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    CubicBezier(f64, f64, f64, f64),
}

/// The site-wide entrance curve.
pub const EMPHASIZED: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseOut => bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::CubicBezier(x1, y1, x2, y2) => bezier(x1, y1, x2, y2, t),
        }
    }

    /// True when the curve never leaves `[0, 1]`, i.e. values driven by it
    /// cannot overshoot the end point.
    pub fn is_monotonic(self) -> bool {
        match self {
            Easing::Linear | Easing::EaseOut | Easing::EaseInOut => true,
            Easing::CubicBezier(_, y1, _, y2) => (0.0..=1.0).contains(&y1) && (0.0..=1.0).contains(&y2),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseOut
    }
}

// Cubic bézier through (0,0) and (1,1). Solves x(s) = t for s, then returns y(s).
fn bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);
    let s = solve_curve_x(x1, x2, t);
    sample_curve(y1, y2, s)
}

fn sample_curve(p1: f64, p2: f64, s: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * s + b) * s + c) * s
}

fn sample_derivative(p1: f64, p2: f64, s: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * s + 2.0 * b) * s + c
}

fn solve_curve_x(x1: f64, x2: f64, x: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    let mut s = x;
    for _ in 0..8 {
        let err = sample_curve(x1, x2, s) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let d = sample_derivative(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    // Newton stalled on a flat stretch; bisect instead.
    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    while hi - lo > EPSILON {
        let v = sample_curve(x1, x2, s);
        if (v - x).abs() < EPSILON {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [Easing::Linear, Easing::EaseOut, Easing::EaseInOut, EMPHASIZED];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn monotonic_curves_never_decrease() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 1..=200 {
                let v = easing.apply(i as f64 / 200.0);
                assert!(v + 1e-9 >= prev, "{easing:?} dipped at step {i}");
                assert!(v <= 1.0 + 1e-9);
                prev = v;
            }
        }
    }

    #[test]
    fn ease_out_front_loads_progress() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(EMPHASIZED.apply(0.25) > Easing::EaseOut.apply(0.25));
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let a = Easing::EaseInOut.apply(0.3);
        let b = Easing::EaseInOut.apply(0.7);
        assert!((a + b - 1.0).abs() < 1e-5);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn overshooting_bezier_is_flagged() {
        assert!(!Easing::CubicBezier(0.3, -0.5, 0.7, 1.5).is_monotonic());
        assert!(EMPHASIZED.is_monotonic());
    }
}
