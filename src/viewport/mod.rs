//! Viewport geometry and the scroll-driven trackers built on it.

use std::str::FromStr;

use thiserror::Error;

pub mod progress;
pub mod reveal;
pub mod sections;

/// Element box in viewport coordinates, as `getBoundingClientRect` reports it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginValue {
    Px(f64),
    Percent(f64),
}

impl MarginValue {
    fn resolve(self, extent: f64) -> f64 {
        match self {
            MarginValue::Px(px) => px,
            MarginValue::Percent(pct) => extent * pct / 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarginParseError {
    #[error("expected 1 to 4 margin values, got {0}")]
    Arity(usize),
    #[error("invalid margin value `{0}`")]
    Value(String),
}

/// Grows (positive) or shrinks (negative) the viewport before intersection
/// is measured. Parsed from CSS shorthand, e.g. `"0px 0px -80px 0px"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: MarginValue,
    pub right: MarginValue,
    pub bottom: MarginValue,
    pub left: MarginValue,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin {
        top: MarginValue::Px(0.0),
        right: MarginValue::Px(0.0),
        bottom: MarginValue::Px(0.0),
        left: MarginValue::Px(0.0),
    };

    /// Vertical bounds `(top, bottom)` of the effective viewport.
    pub fn vertical_bounds(&self, viewport_height: f64) -> (f64, f64) {
        let top = -self.top.resolve(viewport_height);
        let bottom = viewport_height + self.bottom.resolve(viewport_height);
        (top, bottom)
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        RootMargin::ZERO
    }
}

impl FromStr for RootMargin {
    type Err = MarginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(parse_margin_value)
            .collect::<Result<Vec<_>, _>>()?;
        let (top, right, bottom, left) = match values.as_slice() {
            [all] => (*all, *all, *all, *all),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            other => return Err(MarginParseError::Arity(other.len())),
        };
        Ok(RootMargin { top, right, bottom, left })
    }
}

fn parse_margin_value(raw: &str) -> Result<MarginValue, MarginParseError> {
    let invalid = || MarginParseError::Value(raw.to_string());
    if let Some(pct) = raw.strip_suffix('%') {
        return pct.parse().map(MarginValue::Percent).map_err(|_| invalid());
    }
    if let Some(px) = raw.strip_suffix("px") {
        return px.parse().map(MarginValue::Px).map_err(|_| invalid());
    }
    match raw.parse::<f64>() {
        Ok(v) if v == 0.0 => Ok(MarginValue::Px(0.0)),
        _ => Err(invalid()),
    }
}

/// Fraction of the element's own height inside the (margin-adjusted)
/// viewport. Zero-height elements count as fully visible when their edge is
/// inside the viewport.
pub fn intersection_ratio(rect: Rect, viewport_height: f64, margin: &RootMargin) -> f64 {
    let (top, bottom) = margin.vertical_bounds(viewport_height);
    let visible = rect.bottom().min(bottom) - rect.top.max(top);
    if rect.height <= 0.0 {
        return if rect.top >= top && rect.top <= bottom { 1.0 } else { 0.0 };
    }
    (visible / rect.height).clamp(0.0, 1.0)
}

/// How far an element has travelled through the viewport, from its top
/// touching the viewport bottom (0.0) to its bottom leaving the viewport top
/// (1.0).
pub fn element_progress(rect: Rect, viewport_height: f64) -> f64 {
    let travel = viewport_height + rect.height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect.top) / travel).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_css_shorthand() {
        let margin: RootMargin = "0px 0px -80px 0px".parse().unwrap();
        assert_eq!(margin.bottom, MarginValue::Px(-80.0));
        assert_eq!(margin.top, MarginValue::Px(0.0));

        let margin: RootMargin = "0px 0px -20% 0px".parse().unwrap();
        assert_eq!(margin.bottom, MarginValue::Percent(-20.0));

        let margin: RootMargin = "10px 5%".parse().unwrap();
        assert_eq!(margin.bottom, MarginValue::Px(10.0));
        assert_eq!(margin.left, MarginValue::Percent(5.0));

        let margin: RootMargin = "0".parse().unwrap();
        assert_eq!(margin, RootMargin::ZERO);
    }

    #[test]
    fn rejects_bad_margins() {
        assert_eq!("".parse::<RootMargin>(), Err(MarginParseError::Arity(0)));
        assert_eq!("1px 2px 3px 4px 5px".parse::<RootMargin>(), Err(MarginParseError::Arity(5)));
        assert_eq!("12em".parse::<RootMargin>(), Err(MarginParseError::Value("12em".into())));
        assert_eq!("7".parse::<RootMargin>(), Err(MarginParseError::Value("7".into())));
    }

    #[test]
    fn ratio_of_partially_visible_box() {
        let rect = Rect::new(0.0, 600.0, 100.0, 400.0);
        assert_eq!(intersection_ratio(rect, 800.0, &RootMargin::ZERO), 0.5);
        assert_eq!(intersection_ratio(Rect::new(0.0, 900.0, 10.0, 10.0), 800.0, &RootMargin::ZERO), 0.0);
        assert_eq!(intersection_ratio(Rect::new(0.0, -50.0, 10.0, 100.0), 800.0, &RootMargin::ZERO), 0.5);
    }

    #[test]
    fn negative_bottom_margin_delays_visibility() {
        let margin: RootMargin = "0px 0px -80px 0px".parse().unwrap();
        let rect = Rect::new(0.0, 740.0, 100.0, 100.0);
        assert!(intersection_ratio(rect, 800.0, &RootMargin::ZERO) > 0.0);
        assert_eq!(intersection_ratio(rect, 800.0, &margin), 0.0);

        let pct: RootMargin = "0px 0px -20% 0px".parse().unwrap();
        assert_eq!(pct.vertical_bounds(1000.0), (0.0, 800.0));
    }

    #[test]
    fn element_progress_spans_entry_to_exit() {
        assert_eq!(element_progress(Rect::new(0.0, 800.0, 0.0, 400.0), 800.0), 0.0);
        assert_eq!(element_progress(Rect::new(0.0, -400.0, 0.0, 400.0), 800.0), 1.0);
        assert_eq!(element_progress(Rect::new(0.0, 200.0, 0.0, 400.0), 800.0), 0.5);
    }
}
