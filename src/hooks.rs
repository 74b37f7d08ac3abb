//! DOM-facing hooks. They sample the browser (scroll, element boxes, media
//! queries, the frame clock) and hand plain numbers to the trackers in
//! `motion` and `viewport`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::motion::FRAME_MS;
use crate::prefs;
use crate::viewport::progress::{ScrollSample, ScrollTracker};
use crate::viewport::reveal::{InViewOptions, Reveal, RevealEvent};
use crate::viewport::{element_progress, intersection_ratio, Rect, RootMargin};

const VIEWPORT_EVENTS: [&str; 2] = ["scroll", "resize"];

pub fn now_ms() -> f64 {
    window().and_then(|w| w.performance()).map(|p| p.now()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn measure(node: &NodeRef) -> Option<Rect> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
}

pub fn measure_element(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn visible_ratio(node: &NodeRef, margin: &RootMargin) -> Option<f64> {
    Some(intersection_ratio(measure(node)?, viewport_height(), margin))
}

pub fn scroll_sample() -> Option<ScrollSample> {
    let root = window()?.document()?.document_element()?;
    Some(ScrollSample {
        scroll_top: f64::from(root.scroll_top()),
        scroll_height: f64::from(root.scroll_height()),
        client_height: f64::from(root.client_height()),
        at_ms: now_ms(),
    })
}

/// Window `scroll` + `resize` listener, removed on drop. The callback also
/// runs once on registration so the first reading does not wait for input.
pub struct ViewportListener {
    closure: Closure<dyn FnMut()>,
}

impl ViewportListener {
    pub fn new(mut on_change: impl FnMut() + 'static) -> Option<Self> {
        let window = window()?;
        on_change();
        let closure = Closure::wrap(Box::new(on_change) as Box<dyn FnMut()>);
        for event in VIEWPORT_EVENTS {
            if window
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                .is_err()
            {
                warn!("could not listen for {} events", event);
            }
        }
        Some(Self { closure })
    }
}

impl Drop for ViewportListener {
    fn drop(&mut self) {
        if let Some(window) = window() {
            for event in VIEWPORT_EVENTS {
                let _ = window.remove_event_listener_with_callback(event, self.closure.as_ref().unchecked_ref());
            }
        }
    }
}

/// Calls `on_frame(dt_ms)` roughly every frame while `active` is true. The
/// interval is dropped as soon as `active` turns false or the component
/// unmounts, so no frame fires into an unmounted component.
#[hook]
pub fn use_frame_loop<F>(active: bool, on_frame: F)
where
    F: Fn(f64) + 'static,
{
    let latest = use_mut_ref(|| None::<Rc<dyn Fn(f64)>>);
    *latest.borrow_mut() = Some(Rc::new(on_frame));

    use_effect_with_deps(
        move |active| {
            let interval = (*active).then(|| {
                let mut last = now_ms();
                Interval::new(FRAME_MS, move || {
                    let now = now_ms();
                    let dt = (now - last).max(0.0);
                    last = now;
                    let callback = latest.borrow().clone();
                    if let Some(callback) = callback {
                        callback(dt);
                    }
                })
            });
            move || drop(interval)
        },
        active,
    );
}

/// Read once per mount.
#[hook]
pub fn use_reduced_motion() -> bool {
    let reduced = use_state(prefs::prefers_reduced_motion);
    *reduced
}

/// Whether `node` has entered the viewport, per `options`. In once mode the
/// value latches to true.
#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let node = node.clone();
                let options = *options;
                let reveal = RefCell::new(Reveal::new(options.mode));
                let listener = ViewportListener::new(move || {
                    if reveal.borrow().is_settled() {
                        return;
                    }
                    let Some(ratio) = visible_ratio(&node, &options.margin) else {
                        return;
                    };
                    let event = reveal.borrow_mut().observe(options.is_in_view(ratio));
                    if let Some(event) = event {
                        in_view.set(event == RevealEvent::Enter);
                    }
                });
                move || drop(listener)
            },
            (node, options),
        );
    }

    *in_view
}

/// Raw travel of `node` through the viewport, 0.0 on entry to 1.0 on exit.
#[hook]
pub fn use_element_progress(node: NodeRef) -> f64 {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |node| {
                let node = node.clone();
                let listener = ViewportListener::new(move || {
                    if let Some(rect) = measure(&node) {
                        progress.set(element_progress(rect, viewport_height()));
                    }
                });
                move || drop(listener)
            },
            node,
        );
    }

    *progress
}

/// Spring-smoothed page scroll progress in `[0, 1]`.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let reduced_motion = use_reduced_motion();
    let tracker = use_mut_ref(ScrollTracker::new);
    let progress = use_state(|| 0.0_f64);
    let settling = use_state(|| false);

    {
        let tracker = tracker.clone();
        let progress = progress.clone();
        let settling = settling.clone();
        use_effect_with_deps(
            move |reduced_motion| {
                let reduced_motion = *reduced_motion;
                let listener = ViewportListener::new(move || {
                    let Some(sample) = scroll_sample() else {
                        return;
                    };
                    let mut tracker = tracker.borrow_mut();
                    if !tracker.sample(sample) {
                        return;
                    }
                    if reduced_motion {
                        tracker.jump();
                        let value = tracker.progress();
                        drop(tracker);
                        progress.set(value);
                    } else {
                        drop(tracker);
                        settling.set(true);
                    }
                });
                move || drop(listener)
            },
            reduced_motion,
        );
    }

    {
        let progress = progress.clone();
        let settling_handle = settling.clone();
        use_frame_loop(*settling, move |dt| {
            let (value, settled) = {
                let mut tracker = tracker.borrow_mut();
                let value = tracker.advance(dt);
                (value, tracker.is_settled())
            };
            progress.set(value);
            if settled {
                settling_handle.set(false);
            }
        });
    }

    *progress
}
