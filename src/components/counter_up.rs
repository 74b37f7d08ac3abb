use yew::prelude::*;

use crate::components::reveal::parse_margin;
use crate::hooks::{use_frame_loop, use_in_view};
use crate::motion::{Counter, Easing};
use crate::viewport::reveal::{InViewOptions, RevealMode};

#[derive(Properties, PartialEq)]
pub struct CounterUpProps {
    pub to: i64,
    #[prop_or(0)]
    pub from: i64,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub label: AttrValue,
    #[prop_or(Counter::DEFAULT_DURATION_MS)]
    pub duration_ms: f64,
    #[prop_or(AttrValue::Static("0px 0px -20% 0px"))]
    pub margin: AttrValue,
    #[prop_or(true)]
    pub once: bool,
}

/// Counts from `from` to `to` when scrolled into view.
#[function_component(CounterUp)]
pub fn counter_up(props: &CounterUpProps) -> Html {
    let node = use_node_ref();
    let options = InViewOptions {
        margin: parse_margin(&props.margin),
        threshold: 0.0,
        mode: if props.once { RevealMode::Once } else { RevealMode::Repeat },
    };
    let in_view = use_in_view(node.clone(), options);
    let counter = use_mut_ref(|| None::<Counter>);
    let display = use_state(|| props.from);
    let running = use_state(|| false);

    {
        let counter = counter.clone();
        let display = display.clone();
        let running = running.clone();
        let to = props.to;
        let duration_ms = props.duration_ms;
        use_effect_with_deps(
            move |in_view| {
                if *in_view {
                    *counter.borrow_mut() = Some(Counter::new(*display, to, duration_ms, Easing::EaseOut));
                    running.set(true);
                }
                move || {
                    if let Some(counter) = counter.borrow_mut().as_mut() {
                        counter.stop();
                    }
                }
            },
            in_view,
        );
    }

    {
        let display = display.clone();
        let running_handle = running.clone();
        use_frame_loop(*running, move |dt| {
            let (value, still_running) = match counter.borrow_mut().as_mut() {
                Some(counter) => (counter.tick(dt), counter.is_running()),
                None => (None, false),
            };
            if let Some(value) = value {
                display.set(value);
            }
            if !still_running {
                running_handle.set(false);
            }
        });
    }

    html! {
        <div ref={node} class="stat" aria-label={format!("{}{} {}", props.to, props.suffix, props.label)}>
            <div class="stat-value">{ *display }{ props.suffix.clone() }</div>
            <div class="stat-label">{ props.label.clone() }</div>
        </div>
    }
}
