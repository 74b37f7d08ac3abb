use log::warn;
use yew::prelude::*;

use crate::hooks::{use_frame_loop, use_in_view, use_reduced_motion};
use crate::viewport::reveal::{InViewOptions, Pose, RevealAnimation, RevealMode, RevealSpec, Stagger};
use crate::viewport::RootMargin;

pub const DEFAULT_MARGIN: &str = "0px 0px -80px 0px";

pub fn parse_margin(raw: &str) -> RootMargin {
    raw.parse().unwrap_or_else(|err| {
        warn!("ignoring root margin {:?}: {}", raw, err);
        RootMargin::ZERO
    })
}

/// Pose of an element revealed when `visible` turns true. Leaving view
/// (`visible` back to false) plays the entrance backwards. Under reduced
/// motion the pose jumps straight to its end state.
#[hook]
pub fn use_reveal_pose(visible: bool, spec: RevealSpec) -> Pose {
    let reduced_motion = use_reduced_motion();
    let pose = use_state(|| spec.from);
    let animation = use_mut_ref(|| None::<RevealAnimation>);
    let running = use_state(|| false);

    {
        let pose = pose.clone();
        let animation = animation.clone();
        let running = running.clone();
        use_effect_with_deps(
            move |(visible, spec)| {
                let target = if *visible { spec.to } else { spec.from };
                // An interrupted run hands over its live pose.
                let current = animation.borrow().as_ref().map(RevealAnimation::pose).unwrap_or(*pose);
                if reduced_motion {
                    *animation.borrow_mut() = None;
                    pose.set(target);
                    running.set(false);
                } else if current != target {
                    *animation.borrow_mut() = Some(spec.start_from(current, target));
                    running.set(true);
                }
                || ()
            },
            (visible, spec),
        );
    }

    {
        let pose = pose.clone();
        let running_handle = running.clone();
        use_frame_loop(*running, move |dt| {
            let (next, finished) = match animation.borrow_mut().as_mut() {
                Some(anim) => (anim.tick(dt), anim.is_finished()),
                None => return,
            };
            pose.set(next);
            if finished {
                running_handle.set(false);
            }
        });
    }

    *pose
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(24.0)]
    pub y: f64,
    #[prop_or(1.0)]
    pub scale_from: f64,
    #[prop_or(0.0)]
    pub delay_ms: f64,
    #[prop_or(600.0)]
    pub duration_ms: f64,
    #[prop_or(AttrValue::Static(DEFAULT_MARGIN))]
    pub margin: AttrValue,
    #[prop_or_default]
    pub repeat: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let trigger = InViewOptions {
        margin: parse_margin(&props.margin),
        threshold: 0.0,
        mode: if props.repeat { RevealMode::Repeat } else { RevealMode::Once },
    };
    let spec = RevealSpec::fade_up(props.y)
        .scale_from(props.scale_from)
        .duration(props.duration_ms)
        .delay(props.delay_ms)
        .trigger(trigger);

    let in_view = use_in_view(node.clone(), trigger);
    let pose = use_reveal_pose(in_view, spec);

    html! {
        <div ref={node} class={props.class.clone()} style={pose.to_style()}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerItemProps {
    #[prop_or_default]
    pub children: Children,
    /// Whether the enclosing group is in view.
    pub visible: bool,
    pub index: usize,
    pub stagger: Stagger,
    pub spec: RevealSpec,
    #[prop_or_default]
    pub class: Classes,
}

/// Child of a group revealed as one unit. The delay counts from the group
/// entering view, not from this item's own visibility.
#[function_component(StaggerItem)]
pub fn stagger_item(props: &StaggerItemProps) -> Html {
    let spec = props.stagger.child(props.spec, props.index);
    let pose = use_reveal_pose(props.visible, spec);

    html! {
        <div class={props.class.clone()} style={pose.to_style()}>
            { for props.children.iter() }
        </div>
    }
}
