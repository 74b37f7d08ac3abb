use yew::prelude::*;

use crate::hooks::{measure, use_frame_loop, use_reduced_motion};
use crate::pointer::{MagneticConfig, Magnet};

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Solid,
    Outline,
}

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    #[prop_or_default]
    pub children: Children,
    /// Renders a link when set, a button otherwise.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub variant: Variant,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();
    let reduced_motion = use_reduced_motion();
    let magnet = use_mut_ref(move || Magnet::new(MagneticConfig::default(), reduced_motion));
    let offset = use_state(|| (0.0_f64, 0.0_f64));
    let moving = use_state(|| false);

    let onmousemove = {
        let node = node.clone();
        let magnet = magnet.clone();
        let moving = moving.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(rect) = measure(&node) else {
                return;
            };
            magnet
                .borrow_mut()
                .pointer_move((f64::from(e.client_x()), f64::from(e.client_y())), rect);
            moving.set(true);
        })
    };

    let onmouseleave = {
        let magnet = magnet.clone();
        let moving = moving.clone();
        Callback::from(move |_: MouseEvent| {
            magnet.borrow_mut().pointer_leave();
            moving.set(true);
        })
    };

    {
        let offset = offset.clone();
        let moving_handle = moving.clone();
        use_frame_loop(*moving, move |dt| {
            let (next, at_rest) = {
                let mut magnet = magnet.borrow_mut();
                let next = magnet.tick(dt);
                (next, magnet.is_at_rest())
            };
            offset.set(next);
            if at_rest {
                moving_handle.set(false);
            }
        });
    }

    let (x, y) = *offset;
    let inner_style = format!("transform: translate({:.2}px, {:.2}px);", x, y);
    let class = classes!(
        "magnetic",
        match props.variant {
            Variant::Solid => "btn-solid",
            Variant::Outline => "btn-outline",
        },
        props.class.clone()
    );
    let inner = html! {
        <span class="magnetic-inner" style={inner_style}>
            { for props.children.iter() }
        </span>
    };

    match &props.href {
        Some(href) => html! {
            <a ref={node} href={href.clone()} class={class} {onmousemove} {onmouseleave}
                onclick={props.onclick.clone()}>
                { inner }
            </a>
        },
        None => html! {
            <button ref={node} type="button" class={class} {onmousemove} {onmouseleave}
                onclick={props.onclick.clone()}>
                { inner }
            </button>
        },
    }
}
