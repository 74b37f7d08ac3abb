use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::carousel::Carousel;
use crate::content::SLIDES;

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    Autoplay,
    Open(usize),
    Close,
    LightboxNext,
    LightboxPrev,
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Prev => next.prev(),
            CarouselAction::GoTo(index) => next.go_to(index),
            CarouselAction::Autoplay => next.autoplay_tick(),
            CarouselAction::Open(index) => next.open_lightbox(index),
            CarouselAction::Close => next.close_lightbox(),
            CarouselAction::LightboxNext => next.lightbox_next(),
            CarouselAction::LightboxPrev => next.lightbox_prev(),
        }
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

#[function_component(ProjectCarousel)]
pub fn project_carousel() -> Html {
    let carousel = use_reducer(|| Carousel::new(SLIDES.len()));

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(Carousel::AUTOPLAY_MS, move || {
                    dispatcher.dispatch(CarouselAction::Autoplay);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let send = |action: fn() -> CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(action()))
    };

    let current = carousel.current();
    let track_style = format!("transform: translateX(-{}%);", current * 100);

    let lightbox = carousel.lightbox().and_then(|index| SLIDES.get(index)).map(|slide| {
        let close = send(|| CarouselAction::Close);
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
        html! {
            <div class="lightbox" role="dialog" aria-modal="true" onclick={close.clone()}>
                <figure class="lightbox-frame" onclick={keep_open}>
                    <img src={slide.src} alt={slide.caption} />
                    <figcaption>{ slide.caption }</figcaption>
                    <button class="lightbox-close" aria-label="Close" onclick={close}>{ "✕" }</button>
                    <button class="lightbox-prev" aria-label="Previous image"
                        onclick={send(|| CarouselAction::LightboxPrev)}>{ "‹" }</button>
                    <button class="lightbox-next" aria-label="Next image"
                        onclick={send(|| CarouselAction::LightboxNext)}>{ "›" }</button>
                </figure>
            </div>
        }
    });

    html! {
        <div class="carousel">
            <div class="carousel-viewport">
                <div class="carousel-track" style={track_style}>
                    { for SLIDES.iter().enumerate().map(|(index, slide)| {
                        let carousel = carousel.clone();
                        let open = Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Open(index)));
                        html! {
                            <figure class="slide" onclick={open}>
                                <img src={slide.src} alt={slide.caption} loading="lazy" />
                                <figcaption>{ slide.caption }</figcaption>
                            </figure>
                        }
                    }) }
                </div>
            </div>
            <button class="carousel-prev" aria-label="Previous project"
                onclick={send(|| CarouselAction::Prev)}>{ "‹" }</button>
            <button class="carousel-next" aria-label="Next project"
                onclick={send(|| CarouselAction::Next)}>{ "›" }</button>
            <div class="carousel-dots">
                { for (0..carousel.len()).map(|index| {
                    let carousel = carousel.clone();
                    let onclick = Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(index)));
                    html! {
                        <button class={classes!("dot", (index == current).then_some("active"))}
                            aria-label={format!("Go to slide {}", index + 1)} {onclick} />
                    }
                }) }
            </div>
            { lightbox.unwrap_or_default() }
        </div>
    }
}
