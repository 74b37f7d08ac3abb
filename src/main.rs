use yew::prelude::*;
use log::{debug, info, warn};
use web_sys::{window, MouseEvent};

mod config;
mod carousel;
mod contact;
mod content;
mod hooks;
mod motion;
mod page;
mod pointer;
mod prefs;
mod viewport;
mod components {
    pub mod contact_form;
    pub mod counter_up;
    pub mod energy_blobs;
    pub mod magnetic_button;
    pub mod project_carousel;
    pub mod reveal;
}
mod pages {
    pub mod home;
}

use hooks::{measure_element, now_ms, use_scroll_progress, viewport_height, ViewportListener};
use page::{PageAction, PageState};
use pages::home::Home;
use prefs::{resolve_dark_mode, system_prefers_dark, toggle_dark_mode, LocalStorage};
use viewport::sections::{SectionId, VisibilitySnapshot};
use viewport::{intersection_ratio, RootMargin};

const SCROLLED_AFTER_PX: i32 = 10;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: SectionId,
    pub dark: bool,
    pub menu_open: bool,
    pub on_toggle_dark: Callback<()>,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active, dark, menu_open, on_toggle_dark, on_toggle_menu, on_close_menu } = props;
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = ViewportListener::new(move || {
                let scroll_top = window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                    .map(|root| root.scroll_top())
                    .unwrap_or(0);
                is_scrolled.set(scroll_top > SCROLLED_AFTER_PX);
            });
            move || drop(listener)
        }, ());
    }

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let toggle_dark = {
        let on_toggle_dark = on_toggle_dark.clone();
        Callback::from(move |_: MouseEvent| on_toggle_dark.emit(()))
    };

    // Anchor navigation stays native; the menu just gets out of the way.
    let close_menu = {
        let on_close_menu = on_close_menu.clone();
        Callback::from(move |_: MouseEvent| on_close_menu.emit(()))
    };

    let links = |class: &'static str| -> Html {
        html! {
            <>
                { for SectionId::ALL.into_iter().map(|section| html! {
                    <a href={section.href()}
                        class={classes!(class, (section == *active).then_some("active"))}
                        aria-current={(section == *active).then_some("true")}
                        onclick={close_menu.clone()}>
                        { section.label() }
                    </a>
                }) }
            </>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <a href={SectionId::Home.href()} class="nav-logo">{ "Martin Electric" }</a>
                <div class="nav-links">{ links("nav-link") }</div>
                <button class="theme-toggle" onclick={toggle_dark}
                    aria-label={if *dark { "Switch to light mode" } else { "Switch to dark mode" }}>
                    { if *dark { "☀" } else { "☾" } }
                </button>
                <button class={classes!("burger-menu", menu_open.then_some("open"))}
                    aria-label="Menu" aria-expanded={menu_open.to_string()} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">{ links("mobile-link") }</div>
            }
        </nav>
    }
}

fn sample_sections(dispatcher: &UseReducerDispatcher<PageState>) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let viewport = viewport_height();
    let at_ms = now_ms();
    let mut batch = Vec::with_capacity(SectionId::ALL.len());
    for section in SectionId::ALL {
        match document.get_element_by_id(section.as_str()) {
            Some(element) => {
                dispatcher.dispatch(PageAction::Register(section));
                batch.push(VisibilitySnapshot {
                    section,
                    ratio: intersection_ratio(measure_element(&element), viewport, &RootMargin::ZERO),
                    at_ms,
                });
            }
            None => dispatcher.dispatch(PageAction::Unregister(section)),
        }
    }
    dispatcher.dispatch(PageAction::Observe(batch));
}

#[function_component]
fn App() -> Html {
    let page = use_reducer(|| PageState::new(resolve_dark_mode(&LocalStorage, system_prefers_dark())));
    let progress = use_scroll_progress();

    use_effect_with_deps(|dark| {
        let root = window().and_then(|w| w.document()).and_then(|d| d.document_element());
        if let Some(root) = root {
            let classes = root.class_list();
            let result = if *dark { classes.add_1("dark") } else { classes.remove_1("dark") };
            if result.is_err() {
                warn!("could not update the dark class on <html>");
            }
        }
        || ()
    }, page.dark);

    use_effect_with_deps(|open| {
        let body = window().and_then(|w| w.document()).and_then(|d| d.body());
        if let (Some(body), true) = (&body, *open) {
            let _ = body.style().set_property("overflow", "hidden");
        }
        move || {
            if let Some(body) = body {
                let _ = body.style().remove_property("overflow");
            }
        }
    }, page.menu_open);

    {
        let dispatcher = page.dispatcher();
        use_effect_with_deps(move |_| {
            let listener = ViewportListener::new(move || sample_sections(&dispatcher));
            move || drop(listener)
        }, ());
    }

    let on_toggle_dark = {
        let page = page.clone();
        Callback::from(move |_: ()| {
            let dark = toggle_dark_mode(&LocalStorage, page.dark);
            debug!("dark mode {}", if dark { "on" } else { "off" });
            page.dispatch(PageAction::ToggleDark);
        })
    };
    let on_toggle_menu = {
        let page = page.clone();
        Callback::from(move |_: ()| page.dispatch(PageAction::ToggleMenu))
    };
    let on_close_menu = {
        let page = page.clone();
        Callback::from(move |_: ()| page.dispatch(PageAction::CloseMenu))
    };

    html! {
        <>
            <div class="scroll-progress" style={format!("transform: scaleX({:.4});", progress)} />
            <Nav
                active={page.active()}
                dark={page.dark}
                menu_open={page.menu_open}
                {on_toggle_dark}
                {on_toggle_menu}
                {on_close_menu}
            />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
