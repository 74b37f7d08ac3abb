use chrono::Datelike;
use yew::prelude::*;

use crate::components::contact_form::ContactFormView;
use crate::components::counter_up::CounterUp;
use crate::components::energy_blobs::EnergyBlobs;
use crate::components::magnetic_button::{MagneticButton, Variant};
use crate::components::project_carousel::ProjectCarousel;
use crate::components::reveal::{parse_margin, Reveal, StaggerItem};
use crate::content::{ABOUT, ABOUT_CLOSING, BADGES, PHONE_HREF, SERVICES, STATS, TESTIMONIALS};
use crate::hooks::{use_element_progress, use_in_view};
use crate::motion::map_range;
use crate::viewport::reveal::{InViewOptions, RevealMode, RevealSpec, Stagger};
use crate::viewport::sections::SectionId;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: SectionId,
    #[prop_or_default]
    pub kicker: AttrValue,
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageSection)]
pub fn page_section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.as_str()} class={classes!("section", props.class.clone())}>
            <div class="container">
                if !props.title.is_empty() {
                    <Reveal class="section-header" duration_ms={500.0}>
                        <p class="kicker">{ props.kicker.clone() }</p>
                        <h2>{ props.title.clone() }</h2>
                    </Reveal>
                }
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let node = use_node_ref();
    let progress = use_element_progress(node.clone());
    let y = map_range(progress, (0.0, 1.0), (-2.0, 4.0));
    let scale = map_range(progress, (0.0, 1.0), (1.02, 1.0));
    let parallax = format!("transform: translateY({:.2}vh) scale({:.4});", y, scale);

    html! {
        <section id={SectionId::Home.as_str()} class="hero" ref={node}>
            <EnergyBlobs />
            <div class="container hero-grid">
                <Reveal class="hero-copy" margin="0px" duration_ms={700.0}>
                    <p class="kicker">{ "Licensed C-10 Electrical Contractor" }</p>
                    <h1>{ "Powering homes and businesses across Southern California" }</h1>
                    <p class="lead">
                        { "Panel upgrades, EV chargers, solar tie-ins and complete rewires, done right the first time." }
                    </p>
                    <div class="hero-actions">
                        <MagneticButton href={SectionId::Contact.href()}>{ "Get a Free Estimate" }</MagneticButton>
                        <MagneticButton href={PHONE_HREF} variant={Variant::Outline}>{ "Call (323) 620-1958" }</MagneticButton>
                    </div>
                </Reveal>
                <div class="hero-media" style={parallax}>
                    <Reveal y={0.0} scale_from={1.04} duration_ms={800.0} margin="0px">
                        <img src="/assets/hero.jpg" alt="Martin Electric technician at a service panel" />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    let grid = use_node_ref();
    let trigger = InViewOptions { margin: parse_margin("0px 0px -80px 0px"), threshold: 0.0, mode: RevealMode::Once };
    let visible = use_in_view(grid.clone(), trigger);
    let card = RevealSpec::fade_up(16.0).duration(500.0);

    html! {
        <PageSection id={SectionId::Services} kicker="What we do" title="Electrical services, start to finish">
            <Reveal class="badges" y={12.0} duration_ms={500.0}>
                { for BADGES.iter().map(|badge| html! { <span class="badge">{ *badge }</span> }) }
            </Reveal>
            <div class="service-grid" ref={grid}>
                { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                    <StaggerItem class="card service-card" {visible} {index} stagger={Stagger::CARDS} spec={card}>
                        <div class="service-icon">{ service.icon }</div>
                        <h3>{ service.title }</h3>
                        <ul>
                            { for service.bullets.iter().map(|bullet| html! { <li>{ *bullet }</li> }) }
                        </ul>
                        <a class="card-cta" href={SectionId::Contact.href()}>{ service.cta }</a>
                    </StaggerItem>
                }) }
            </div>
        </PageSection>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let grid = use_node_ref();
    let trigger = InViewOptions { margin: parse_margin("0px 0px -10% 0px"), threshold: 0.0, mode: RevealMode::Once };
    let visible = use_in_view(grid.clone(), trigger);
    let quote = RevealSpec::fade_up(18.0).scale_from(0.98).duration(500.0);

    html! {
        <PageSection id={SectionId::Testimonials} kicker="Testimonials" title="What our clients say">
            <div class="quote-grid" ref={grid}>
                { for TESTIMONIALS.iter().enumerate().map(|(index, t)| html! {
                    <StaggerItem class="card quote" {visible} {index} stagger={Stagger::QUOTES} spec={quote}>
                        <div class="stars" aria-label={format!("{} out of 5 stars", t.stars)}>
                            { ("★".repeat(t.stars)) }
                        </div>
                        <blockquote>{ format!("“{}”", t.quote) }</blockquote>
                        <p class="quote-name">{ t.name }</p>
                        <p class="quote-meta">{ t.meta }</p>
                    </StaggerItem>
                }) }
            </div>
        </PageSection>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <main>
            <Hero />

            <PageSection id={SectionId::About} kicker="About us" title="Reliable power, honest work">
                <div class="about">
                    { for ABOUT.iter().map(|paragraph| html! {
                        <Reveal y={16.0} duration_ms={500.0}><p>{ *paragraph }</p></Reveal>
                    }) }
                    <Reveal y={16.0} duration_ms={500.0}><p class="about-closing">{ ABOUT_CLOSING }</p></Reveal>
                </div>
                <div class="stats">
                    { for STATS.iter().map(|stat| html! {
                        <CounterUp to={stat.value} suffix={stat.suffix} label={stat.label} />
                    }) }
                </div>
            </PageSection>

            <Services />

            <PageSection id={SectionId::Projects} kicker="Recent work" title="Projects we're proud of">
                <Reveal y={20.0}>
                    <ProjectCarousel />
                </Reveal>
            </PageSection>

            <Testimonials />

            <PageSection id={SectionId::Contact} kicker="Contact" title="Tell us about your project" class="contact">
                <div class="contact-grid">
                    <Reveal class="contact-copy" y={16.0}>
                        <p>{ "Free estimates across Los Angeles County. Most calls returned the same day." }</p>
                        <MagneticButton href={PHONE_HREF} variant={Variant::Outline}>{ "Call (323) 620-1958" }</MagneticButton>
                    </Reveal>
                    <Reveal y={16.0} delay_ms={120.0}>
                        <ContactFormView />
                    </Reveal>
                </div>
            </PageSection>

            <footer class="footer">
                <div class="container">
                    <p>{ format!("© {} Martin Electric Inc. All rights reserved.", year) }</p>
                </div>
            </footer>
            <style>
                {r#"
                    :root {
                        --bg: #f8fafc;
                        --fg: #0f172a;
                        --muted: #475569;
                        --card: #ffffff;
                        --border: rgba(15, 23, 42, 0.08);
                        --accent: #f59e0b;
                        --accent-strong: #d97706;
                    }
                    html.dark {
                        --bg: #0b1120;
                        --fg: #e2e8f0;
                        --muted: #94a3b8;
                        --card: #111827;
                        --border: rgba(226, 232, 240, 0.08);
                    }
                    html { scroll-behavior: smooth; }
                    body {
                        margin: 0;
                        background: var(--bg);
                        color: var(--fg);
                        font-family: Inter, system-ui, -apple-system, sans-serif;
                        transition: background 0.3s, color 0.3s;
                    }
                    .container { max-width: 1120px; margin: 0 auto; padding: 0 1.5rem; }

                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 3px;
                        background: linear-gradient(90deg, var(--accent), var(--accent-strong));
                        transform-origin: 0 50%;
                        z-index: 60;
                    }

                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        transition: background 0.3s, box-shadow 0.3s;
                    }
                    .top-nav.scrolled {
                        background: color-mix(in srgb, var(--bg) 85%, transparent);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 1px 0 var(--border);
                    }
                    .nav-content {
                        max-width: 1120px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-logo { font-weight: 800; color: var(--fg); text-decoration: none; margin-right: auto; }
                    .nav-links { display: flex; gap: 1.25rem; }
                    .nav-link, .mobile-link { color: var(--muted); text-decoration: none; font-weight: 500; }
                    .nav-link.active, .mobile-link.active { color: var(--accent); }
                    .theme-toggle { background: none; border: 1px solid var(--border); border-radius: 999px; color: var(--fg); width: 2.25rem; height: 2.25rem; cursor: pointer; }
                    .burger-menu { display: none; background: none; border: none; cursor: pointer; flex-direction: column; gap: 4px; }
                    .burger-menu span { display: block; width: 22px; height: 2px; background: var(--fg); }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1.5rem;
                        background: var(--bg);
                        height: 100vh;
                    }

                    .hero { position: relative; min-height: 100vh; display: flex; align-items: center; overflow: hidden; padding-top: 5rem; }
                    .hero-grid { position: relative; display: grid; grid-template-columns: 1.1fr 1fr; gap: 3rem; align-items: center; z-index: 1; }
                    .hero h1 { font-size: clamp(2.25rem, 5vw, 3.75rem); line-height: 1.05; margin: 0.5rem 0 1rem; }
                    .lead { color: var(--muted); font-size: 1.125rem; }
                    .hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 2rem; }
                    .hero-media { will-change: transform; }
                    .hero-media img { width: 100%; border-radius: 1.5rem; display: block; }

                    .energy { position: absolute; inset: 0; pointer-events: none; overflow: hidden; }
                    .blob { position: absolute; width: 44rem; height: 44rem; border-radius: 50%; filter: blur(90px); }
                    .blob-emerald { background: radial-gradient(closest-side, rgba(16,185,129,0.45), rgba(16,185,129,0.18), transparent 70%); top: -8rem; left: -7rem; }
                    .blob-teal { background: radial-gradient(closest-side, rgba(13,148,136,0.38), rgba(13,148,136,0.16), transparent 70%); top: 33%; right: -10rem; }
                    .blob-cyan { background: radial-gradient(closest-side, rgba(34,211,238,0.34), rgba(34,211,238,0.14), transparent 70%); bottom: -9rem; left: 25%; }
                    .energy-streak {
                        position: absolute;
                        top: 55%;
                        left: -10%;
                        width: 120%;
                        height: 2px;
                        background: linear-gradient(90deg, transparent, var(--accent), transparent);
                        opacity: 0.4;
                    }

                    .magnetic {
                        display: inline-flex;
                        border-radius: 999px;
                        padding: 0.85rem 1.6rem;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                        border: 2px solid var(--accent);
                        transition: transform 0.15s;
                    }
                    .magnetic:active { transform: scale(0.97); }
                    .magnetic-inner { display: inline-block; will-change: transform; }
                    .btn-solid { background: var(--accent); color: #111827; }
                    .btn-outline { background: transparent; color: var(--fg); }

                    .section { padding: 6rem 0; }
                    .section-header { text-align: center; margin-bottom: 3rem; }
                    .section-header h2 { font-size: clamp(1.75rem, 3.5vw, 2.5rem); margin: 0.25rem 0 0; }
                    .kicker { color: var(--accent); font-weight: 700; text-transform: uppercase; letter-spacing: 0.08em; font-size: 0.8rem; }

                    .about p { color: var(--muted); line-height: 1.7; max-width: 760px; margin: 0 auto 1.25rem; }
                    .about-closing { font-weight: 600; color: var(--fg) !important; }
                    .stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; margin-top: 3rem; }
                    .stat { text-align: center; }
                    .stat-value { font-size: 2.5rem; font-weight: 800; color: var(--accent); }
                    .stat-label { color: var(--muted); }

                    .badges { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem; margin-bottom: 2.5rem; }
                    .badge { border: 1px solid var(--border); border-radius: 999px; padding: 0.4rem 0.9rem; font-size: 0.9rem; }
                    .service-grid, .quote-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
                    .quote-grid { grid-template-columns: repeat(3, 1fr); }
                    .card { background: var(--card); border: 1px solid var(--border); border-radius: 1.25rem; padding: 1.75rem; }
                    .service-icon { font-size: 1.75rem; }
                    .card ul { color: var(--muted); padding-left: 1.1rem; line-height: 1.8; }
                    .card-cta { color: var(--accent); font-weight: 600; text-decoration: none; }

                    .carousel { position: relative; }
                    .carousel-viewport { overflow: hidden; border-radius: 1.25rem; }
                    .carousel-track { display: flex; transition: transform 0.6s cubic-bezier(0.22, 1, 0.36, 1); }
                    .slide { flex: 0 0 100%; margin: 0; cursor: zoom-in; position: relative; }
                    .slide img { width: 100%; aspect-ratio: 16 / 9; object-fit: cover; display: block; }
                    .slide figcaption { position: absolute; left: 1rem; bottom: 1rem; background: rgba(0, 0, 0, 0.55); color: #fff; padding: 0.4rem 0.8rem; border-radius: 0.5rem; }
                    .carousel-prev, .carousel-next, .lightbox-prev, .lightbox-next, .lightbox-close {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        background: rgba(0, 0, 0, 0.45);
                        color: #fff;
                        border: none;
                        border-radius: 50%;
                        width: 2.5rem;
                        height: 2.5rem;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .carousel-prev, .lightbox-prev { left: 1rem; }
                    .carousel-next, .lightbox-next { right: 1rem; }
                    .carousel-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 1rem; }
                    .dot { width: 0.6rem; height: 0.6rem; border-radius: 50%; border: none; background: var(--border); cursor: pointer; }
                    .dot.active { background: var(--accent); }
                    .lightbox { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.85); display: flex; align-items: center; justify-content: center; z-index: 70; }
                    .lightbox-frame { position: relative; margin: 0; max-width: 90vw; }
                    .lightbox-frame img { max-width: 90vw; max-height: 80vh; display: block; }
                    .lightbox-frame figcaption { color: #fff; text-align: center; margin-top: 0.75rem; }
                    .lightbox-close { top: 1.5rem; right: 1rem; transform: none; }

                    .stars { color: var(--accent); letter-spacing: 0.15em; }
                    .quote blockquote { margin: 1rem 0; line-height: 1.6; }
                    .quote-name { font-weight: 700; margin: 0; }
                    .quote-meta { color: var(--muted); margin: 0.25rem 0 0; font-size: 0.9rem; }

                    .contact-grid { display: grid; grid-template-columns: 1fr 1.3fr; gap: 3rem; }
                    .contact-copy p { color: var(--muted); line-height: 1.7; }
                    .contact-form { display: flex; flex-direction: column; gap: 1rem; }
                    .field-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                    .field { display: flex; flex-direction: column; gap: 0.35rem; }
                    .field-label { font-weight: 600; font-size: 0.9rem; }
                    .field input, .field textarea {
                        background: var(--card);
                        color: var(--fg);
                        border: 1px solid var(--border);
                        border-radius: 0.75rem;
                        padding: 0.75rem 1rem;
                        font: inherit;
                    }
                    .honeypot { position: absolute; left: -9999px; width: 1px; height: 1px; opacity: 0; }
                    .submit { align-self: flex-start; border: none; border-radius: 999px; padding: 0.85rem 1.6rem; font-weight: 600; cursor: pointer; }
                    .submit:disabled { opacity: 0.6; cursor: progress; }
                    .form-status.success { color: #16a34a; }
                    .form-status.error { color: #dc2626; }
                    .license { color: var(--muted); font-size: 0.85rem; }

                    .footer { padding: 2rem 0; border-top: 1px solid var(--border); color: var(--muted); text-align: center; }

                    @media (max-width: 768px) {
                        .nav-links { display: none; }
                        .burger-menu { display: flex; }
                        .hero-grid, .contact-grid, .service-grid, .field-row { grid-template-columns: 1fr; }
                        .stats { grid-template-columns: repeat(2, 1fr); }
                        .quote-grid {
                            display: flex;
                            overflow-x: auto;
                            scroll-snap-type: x mandatory;
                        }
                        .quote-grid > * { flex: 0 0 85%; scroll-snap-align: start; }
                    }

                    @media (prefers-reduced-motion: reduce) {
                        html { scroll-behavior: auto; }
                        .carousel-track { transition: none; }
                    }
                "#}
            </style>
        </main>
    }
}
