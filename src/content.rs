//! Static site copy.

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub bullets: [&'static str; 4],
    pub cta: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        icon: "🔨",
        title: "Residential Wiring & Remodels",
        bullets: [
            "New circuits, dedicated appliance lines",
            "Kitchen/bath rewires & lighting plans",
            "Recessed/LED upgrades, dimmers, smart controls",
            "Troubleshooting & code corrections",
        ],
        cta: "Request estimate →",
    },
    Service {
        icon: "🗄",
        title: "Panel & Service Upgrades",
        bullets: [
            "100A → 200A/400A service changes",
            "Meter/main combos, sub-panels, labeling",
            "AFCI/GFCI protection & surge protection",
            "Utility coordination & permits handled",
        ],
        cta: "Upgrade my panel →",
    },
    Service {
        icon: "🔌",
        title: "Solar, EV & Energy Systems",
        bullets: [
            "EV chargers (Level 2), dedicated runs",
            "PV tie-ins, inverters, rapid shutdown",
            "Battery backup & generator interlocks",
            "Load calculations & energy optimization",
        ],
        cta: "Ask about EV / Solar →",
    },
    Service {
        icon: "🏢",
        title: "Commercial & Multi-Unit",
        bullets: [
            "Tenant improvements & lighting retrofits",
            "Multi-meter service gear & disconnects",
            "Roof-top units & equipment feeds",
            "Maintenance, safety, compliance reports",
        ],
        cta: "Schedule a walk-through →",
    },
];

pub const BADGES: [&str; 3] = [
    "🛡 Licensed · Insured · Code-Compliant",
    "🔧 Warranty on workmanship",
    "⚡ Rapid scheduling available",
];

pub struct Stat {
    pub value: i64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: 500, suffix: "+", label: "Projects Completed" },
    Stat { value: 300, suffix: "+", label: "Residential Clients" },
    Stat { value: 120, suffix: "+", label: "Panel Upgrades" },
    Stat { value: 20, suffix: " yrs", label: "Years of Experience" },
];

pub struct Slide {
    pub src: &'static str,
    pub caption: &'static str,
}

pub const SLIDES: [Slide; 6] = [
    Slide { src: "/assets/kitchen.jpg", caption: "Custom kitchen lighting & island" },
    Slide { src: "/assets/service-panels.jpg", caption: "Service panel upgrade" },
    Slide { src: "/assets/multimeter.jpg", caption: "Multi-meter installation" },
    Slide { src: "/assets/rewire.jpg", caption: "Rewiring" },
    Slide { src: "/assets/rtu-disconnect.jpg", caption: "Rooftop unit with disconnect" },
    Slide { src: "/assets/chandelier.jpg", caption: "Custom chandelier install" },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub meta: &'static str,
    pub stars: usize,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Professional, on time, and the quality shows. Our kitchen remodel lighting looks incredible.",
        name: "Kara M.",
        meta: "Homeowner • Pasadena",
        stars: 5,
    },
    Testimonial {
        quote: "Panel upgrade and EV charger done perfectly. Clear estimate, clean work, zero surprises.",
        name: "Anthony R.",
        meta: "Townhome Owner • Glendale",
        stars: 5,
    },
    Testimonial {
        quote: "Handled a multi-unit service changeout flawlessly. Coordinated permits and utility like pros.",
        name: "Linh T.",
        meta: "Property Manager • Burbank",
        stars: 5,
    },
];

pub const ABOUT: [&str; 4] = [
    "At Martin Electric Inc, we believe that reliable power is the foundation of every safe and comfortable home or business. \
     With over a decade of hands-on experience in residential, commercial, and industrial electrical work, our team has built a \
     reputation for delivering high-quality, code-compliant installations and responsive service across Southern California.",
    "As a fully licensed and insured C-10 electrical contractor, we specialize in everything from new construction wiring and \
     electrical remodels to advanced panel upgrades, EV charger installations, and solar energy integration. Whether you're a \
     homeowner upgrading your electrical system or a business owner looking to expand safely and efficiently, Martin Electric \
     provides end-to-end solutions tailored to your specific needs.",
    "What sets us apart is our commitment to transparency and precision. Every project begins with a clear estimate and honest \
     communication. No hidden fees, no rushed work. We use only trusted materials and industry-best practices to ensure every \
     job meets both local code and the highest standards of craftsmanship.",
    "Beyond technical excellence, Martin Electric is dedicated to building long-term relationships with our clients. Our goal \
     isn't just to complete a project, it's to become your go-to partner for all electrical needs, from troubleshooting and \
     safety inspections to energy-efficient upgrades that save you money for years to come.",
];

pub const ABOUT_CLOSING: &str = "Trusted by homeowners, contractors, and business owners alike, Martin Electric continues to \
     power Southern California with integrity, quality, and genuine care for every customer we serve.";

pub const PHONE_HREF: &str = "tel:+13236201958";
pub const LICENSE_LINE: &str = "CA C-10 #0000000 • Licensed & Insured";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_load_from_the_copied_assets_dir() {
        for slide in SLIDES {
            assert!(slide.src.starts_with("/assets/"), "{}", slide.src);
        }
    }
}
