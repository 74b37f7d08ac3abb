use log::Level;

const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/mpwygzpk";

/// Contact form endpoint. Baked in at compile time; set
/// `CONTACT_FORM_ENDPOINT` when building to point somewhere else.
pub fn form_endpoint() -> &'static str {
    option_env!("CONTACT_FORM_ENDPOINT").unwrap_or(DEFAULT_FORM_ENDPOINT)
}

/// localStorage key for the dark-mode preference.
pub const DARK_MODE_KEY: &str = "me-dark";

pub const FORM_SUBJECT: &str = "New inquiry from Martin Electric website";
pub const FORM_SOURCE: &str = "martin-electric-onepage";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
