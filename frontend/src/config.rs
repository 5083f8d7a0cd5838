use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const SITE_NAME: &str = "Estudio Aurora";

// Header
pub const HEADER_SCROLLED_OFFSET: f64 = 50.0;
pub const HEADER_HIDE_OFFSET: f64 = 100.0;
pub const ACTIVE_LINK_LOOKAHEAD: f64 = 100.0;

// Mobile menu closes above this inner width
pub const MOBILE_BREAKPOINT: f64 = 768.0;

// Notification timings, in milliseconds
pub const TOAST_ENTER_DELAY_MS: u32 = 100;
pub const TOAST_TRANSITION_MS: u32 = 300;
pub const TOAST_AUTO_DISMISS_MS: u32 = 5_000;

// Contact form
pub const CONTACT_SUBMIT_DELAY_MS: u32 = 2_000;
pub const CONTACT_SUBMIT_LABEL: &str = "Enviar Mensaje";
pub const CONTACT_SUBMITTING_LABEL: &str = "Enviando...";
pub const CONTACT_SUCCESS_MESSAGE: &str = "¡Mensaje enviado exitosamente!";

// Visibility watchers
pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Calendly stays dormant until a real scheduling url is configured
pub const CALENDLY_ENABLED: bool = false;
pub const CALENDLY_URL: &str = "YOUR_CALENDLY_URL_HERE";

// Non-critical scripts appended to <head> after the window load event
pub const DEFERRED_SCRIPTS: &[&str] = &[];
