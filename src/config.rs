use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Height reserved for the fixed header when scrolling to a section.
pub const HEADER_OFFSET: f64 = 70.0;

/// Distance below the viewport top used to decide which section is active.
pub const ACTIVE_SECTION_PROBE: f64 = 100.0;

/// The header hides on downward scroll only past this offset.
pub const NAVBAR_HIDE_AFTER: f64 = 100.0;
pub const NAVBAR_SCROLLED_AFTER: f64 = 50.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_SELECTOR: &str = "section, .show-card, .team-member, .gallery-item";
pub const REVEAL_CLASS: &str = "animate-in";

// Notification lifecycle, in milliseconds from creation.
pub const NOTIFICATION_ENTER_DELAY_MS: u32 = 100;
pub const NOTIFICATION_LIFETIME_MS: u32 = 5_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;  // matches the CSS transition

pub const SUBMIT_DELAY_MS: u32 = 1_000;
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMIT_BUSY_LABEL: &str = "Sending...";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";
