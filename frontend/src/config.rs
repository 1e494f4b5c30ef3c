use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How often the live status dashboard rolls new readings.
pub const STATUS_TICK_MS: u32 = 3_000;

/// How long the booking confirmation toast stays on screen.
pub const TOAST_MS: u32 = 2_500;

/// Countdown step for the toast timer.
pub const TOAST_TICK_MS: u32 = 100;

/// Time the demo modal spends in its closing animation before it unmounts.
pub const MODAL_CLOSE_MS: u32 = 600;

/// Scroll offset after which the footer shows its "go to top" button.
pub const GO_TOP_THRESHOLD: f64 = 300.0;

/// Scroll offset after which the navbar switches to its compact style.
pub const NAV_SCROLLED_THRESHOLD: f64 = 80.0;

/// One full pass of the team carousel, from 0% to -100%.
pub const CAROUSEL_CYCLE_MS: f64 = 10_000.0;

/// Frame period for the timers that drive carousel and viewer motion.
pub const FRAME_MS: u32 = 16;

pub const FEEDBACK_FORM_URL: &str = "https://forms.gle/aAzwMKAzwU8GjCY37";
pub const CONTACT_EMAIL: &str = "info@biolife.com";
pub const DEMO_VIDEO_URL: &str = "https://www.youtube.com/embed/your-video-id";
pub const MODEL_IMAGE: &str = "/assets/exoskeleton.svg";
