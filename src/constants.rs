//! Constants
//!
//! Form rules and UI layout values shared across the application.

/// Minimum username length (in UTF-16 code units)
pub const USERNAME_MIN_LEN: usize = 2;

/// Minimum password length (in UTF-16 code units)
pub const PASSWORD_MIN_LEN: usize = 8;

/// Simulated network round trip for a form submission
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

/// Upper bound on a single submission before it is reported as failed
pub const DEFAULT_SUBMIT_TIMEOUT_MS: u64 = 30_000;

/// Log panel ring buffer capacity
pub const DEFAULT_LOG_CAPACITY: usize = 2000;

/// Name of the settings file inside the config directory
pub const CONFIG_FILE: &str = "settings.json";

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 720.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

/// Form column width
pub const FORM_MAX_WIDTH: f32 = 480.0;

/// Header and log panel heights
pub const HEADER_HEIGHT: f32 = 48.0;
pub const LOG_PANEL_HEIGHT: f32 = 150.0;
pub const LOG_PANEL_COLLAPSED_HEIGHT: f32 = 32.0;
