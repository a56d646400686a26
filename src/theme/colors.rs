//! Colors - Form Showcase Theme Colors

use gpui::{rgb, Rgba};

/// Neutral palette - All colors are accessed via associated functions
pub struct FormColors;

impl FormColors {
    // Primary colors
    /// Header background - Zinc
    pub fn header_bg() -> Rgba { rgb(0x18181b) }
    /// Primary accent - near black
    pub fn accent() -> Rgba { rgb(0x18181b) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xfafafa) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Log panel background - Dark slate
    pub fn log_panel_bg() -> Rgba { rgb(0x1a2332) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x09090b) }
    /// Secondary text (descriptions)
    pub fn text_secondary() -> Rgba { rgb(0x71717a) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0xa1a1aa) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x16a34a) }
    /// Error/Destructive - Red
    pub fn danger() -> Rgba { rgb(0xdc2626) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe4e4e7) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x71717a) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x18181b) }
    /// Primary button hover
    pub fn button_primary_hover() -> Rgba { rgb(0x3f3f46) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xfafafa) }
    /// Destructive button background
    pub fn button_danger_bg() -> Rgba { rgb(0xdc2626) }
    /// Destructive button hover
    pub fn button_danger_hover() -> Rgba { rgb(0xb91c1c) }
    /// Outline button hover
    pub fn button_outline_hover() -> Rgba { rgb(0xf4f4f5) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xe4e4e7) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0xa1a1aa) }
}
