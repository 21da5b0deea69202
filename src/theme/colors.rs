//! Colors - Registry Gallery Theme Colors

use gpui::{rgb, Rgba};

/// Gallery color palette - All colors are accessed via associated functions
pub struct RegistryColors;

impl RegistryColors {
    // Backgrounds
    /// Window background - Black
    pub fn background() -> Rgba { rgb(0x000000) }
    /// Header background
    pub fn header_bg() -> Rgba { rgb(0x111827) }
    /// Showcase card background - Gray 700
    pub fn card_bg() -> Rgba { rgb(0x374151) }
    /// Preview well inside a showcase card
    pub fn preview_bg() -> Rgba { rgb(0x1f2937) }
    /// Log panel background - Dark blue
    pub fn log_panel_bg() -> Rgba { rgb(0x1a2332) }

    // Text colors
    /// Primary text on dark backgrounds
    pub fn text_primary() -> Rgba { rgb(0xffffff) }
    /// Secondary text - Gray 400
    pub fn text_secondary() -> Rgba { rgb(0x9ca3af) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x6b7280) }
    /// Heading accent - Blue 400
    pub fn heading_accent() -> Rgba { rgb(0x60a5fa) }
    /// Dark text (on light widgets)
    pub fn text_dark() -> Rgba { rgb(0x1f2937) }
    /// Body text inside light widgets - Gray 600
    pub fn text_body() -> Rgba { rgb(0x4b5563) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x22c55e) }
    /// Error - Red 400
    pub fn danger() -> Rgba { rgb(0xf87171) }

    // Borders
    /// Default border - Gray 800
    pub fn border() -> Rgba { rgb(0x1f2937) }
    /// Hovered card border - Purple
    pub fn border_hover() -> Rgba { rgb(0x7c3aed) }
    /// Light widget border
    pub fn border_light() -> Rgba { rgb(0xe5e7eb) }

    // Widgets
    /// Light widget surface
    pub fn surface() -> Rgba { rgb(0xffffff) }
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x2563eb) }
    /// Primary button hover
    pub fn button_primary_hover() -> Rgba { rgb(0x1d4ed8) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Secondary button background
    pub fn button_secondary_bg() -> Rgba { rgb(0xe5e7eb) }
    /// Secondary button hover
    pub fn button_secondary_hover() -> Rgba { rgb(0xd1d5db) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x9ca3af) }
}
