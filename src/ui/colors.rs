//! Centralized color constants for the UI.
//!
//! This module provides consistent colors across all UI panels.

use eframe::egui::Color32;

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for secondary labels.
    pub const LABEL: Color32 = Color32::from_rgb(140, 140, 140);
    /// Heading text.
    pub const TITLE: Color32 = Color32::WHITE;
}

/// Colors for result cards.
pub mod card {
    use super::Color32;

    /// Border drawn over a hovered card.
    pub const HOVER_BORDER: Color32 = Color32::GRAY;
    /// Clamped source description.
    pub const DESCRIPTION: Color32 = Color32::from_rgb(150, 150, 160);
    /// Field labels ("Topic:", ...).
    pub const FIELD_LABEL: Color32 = Color32::from_rgb(200, 200, 200);
}

/// Colors for full-width notices in the results area.
pub mod notice {
    use super::Color32;

    /// Empty-result notice background.
    pub const WARNING_FILL: Color32 = Color32::from_rgb(80, 66, 20);
    /// Empty-result notice text.
    pub const WARNING_TEXT: Color32 = Color32::from_rgb(255, 220, 120);
    /// Load failure background.
    pub const ERROR_FILL: Color32 = Color32::from_rgb(90, 30, 30);
    /// Load failure text.
    pub const ERROR_TEXT: Color32 = Color32::from_rgb(255, 150, 150);
}

/// Loading indicator ring.
pub mod loading {
    use super::Color32;

    pub const RING: Color32 = Color32::GRAY;
}
