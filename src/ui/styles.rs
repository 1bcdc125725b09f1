//! Color palette for the chessdesk UI
//!
//! Dark backgrounds with gold accents, defined as egui::Color32 for direct
//! use in panel code.

use bevy_egui::egui;

/// Primary UI color palette
pub struct UiColors;

impl UiColors {
    /// Primary text (headings, the side to move)
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);

    /// Secondary text (move list rows, black's turn indicator)
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(170, 170, 180);

    /// Winner banner and other celebratory text
    pub const ACCENT_GOLD: egui::Color32 = egui::Color32::from_rgb(218, 165, 32);

    /// Check warnings
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);
}
