//! Shared color constants for the UI.

use egui::Color32;

/// Subtle gray used for card borders and row separators.
pub const COLOR_BORDER: Color32 = Color32::from_rgb(220, 223, 230);

/// Base fill of a skeleton placeholder bar.
pub const COLOR_SKELETON: Color32 = Color32::from_rgb(190, 190, 190);

/// Catalog link blue used for entity names.
pub const COLOR_LINK: Color32 = Color32::from_rgb(22, 119, 255);

pub const COLOR_TABLE: Color32 = Color32::from_rgb(24, 144, 255);
pub const COLOR_DASHBOARD: Color32 = Color32::from_rgb(250, 140, 22);
pub const COLOR_PIPELINE: Color32 = Color32::from_rgb(82, 196, 26);
pub const COLOR_TOPIC: Color32 = Color32::from_rgb(114, 46, 209);
pub const COLOR_ML_MODEL: Color32 = Color32::from_rgb(235, 47, 150);
pub const COLOR_GOVERNANCE: Color32 = Color32::from_rgb(19, 194, 194);

/// Fallback for unknown or missing entity types.
pub const COLOR_NEUTRAL: Color32 = Color32::from_rgb(140, 140, 140);
