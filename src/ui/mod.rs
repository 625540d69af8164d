// src/ui/mod.rs
use eframe::egui::Color32;

pub mod dialog;
pub mod report;
pub mod sidebar;
pub mod upload;

pub const PRIMARY: Color32 = Color32::from_rgb(99, 102, 241);
pub const GREEN: Color32 = Color32::from_rgb(34, 197, 94);
pub const YELLOW: Color32 = Color32::from_rgb(234, 179, 8);
pub const RED: Color32 = Color32::from_rgb(239, 68, 68);
pub const BLUE: Color32 = Color32::from_rgb(59, 130, 246);
pub const PURPLE: Color32 = Color32::from_rgb(168, 85, 247);
pub const ORANGE: Color32 = Color32::from_rgb(249, 115, 22);
