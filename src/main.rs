// src/main.rs
use anyhow::{Context, Result};
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod analysis;
mod app;
mod config;
mod content;
mod error;
mod file;
mod state;
mod ui;

use crate::app::SahayakApp;
use crate::config::Settings;

fn main() -> Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();

    tracing::info!(
        step_delay_ms = settings.step_delay_ms,
        settings_file = ?crate::config::settings_path(),
        "Starting AI Sahayak"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("AI Sahayak")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "AI Sahayak",
        options,
        Box::new(move |_cc| Box::new(SahayakApp::new(&settings))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
