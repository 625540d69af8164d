// src/ui/sidebar.rs
use eframe::egui;

use crate::content::{ExternalLink, PLATFORM_STATS};
use crate::state::{AppState, DialogMode, Message};
use crate::ui::PRIMARY;

pub fn show_sidebar(ui: &mut egui::Ui, state: &AppState, messages: &mut Vec<Message>) {
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("Platform Statistics");
        ui.add_space(4.0);
        egui::Grid::new("platform_stats_grid")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for (label, value) in PLATFORM_STATS {
                    ui.label(label);
                    ui.strong(value);
                    ui.end_row();
                }
            });
    });

    ui.add_space(8.0);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("Quick Actions");
        ui.add_space(4.0);

        for link in [ExternalLink::ComplianceGuide, ExternalLink::CommunityForum] {
            let button = egui::Button::new(format!("{} ↗", link.label()));
            if ui.add_sized([ui.available_width(), 24.0], button).on_hover_text(link.url()).clicked() {
                messages.push(Message::OpenLink(link));
            }
        }

        let lifecycle = egui::Button::new("📖 AI Project Lifecycle");
        if ui.add_sized([ui.available_width(), 24.0], lifecycle).clicked() {
            messages.push(Message::OpenDialog(DialogMode::Lifecycle));
        }
    });

    if let Some(card) = state.report() {
        ui.add_space(8.0);
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.heading("Recommendations");
            ui.add_space(4.0);
            for recommendation in card.recommendations {
                ui.horizontal_wrapped(|ui| {
                    ui.colored_label(PRIMARY, "•");
                    ui.weak(recommendation);
                });
            }
        });
    }
}
