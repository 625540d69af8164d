// src/ui/upload.rs
use eframe::egui;

use crate::file::{pick_artifact, ArtifactKind};
use crate::state::{AppState, DialogMode, Message};
use crate::ui::{GREEN, PRIMARY};

pub fn show_upload_view(ui: &mut egui::Ui, state: &AppState, messages: &mut Vec<Message>) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("⬆ Upload Your AI Model & Dataset");
        ui.weak("Upload your trained model (.pkl, .joblib) and test dataset (.csv) for real-time bias analysis");
        ui.add_space(8.0);

        ui.columns(2, |columns| {
            upload_slot(&mut columns[0], state, ArtifactKind::Model, messages);
            upload_slot(&mut columns[1], state, ArtifactKind::Dataset, messages);
        });

        // The attribute field and test chat only appear once both files are in
        if state.uploads.files_loaded() {
            ui.add_space(8.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                show_sensitive_column(ui, state, messages);
            });
        }

        let analysis = state.analysis();
        if analysis.is_idle() && state.uploads.files_loaded() {
            ui.small("Analysis starts automatically once a sensitive feature column is named");
        }

        if analysis.running {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("Running scikit-learn + fairlearn analysis...");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{}%", analysis.progress));
                });
            });
            ui.add(
                egui::ProgressBar::new(analysis.progress_fraction())
                    .desired_width(ui.available_width())
                    .fill(PRIMARY)
            );
            if let Some(label) = state.runner.current_label() {
                ui.small(label);
            }
        }
    });
}

fn upload_slot(ui: &mut egui::Ui, state: &AppState, kind: ArtifactKind, messages: &mut Vec<Message>) {
    let (title, hint, file, button_text, loaded_text) = match kind {
        ArtifactKind::Model => (
            "🧠 ML Model File",
            "Supports .pkl, .joblib formats",
            &state.uploads.model,
            "Choose Model File",
            "Model Loaded",
        ),
        ArtifactKind::Dataset => (
            "📄 Test Dataset",
            "CSV format with features & labels",
            &state.uploads.dataset,
            "Choose Dataset File",
            "Dataset Loaded",
        ),
    };

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.strong(title);
            ui.small(hint);
            ui.add_space(6.0);

            let label = file.as_ref().map_or(button_text, |f| f.name.as_str());
            if ui.button(label).clicked() {
                if let Some(picked) = pick_artifact(kind, state.uploads.last_directory()) {
                    messages.push(Message::FilePicked(kind, picked));
                }
            }

            if file.is_some() {
                ui.colored_label(GREEN, format!("✔ {}", loaded_text));
            }
        });
    });
}

fn show_sensitive_column(ui: &mut egui::Ui, state: &AppState, messages: &mut Vec<Message>) {
    ui.label("Sensitive Feature Column");

    let mut column = state.uploads.sensitive_column.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut column)
            .hint_text("e.g., gender, age_group, race")
            .desired_width(f32::INFINITY)
    );
    if response.changed() {
        messages.push(Message::SensitiveColumnChanged(column));
    }
    ui.small("Specify the column name in your dataset that contains the sensitive attribute for bias analysis");

    ui.add_space(6.0);
    if ui.button("💬 Test Model").clicked() {
        messages.push(Message::OpenDialog(DialogMode::Chat));
    }
}
