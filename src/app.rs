// src/app.rs
use std::time::Instant;

use eframe::egui;

use crate::config::Settings;
use crate::file::FileHandle;
use crate::state::{AppState, DialogMode, Effect, Message};
use crate::ui;

pub struct SahayakApp {
    state: AppState,
}

impl SahayakApp {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: AppState::new(settings.step_delay()),
        }
    }

    fn show_menu(&self, ui: &mut egui::Ui, messages: &mut Vec<Message>) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Reset Session").clicked() {
                    messages.push(Message::ResetSession);
                    ui.close_menu();
                }
            });

            ui.separator();

            ui.label(egui::RichText::new("🧠 AI SAHAYAK").strong().size(18.0));
            ui.weak("Cerebrators");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(ui::PRIMARY, "Beta Platform");
                let keys = match self.state.api_keys.configured() {
                    0 => "🔑 API Keys".to_string(),
                    n => format!("🔑 API Keys ({})", n),
                };
                if ui.button(keys).clicked() {
                    messages.push(Message::OpenDialog(DialogMode::ApiKeys));
                }
            });
        });
    }

    fn show_hero(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label(egui::RichText::new("Ethical AI Report Card").size(30.0).strong());
            ui.weak(
                "Upload your ML model and dataset to receive comprehensive bias detection, \
                 fairness analysis, and transparency scoring using scikit-learn and fairlearn libraries."
            );
            ui.small("Files can also be dropped anywhere on this window");
            ui.add_space(8.0);
        });
    }

    fn dispatch(&mut self, ctx: &egui::Context, messages: Vec<Message>) {
        let now = Instant::now();
        for message in messages {
            if let Some(Effect::OpenUrl(url)) = self.state.update(message, now) {
                ctx.output_mut(|o| o.open_url = Some(egui::OpenUrl::new_tab(url)));
            }
        }
    }
}

impl eframe::App for SahayakApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut messages = vec![Message::Tick];
        let dropped: Vec<FileHandle> = ctx.input(|i| {
            i.raw.dropped_files.iter().map(FileHandle::from_dropped).collect()
        });
        if !dropped.is_empty() {
            messages.push(Message::FilesDropped(dropped));
        }

        // Everything behind the error modal is inert until it is dismissed
        let enabled = !self.state.is_blocked();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| self.show_menu(ui, &mut messages));
        });

        egui::SidePanel::right("sidebar")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    ui::sidebar::show_sidebar(ui, &self.state, &mut messages);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                egui::ScrollArea::vertical()
                    .id_source("main_scroll")
                    .show(ui, |ui| {
                        Self::show_hero(ui);
                        ui::upload::show_upload_view(ui, &self.state, &mut messages);

                        if let Some(card) = self.state.report() {
                            ui.add_space(12.0);
                            ui::report::show_report_view(ui, &self.state, card, &mut messages);
                        }
                    });
            });
        });

        ui::dialog::show_dialogs(ctx, &self.state, &mut messages);

        // Show error modal if needed
        if let Some(error) = &self.state.ui.error_message {
            egui::Window::new("Invalid file")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(error.as_str());
                    if ui.button("OK").clicked() {
                        messages.push(Message::DismissError);
                    }
                });
        }

        self.dispatch(ctx, messages);

        // Wake up for the next analysis step even without input
        if let Some(deadline) = self.state.runner.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}
