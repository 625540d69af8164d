// src/ui/dialog.rs
use eframe::egui;

use crate::content::{ExternalLink, LIFECYCLE_STAGES};
use crate::state::{AppState, ChatMessage, ChatRole, DialogMode, Message, PROVIDERS};
use crate::ui::{GREEN, PRIMARY};

/// Draws whichever dialog is open. Closing a window emits `CloseDialog`.
pub fn show_dialogs(ctx: &egui::Context, state: &AppState, messages: &mut Vec<Message>) {
    let mut open = true;

    match state.ui.dialog_mode {
        DialogMode::None => return,
        DialogMode::ApiKeys => api_keys_dialog(ctx, state, &mut open, messages),
        DialogMode::Chat => chat_dialog(ctx, state, &mut open, messages),
        DialogMode::Lifecycle => lifecycle_dialog(ctx, state, &mut open, messages),
    }

    if !open {
        messages.push(Message::CloseDialog);
    }
}

fn api_keys_dialog(ctx: &egui::Context, state: &AppState, open: &mut bool, messages: &mut Vec<Message>) {
    egui::Window::new("Manage API Keys")
        .open(open)
        .enabled(!state.is_blocked())
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .show(ctx, |ui| {
            ui.weak("Add API keys for closed-source models to enable testing and analysis");
            ui.add_space(8.0);

            for provider in PROVIDERS {
                ui.label(provider);
                let mut key = state.api_keys.get(provider).to_owned();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut key)
                        .password(true)
                        .hint_text(format!("Enter {} API key", provider))
                        .desired_width(f32::INFINITY)
                );
                if response.changed() {
                    messages.push(Message::ApiKeyChanged {
                        provider: provider.to_string(),
                        key,
                    });
                }
                ui.add_space(4.0);
            }
        });
}

fn chat_dialog(ctx: &egui::Context, state: &AppState, open: &mut bool, messages: &mut Vec<Message>) {
    egui::Window::new("Test Your Model")
        .open(open)
        .enabled(!state.is_blocked())
        .collapsible(false)
        .default_size([520.0, 420.0])
        .show(ctx, |ui| {
            ui.weak("Chat interface to test your uploaded model with sample inputs");
            ui.add_space(6.0);

            egui::ScrollArea::vertical()
                .id_source("chat_scroll")
                .max_height(300.0)
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if state.chat.is_empty() {
                        ui.centered_and_justified(|ui| {
                            ui.weak("Start a conversation to test your model...");
                        });
                    } else {
                        for message in &state.chat.messages {
                            chat_bubble(ui, message);
                            ui.add_space(6.0);
                        }
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let mut draft = state.chat.draft.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut draft)
                        .hint_text("Type your test input...")
                        .desired_width(ui.available_width() - 40.0)
                );
                if response.changed() {
                    messages.push(Message::ChatDraftChanged(draft));
                }

                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("➤").clicked() || enter {
                    messages.push(Message::ChatSend);
                    response.request_focus();
                }
            });
        });
}

fn chat_bubble(ui: &mut egui::Ui, message: &ChatMessage) {
    let (layout, fill) = match message.role {
        ChatRole::User => (
            egui::Layout::right_to_left(egui::Align::TOP),
            ui.visuals().selection.bg_fill,
        ),
        ChatRole::Assistant => (
            egui::Layout::left_to_right(egui::Align::TOP),
            ui.visuals().faint_bg_color,
        ),
    };

    ui.push_id(message.id, |ui| {
        ui.with_layout(layout, |ui| {
            let max_width = ui.available_width() * 0.8;
            egui::Frame::none()
                .fill(fill)
                .rounding(6.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.set_max_width(max_width);
                    ui.label(message.text.as_str());
                })
                .response
                .on_hover_text(message.timestamp.format("%H:%M:%S UTC").to_string());
        });
    });
}

fn lifecycle_dialog(ctx: &egui::Context, state: &AppState, open: &mut bool, messages: &mut Vec<Message>) {
    egui::Window::new("AI Project Lifecycle for Developers")
        .open(open)
        .enabled(!state.is_blocked())
        .collapsible(false)
        .default_width(640.0)
        .vscroll(true)
        .show(ctx, |ui| {
            ui.weak("Complete guide for responsible AI development from conception to deployment");
            ui.add_space(8.0);

            for (index, stage) in LIFECYCLE_STAGES.iter().enumerate() {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(format!("{}", index + 1)).strong().color(PRIMARY));
                        ui.strong(stage.title);
                    });
                    ui.weak(stage.description);
                    ui.add_space(4.0);

                    egui::Grid::new(("lifecycle_tasks", index))
                        .num_columns(2)
                        .spacing([24.0, 4.0])
                        .show(ui, |ui| {
                            for (task_index, task) in stage.tasks.iter().enumerate() {
                                ui.colored_label(GREEN, format!("✔ {}", task));
                                if task_index % 2 == 1 {
                                    ui.end_row();
                                }
                            }
                        });
                });
                ui.add_space(6.0);
            }

            let docs = ExternalLink::Documentation;
            let button = egui::Button::new(format!("{} ↗", docs.label()));
            if ui.add_sized([ui.available_width(), 28.0], button).clicked() {
                messages.push(Message::OpenLink(docs));
            }
        });
}
