// src/ui/report.rs
use eframe::egui::{self, Color32, RichText};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::analysis::report::{percent, score_label, GroupPerformance, ReportCard, RiskLevel};
use crate::state::{AppState, Message, ReportTab};
use crate::ui::{BLUE, GREEN, ORANGE, PURPLE, RED, YELLOW};

pub fn show_report_view(ui: &mut egui::Ui, state: &AppState, card: &ReportCard, messages: &mut Vec<Message>) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("📊 AI Ethics Report Card");
        ui.weak("Analysis results using scikit-learn accuracy metrics and fairlearn bias detection");
        ui.add_space(8.0);

        // Tabs
        ui.horizontal(|ui| {
            for tab in ReportTab::ALL {
                if ui.selectable_label(state.ui.report_tab == tab, tab.label()).clicked() {
                    messages.push(Message::SelectReportTab(tab));
                }
            }
        });
        ui.add_space(4.0);
        ui.separator();
        ui.add_space(8.0);

        match state.ui.report_tab {
            ReportTab::Overview => draw_overview(ui, card),
            ReportTab::Accuracy => draw_accuracy(ui, card),
            ReportTab::Fairness => draw_fairness(ui, card),
            ReportTab::Transparency => draw_transparency(ui, card),
        }
    });
}

fn stat_tile(ui: &mut egui::Ui, value: impl Into<String>, caption: &str, color: Color32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(value).size(22.0).strong().color(color));
            ui.small(caption);
        });
    });
}

fn risk_color(risk: RiskLevel) -> Color32 {
    match risk {
        RiskLevel::Low => GREEN,
        RiskLevel::Medium => YELLOW,
        RiskLevel::High => RED,
    }
}

fn draw_overview(ui: &mut egui::Ui, card: &ReportCard) {
    ui.columns(3, |columns| {
        stat_tile(&mut columns[0], score_label(card.fairness_score), "Fairness Score", YELLOW);
        stat_tile(&mut columns[1], score_label(card.transparency_score), "Transparency Score", GREEN);
        let risk = card.risk_level();
        stat_tile(&mut columns[2], format!("{} Risk", risk.label()), "Overall Risk", risk_color(risk));
    });

    if card.shows_bias_alert() {
        ui.add_space(8.0);
        egui::Frame::group(ui.style())
            .stroke(egui::Stroke::new(1.0, YELLOW))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("⚠ Bias Detected").strong().color(YELLOW));
                ui.label(card.bias_alert_text());
            });
    }
}

fn draw_accuracy(ui: &mut egui::Ui, card: &ReportCard) {
    let colors = [BLUE, GREEN, PURPLE, ORANGE];
    ui.columns(4, |columns| {
        for ((column, (label, value)), color) in columns.iter_mut().zip(card.accuracy_rows()).zip(colors) {
            stat_tile(column, percent(value), label, color);
        }
    });

    ui.add_space(8.0);
    ui.strong("Performance by Group");
    egui::Grid::new("group_performance_grid")
        .num_columns(3)
        .striped(true)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            for group in &card.groups {
                ui.strong(group.group);
                ui.label(format!("Accuracy: {}", percent(group.accuracy)));
                ui.weak(format!("Precision: {}", percent(group.precision)));
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    draw_group_chart(ui, card);
}

fn draw_group_chart(ui: &mut egui::Ui, card: &ReportCard) {
    let bars = |offset: f64, metric: fn(&GroupPerformance) -> f64| {
        card.groups.iter()
            .enumerate()
            .map(|(i, g)| Bar::new(i as f64 + offset, metric(g) * 100.0).width(0.35).name(g.group))
            .collect::<Vec<_>>()
    };

    Plot::new("group_performance_plot")
        .legend(Legend::default())
        .height(180.0)
        .include_y(0.0)
        .include_y(100.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars(-0.2, |g| g.accuracy)).name("Accuracy").color(BLUE));
            plot_ui.bar_chart(BarChart::new(bars(0.2, |g| g.precision)).name("Precision").color(GREEN));
        });
}

fn draw_fairness(ui: &mut egui::Ui, card: &ReportCard) {
    ui.strong("Demographic Parity Analysis");
    ui.weak(format!("Fairlearn demographic parity difference: {}", card.demographic_parity_difference));
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Gender Fairness");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(RED, format!("High Bias (DPD: {})", card.demographic_parity_difference));
        });
    });
    ui.add(egui::ProgressBar::new(f32::from(card.parity_excess_percent()) / 100.0).fill(RED));
    ui.small(card.parity_summary());

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label("Selection Rate Parity");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(YELLOW, "Moderate Bias");
        });
    });
    ui.add(egui::ProgressBar::new(f32::from(card.selection_rate_parity) / 100.0).fill(YELLOW));
}

fn draw_transparency(ui: &mut egui::Ui, card: &ReportCard) {
    for check in &card.transparency {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong(check.title);
            ui.weak(check.detail);
            ui.add_space(4.0);
            ui.colored_label(GREEN, check.badge);
        });
        ui.add_space(6.0);
    }
}
