// src/state/ui_state.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    None,
    ApiKeys,
    Chat,
    Lifecycle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTab {
    Overview,
    Accuracy,
    Fairness,
    Transparency,
}

impl ReportTab {
    pub const ALL: [ReportTab; 4] = [
        ReportTab::Overview,
        ReportTab::Accuracy,
        ReportTab::Fairness,
        ReportTab::Transparency,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportTab::Overview => "Overview",
            ReportTab::Accuracy => "Accuracy",
            ReportTab::Fairness => "Fairness",
            ReportTab::Transparency => "Transparency",
        }
    }
}

#[derive(Debug)]
pub struct UiState {
    pub dialog_mode: DialogMode,
    pub report_tab: ReportTab,
    /// Blocking alert; the rest of the window is inert until dismissed.
    pub error_message: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dialog_mode: DialogMode::None,
            report_tab: ReportTab::Overview,
            error_message: None,
        }
    }
}
