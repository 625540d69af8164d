// src/state/mod.rs
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::analysis::{AnalysisRunner, ReportCard, RunnerEvent, REPORT_CARD};
use crate::content::ExternalLink;
use crate::error::UploadError;
use crate::file::{ArtifactKind, FileHandle};

pub mod analysis_state;
pub mod api_keys;
pub mod chat_state;
pub mod ui_state;
pub mod upload_state;

pub use analysis_state::AnalysisState;
pub use api_keys::{ApiKeyMap, PROVIDERS};
pub use chat_state::{ChatMessage, ChatRole, ChatState};
pub use ui_state::{DialogMode, ReportTab, UiState};
pub use upload_state::UploadState;

// Every user or timer event the window can produce
#[derive(Debug, Clone)]
pub enum Message {
    FilePicked(ArtifactKind, FileHandle),
    /// Everything dropped onto the window in one frame
    FilesDropped(Vec<FileHandle>),
    SensitiveColumnChanged(String),
    Tick,
    ApiKeyChanged { provider: String, key: String },
    ChatDraftChanged(String),
    ChatSend,
    OpenDialog(DialogMode),
    CloseDialog,
    SelectReportTab(ReportTab),
    DismissError,
    OpenLink(ExternalLink),
    ResetSession,
}

// Side effects the window performs on behalf of `update`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    OpenUrl(&'static str),
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    pub uploads: UploadState,
    pub runner: AnalysisRunner,
    pub api_keys: ApiKeyMap,
    pub chat: ChatState,
    pub ui: UiState,
    step_delay: Duration,
}

impl AppState {
    pub fn new(step_delay: Duration) -> Self {
        Self {
            uploads: UploadState::default(),
            runner: AnalysisRunner::new(step_delay),
            api_keys: ApiKeyMap::default(),
            chat: ChatState::default(),
            ui: UiState::default(),
            step_delay,
        }
    }

    pub fn analysis(&self) -> AnalysisState {
        self.runner.state()
    }

    /// True while the upload alert is open; the window disables its widgets.
    pub fn is_blocked(&self) -> bool {
        self.ui.error_message.is_some()
    }

    /// The report card, once a run has completed.
    pub fn report(&self) -> Option<&'static ReportCard> {
        self.analysis().complete.then_some(&REPORT_CARD)
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Option<Effect> {
        // The window is disabled behind an open alert. Drops still arrive from
        // the OS and are handled; the runner keeps going.
        if self.is_blocked()
            && !matches!(message, Message::Tick | Message::DismissError | Message::FilesDropped(_))
        {
            return None;
        }

        match message {
            Message::FilePicked(kind, file) => self.accept_file(kind, file, now),
            Message::FilesDropped(files) => self.accept_dropped(files, now),
            Message::SensitiveColumnChanged(column) => {
                self.uploads.set_sensitive_column(column);
                self.check_for_analysis(now);
            }
            Message::Tick => self.poll_runner(now),
            Message::ApiKeyChanged { provider, key } => {
                debug!(provider = %provider, "API key updated");
                self.api_keys.set(provider, key);
            }
            Message::ChatDraftChanged(draft) => self.chat.draft = draft,
            Message::ChatSend => {
                if self.chat.send() {
                    debug!(messages = self.chat.messages.len(), "Chat message answered");
                }
            }
            Message::OpenDialog(mode) => {
                debug!(?mode, "Dialog opened");
                self.ui.dialog_mode = mode;
            }
            Message::CloseDialog => self.ui.dialog_mode = DialogMode::None,
            Message::SelectReportTab(tab) => self.ui.report_tab = tab,
            Message::DismissError => self.ui.error_message = None,
            Message::OpenLink(link) => {
                info!(url = link.url(), "Opening external link");
                return Some(Effect::OpenUrl(link.url()));
            }
            Message::ResetSession => {
                info!("Session reset");
                *self = AppState::new(self.step_delay);
            }
        }
        None
    }

    fn accept_file(&mut self, kind: ArtifactKind, file: FileHandle, now: Instant) {
        match self.store(kind, file) {
            Ok(()) => self.check_for_analysis(now),
            Err(e) => self.raise_alert(vec![e]),
        }
    }

    // Valid files in a drop are stored even when others in the same drop are rejected.
    fn accept_dropped(&mut self, files: Vec<FileHandle>, now: Instant) {
        let mut rejected = Vec::new();
        for file in files {
            let result = match ArtifactKind::classify(&file.name) {
                Some(kind) => self.store(kind, file),
                None => Err(UploadError::Unrecognized { name: file.name }),
            };
            if let Err(e) = result {
                rejected.push(e);
            }
        }

        if !rejected.is_empty() {
            self.raise_alert(rejected);
        }
        self.check_for_analysis(now);
    }

    fn store(&mut self, kind: ArtifactKind, file: FileHandle) -> Result<(), UploadError> {
        let name = file.name.clone();
        self.uploads.select(kind, file)?;
        info!(?kind, file = %name, "File accepted");
        Ok(())
    }

    fn raise_alert(&mut self, errors: Vec<UploadError>) {
        for error in &errors {
            warn!(file = %error.file_name(), "Upload rejected: {}", error);
        }

        let text = match errors.as_slice() {
            [single] => single.to_string(),
            many => many.iter()
                .map(|e| format!("{}: {}", e.file_name(), e))
                .collect::<Vec<_>>()
                .join("\n"),
        };

        self.ui.error_message = Some(match self.ui.error_message.take() {
            Some(open) => format!("{}\n{}", open, text),
            None => text,
        });
    }

    // Starts the run the first time all three inputs are present; later edits never restart it.
    fn check_for_analysis(&mut self, now: Instant) {
        if self.uploads.ready() && self.runner.start(now) {
            info!(
                sensitive_column = %self.uploads.sensitive_column.trim(),
                "Starting simulated analysis"
            );
        }
    }

    fn poll_runner(&mut self, now: Instant) {
        match self.runner.poll(now) {
            Some(RunnerEvent::Progressed(step)) => {
                debug!(progress = step.progress, "{}", step.label);
            }
            Some(RunnerEvent::Completed) => {
                info!("Analysis complete");
                self.ui.report_tab = ReportTab::Overview;
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::report::score_label;
    use crate::state::chat_state::SIMULATED_REPLY;

    const DELAY: Duration = Duration::from_secs(1);

    fn file(name: &str) -> FileHandle {
        FileHandle::new(name, None)
    }

    fn fill_inputs(state: &mut AppState, now: Instant) {
        state.update(Message::FilePicked(ArtifactKind::Model, file("adult_model.joblib")), now);
        state.update(Message::FilePicked(ArtifactKind::Dataset, file("adult_test.csv")), now);
        state.update(Message::SensitiveColumnChanged("sex".into()), now);
    }

    fn run_to_completion(state: &mut AppState, mut now: Instant) -> Vec<u8> {
        let mut seen = Vec::new();
        while state.analysis().running {
            now += DELAY;
            state.update(Message::Tick, now);
            seen.push(state.analysis().progress);
        }
        seen
    }

    #[test]
    fn invalid_model_raises_alert_and_keeps_state() {
        let mut state = AppState::new(DELAY);
        let now = Instant::now();
        state.update(Message::FilePicked(ArtifactKind::Model, file("good.pkl")), now);
        state.update(Message::FilePicked(ArtifactKind::Model, file("bad.onnx")), now);

        assert_eq!(state.uploads.model, Some(file("good.pkl")));
        assert_eq!(
            state.ui.error_message.as_deref(),
            Some("Please upload a valid model file (.pkl or .joblib)")
        );
    }

    #[test]
    fn invalid_dataset_raises_alert_and_keeps_state() {
        let mut state = AppState::new(DELAY);
        state.update(Message::FilePicked(ArtifactKind::Dataset, file("data.json")), Instant::now());
        assert!(state.uploads.dataset.is_none());
        assert_eq!(state.ui.error_message.as_deref(), Some("Please upload a valid CSV file"));
    }

    #[test]
    fn alert_blocks_input_until_dismissed() {
        let mut state = AppState::new(DELAY);
        let now = Instant::now();
        state.update(Message::FilePicked(ArtifactKind::Dataset, file("data.json")), now);
        state.update(Message::FilePicked(ArtifactKind::Dataset, file("data.csv")), now);
        assert!(state.uploads.dataset.is_none());

        state.update(Message::DismissError, now);
        state.update(Message::FilePicked(ArtifactKind::Dataset, file("data.csv")), now);
        assert!(state.uploads.dataset.is_some());
    }

    #[test]
    fn analysis_waits_for_all_inputs() {
        let mut state = AppState::new(DELAY);
        let now = Instant::now();
        state.update(Message::SensitiveColumnChanged("sex".into()), now);
        state.update(Message::FilePicked(ArtifactKind::Model, file("m.pkl")), now);
        assert!(state.analysis().is_idle());

        state.update(Message::FilePicked(ArtifactKind::Dataset, file("d.csv")), now);
        assert!(state.analysis().running);
    }

    #[test]
    fn blank_attribute_does_not_start() {
        let mut state = AppState::new(DELAY);
        let now = Instant::now();
        state.update(Message::FilePicked(ArtifactKind::Model, file("m.pkl")), now);
        state.update(Message::FilePicked(ArtifactKind::Dataset, file("d.csv")), now);
        state.update(Message::SensitiveColumnChanged("  ".into()), now);
        assert!(state.analysis().is_idle());
    }

    #[test]
    fn full_run_reaches_complete() {
        let mut state = AppState::new(DELAY);
        let now = Instant::now();
        fill_inputs(&mut state, now);

        assert_eq!(run_to_completion(&mut state, now), [20, 40, 60, 80, 100]);
        let analysis = state.analysis();
        assert!(analysis.complete && !analysis.running);
    }

    #[test]
    fn edits_after_start_do_not_restart() {
        let mut state = AppState::new(DELAY);
        let t0 = Instant::now();
        fill_inputs(&mut state, t0);
        state.update(Message::Tick, t0 + DELAY);
        assert_eq!(state.analysis().progress, 20);

        state.update(Message::SensitiveColumnChanged("race".into()), t0 + DELAY);
        state.update(Message::FilePicked(ArtifactKind::Dataset, file("other.csv")), t0 + DELAY);
        assert_eq!(state.analysis().progress, 20);

        run_to_completion(&mut state, t0 + DELAY);
        state.update(Message::SensitiveColumnChanged("age".into()), t0 + DELAY * 10);
        assert!(state.analysis().complete);
        assert!(!state.analysis().running);
    }

    #[test]
    fn dropped_files_route_by_extension() {
        let mut state = AppState::new(DELAY);
        let now = Instant::now();
        state.update(Message::FilesDropped(vec![file("adult_model.pkl"), file("adult_test.csv")]), now);
        assert!(state.uploads.files_loaded());
        assert!(!state.is_blocked());

        state.update(Message::FilesDropped(vec![file("README.md")]), now);
        assert!(state.ui.error_message.as_deref().unwrap().contains("README.md"));
    }

    #[test]
    fn mixed_drop_keeps_valid_file_and_names_rejected_one() {
        let mut state = AppState::new(DELAY);
        let now = Instant::now();
        state.update(Message::FilesDropped(vec![file("notes.txt"), file("d.csv")]), now);

        assert_eq!(state.uploads.dataset, Some(file("d.csv")));
        assert!(state.uploads.model.is_none());
        let alert = state.ui.error_message.as_deref().unwrap();
        assert!(alert.contains("notes.txt"));
        assert!(!alert.contains("d.csv"));
    }

    #[test]
    fn several_rejections_share_one_alert() {
        let mut state = AppState::new(DELAY);
        state.update(Message::FilesDropped(vec![file("a.txt"), file("b.xlsx")]), Instant::now());

        let alert = state.ui.error_message.as_deref().unwrap();
        assert_eq!(alert.lines().count(), 2);
        assert!(alert.contains("a.txt") && alert.contains("b.xlsx"));
    }

    #[test]
    fn drop_behind_open_alert_is_still_stored() {
        let mut state = AppState::new(DELAY);
        let now = Instant::now();
        state.update(Message::FilePicked(ArtifactKind::Model, file("bad.onnx")), now);
        assert!(state.is_blocked());

        state.update(Message::FilesDropped(vec![file("m.joblib"), file("x.bin")]), now);
        assert_eq!(state.uploads.model, Some(file("m.joblib")));
        let alert = state.ui.error_message.as_deref().unwrap();
        assert!(alert.starts_with("Please upload a valid model file"));
        assert!(alert.contains("x.bin"));
    }

    #[test]
    fn chat_send_appends_pair() {
        let mut state = AppState::new(DELAY);
        let now = Instant::now();
        state.update(Message::ChatDraftChanged("   ".into()), now);
        state.update(Message::ChatSend, now);
        assert!(state.chat.is_empty());

        state.update(Message::ChatDraftChanged("hello".into()), now);
        state.update(Message::ChatSend, now);
        assert_eq!(state.chat.messages.len(), 2);
        assert_eq!(state.chat.messages[1].text, SIMULATED_REPLY);
    }

    #[test]
    fn report_appears_only_after_completion() {
        let mut state = AppState::new(DELAY);
        let now = Instant::now();
        fill_inputs(&mut state, now);
        state.update(Message::Tick, now + DELAY);
        assert!(state.report().is_none());

        run_to_completion(&mut state, now + DELAY);
        assert!(state.report().is_some());
    }

    #[test]
    fn report_is_independent_of_uploads() {
        let mut rendered = Vec::new();
        for (model, dataset, column) in [("a.pkl", "x.csv", "gender"), ("b.joblib", "y.csv", "race")] {
            let mut state = AppState::new(Duration::ZERO);
            let now = Instant::now();
            state.update(Message::FilePicked(ArtifactKind::Model, file(model)), now);
            state.update(Message::FilePicked(ArtifactKind::Dataset, file(dataset)), now);
            state.update(Message::SensitiveColumnChanged(column.into()), now);
            run_to_completion(&mut state, now);

            let card = state.report().expect("report after completed run");
            rendered.push((
                score_label(card.fairness_score),
                card.parity_summary(),
                card.risk_level().label(),
            ));
        }

        assert_eq!(rendered[0], rendered[1]);
        assert_eq!(rendered[0].0, "6.8/10");
        assert_eq!(rendered[0].1, "Threshold: 0.1 | Current: 0.127 (27% above threshold)");
        assert_eq!(rendered[0].2, "Medium");
    }

    #[test]
    fn open_link_yields_effect() {
        let mut state = AppState::new(DELAY);
        let effect = state.update(Message::OpenLink(ExternalLink::CommunityForum), Instant::now());
        assert_eq!(effect, Some(Effect::OpenUrl("https://indiaai.gov.in/articles")));
    }

    #[test]
    fn reset_clears_session() {
        let mut state = AppState::new(DELAY);
        let now = Instant::now();
        fill_inputs(&mut state, now);
        state.update(Message::ApiKeyChanged { provider: "OpenAI".into(), key: "sk".into() }, now);
        state.update(Message::ChatDraftChanged("hi".into()), now);
        state.update(Message::ChatSend, now);

        state.update(Message::ResetSession, now);
        assert!(state.analysis().is_idle());
        assert!(state.uploads.model.is_none());
        assert!(state.chat.is_empty());
        assert_eq!(state.api_keys.get("OpenAI"), "");

        fill_inputs(&mut state, now);
        assert!(state.analysis().running);
    }
}
