// src/analysis/runner.rs

use std::time::{Duration, Instant};

use crate::state::analysis_state::AnalysisState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisStep {
    pub label: &'static str,
    pub progress: u8,
}

pub const ANALYSIS_STEPS: [AnalysisStep; 5] = [
    AnalysisStep { label: "Loading model and dataset...", progress: 20 },
    AnalysisStep { label: "Generating predictions...", progress: 40 },
    AnalysisStep { label: "Calculating accuracy metrics...", progress: 60 },
    AnalysisStep { label: "Analyzing bias and fairness...", progress: 80 },
    AnalysisStep { label: "Generating report...", progress: 100 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerEvent {
    Progressed(AnalysisStep),
    /// The final step was applied; progress is 100.
    Completed,
}

/// Timed progress choreography, driven by the UI loop through `poll`.
///
/// Each poll applies at most one step and only after a full `step_delay` has
/// passed since the previous step (or the start), so steps never overlap even
/// when frames arrive late. There is no way to stop a started run.
#[derive(Debug, Clone)]
pub struct AnalysisRunner {
    state: AnalysisState,
    step_delay: Duration,
    next_step: usize,
    last_applied: Option<Instant>,
}

impl AnalysisRunner {
    pub fn new(step_delay: Duration) -> Self {
        Self {
            state: AnalysisState::default(),
            step_delay,
            next_step: 0,
            last_applied: None,
        }
    }

    pub fn state(&self) -> AnalysisState {
        self.state
    }

    pub fn started(&self) -> bool {
        self.last_applied.is_some()
    }

    /// Begins the run. Returns false if this runner was already started.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.started() {
            return false;
        }
        self.state = AnalysisState { running: true, progress: 0, complete: false };
        self.next_step = 0;
        self.last_applied = Some(now);
        true
    }

    pub fn poll(&mut self, now: Instant) -> Option<RunnerEvent> {
        let deadline = self.next_deadline()?;
        if now < deadline {
            return None;
        }

        let step = ANALYSIS_STEPS[self.next_step];
        self.state.progress = step.progress;
        self.next_step += 1;
        self.last_applied = Some(now);

        if self.next_step == ANALYSIS_STEPS.len() {
            self.state.running = false;
            self.state.complete = true;
            Some(RunnerEvent::Completed)
        } else {
            Some(RunnerEvent::Progressed(step))
        }
    }

    /// When the next step becomes due, or None if idle or finished.
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.state.running {
            return None;
        }
        self.last_applied.map(|at| at + self.step_delay)
    }

    /// Label of the step currently being worked towards.
    pub fn current_label(&self) -> Option<&'static str> {
        if !self.state.running {
            return None;
        }
        ANALYSIS_STEPS.get(self.next_step).map(|s| s.label)
    }
}
