// src/state/analysis_state.rs

/// Snapshot of the simulated analysis. Only ever moves forward:
/// idle -> running -> complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalysisState {
    pub running: bool,
    pub progress: u8,
    pub complete: bool,
}

impl AnalysisState {
    pub fn is_idle(&self) -> bool {
        !self.running && !self.complete
    }

    pub fn progress_fraction(&self) -> f32 {
        f32::from(self.progress) / 100.0
    }
}
