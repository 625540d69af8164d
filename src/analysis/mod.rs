// src/analysis/mod.rs
pub mod report;
pub mod runner;

// Re-export commonly used types
pub use report::{ReportCard, REPORT_CARD};
pub use runner::{AnalysisRunner, RunnerEvent};
