// src/state/upload_state.rs
use std::path::Path;

use crate::error::UploadError;
use crate::file::{ArtifactKind, FileHandle};

#[derive(Debug, Clone, Default)]
pub struct UploadState {
    pub model: Option<FileHandle>,
    pub dataset: Option<FileHandle>,
    pub sensitive_column: String,
}

impl UploadState {
    /// Rejected files leave the slot untouched.
    pub fn select_model(&mut self, file: FileHandle) -> Result<(), UploadError> {
        ArtifactKind::Model.validate(&file)?;
        self.model = Some(file);
        Ok(())
    }

    pub fn select_dataset(&mut self, file: FileHandle) -> Result<(), UploadError> {
        ArtifactKind::Dataset.validate(&file)?;
        self.dataset = Some(file);
        Ok(())
    }

    pub fn select(&mut self, kind: ArtifactKind, file: FileHandle) -> Result<(), UploadError> {
        match kind {
            ArtifactKind::Model => self.select_model(file),
            ArtifactKind::Dataset => self.select_dataset(file),
        }
    }

    pub fn set_sensitive_column(&mut self, column: impl Into<String>) {
        self.sensitive_column = column.into();
    }

    pub fn files_loaded(&self) -> bool {
        self.model.is_some() && self.dataset.is_some()
    }

    /// Both files present and a non-blank sensitive attribute.
    pub fn ready(&self) -> bool {
        self.files_loaded() && !self.sensitive_column.trim().is_empty()
    }

    /// Directory of whichever file was picked last, to seed the next picker.
    pub fn last_directory(&self) -> Option<&Path> {
        self.dataset.as_ref()
            .or(self.model.as_ref())
            .and_then(|f| f.path.as_deref())
            .and_then(Path::parent)
    }
}
