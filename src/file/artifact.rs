// src/file/artifact.rs
use std::path::{Path, PathBuf};

use rfd::FileDialog;

use crate::error::UploadError;

pub const MODEL_EXTENSIONS: [&str; 2] = ["pkl", "joblib"];
pub const DATASET_EXTENSIONS: [&str; 1] = ["csv"];

/// A picked file. Only the name is ever inspected; the content is never opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    pub path: Option<PathBuf>,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self { name: name.into(), path }
    }

    pub fn from_path(path: PathBuf) -> Self {
        let name = path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { name, path: Some(path) }
    }

    /// Dropped files carry a path on native targets and only a name on web.
    pub fn from_dropped(file: &eframe::egui::DroppedFile) -> Self {
        match &file.path {
            Some(path) => Self::from_path(path.clone()),
            None => Self::new(file.name.clone(), None),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Model,
    Dataset,
}

impl ArtifactKind {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ArtifactKind::Model => &MODEL_EXTENSIONS,
            ArtifactKind::Dataset => &DATASET_EXTENSIONS,
        }
    }

    /// Case-sensitive suffix match on the file name.
    pub fn accepts(self, name: &str) -> bool {
        self.extensions().iter().any(|ext| {
            name.strip_suffix(ext)
                .map_or(false, |stem| stem.ends_with('.'))
        })
    }

    pub fn validate(self, file: &FileHandle) -> Result<(), UploadError> {
        if self.accepts(&file.name) {
            return Ok(());
        }
        let name = file.name.clone();
        Err(match self {
            ArtifactKind::Model => UploadError::InvalidModel { name },
            ArtifactKind::Dataset => UploadError::InvalidDataset { name },
        })
    }

    /// Routes a dropped file to the slot whose extensions it matches.
    pub fn classify(name: &str) -> Option<ArtifactKind> {
        [ArtifactKind::Model, ArtifactKind::Dataset]
            .into_iter()
            .find(|kind| kind.accepts(name))
    }

    fn filter_name(self) -> &'static str {
        match self {
            ArtifactKind::Model => "Model files",
            ArtifactKind::Dataset => "CSV files",
        }
    }

    fn dialog_title(self) -> &'static str {
        match self {
            ArtifactKind::Model => "Choose Model File",
            ArtifactKind::Dataset => "Choose Dataset File",
        }
    }
}

/// Opens the native picker. The filter is a hint only, "All files" stays
/// selectable so validation still decides.
pub fn pick_artifact(kind: ArtifactKind, start_dir: Option<&Path>) -> Option<FileHandle> {
    let mut dialog = FileDialog::new()
        .add_filter(kind.filter_name(), kind.extensions())
        .add_filter("All files", &["*"])
        .set_title(kind.dialog_title());

    if let Some(dir) = start_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog.pick_file().map(FileHandle::from_path)
}
