// src/file/mod.rs
pub mod artifact;

pub use artifact::{pick_artifact, ArtifactKind, FileHandle};
