//! Selection and request types for a watermark run

use std::path::{Path, PathBuf};

/// The image picked through the browse dialog, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub image_path: Option<PathBuf>,
}

impl Selection {
    pub fn path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }

    /// File name for display next to the browse button
    pub fn file_name(&self) -> Option<String> {
        self.image_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }

    pub fn clear(&mut self) {
        self.image_path = None;
    }
}

/// One validated "Add Watermark" invocation
///
/// Only built once a path is selected and the text is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatermarkRequest {
    pub source_path: PathBuf,
    pub text: String,
}
