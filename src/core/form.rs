//! Form state behind the main window
//!
//! Holds the selected image and the watermark text, validates them, and
//! turns a pipeline result into the notice shown to the user.

use std::path::PathBuf;

use crate::domain::{Notice, Selection, WatermarkRequest};
use crate::error::WatermarkError;

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub selection: Selection,
    pub text: String,
}

impl FormState {
    /// Record the browse dialog result
    ///
    /// A cancelled dialog (`None`) keeps the previous selection. Returns
    /// whether a file was picked, i.e. whether the text field should take focus.
    pub fn select(&mut self, picked: Option<PathBuf>) -> bool {
        match picked {
            Some(path) => {
                log::debug!("Selected image {}", path.display());
                self.selection.image_path = Some(path);
                true
            }
            None => false,
        }
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Check preconditions in order: an image, then non-empty text
    pub fn request(&self) -> Result<WatermarkRequest, WatermarkError> {
        let source_path = self
            .selection
            .path()
            .ok_or(WatermarkError::NoImageSelected)?
            .to_path_buf();

        if self.text.is_empty() {
            return Err(WatermarkError::EmptyWatermarkText);
        }

        Ok(WatermarkRequest {
            source_path,
            text: self.text.clone(),
        })
    }

    /// Validate, run `pipeline`, and produce the notice for the outcome
    ///
    /// Inputs are cleared only after a successful run.
    pub fn apply_with<F>(&mut self, pipeline: F) -> Notice
    where
        F: FnOnce(&WatermarkRequest) -> Result<PathBuf, WatermarkError>,
    {
        match self.request().and_then(|request| pipeline(&request)) {
            Ok(output) => {
                self.selection.clear();
                self.text.clear();
                Notice::saved(&output)
            }
            Err(err) => {
                log::error!("Failed to add watermark: {}", err);
                Notice::error(err.to_string())
            }
        }
    }

    /// Run the real pipeline on the current inputs
    pub fn apply(&mut self) -> Notice {
        self.apply_with(crate::watermark::apply)
    }
}
