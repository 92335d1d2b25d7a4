//! Failures that can end a watermark attempt

use std::path::PathBuf;

/// Every way an "Add Watermark" click can fail
///
/// The `Display` text is what the user sees in the error dialog.
#[derive(Debug, thiserror::Error)]
pub enum WatermarkError {
    #[error("No image selected!")]
    NoImageSelected,

    #[error("Watermark text cannot be empty!")]
    EmptyWatermarkText,

    #[error("Could not open {} as an image: {source}", path.display())]
    ImageDecodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("No usable typeface found (tried {})", tried.join(", "))]
    FontUnavailable { tried: Vec<String> },

    #[error("Could not write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WatermarkError {
    pub(crate) fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_messages() {
        assert_eq!(WatermarkError::NoImageSelected.to_string(), "No image selected!");
        assert_eq!(
            WatermarkError::EmptyWatermarkText.to_string(),
            "Watermark text cannot be empty!"
        );
    }

    #[test]
    fn test_font_message_lists_families() {
        let err = WatermarkError::FontUnavailable {
            tried: vec!["Arial".to_string(), "sans-serif".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "No usable typeface found (tried Arial, sans-serif)"
        );
    }

    #[test]
    fn test_write_failure_includes_path_and_cause() {
        let err = WatermarkError::write_failure(
            "/nowhere/out.png",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/nowhere/out.png"));
        assert!(msg.contains("denied"));
    }
}
