//! Messages shown in the modal dialog

use std::path::Path;

/// Whether a notice reports a failure or a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

impl NoticeKind {
    pub fn title(self) -> &'static str {
        match self {
            NoticeKind::Error => "Error",
            NoticeKind::Success => "Success",
        }
    }
}

/// A blocking message waiting for the user to press OK
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn saved(output_path: &Path) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: format!("Watermarked image saved at:\n{}", output_path.display()),
        }
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}
