//! View builders for the main window and its dialog

pub mod form;
pub mod notice;

pub use form::build_form;
pub use notice::build_notice_dialog;
