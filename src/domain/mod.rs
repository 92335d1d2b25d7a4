//! Pure domain types with minimal dependencies
//!
//! Types here should have no framework dependencies (cosmic, iced, etc.)
//! so the form controller and the pipeline can be tested headless.

pub mod notice;
pub mod request;

pub use notice::*;
pub use request::*;
