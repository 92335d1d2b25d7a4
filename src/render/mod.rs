//! Watermark rendering module
//!
//! This module contains:
//! - Typeface lookup and text layout (fontdb + ab_glyph)
//! - Placement of the text box on the canvas
//! - Image rendering using tiny-skia

pub mod geometry;
pub mod image;
pub mod text;
