//! Fixed watermark style
//!
//! Nothing here is persisted or user-editable; the values describe the one
//! style the pipeline stamps onto every image.

/// Straight (non-premultiplied) RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for TextColor {
    fn default() -> Self {
        // White at 100/255, roughly 39% opaque
        Self {
            r: 255,
            g: 255,
            b: 255,
            a: 100,
        }
    }
}

impl TextColor {
    /// Convert to image crate RGBA format (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Typeface families tried in order; the first installed one wins
pub const FONT_FAMILIES: &[&str] = &[
    "Arial",
    "Liberation Sans",
    "Arimo",
    "Helvetica",
    "DejaVu Sans",
];

/// Extensions offered by the image picker
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];

/// Rendering style and output naming for a watermark
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkStyle {
    /// Families tried before falling back to the generic sans-serif face
    pub font_families: &'static [&'static str],
    /// Font size in pixels per em
    pub font_size: f32,
    pub color: TextColor,
    /// Gap between the text box and the right edge
    pub padding_right: i32,
    /// Gap between the text box and the bottom edge
    pub padding_bottom: i32,
    /// Appended to the source file stem
    pub output_suffix: &'static str,
    pub output_extension: &'static str,
}

impl Default for WatermarkStyle {
    fn default() -> Self {
        Self {
            font_families: FONT_FAMILIES,
            font_size: 100.0,
            color: TextColor::default(),
            padding_right: 15,
            // 15px base padding plus 10px to sit clear of descenders
            padding_bottom: 25,
            output_suffix: "_watermarked_image",
            output_extension: "png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = WatermarkStyle::default();
        assert_eq!(style.font_size, 100.0);
        assert_eq!(style.color.to_rgba_u8(), [255, 255, 255, 100]);
        assert_eq!(style.padding_right, 15);
        assert_eq!(style.padding_bottom, 25);
        assert_eq!(style.font_families.first(), Some(&"Arial"));
    }
}
